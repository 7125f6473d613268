//! Wallet generation
//!
//! The derivation pipeline from a freshly generated mnemonic to a
//! chain-native public address. Each operation is pure given its entropy:
//! the caller supplies the derivation index, and either a complete wallet
//! record comes back or an error does. No partial record is ever produced.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::account::address::{derive_ethereum_address, derive_solana_address};
use crate::crypto::keys::{derive_key_pair, ethereum_derivation_path, solana_derivation_path, KeyType};
use crate::crypto::mnemonic::{generate_mnemonic, mnemonic_to_seed, MnemonicStrength};
use crate::error::{Error, Result};

/// BIP-39 seed length in bytes
const SEED_LEN: usize = 64;

/// A generated wallet display record.
///
/// Immutable once created; holds the public address and the mnemonic that
/// reproduces it at the derivation path used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    /// The chain this wallet belongs to
    #[serde(rename = "type")]
    pub key_type: KeyType,
    /// The chain-native public address
    pub public_key: String,
    /// The mnemonic phrase the wallet was derived from
    pub mnemonic: String,
}

/// Derive a new Solana wallet at the given account index.
///
/// Generates a fresh 12-word mnemonic, derives the SLIP-0010 Ed25519 key at
/// `m/44'/501'/{account_index}'/0'` and encodes the public key as a base58
/// address. The caller assigns `account_index` as the running count of
/// Solana wallets so paths never collide within a session.
pub fn derive_solana_wallet(account_index: u32) -> Result<Wallet> {
    let mnemonic = generate_mnemonic(MnemonicStrength::Words12)?;
    let seed = checked_seed(&mnemonic)?;

    let path = solana_derivation_path(account_index)?;
    let key_pair = derive_key_pair(&seed, KeyType::Solana, &path)?;
    let address = derive_solana_address(key_pair.public_key(), &path)?;

    debug!(path = %path, address = %address.address, "derived Solana wallet");

    Ok(Wallet {
        key_type: KeyType::Solana,
        public_key: address.address,
        mnemonic,
    })
}

/// Derive a new Ethereum wallet at the given address index.
///
/// Generates a fresh 12-word mnemonic, derives the BIP-32 secp256k1 key at
/// `m/44'/60'/0'/0/{address_index}` and renders the EIP-55 checksummed
/// address. The caller assigns `address_index` as the running count of
/// Ethereum wallets.
pub fn derive_ethereum_wallet(address_index: u32) -> Result<Wallet> {
    let mnemonic = generate_mnemonic(MnemonicStrength::Words12)?;
    let seed = checked_seed(&mnemonic)?;

    let path = ethereum_derivation_path(address_index)?;
    let key_pair = derive_key_pair(&seed, KeyType::Ethereum, &path)?;
    let address = derive_ethereum_address(key_pair.public_key(), &path)?;

    debug!(path = %path, address = %address.address, "derived Ethereum wallet");

    Ok(Wallet {
        key_type: KeyType::Ethereum,
        public_key: address.address,
        mnemonic,
    })
}

/// Derive a new wallet for the given chain at the given index
pub fn derive_wallet(key_type: KeyType, index: u32) -> Result<Wallet> {
    match key_type {
        KeyType::Solana => derive_solana_wallet(index),
        KeyType::Ethereum => derive_ethereum_wallet(index),
    }
}

/// Compute the seed for a phrase, checking the 64-byte invariant
fn checked_seed(mnemonic: &str) -> Result<Vec<u8>> {
    let seed = mnemonic_to_seed(mnemonic, None)?;
    if seed.len() != SEED_LEN {
        return Err(Error::MalformedSeed {
            expected: SEED_LEN,
            actual: seed.len(),
        });
    }
    Ok(seed)
}
