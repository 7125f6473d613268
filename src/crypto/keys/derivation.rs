//! Common key derivation functionality

use crate::error::{Error, Result};

/// First hardened child index (2^31)
pub const HARDENED_OFFSET: u32 = 0x8000_0000;

/// BIP-44 coin type for Solana
pub const SOLANA_COIN_TYPE: u32 = 501;

/// BIP-44 coin type for Ethereum
pub const ETHEREUM_COIN_TYPE: u32 = 60;

/// Supported key types
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyType {
    /// Solana
    Solana,
    /// Ethereum and EVM compatible chains
    Ethereum,
}

/// A private key for a specific blockchain
#[derive(Debug, Clone)]
pub struct PrivateKey {
    /// The raw private key bytes
    bytes: Vec<u8>,
    /// The type of key
    key_type: KeyType,
}

impl PrivateKey {
    /// Create a new private key from bytes
    pub fn new(bytes: Vec<u8>, key_type: KeyType) -> Self {
        Self { bytes, key_type }
    }

    /// Get the raw private key bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Get the key type
    pub fn key_type(&self) -> KeyType {
        self.key_type
    }
}

/// A public key for a specific blockchain
#[derive(Debug, Clone)]
pub struct PublicKey {
    /// The raw public key bytes
    bytes: Vec<u8>,
    /// The type of key
    key_type: KeyType,
}

impl PublicKey {
    /// Create a new public key from bytes
    pub fn new(bytes: Vec<u8>, key_type: KeyType) -> Self {
        Self { bytes, key_type }
    }

    /// Get the raw public key bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Get the key type
    pub fn key_type(&self) -> KeyType {
        self.key_type
    }
}

/// A key pair for a specific blockchain
#[derive(Debug, Clone)]
pub struct KeyPair {
    /// The private key
    private_key: PrivateKey,
    /// The public key
    public_key: PublicKey,
}

impl KeyPair {
    /// Create a new key pair
    pub fn new(private_key: PrivateKey, public_key: PublicKey) -> Result<Self> {
        if private_key.key_type() != public_key.key_type() {
            return Err(Error::KeyDerivation("Key type mismatch".to_string()));
        }
        Ok(Self { private_key, public_key })
    }

    /// Get the private key
    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    /// Get the public key
    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    /// Get the key type
    pub fn key_type(&self) -> KeyType {
        self.private_key.key_type()
    }
}

/// Build the Solana derivation path for an account index.
///
/// Every segment is hardened: `m/44'/501'/{account}'/0'`.
pub fn solana_derivation_path(account_index: u32) -> Result<String> {
    check_hardened_index(account_index)?;
    Ok(format!("m/44'/{}'/{}'/0'", SOLANA_COIN_TYPE, account_index))
}

/// Build the Ethereum derivation path for an address index.
///
/// BIP-44 account 0, external chain, non-hardened leaf:
/// `m/44'/60'/0'/0/{index}`. The leaf accepts the full u32 range.
pub fn ethereum_derivation_path(address_index: u32) -> Result<String> {
    Ok(format!("m/44'/{}'/0'/0/{}", ETHEREUM_COIN_TYPE, address_index))
}

/// Reject indices that cannot be hardened (>= 2^31)
fn check_hardened_index(index: u32) -> Result<()> {
    if index >= HARDENED_OFFSET {
        return Err(Error::InvalidDerivationIndex(index));
    }
    Ok(())
}

/// Parse a BIP-32 style derivation path into child indices.
///
/// Hardened segments carry a trailing apostrophe and map to
/// `index + HARDENED_OFFSET`.
pub fn parse_derivation_path(path: &str) -> Result<Vec<u32>> {
    if !path.starts_with("m/") {
        return Err(Error::KeyDerivation(format!("Invalid derivation path: {}", path)));
    }

    let components = path.trim_start_matches("m/").split('/');
    let mut result = Vec::new();

    for component in components {
        if component.is_empty() {
            continue;
        }

        let hardened = component.ends_with('\'');
        let raw = component.trim_end_matches('\'');
        let index = raw.parse::<u32>().map_err(|_| {
            Error::KeyDerivation(format!("Invalid derivation path component: {}", component))
        })?;

        if hardened {
            check_hardened_index(index)?;
            result.push(HARDENED_OFFSET + index);
        } else {
            result.push(index);
        }
    }

    Ok(result)
}

/// Derive a key pair from a seed for a specific blockchain
pub fn derive_key_pair(seed: &[u8], key_type: KeyType, path: &str) -> Result<KeyPair> {
    match key_type {
        KeyType::Solana => crate::crypto::keys::solana::derive_solana_key_pair(seed, path),
        KeyType::Ethereum => crate::crypto::keys::ethereum::derive_ethereum_key_pair(seed, path),
    }
}
