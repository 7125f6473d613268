//! Session wallet list
//!
//! In-memory, append-only collection of wallets generated during a session.
//! Wallets are gone when the session is dropped; there is no persistence.

use tracing::info;

use crate::account::wallet::{derive_wallet, Wallet};
use crate::crypto::keys::KeyType;
use crate::error::Result;

/// Holds the wallets generated in this session, in insertion order.
///
/// The derivation index for each chain comes from a monotonically
/// increasing per-chain counter, not from the list length, so indices can
/// never be reused even if removal were ever supported. Counters advance
/// only after a wallet is successfully derived, keeping indices dense.
#[derive(Debug, Default)]
pub struct WalletSession {
    wallets: Vec<Wallet>,
    solana_created: u32,
    ethereum_created: u32,
}

impl WalletSession {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate a new wallet for the given chain and append it.
    ///
    /// On error nothing is recorded: the counter keeps its value and the
    /// list is untouched. A later retry generates an entirely new mnemonic.
    pub fn create_wallet(&mut self, key_type: KeyType) -> Result<Wallet> {
        let index = self.created_count(key_type);
        let wallet = derive_wallet(key_type, index)?;

        match key_type {
            KeyType::Solana => self.solana_created += 1,
            KeyType::Ethereum => self.ethereum_created += 1,
        }
        self.wallets.push(wallet.clone());

        info!(
            chain = ?key_type,
            index,
            address = %wallet.public_key,
            "wallet created"
        );

        Ok(wallet)
    }

    /// Number of wallets created so far for a chain
    pub fn created_count(&self, key_type: KeyType) -> u32 {
        match key_type {
            KeyType::Solana => self.solana_created,
            KeyType::Ethereum => self.ethereum_created,
        }
    }

    /// All wallets in insertion order
    pub fn wallets(&self) -> &[Wallet] {
        &self.wallets
    }

    /// The wallets for one chain, in insertion order
    pub fn wallets_for(&self, key_type: KeyType) -> Vec<&Wallet> {
        self.wallets.iter().filter(|w| w.key_type == key_type).collect()
    }

    /// Total number of wallets in the session
    pub fn len(&self) -> usize {
        self.wallets.len()
    }

    /// Whether the session holds no wallets
    pub fn is_empty(&self) -> bool {
        self.wallets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counters_are_per_chain() {
        let mut session = WalletSession::new();

        session.create_wallet(KeyType::Solana).unwrap();
        session.create_wallet(KeyType::Ethereum).unwrap();
        session.create_wallet(KeyType::Solana).unwrap();

        assert_eq!(session.created_count(KeyType::Solana), 2);
        assert_eq!(session.created_count(KeyType::Ethereum), 1);
        assert_eq!(session.len(), 3);
    }

    #[test]
    fn test_partition_preserves_order() {
        let mut session = WalletSession::new();

        let sol_a = session.create_wallet(KeyType::Solana).unwrap();
        let eth_a = session.create_wallet(KeyType::Ethereum).unwrap();
        let sol_b = session.create_wallet(KeyType::Solana).unwrap();

        let sol = session.wallets_for(KeyType::Solana);
        assert_eq!(sol.len(), 2);
        assert_eq!(sol[0].public_key, sol_a.public_key);
        assert_eq!(sol[1].public_key, sol_b.public_key);

        let eth = session.wallets_for(KeyType::Ethereum);
        assert_eq!(eth.len(), 1);
        assert_eq!(eth[0].public_key, eth_a.public_key);
    }

    #[test]
    fn test_session_wallets_are_distinct() {
        let mut session = WalletSession::new();

        for _ in 0..5 {
            session.create_wallet(KeyType::Solana).unwrap();
        }

        let mut mnemonics: Vec<&str> =
            session.wallets().iter().map(|w| w.mnemonic.as_str()).collect();
        mnemonics.sort();
        mnemonics.dedup();
        assert_eq!(mnemonics.len(), 5);

        let mut addresses: Vec<&str> =
            session.wallets().iter().map(|w| w.public_key.as_str()).collect();
        addresses.sort();
        addresses.dedup();
        assert_eq!(addresses.len(), 5);
    }

    #[test]
    fn test_empty_session() {
        let session = WalletSession::new();
        assert!(session.is_empty());
        assert_eq!(session.created_count(KeyType::Solana), 0);
        assert_eq!(session.created_count(KeyType::Ethereum), 0);
    }
}
