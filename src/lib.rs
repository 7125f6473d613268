//! Walletgen Core - Multi-chain HD wallet generator
//!
//! This library provides core functionality for generating crypto wallets
//! for Solana and Ethereum: mnemonic generation, seed derivation, HD key
//! derivation, and address encoding. Wallets live only in memory for the
//! duration of a session; there is no persistence and no signing.

pub mod error;
pub mod crypto;
pub mod account;

// Re-export commonly used types for convenience
pub use error::{Error, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
