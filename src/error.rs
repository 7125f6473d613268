//! Error types for the wallet generator library

use thiserror::Error;

/// Custom error type for wallet generation operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("Entropy source unavailable: {0}")]
    EntropyUnavailable(String),

    #[error("Derivation index {0} exceeds the hardened range")]
    InvalidDerivationIndex(u32),

    #[error("Malformed seed: expected {expected} bytes, got {actual}")]
    MalformedSeed { expected: usize, actual: usize },

    #[error("Mnemonic error: {0}")]
    Mnemonic(String),

    #[error("Key derivation error: {0}")]
    KeyDerivation(String),
}

/// Result type for wallet generation operations
pub type Result<T> = std::result::Result<T, Error>;
