//! Cryptographic primitives and operations
//!
//! This module provides functionality for mnemonic generation, key derivation,
//! and cryptographic operations required for wallet generation.

pub mod mnemonic;
pub mod keys;

pub use mnemonic::*;
pub use keys::*;
