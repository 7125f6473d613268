//! Key derivation and management
//!
//! This module provides functionality for deriving and managing keys for
//! different blockchains.

pub mod ethereum;
pub mod solana;
mod derivation;

pub use derivation::*;
