//! Account management functionality
//!
//! This module provides the wallet generation pipeline, address handling,
//! and the in-memory session that tracks generated wallets.

mod address;
mod session;
mod wallet;

pub use address::*;
pub use session::*;
pub use wallet::*;
