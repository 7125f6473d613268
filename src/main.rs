//! Wallet generator demo
//!
//! Generates N wallets per chain into a session and prints them as JSON.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use walletgen_core::account::WalletSession;
use walletgen_core::crypto::keys::KeyType;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let count: u32 = std::env::args()
        .nth(1)
        .map(|arg| arg.parse())
        .transpose()?
        .unwrap_or(1);

    let mut session = WalletSession::new();
    for _ in 0..count {
        session.create_wallet(KeyType::Solana)?;
        session.create_wallet(KeyType::Ethereum)?;
    }

    println!("{}", serde_json::to_string_pretty(session.wallets())?);

    Ok(())
}
