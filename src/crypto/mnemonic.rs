//! Mnemonic phrase generation and handling

use bip39::{Language, Mnemonic};
use rand::rngs::OsRng;
use rand::RngCore;

use crate::error::{Error, Result};

/// Supported mnemonic strengths
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MnemonicStrength {
    /// 12 words (128 bits)
    Words12,
    /// 24 words (256 bits)
    Words24,
}

impl MnemonicStrength {
    /// Entropy length in bytes for this strength
    fn entropy_len(&self) -> usize {
        match self {
            Self::Words12 => 16,
            Self::Words24 => 32,
        }
    }
}

/// Generate a new random mnemonic phrase with the specified strength.
///
/// Entropy comes from the operating system CSPRNG; a failure to read it is
/// reported as [`Error::EntropyUnavailable`].
pub fn generate_mnemonic(strength: MnemonicStrength) -> Result<String> {
    let mut entropy = [0u8; 32];
    let entropy = &mut entropy[..strength.entropy_len()];

    OsRng
        .try_fill_bytes(entropy)
        .map_err(|e| Error::EntropyUnavailable(e.to_string()))?;

    let mnemonic = Mnemonic::from_entropy_in(Language::English, entropy)
        .map_err(|e| Error::Mnemonic(e.to_string()))?;

    Ok(mnemonic.to_string())
}

/// Validate a mnemonic phrase against the BIP-39 wordlist and checksum
pub fn validate_mnemonic(phrase: &str) -> Result<bool> {
    match Mnemonic::parse_in(Language::English, phrase) {
        Ok(_) => Ok(true),
        Err(e) => Err(Error::Mnemonic(e.to_string())),
    }
}

/// Generate a seed from a mnemonic phrase and optional passphrase.
///
/// PBKDF2-HMAC-SHA512 with 2048 iterations over the NFKD-normalized phrase,
/// salted with `"mnemonic"` plus the passphrase, yielding 64 bytes.
pub fn mnemonic_to_seed(phrase: &str, passphrase: Option<&str>) -> Result<Vec<u8>> {
    let mnemonic = Mnemonic::parse_in(Language::English, phrase)
        .map_err(|e| Error::Mnemonic(e.to_string()))?;

    let seed = mnemonic.to_seed(passphrase.unwrap_or(""));
    Ok(seed.to_vec())
}
