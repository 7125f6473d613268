//! Address management

use serde::{Deserialize, Serialize};

use crate::crypto::keys::{ethereum, solana, KeyType, PublicKey};
use crate::error::{Error, Result};

/// A blockchain address
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Address {
    /// The address string in the blockchain's native format
    pub address: String,
    /// The type of blockchain this address is for
    pub key_type: KeyType,
    /// The derivation path used to generate this address
    pub path: String,
}

impl Address {
    /// Create a new address
    pub fn new(address: String, key_type: KeyType, path: String) -> Self {
        Self {
            address,
            key_type,
            path,
        }
    }

    /// Get the address string
    pub fn as_str(&self) -> &str {
        &self.address
    }

    /// Get the key type
    pub fn key_type(&self) -> KeyType {
        self.key_type
    }

    /// Get the derivation path
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Derive a Solana address from a public key
pub fn derive_solana_address(public_key: &PublicKey, path: &str) -> Result<Address> {
    if public_key.key_type() != KeyType::Solana {
        return Err(Error::KeyDerivation("Not a Solana public key".to_string()));
    }

    let address = solana::public_key_to_address(public_key)?;

    Ok(Address::new(address, KeyType::Solana, path.to_string()))
}

/// Derive an Ethereum address from a public key
pub fn derive_ethereum_address(public_key: &PublicKey, path: &str) -> Result<Address> {
    if public_key.key_type() != KeyType::Ethereum {
        return Err(Error::KeyDerivation("Not an Ethereum public key".to_string()));
    }

    let address = ethereum::public_key_to_address(public_key)?;

    Ok(Address::new(address, KeyType::Ethereum, path.to_string()))
}

/// Derive an address from a public key
pub fn derive_address(public_key: &PublicKey, path: &str) -> Result<Address> {
    match public_key.key_type() {
        KeyType::Solana => derive_solana_address(public_key, path),
        KeyType::Ethereum => derive_ethereum_address(public_key, path),
    }
}

/// Validate an address for a specific blockchain.
///
/// Checks the format this crate emits: Solana addresses must decode from
/// base58 to exactly 32 bytes; Ethereum addresses must be 0x-prefixed,
/// 40 hex digits, and carry EIP-55 checksum casing.
pub fn validate_address(address: &str, key_type: KeyType) -> Result<bool> {
    match key_type {
        KeyType::Solana => {
            match bs58::decode(address).into_vec() {
                Ok(bytes) => Ok(bytes.len() == 32),
                Err(_) => Ok(false),
            }
        }
        KeyType::Ethereum => {
            if !address.starts_with("0x") || address.len() != 42 {
                return Ok(false);
            }

            let bytes = match hex::decode(&address[2..]) {
                Ok(bytes) => bytes,
                Err(_) => return Ok(false),
            };
            if bytes.len() != 20 {
                return Ok(false);
            }

            Ok(ethereum::to_checksum_address(&bytes) == address)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_creation() {
        let address = Address::new(
            "0x9858EfFD232B4033E47d90003D41EC34EcaEda94".to_string(),
            KeyType::Ethereum,
            "m/44'/60'/0'/0/0".to_string(),
        );

        assert_eq!(address.as_str(), "0x9858EfFD232B4033E47d90003D41EC34EcaEda94");
        assert_eq!(address.key_type(), KeyType::Ethereum);
        assert_eq!(address.path(), "m/44'/60'/0'/0/0");
    }

    #[test]
    fn test_validate_ethereum_address() {
        assert!(validate_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed", KeyType::Ethereum).unwrap());

        // Too short
        assert!(!validate_address("0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAe", KeyType::Ethereum).unwrap());
        // Missing prefix
        assert!(!validate_address("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed00", KeyType::Ethereum).unwrap());
        // Invalid hex
        assert!(!validate_address("0xZZAeb6053F3E94C9b9A09f33669435E7Ef1BeAed", KeyType::Ethereum).unwrap());
        // Checksum casing violated
        assert!(!validate_address("0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed", KeyType::Ethereum).unwrap());
    }

    #[test]
    fn test_validate_solana_address() {
        // 32 bytes of 0x01 in base58
        let valid = bs58::encode([1u8; 32]).into_string();
        assert!(validate_address(&valid, KeyType::Solana).unwrap());

        // Wrong payload length
        let short = bs58::encode([1u8; 31]).into_string();
        assert!(!validate_address(&short, KeyType::Solana).unwrap());

        // Not base58 (contains 0 and l)
        assert!(!validate_address("0l0l0l0l0l", KeyType::Solana).unwrap());
    }
}
