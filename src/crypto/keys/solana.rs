//! Solana key derivation
//!
//! SLIP-0010 Ed25519 hierarchical derivation. Every step is hash-based and
//! hardened; Ed25519 has no defined non-hardened child derivation.

use ed25519_dalek::{SigningKey, VerifyingKey};
use hmac::{Hmac, Mac};
use sha2::Sha512;

use super::derivation::{parse_derivation_path, KeyPair, KeyType, PrivateKey, PublicKey, HARDENED_OFFSET};
use crate::error::{Error, Result};

/// Derive a Solana key pair from a seed and derivation path.
///
/// The private key is the 64-byte Ed25519 keypair encoding: the 32-byte
/// derived seed followed by the 32-byte public key.
pub fn derive_solana_key_pair(seed: &[u8], path: &str) -> Result<KeyPair> {
    let path_components = parse_derivation_path(path)?;

    let (mut secret_key, mut chain_code) = derive_master_key(seed)?;

    for component in path_components {
        (secret_key, chain_code) = derive_child_key(secret_key, chain_code, component)?;
    }

    let signing_key = SigningKey::from_bytes(&secret_key);
    let verifying_key = VerifyingKey::from(&signing_key);

    let private_key = PrivateKey::new(signing_key.to_keypair_bytes().to_vec(), KeyType::Solana);
    let public_key = PublicKey::new(verifying_key.to_bytes().to_vec(), KeyType::Solana);

    KeyPair::new(private_key, public_key)
}

/// Derive the master key from a seed
fn derive_master_key(seed: &[u8]) -> Result<([u8; 32], [u8; 32])> {
    let mut hmac = Hmac::<Sha512>::new_from_slice(b"ed25519 seed")
        .map_err(|_| Error::KeyDerivation("HMAC error".to_string()))?;

    hmac.update(seed);
    let result = hmac.finalize().into_bytes();

    let mut secret_key = [0u8; 32];
    let mut chain_code = [0u8; 32];

    secret_key.copy_from_slice(&result[0..32]);
    chain_code.copy_from_slice(&result[32..64]);

    Ok((secret_key, chain_code))
}

/// Derive a child key from a parent key. Hardened indices only.
fn derive_child_key(
    parent_key: [u8; 32],
    parent_chain_code: [u8; 32],
    index: u32,
) -> Result<([u8; 32], [u8; 32])> {
    if index < HARDENED_OFFSET {
        return Err(Error::KeyDerivation(format!(
            "Ed25519 derivation requires hardened segments, got index {}",
            index
        )));
    }

    let mut data = Vec::with_capacity(37);
    data.push(0);
    data.extend_from_slice(&parent_key);
    data.extend_from_slice(&index.to_be_bytes());

    let mut hmac = Hmac::<Sha512>::new_from_slice(&parent_chain_code)
        .map_err(|_| Error::KeyDerivation("HMAC error".to_string()))?;

    hmac.update(&data);
    let result = hmac.finalize().into_bytes();

    let mut child_key = [0u8; 32];
    let mut child_chain_code = [0u8; 32];

    child_key.copy_from_slice(&result[0..32]);
    child_chain_code.copy_from_slice(&result[32..64]);

    Ok((child_key, child_chain_code))
}

/// Get the Solana address from a public key.
///
/// The address is the raw 32-byte public key in base58, no checksum.
pub fn public_key_to_address(public_key: &PublicKey) -> Result<String> {
    if public_key.key_type() != KeyType::Solana {
        return Err(Error::KeyDerivation("Not a Solana public key".to_string()));
    }

    let public_key = public_key.as_bytes();

    if public_key.len() != 32 {
        return Err(Error::KeyDerivation("Invalid Solana public key length".to_string()));
    }

    Ok(bs58::encode(public_key).into_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    // SLIP-0010 test vector 1 for Ed25519
    const SEED_HEX: &str = "000102030405060708090a0b0c0d0e0f";

    #[test]
    fn test_slip10_vector_first_child() {
        let seed = hex::decode(SEED_HEX).unwrap();
        let key_pair = derive_solana_key_pair(&seed, "m/0'").unwrap();

        assert_eq!(
            hex::encode(&key_pair.private_key().as_bytes()[0..32]),
            "68e0fe46dfb67e368c75379acec591dad19df3cde26e63b93a8e704f1dade7a3"
        );
        assert_eq!(
            hex::encode(key_pair.public_key().as_bytes()),
            "8c8a13df77a28f3445213a0f432fde644acaa215fc72dcdf300d5efaa85d350c"
        );
    }

    #[test]
    fn test_slip10_vector_deep_chain() {
        let seed = hex::decode(SEED_HEX).unwrap();
        let key_pair = derive_solana_key_pair(&seed, "m/0'/1'/2'/2'/1000000000'").unwrap();

        assert_eq!(
            hex::encode(&key_pair.private_key().as_bytes()[0..32]),
            "8f94d394a8e8fd6b1bc2f3f49f5c47e385281d5c17e65324b0f62483e37e8793"
        );
        assert_eq!(
            hex::encode(key_pair.public_key().as_bytes()),
            "47150c75db263559a70d5778bf36abbab30fb061ad69f69ece61a72b0cfa4fc0"
        );
    }

    #[test]
    fn test_secret_key_is_keypair_encoding() {
        let seed = hex::decode(SEED_HEX).unwrap();
        let key_pair = derive_solana_key_pair(&seed, "m/0'").unwrap();

        let secret = key_pair.private_key().as_bytes();
        assert_eq!(secret.len(), 64);
        assert_eq!(&secret[32..], key_pair.public_key().as_bytes());
    }

    #[test]
    fn test_non_hardened_segment_rejected() {
        let seed = hex::decode(SEED_HEX).unwrap();
        let result = derive_solana_key_pair(&seed, "m/44'/501'/0'/0");
        assert!(matches!(result, Err(Error::KeyDerivation(_))));
    }

    #[test]
    fn test_address_encoding() {
        let seed = hex::decode(SEED_HEX).unwrap();
        let key_pair = derive_solana_key_pair(&seed, "m/44'/501'/0'/0'").unwrap();
        let address = public_key_to_address(key_pair.public_key()).unwrap();

        let decoded = bs58::decode(&address).into_vec().unwrap();
        assert_eq!(decoded, key_pair.public_key().as_bytes());
    }
}
