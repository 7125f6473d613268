//! Ethereum key derivation
//!
//! BIP-32 secp256k1 hierarchical derivation and EIP-55 address encoding.

use hmac::{Hmac, Mac};
use secp256k1::{PublicKey as Secp256k1PublicKey, Secp256k1, SecretKey};
use sha2::Sha512;

use super::derivation::{parse_derivation_path, KeyPair, KeyType, PrivateKey, PublicKey, HARDENED_OFFSET};
use crate::error::{Error, Result};

/// Derive an Ethereum key pair from a seed and derivation path
pub fn derive_ethereum_key_pair(seed: &[u8], path: &str) -> Result<KeyPair> {
    let path_components = parse_derivation_path(path)?;

    let (mut secret_key, mut chain_code) = derive_master_key(seed)?;

    for component in path_components {
        (secret_key, chain_code) = derive_child_key(secret_key, chain_code, component)?;
    }

    let secp = Secp256k1::new();
    let secret_key = SecretKey::from_slice(&secret_key)
        .map_err(|e| Error::KeyDerivation(format!("Invalid secret key: {}", e)))?;
    let public_key = Secp256k1PublicKey::from_secret_key(&secp, &secret_key);

    let private_key = PrivateKey::new(secret_key.secret_bytes().to_vec(), KeyType::Ethereum);
    let public_key = PublicKey::new(public_key.serialize_uncompressed().to_vec(), KeyType::Ethereum);

    KeyPair::new(private_key, public_key)
}

/// Derive the master key from a seed
fn derive_master_key(seed: &[u8]) -> Result<([u8; 32], [u8; 32])> {
    let mut hmac = Hmac::<Sha512>::new_from_slice(b"Bitcoin seed")
        .map_err(|_| Error::KeyDerivation("HMAC error".to_string()))?;

    hmac.update(seed);
    let result = hmac.finalize().into_bytes();

    let mut secret_key = [0u8; 32];
    let mut chain_code = [0u8; 32];

    secret_key.copy_from_slice(&result[0..32]);
    chain_code.copy_from_slice(&result[32..64]);

    Ok((secret_key, chain_code))
}

/// Derive a child key from a parent key.
///
/// Hardened indices mix the parent private key, non-hardened indices mix
/// the compressed parent public key. The child key is IL + parent (mod n).
fn derive_child_key(
    parent_key: [u8; 32],
    parent_chain_code: [u8; 32],
    index: u32,
) -> Result<([u8; 32], [u8; 32])> {
    let secp = Secp256k1::new();
    let parent_secret_key = SecretKey::from_slice(&parent_key)
        .map_err(|e| Error::KeyDerivation(format!("Invalid parent key: {}", e)))?;

    let mut data = Vec::with_capacity(37);

    if index >= HARDENED_OFFSET {
        data.push(0);
        data.extend_from_slice(&parent_key);
    } else {
        let parent_public_key = Secp256k1PublicKey::from_secret_key(&secp, &parent_secret_key);
        data.extend_from_slice(&parent_public_key.serialize());
    }

    data.extend_from_slice(&index.to_be_bytes());

    let mut hmac = Hmac::<Sha512>::new_from_slice(&parent_chain_code)
        .map_err(|_| Error::KeyDerivation("HMAC error".to_string()))?;

    hmac.update(&data);
    let result = hmac.finalize().into_bytes();

    let mut child_key = [0u8; 32];
    let mut child_chain_code = [0u8; 32];

    child_key.copy_from_slice(&result[0..32]);
    child_chain_code.copy_from_slice(&result[32..64]);

    let child_secret_key = SecretKey::from_slice(&child_key)
        .map_err(|e| Error::KeyDerivation(format!("Invalid child key: {}", e)))?;

    let child_secret_key = child_secret_key
        .add_tweak(&parent_secret_key.into())
        .map_err(|e| Error::KeyDerivation(format!("Key addition error: {}", e)))?;

    Ok((child_secret_key.secret_bytes(), child_chain_code))
}

/// Get the Ethereum address from a public key.
///
/// Keccak-256 over the uncompressed public key minus the 0x04 prefix, last
/// 20 bytes, rendered with EIP-55 mixed-case checksum encoding.
pub fn public_key_to_address(public_key: &PublicKey) -> Result<String> {
    if public_key.key_type() != KeyType::Ethereum {
        return Err(Error::KeyDerivation("Not an Ethereum public key".to_string()));
    }

    let public_key = public_key.as_bytes();

    if public_key.len() != 65 {
        return Err(Error::KeyDerivation("Invalid Ethereum public key length".to_string()));
    }

    let key_hash = keccak256(&public_key[1..]);
    let address = &key_hash[12..];

    Ok(to_checksum_address(address))
}

/// Render 20 address bytes with EIP-55 checksum casing.
///
/// A hex letter is uppercased when the corresponding nibble of
/// Keccak-256(lowercase hex address) is >= 8.
pub fn to_checksum_address(address: &[u8]) -> String {
    let hex_addr = hex::encode(address);
    let hash = keccak256(hex_addr.as_bytes());

    let mut out = String::with_capacity(2 + hex_addr.len());
    out.push_str("0x");

    for (i, c) in hex_addr.chars().enumerate() {
        let nibble = if i % 2 == 0 {
            hash[i / 2] >> 4
        } else {
            hash[i / 2] & 0x0f
        };

        if c.is_ascii_alphabetic() && nibble >= 8 {
            out.push(c.to_ascii_uppercase());
        } else {
            out.push(c);
        }
    }

    out
}

/// Calculate the Keccak-256 hash of data
fn keccak256(data: &[u8]) -> [u8; 32] {
    use sha3::{Digest, Keccak256};
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}

#[cfg(test)]
mod tests {
    use super::*;

    // BIP-32 test vector 1
    const SEED_HEX: &str = "000102030405060708090a0b0c0d0e0f";

    #[test]
    fn test_bip32_vector_hardened_child() {
        let seed = hex::decode(SEED_HEX).unwrap();
        let key_pair = derive_ethereum_key_pair(&seed, "m/0'").unwrap();

        assert_eq!(
            hex::encode(key_pair.private_key().as_bytes()),
            "edb2e14f9ee77d26dd93b4ecede8d16ed408ce149b6cd80b0715a2d911a0afea"
        );
    }

    #[test]
    fn test_bip32_vector_mixed_chain() {
        let seed = hex::decode(SEED_HEX).unwrap();
        let key_pair = derive_ethereum_key_pair(&seed, "m/0'/1/2'/2/1000000000").unwrap();

        assert_eq!(
            hex::encode(key_pair.private_key().as_bytes()),
            "471b76e389e528d6de6d816857e012c5455051cad6660850e58372a6c3e6e7c8"
        );
    }

    #[test]
    fn test_eip55_checksum_vectors() {
        // Canonical cases from the EIP-55 specification
        let cases = [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ];

        for expected in cases {
            let raw = hex::decode(&expected[2..].to_lowercase()).unwrap();
            assert_eq!(to_checksum_address(&raw), expected);
        }
    }

    #[test]
    fn test_uncompressed_public_key() {
        let seed = hex::decode(SEED_HEX).unwrap();
        let key_pair = derive_ethereum_key_pair(&seed, "m/44'/60'/0'/0/0").unwrap();

        let public_key = key_pair.public_key().as_bytes();
        assert_eq!(public_key.len(), 65);
        assert_eq!(public_key[0], 0x04);
    }
}
