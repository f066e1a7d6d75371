//! Fonctions de hachage pour LedgerChain
//!
//! Blake3 est l'algorithme de contenu unique du noyau : il nomme les
//! transactions et, par extension, leurs sorties non dépensées.

use serde::{Deserialize, Serialize};
use std::fmt;
use crate::error::{CryptoError, Result};

/// Taille standard d'un hash en bytes
pub const HASH_SIZE: usize = 32;

/// Représentation d'un hash de 256 bits
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Hash([u8; HASH_SIZE]);

impl Hash {
    /// Crée un nouveau hash à partir d'un array de bytes
    pub fn new(data: [u8; HASH_SIZE]) -> Self {
        Self(data)
    }

    /// Crée un hash à partir d'un slice de bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != HASH_SIZE {
            return Err(CryptoError::InvalidHashLength {
                expected: HASH_SIZE,
                actual: bytes.len(),
            }
            .into());
        }
        let mut array = [0u8; HASH_SIZE];
        array.copy_from_slice(bytes);
        Ok(Self(array))
    }

    /// Crée un hash à partir d'une string hexadécimale
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = hex::decode(hex_str).map_err(CryptoError::HexDecode)?;
        Self::from_bytes(&bytes)
    }

    /// Retourne les bytes du hash
    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }

    /// Retourne une représentation hexadécimale
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Hash vide (utilisé pour les tests et cas spéciaux)
    pub fn zero() -> Self {
        Self([0u8; HASH_SIZE])
    }

    /// Vérifie si le hash est vide
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; HASH_SIZE]
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Calcule un hash Blake3 des données
pub fn compute_blake3(data: &[u8]) -> Hash {
    let hash_bytes = blake3::hash(data);
    Hash::new(*hash_bytes.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_creation() {
        let data = [1u8; HASH_SIZE];
        let hash = Hash::new(data);
        assert_eq!(hash.as_bytes(), &data);
    }

    #[test]
    fn test_hash_from_bytes() {
        let bytes = vec![0u8; HASH_SIZE];
        let hash = Hash::from_bytes(&bytes).unwrap();
        assert!(hash.is_zero());
    }

    #[test]
    fn test_hash_from_invalid_bytes() {
        let bytes = vec![0u8; 16]; // Wrong size
        let result = Hash::from_bytes(&bytes);
        assert!(result.is_err());
    }

    #[test]
    fn test_hash_hex_roundtrip() {
        let original = compute_blake3(b"roundtrip");
        let hex = original.to_hex();
        let recovered = Hash::from_hex(&hex).unwrap();
        assert_eq!(original, recovered);
    }

    #[test]
    fn test_blake3_hash() {
        let data = b"test data for hashing";
        let hash = compute_blake3(data);
        assert!(!hash.is_zero());
        assert_eq!(hash.as_bytes().len(), HASH_SIZE);
    }

    #[test]
    fn test_hash_consistency() {
        let data = b"consistent test data";
        let hash1 = compute_blake3(data);
        let hash2 = compute_blake3(data);
        assert_eq!(hash1, hash2);
    }

    #[test]
    fn test_different_inputs_differ() {
        assert_ne!(compute_blake3(b"a"), compute_blake3(b"b"));
    }
}
