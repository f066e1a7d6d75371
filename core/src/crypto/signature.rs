//! Module de signatures numériques pour LedgerChain
//!
//! Utilise Ed25519 pour signer et vérifier la forme canonique non signée
//! des transactions. La vérification est une fonction pure : elle retourne
//! un booléen et ne modifie aucun état.

use serde::{Deserialize, Serialize};
use ed25519_dalek::{Signer, Verifier};
use std::fmt;
use crate::error::{CryptoError, Result};
use super::keys::{PrivateKey, PublicKey};

/// Taille d'une signature Ed25519 en bytes
pub const SIGNATURE_SIZE: usize = 64;

/// Signature numérique Ed25519
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    sig: ed25519_dalek::Signature,
}

impl Signature {
    /// Crée une signature à partir d'un array de bytes
    pub fn new(bytes: [u8; SIGNATURE_SIZE]) -> Self {
        Self {
            sig: ed25519_dalek::Signature::from_bytes(&bytes),
        }
    }

    /// Crée une signature à partir d'un slice de bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != SIGNATURE_SIZE {
            return Err(CryptoError::InvalidSignature.into());
        }

        let mut array = [0u8; SIGNATURE_SIZE];
        array.copy_from_slice(bytes);
        Ok(Self::new(array))
    }

    /// Crée une signature à partir d'une string hexadécimale
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = hex::decode(hex_str).map_err(CryptoError::HexDecode)?;
        Self::from_bytes(&bytes)
    }

    /// Retourne les bytes de la signature
    pub fn to_bytes(&self) -> [u8; SIGNATURE_SIZE] {
        self.sig.to_bytes()
    }

    /// Retourne une représentation hexadécimale
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_bytes())
    }

    /// Signature vide (utilisée pour les tests)
    pub fn zero() -> Self {
        Self::new([0u8; SIGNATURE_SIZE])
    }

    /// Vérifie si la signature est vide
    pub fn is_zero(&self) -> bool {
        self.to_bytes() == [0u8; SIGNATURE_SIZE]
    }

    /// Obtient la signature interne pour la vérification
    pub(crate) fn inner(&self) -> &ed25519_dalek::Signature {
        &self.sig
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

/// Signe des données avec une clé privée
pub fn sign_data(data: &[u8], private_key: &PrivateKey) -> Signature {
    Signature {
        sig: private_key.inner().sign(data),
    }
}

/// Vérifie une signature avec une clé publique
pub fn verify_signature(data: &[u8], signature: &Signature, public_key: &PublicKey) -> bool {
    public_key.inner().verify(data, signature.inner()).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::keys::generate_keypair;

    #[test]
    fn test_signature_from_bytes() {
        let bytes = vec![1u8; SIGNATURE_SIZE];
        let signature = Signature::from_bytes(&bytes).unwrap();
        assert_eq!(signature.to_bytes(), &bytes[..]);
    }

    #[test]
    fn test_signature_from_invalid_bytes() {
        let bytes = vec![0u8; 32]; // Wrong size
        let result = Signature::from_bytes(&bytes);
        assert!(result.is_err());
    }

    #[test]
    fn test_signature_hex_roundtrip() {
        let signature = Signature::new([0x12u8; SIGNATURE_SIZE]);
        let hex = signature.to_hex();
        let recovered = Signature::from_hex(&hex).unwrap();
        assert_eq!(signature, recovered);
    }

    #[test]
    fn test_sign_and_verify() {
        let keypair = generate_keypair();
        let data = b"test message to sign";

        let signature = sign_data(data, keypair.private_key());
        assert!(verify_signature(data, &signature, keypair.public_key()));
    }

    #[test]
    fn test_verify_wrong_key() {
        let keypair1 = generate_keypair();
        let keypair2 = generate_keypair();
        let data = b"test message";

        let signature = sign_data(data, keypair1.private_key());
        assert!(!verify_signature(data, &signature, keypair2.public_key()));
    }

    #[test]
    fn test_verify_tampered_data() {
        let keypair = generate_keypair();

        let signature = sign_data(b"original message", keypair.private_key());
        assert!(!verify_signature(b"tampered message", &signature, keypair.public_key()));
    }

    #[test]
    fn test_zero_signature_never_verifies() {
        let keypair = generate_keypair();
        let signature = Signature::zero();
        assert!(signature.is_zero());
        assert!(!verify_signature(b"any message", &signature, keypair.public_key()));
    }
}
