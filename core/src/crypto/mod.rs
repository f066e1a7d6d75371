//! Module cryptographique pour LedgerChain
//!
//! Fournit les primitives cryptographiques essentielles :
//! - Fonctions de hachage (Blake3)
//! - Signatures numériques (Ed25519)
//! - Gestion des clés

pub mod hash;
pub mod signature;
pub mod keys;

pub use hash::{Hash, HASH_SIZE, compute_blake3};
pub use signature::{Signature, SIGNATURE_SIZE, sign_data, verify_signature};
pub use keys::{PublicKey, PrivateKey, KeyPair, generate_keypair, generate_keypair_from_seed};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crypto_module_basic() {
        let data = b"test data";
        let hash = compute_blake3(data);
        assert_eq!(hash.as_bytes().len(), HASH_SIZE);
    }

    #[test]
    fn test_sign_verify_roundtrip() {
        let keypair = generate_keypair();
        let data = b"message to sign";

        let signature = sign_data(data, keypair.private_key());
        assert!(verify_signature(data, &signature, keypair.public_key()));
    }
}
