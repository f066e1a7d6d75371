//! LedgerChain Core Library
//!
//! This is the core library for LedgerChain, a minimal UTXO ledger. It
//! solves one problem: given a pool of currently-unspent transaction
//! outputs and an unordered batch of candidate transactions, decide which
//! transactions are individually valid and mutually consistent, and
//! produce the maximal accepted subset together with the updated pool.
//!
//! # Features
//!
//! - **Single-transaction validation**: pure boolean predicate over a
//!   transaction and a pool snapshot (existence, double-claim, signature,
//!   non-negative outputs, value conservation)
//! - **Batch admission**: fixed-point scheduler that resolves intra-batch
//!   dependencies and applies accepted transactions to a private pool copy
//! - **Cryptographic Security**: Ed25519 signatures and Blake3 content
//!   hashing
//!
//! # Quick Start
//!
//! ```rust
//! use ledgerchain_core::prelude::*;
//!
//! // Alice possède une sortie de 10 dans le pool initial.
//! let alice = generate_keypair();
//! let bob = generate_keypair();
//!
//! let mut pool = UtxoPool::new();
//! let utxo = UtxoId::new(Hash::zero(), 0);
//! pool.add(utxo.clone(), TransactionOutput::new(10, alice.public_key().clone()));
//!
//! // Alice transfère la sortie entière à Bob.
//! let tx = Transaction::builder()
//!     .input(utxo)
//!     .output(10, bob.public_key().clone())
//!     .sign_input(0, alice.private_key())?
//!     .build()?;
//!
//! let mut validator = TransactionValidator::new(&pool);
//! assert!(validator.is_valid(&tx));
//!
//! let accepted = validator.handle_batch(std::slice::from_ref(&tx));
//! assert_eq!(accepted.len(), 1);
//! # Ok::<(), ledgerchain_core::CoreError>(())
//! ```
//!
//! # Architecture
//!
//! - [`crypto`] - Cryptographic primitives (Blake3 hashing, Ed25519 keys
//!   and signatures)
//! - [`transaction`] - Transaction types, the UTXO pool and the
//!   validation/admission logic
//! - [`serialization`] - Bincode/JSON helpers for the public record types
//! - [`error`] - Error taxonomy; validity questions are booleans, errors
//!   signal caller mistakes or malformed cryptographic material

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core ledger modules
pub mod crypto;
pub mod transaction;

// Serialization helpers
pub mod serialization;

// Error handling
pub mod error;

// Re-exports for convenience
pub use error::{CoreError, Result};
pub use crypto::{Hash, PublicKey, Signature};
pub use transaction::{Transaction, TransactionValidator, UtxoId, UtxoPool};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common types and traits for convenient importing
    //!
    //! ```rust
    //! use ledgerchain_core::prelude::*;
    //! ```

    // Core types
    pub use crate::{
        CoreError, Hash, Result, Transaction, TransactionValidator, UtxoId, UtxoPool,
    };

    // Transaction model
    pub use crate::transaction::{
        Amount, TransactionBuilder, TransactionInput, TransactionOutput,
    };

    // Crypto primitives
    pub use crate::crypto::{
        generate_keypair, generate_keypair_from_seed, sign_data, verify_signature, KeyPair,
        PrivateKey, PublicKey, Signature,
    };

    // Serialization
    pub use crate::serialization::{Serializable, SerializationFormat};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_info() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_prelude_imports() {
        use crate::prelude::*;

        let pool = UtxoPool::new();
        let validator = TransactionValidator::new(&pool);
        assert!(validator.pool().is_empty());

        let keypair: KeyPair = generate_keypair();
        assert_eq!(keypair.public_key().as_bytes().len(), 32);
    }
}
