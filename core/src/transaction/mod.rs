//! Module des transactions pour LedgerChain
//!
//! Regroupe le modèle de données (transactions, sorties non dépensées), le
//! pool d'UTXOs et la logique d'admission des lots.

pub mod pool;
pub mod validation;
pub mod types;

pub use types::{
    Amount, Transaction, TransactionBuilder, TransactionInput, TransactionOutput, UtxoId,
};
pub use pool::UtxoPool;
pub use validation::TransactionValidator;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::generate_keypair_from_seed;

    #[test]
    fn test_transaction_module_basic() {
        let keypair = generate_keypair_from_seed(&[8u8; 32]);
        let pool = UtxoPool::new();
        let validator = TransactionValidator::new(&pool);

        // Sur un pool vide, toute transaction avec entrée est invalide.
        let tx = Transaction::builder()
            .input(UtxoId::new(crate::crypto::Hash::zero(), 0))
            .output(1, keypair.public_key().clone())
            .sign_input(0, keypair.private_key())
            .unwrap()
            .build()
            .unwrap();
        assert!(!validator.is_valid(&tx));
    }
}
