//! Types d'erreurs pour LedgerChain Core

use thiserror::Error;

/// Type de résultat standard pour le module core
pub type Result<T> = std::result::Result<T, CoreError>;

/// Erreurs principales du module core
///
/// La validité d'une transaction n'est jamais une erreur : les prédicats de
/// validation retournent des booléens. Ces erreurs signalent un mauvais usage
/// de l'API ou du matériel cryptographique malformé.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Erreur cryptographique: {0}")]
    Crypto(#[from] CryptoError),

    #[error("Erreur de transaction: {0}")]
    Transaction(#[from] TransactionError),

    #[error("Erreur de sérialisation: {0}")]
    Serialization(#[from] SerializationError),
}

/// Erreurs cryptographiques
#[derive(Error, Debug)]
pub enum CryptoError {
    #[error("Signature invalide")]
    InvalidSignature,

    #[error("Clé publique invalide")]
    InvalidPublicKey,

    #[error("Clé privée invalide")]
    InvalidPrivateKey,

    #[error("Hash invalide: longueur attendue {expected}, reçue {actual}")]
    InvalidHashLength { expected: usize, actual: usize },

    #[error("Erreur de décodage hexadécimal: {0}")]
    HexDecode(#[from] hex::FromHexError),
}

/// Erreurs de construction de transaction
#[derive(Error, Debug)]
pub enum TransactionError {
    #[error("Index d'entrée hors limites: {index} (la transaction a {len} entrées)")]
    InputIndexOutOfRange { index: usize, len: usize },

    #[error("L'entrée {index} n'est pas signée")]
    UnsignedInput { index: usize },
}

/// Erreurs de sérialisation
#[derive(Error, Debug)]
pub enum SerializationError {
    #[error("Erreur bincode: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("Erreur JSON: {0}")]
    Json(#[from] serde_json::Error),
}
