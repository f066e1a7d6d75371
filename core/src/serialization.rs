//! Module de sérialisation pour LedgerChain
//!
//! Fournit des fonctions de sérialisation/désérialisation avec bincode
//! (échanges binaires entre pairs) et JSON (debug, surfaces d'outillage).
//! Le noyau lui-même ne fait aucune E/S : ces encodages servent aux
//! collaborateurs qui transportent ou inspectent transactions et pools.

use serde::{Deserialize, Serialize};
use crate::error::{Result, SerializationError};

/// Formats de sérialisation supportés
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SerializationFormat {
    /// Bincode - Format binaire compact et rapide
    Bincode,
    /// JSON - Format texte pour le debug et l'outillage
    Json,
}

/// Trait pour les objets sérialisables
pub trait Serializable: Serialize + for<'de> Deserialize<'de> {
    /// Sérialise l'objet dans le format spécifié
    fn serialize(&self, format: SerializationFormat) -> Result<Vec<u8>> {
        serialize_with_format(self, format)
    }

    /// Désérialise un objet depuis les bytes
    fn deserialize(data: &[u8], format: SerializationFormat) -> Result<Self>
    where
        Self: Sized,
    {
        deserialize_with_format(data, format)
    }
}

/// Sérialise un objet avec le format spécifié
pub fn serialize_with_format<T: Serialize>(
    obj: &T,
    format: SerializationFormat,
) -> Result<Vec<u8>> {
    match format {
        SerializationFormat::Bincode => {
            Ok(bincode::serialize(obj).map_err(SerializationError::Bincode)?)
        }
        SerializationFormat::Json => {
            let json_str = serde_json::to_string(obj).map_err(SerializationError::Json)?;
            Ok(json_str.into_bytes())
        }
    }
}

/// Désérialise un objet depuis les bytes avec le format spécifié
pub fn deserialize_with_format<T: for<'de> Deserialize<'de>>(
    data: &[u8],
    format: SerializationFormat,
) -> Result<T> {
    match format {
        SerializationFormat::Bincode => {
            Ok(bincode::deserialize(data).map_err(SerializationError::Bincode)?)
        }
        SerializationFormat::Json => {
            Ok(serde_json::from_slice(data).map_err(SerializationError::Json)?)
        }
    }
}

// Implémente Serializable pour nos types principaux
impl Serializable for crate::crypto::Hash {}
impl Serializable for crate::transaction::Transaction {}
impl Serializable for crate::transaction::UtxoPool {}
