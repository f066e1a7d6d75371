//! Pool de sorties non dépensées pour LedgerChain

use std::collections::HashMap;
use serde::{Deserialize, Serialize};
use super::types::{TransactionOutput, UtxoId};

/// Pool de sorties non dépensées, indexées par identité
///
/// Le pool est une pure structure de données : il ne porte aucune logique de
/// validation. Invariant : chaque clé correspond à une sortie qui n'a encore
/// été consommée par aucune transaction appliquée à cette instance.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UtxoPool {
    #[serde(with = "utxo_entries")]
    utxos: HashMap<UtxoId, TransactionOutput>,
}

/// Encode la map comme une séquence de paires (identité, sortie)
///
/// Une [`UtxoId`] est une clé composite, pas une string : JSON n'accepte pas
/// de telles clés d'objet, donc le pool s'encode en liste d'entrées dans
/// tous les formats.
mod utxo_entries {
    use std::collections::HashMap;
    use serde::{Deserialize, Deserializer, Serializer};
    use super::{TransactionOutput, UtxoId};

    pub fn serialize<S>(
        utxos: &HashMap<UtxoId, TransactionOutput>,
        serializer: S,
    ) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(utxos.iter())
    }

    pub fn deserialize<'de, D>(
        deserializer: D,
    ) -> Result<HashMap<UtxoId, TransactionOutput>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let entries: Vec<(UtxoId, TransactionOutput)> = Vec::deserialize(deserializer)?;
        Ok(entries.into_iter().collect())
    }
}

impl UtxoPool {
    /// Crée un pool vide
    pub fn new() -> Self {
        Self::default()
    }

    /// Vérifie si une sortie est présente dans le pool
    pub fn contains(&self, utxo: &UtxoId) -> bool {
        self.utxos.contains_key(utxo)
    }

    /// Obtient la sortie associée à une identité
    pub fn get(&self, utxo: &UtxoId) -> Option<&TransactionOutput> {
        self.utxos.get(utxo)
    }

    /// Ajoute une sortie au pool
    pub fn add(&mut self, utxo: UtxoId, output: TransactionOutput) {
        self.utxos.insert(utxo, output);
    }

    /// Retire une sortie du pool
    pub fn remove(&mut self, utxo: &UtxoId) -> Option<TransactionOutput> {
        self.utxos.remove(utxo)
    }

    /// Retourne le nombre de sorties dans le pool
    pub fn len(&self) -> usize {
        self.utxos.len()
    }

    /// Vérifie si le pool est vide
    pub fn is_empty(&self) -> bool {
        self.utxos.is_empty()
    }

    /// Itère sur les sorties du pool
    pub fn iter(&self) -> impl Iterator<Item = (&UtxoId, &TransactionOutput)> {
        self.utxos.iter()
    }

    /// Obtient les identités de toutes les sorties du pool
    pub fn utxo_ids(&self) -> Vec<UtxoId> {
        self.utxos.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::{generate_keypair_from_seed, Hash};

    fn test_output(amount: i64) -> TransactionOutput {
        let keypair = generate_keypair_from_seed(&[9u8; 32]);
        TransactionOutput::new(amount, keypair.public_key().clone())
    }

    #[test]
    fn test_add_and_get() {
        let mut pool = UtxoPool::new();
        let utxo = UtxoId::new(Hash::zero(), 0);

        assert!(!pool.contains(&utxo));
        pool.add(utxo.clone(), test_output(10));

        assert!(pool.contains(&utxo));
        assert_eq!(pool.get(&utxo).unwrap().amount, 10);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn test_remove() {
        let mut pool = UtxoPool::new();
        let utxo = UtxoId::new(Hash::zero(), 3);
        pool.add(utxo.clone(), test_output(25));

        let removed = pool.remove(&utxo).unwrap();
        assert_eq!(removed.amount, 25);
        assert!(!pool.contains(&utxo));
        assert!(pool.is_empty());
        assert!(pool.remove(&utxo).is_none());
    }

    #[test]
    fn test_same_hash_distinct_indexes() {
        let mut pool = UtxoPool::new();
        let hash = Hash::new([7u8; 32]);
        pool.add(UtxoId::new(hash.clone(), 0), test_output(1));
        pool.add(UtxoId::new(hash.clone(), 1), test_output(2));

        assert_eq!(pool.len(), 2);
        assert_eq!(pool.get(&UtxoId::new(hash, 1)).unwrap().amount, 2);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut pool = UtxoPool::new();
        let utxo = UtxoId::new(Hash::zero(), 0);
        pool.add(utxo.clone(), test_output(10));

        let snapshot = pool.clone();
        pool.remove(&utxo);

        assert!(snapshot.contains(&utxo));
        assert!(!pool.contains(&utxo));
    }

    #[test]
    fn test_utxo_ids() {
        let mut pool = UtxoPool::new();
        pool.add(UtxoId::new(Hash::zero(), 0), test_output(1));
        pool.add(UtxoId::new(Hash::zero(), 1), test_output(2));

        let mut ids = pool.utxo_ids();
        ids.sort_by_key(|id| id.output_index);
        assert_eq!(ids.len(), 2);
        assert_eq!(ids[0].output_index, 0);
        assert_eq!(ids[1].output_index, 1);
    }
}
