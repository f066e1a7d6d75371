//! Validation et admission des transactions pour LedgerChain
//!
//! Deux opérations : un prédicat pur de validité sur une transaction isolée,
//! et l'admission d'un lot non ordonné de transactions candidates par
//! itération jusqu'à point fixe.

use std::collections::HashSet;
use tracing::{debug, trace};
use crate::crypto::verify_signature;
use super::pool::UtxoPool;
use super::types::{Amount, Transaction, UtxoId};

/// Validateur de transactions sur un pool de sorties non dépensées
///
/// Le validateur possède sa propre copie du pool, prise à la construction :
/// le pool de l'appelant n'est jamais modifié. Seule l'admission d'un lot
/// ([`TransactionValidator::handle_batch`]) fait évoluer la copie interne ;
/// la validation d'une transaction isolée est une lecture pure.
#[derive(Debug, Clone)]
pub struct TransactionValidator {
    pool: UtxoPool,
}

impl TransactionValidator {
    /// Crée un validateur sur une copie défensive du pool donné
    pub fn new(pool: &UtxoPool) -> Self {
        Self { pool: pool.clone() }
    }

    /// Obtient l'état courant du pool interne
    pub fn pool(&self) -> &UtxoPool {
        &self.pool
    }

    /// Consomme le validateur et retourne son pool interne
    pub fn into_pool(self) -> UtxoPool {
        self.pool
    }

    /// Vérifie si une transaction est valide sur l'état courant du pool
    ///
    /// Une transaction est valide si, dans cet ordre :
    /// 1. chaque entrée référence une sortie présente dans le pool ;
    /// 2. aucune sortie n'est réclamée deux fois par la transaction ;
    /// 3. la signature de chaque entrée vérifie la forme canonique non
    ///    signée à son index, avec la clé enregistrée dans la sortie
    ///    réclamée ;
    /// 4. tous les montants de sortie sont positifs ou nuls ;
    /// 5. la somme des entrées couvre la somme des sorties (l'excédent est
    ///    le frais implicite).
    ///
    /// Un débordement arithmétique d'une des deux sommes rend la
    /// transaction invalide.
    pub fn is_valid(&self, tx: &Transaction) -> bool {
        let mut claimed: HashSet<&UtxoId> = HashSet::with_capacity(tx.inputs().len());
        let mut total_input: Amount = 0;

        for (index, input) in tx.inputs().iter().enumerate() {
            let Some(output) = self.pool.get(&input.utxo) else {
                return false;
            };
            if !claimed.insert(&input.utxo) {
                return false;
            }
            if !verify_signature(&tx.signing_bytes(index), &input.signature, &output.recipient) {
                return false;
            }
            let Some(sum) = total_input.checked_add(output.amount) else {
                return false;
            };
            total_input = sum;
        }

        let mut total_output: Amount = 0;
        for output in tx.outputs() {
            if output.amount < 0 {
                return false;
            }
            let Some(sum) = total_output.checked_add(output.amount) else {
                return false;
            };
            total_output = sum;
        }

        total_input >= total_output
    }

    /// Admet un lot de transactions candidates, mutuellement cohérentes
    ///
    /// Les transactions d'un lot peuvent dépendre les unes des autres : une
    /// transaction peut dépenser une sortie créée par une autre transaction
    /// du même lot. L'algorithme itère donc par passes jusqu'à point fixe :
    ///
    /// - une transaction dont certaines entrées sont absentes du pool est
    ///   reportée à la passe suivante (ses sources peuvent encore être
    ///   produites par une transaction non appliquée) ;
    /// - une transaction dont toutes les entrées sont présentes mais qui
    ///   échoue à la validation est rejetée définitivement ;
    /// - une transaction valide est appliquée au pool et ajoutée au
    ///   résultat.
    ///
    /// Une passe sans acceptation termine la boucle : les transactions
    /// restantes sont définitivement irrésolubles et exclues du résultat.
    /// Le résultat est ordonné par acceptation : l'ordre relatif d'origine
    /// est préservé au sein d'une passe, et les acceptations de la passe k
    /// précèdent toutes celles de la passe k+1.
    pub fn handle_batch(&mut self, batch: &[Transaction]) -> Vec<Transaction> {
        let mut pending: Vec<&Transaction> = batch.iter().collect();
        let mut accepted = Vec::new();
        let mut pass = 0usize;

        while !pending.is_empty() {
            pass += 1;
            let mut deferred = Vec::new();
            let mut progressed = false;

            for tx in pending {
                if !self.inputs_present(tx) {
                    trace!(tx_id = %tx.tx_id(), pass, "entrées non résolues, transaction reportée");
                    deferred.push(tx);
                } else if self.is_valid(tx) {
                    self.apply(tx);
                    accepted.push(tx.clone());
                    progressed = true;
                    debug!(tx_id = %tx.tx_id(), pass, "transaction acceptée");
                } else {
                    debug!(tx_id = %tx.tx_id(), pass, "transaction invalide, rejetée");
                }
            }

            if !progressed {
                break;
            }
            pending = deferred;
        }

        debug!(
            accepted = accepted.len(),
            submitted = batch.len(),
            passes = pass,
            "admission du lot terminée"
        );
        accepted
    }

    /// Vérifie si toutes les entrées d'une transaction sont présentes dans le pool
    fn inputs_present(&self, tx: &Transaction) -> bool {
        tx.inputs()
            .iter()
            .all(|input| self.pool.contains(&input.utxo))
    }

    /// Applique une transaction validée au pool interne
    fn apply(&mut self, tx: &Transaction) {
        for input in tx.inputs() {
            self.pool.remove(&input.utxo);
        }
        for (index, output) in tx.outputs().iter().enumerate() {
            self.pool
                .add(UtxoId::new(tx.tx_id().clone(), index as u32), output.clone());
        }
    }
}
