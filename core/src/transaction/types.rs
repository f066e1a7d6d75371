//! Types de transactions pour LedgerChain

use serde::{Deserialize, Serialize};
use crate::crypto::{compute_blake3, sign_data, Hash, PrivateKey, PublicKey, Signature};
use crate::error::{Result, TransactionError};

/// Montant en unités atomiques
///
/// Le type est signé : un montant négatif est représentable dans une
/// transaction candidate, mais jamais valide.
pub type Amount = i64;

/// Identité d'une sortie non dépensée
///
/// Une sortie est nommée par le hash de la transaction qui l'a créée et par
/// son index dans la liste des sorties de cette transaction. L'égalité est
/// structurelle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UtxoId {
    /// Hash de la transaction source
    pub tx_hash: Hash,
    /// Index de la sortie dans la transaction source
    pub output_index: u32,
}

impl UtxoId {
    /// Crée une nouvelle identité de sortie
    pub fn new(tx_hash: Hash, output_index: u32) -> Self {
        Self {
            tx_hash,
            output_index,
        }
    }
}

/// Entrée d'une transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionInput {
    /// Sortie non dépensée réclamée par cette entrée
    pub utxo: UtxoId,
    /// Signature de la forme canonique non signée, à l'index de cette entrée
    pub signature: Signature,
}

/// Sortie d'une transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionOutput {
    /// Montant en unités atomiques
    pub amount: Amount,
    /// Clé publique du destinataire
    pub recipient: PublicKey,
}

impl TransactionOutput {
    /// Crée une nouvelle sortie
    pub fn new(amount: Amount, recipient: PublicKey) -> Self {
        Self { amount, recipient }
    }
}

/// Transaction complète
///
/// L'identité (`tx_id`) est dérivée des bytes canoniques de la transaction,
/// signatures comprises. Elle est calculée à la construction, avant que la
/// validité de la transaction ne soit connue : ce sont ces identités qui
/// nomment les nouvelles sorties dans le pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    tx_id: Hash,
    inputs: Vec<TransactionInput>,
    outputs: Vec<TransactionOutput>,
}

impl Transaction {
    /// Crée une transaction à partir d'entrées signées et de sorties
    pub fn new(inputs: Vec<TransactionInput>, outputs: Vec<TransactionOutput>) -> Self {
        let tx_id = compute_blake3(&canonical_bytes(&inputs, &outputs));
        Self {
            tx_id,
            inputs,
            outputs,
        }
    }

    /// Crée un builder vide
    pub fn builder() -> TransactionBuilder {
        TransactionBuilder::new()
    }

    /// Obtient le hash de la transaction
    pub fn tx_id(&self) -> &Hash {
        &self.tx_id
    }

    /// Obtient les entrées de la transaction
    pub fn inputs(&self) -> &[TransactionInput] {
        &self.inputs
    }

    /// Obtient les sorties de la transaction
    pub fn outputs(&self) -> &[TransactionOutput] {
        &self.outputs
    }

    /// Forme canonique non signée pour l'entrée `index`
    ///
    /// C'est le message signé par le propriétaire de la sortie réclamée par
    /// l'entrée `index`, et vérifié par le validateur. Toutes les signatures
    /// sont exclues ; l'index est lié au message pour qu'une signature ne
    /// puisse pas être rejouée sur une autre entrée.
    pub fn signing_bytes(&self, index: usize) -> Vec<u8> {
        signing_payload(self.inputs.iter().map(|input| &input.utxo), &self.outputs, index)
    }
}

/// Builder pour assembler et signer des transactions
///
/// Les entrées et sorties sont TOUTES déclarées d'abord, puis chaque entrée
/// est signée sur la forme canonique non signée complète. `build` échoue si
/// une entrée reste non signée.
#[derive(Debug, Default)]
pub struct TransactionBuilder {
    inputs: Vec<UtxoId>,
    signatures: Vec<Option<Signature>>,
    outputs: Vec<TransactionOutput>,
}

impl TransactionBuilder {
    /// Crée un nouveau builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute une entrée référençant une sortie non dépensée
    ///
    /// À appeler avant toute signature : la forme canonique signée inclut la
    /// liste complète des entrées, donc ajouter une entrée après coup
    /// invalide les signatures déjà posées.
    pub fn input(mut self, utxo: UtxoId) -> Self {
        self.inputs.push(utxo);
        self.signatures.push(None);
        self
    }

    /// Ajoute une sortie
    ///
    /// Même contrainte d'ordre que pour [`TransactionBuilder::input`] : les
    /// sorties font partie du message signé.
    pub fn output(mut self, amount: Amount, recipient: PublicKey) -> Self {
        self.outputs.push(TransactionOutput::new(amount, recipient));
        self
    }

    /// Forme canonique non signée pour l'entrée `index`
    ///
    /// Identique à [`Transaction::signing_bytes`] : la même fonction sert à
    /// la signature et à la vérification.
    pub fn signing_bytes(&self, index: usize) -> Result<Vec<u8>> {
        self.check_index(index)?;
        Ok(signing_payload(self.inputs.iter(), &self.outputs, index))
    }

    /// Signe l'entrée `index` avec une clé privée
    pub fn sign_input(mut self, index: usize, private_key: &PrivateKey) -> Result<Self> {
        let message = self.signing_bytes(index)?;
        self.signatures[index] = Some(sign_data(&message, private_key));
        Ok(self)
    }

    /// Attache une signature produite à l'extérieur pour l'entrée `index`
    pub fn attach_signature(mut self, index: usize, signature: Signature) -> Result<Self> {
        self.check_index(index)?;
        self.signatures[index] = Some(signature);
        Ok(self)
    }

    /// Finalise la transaction et calcule son identité
    pub fn build(self) -> Result<Transaction> {
        let mut inputs = Vec::with_capacity(self.inputs.len());
        for (index, (utxo, signature)) in
            self.inputs.into_iter().zip(self.signatures).enumerate()
        {
            let signature =
                signature.ok_or(TransactionError::UnsignedInput { index })?;
            inputs.push(TransactionInput { utxo, signature });
        }
        Ok(Transaction::new(inputs, self.outputs))
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.inputs.len() {
            return Err(TransactionError::InputIndexOutOfRange {
                index,
                len: self.inputs.len(),
            }
            .into());
        }
        Ok(())
    }
}

fn write_utxo(buffer: &mut Vec<u8>, utxo: &UtxoId) {
    buffer.extend_from_slice(utxo.tx_hash.as_bytes());
    buffer.extend_from_slice(&utxo.output_index.to_le_bytes());
}

fn write_output(buffer: &mut Vec<u8>, output: &TransactionOutput) {
    buffer.extend_from_slice(&output.amount.to_le_bytes());
    buffer.extend_from_slice(output.recipient.as_bytes());
}

/// Sérialisation déterministe de la forme non signée, liée à `index`
fn signing_payload<'a, I>(inputs: I, outputs: &[TransactionOutput], index: usize) -> Vec<u8>
where
    I: ExactSizeIterator<Item = &'a UtxoId>,
{
    let mut buffer = Vec::new();
    buffer.extend_from_slice(&(index as u64).to_le_bytes());

    buffer.extend_from_slice(&(inputs.len() as u32).to_le_bytes());
    for utxo in inputs {
        write_utxo(&mut buffer, utxo);
    }

    buffer.extend_from_slice(&(outputs.len() as u32).to_le_bytes());
    for output in outputs {
        write_output(&mut buffer, output);
    }

    buffer
}

/// Sérialisation déterministe de la transaction complète, signatures comprises
fn canonical_bytes(inputs: &[TransactionInput], outputs: &[TransactionOutput]) -> Vec<u8> {
    let mut buffer = Vec::new();

    buffer.extend_from_slice(&(inputs.len() as u32).to_le_bytes());
    for input in inputs {
        write_utxo(&mut buffer, &input.utxo);
        buffer.extend_from_slice(&input.signature.to_bytes());
    }

    buffer.extend_from_slice(&(outputs.len() as u32).to_le_bytes());
    for output in outputs {
        write_output(&mut buffer, output);
    }

    buffer
}
