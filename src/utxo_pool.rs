use crate::transaction::{OutputIndex, TransactionId, TransactionOutput};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt::{Display, Formatter};

/// Identifies an unspent transaction output: the transaction that created it
/// and the position of the output within that transaction.
/// Equality and hashing are structural, so two IDs built from the same pair
/// always refer to the same output.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct UtxoId {
    transaction_id: TransactionId,
    output_index: OutputIndex,
}

impl UtxoId {
    pub const fn new(transaction_id: TransactionId, output_index: OutputIndex) -> Self {
        Self {
            transaction_id,
            output_index,
        }
    }

    pub fn transaction_id(&self) -> &TransactionId {
        &self.transaction_id
    }

    pub fn output_index(&self) -> &OutputIndex {
        &self.output_index
    }
}

impl Display for UtxoId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.transaction_id, self.output_index)
    }
}

/// A pool of confirmed and unspent transaction outputs.
/// Cloning the pool yields a fully independent copy: mutating either side
/// never affects the other.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UtxoPool {
    // Unspent transaction outputs, indexed by the transaction that created
    // them and their index in that transaction.
    utxos: HashMap<UtxoId, TransactionOutput>,
}

impl UtxoPool {
    pub fn new() -> Self {
        Self {
            utxos: HashMap::new(),
        }
    }

    pub fn contains(&self, utxo_id: &UtxoId) -> bool {
        self.utxos.contains_key(utxo_id)
    }

    /// Returns the output for the given UTXO ID.
    /// Callers are expected to check `contains` first; looking up an absent ID
    /// is an error local to this call.
    pub fn output(&self, utxo_id: &UtxoId) -> Result<&TransactionOutput, String> {
        self.utxos
            .get(utxo_id)
            .ok_or_else(|| format!("UTXO not found in the pool: {}", utxo_id))
    }

    /// Adds the output under the given ID, replacing any previous entry.
    pub fn insert(&mut self, utxo_id: UtxoId, output: TransactionOutput) {
        self.utxos.insert(utxo_id, output);
    }

    /// Removes the entry for the given ID. Removing an absent ID is a no-op.
    pub fn remove(&mut self, utxo_id: &UtxoId) {
        self.utxos.remove(utxo_id);
    }

    pub fn len(&self) -> usize {
        self.utxos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.utxos.is_empty()
    }
}
