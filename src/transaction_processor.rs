use crate::signature::SignatureVerifier;
use crate::transaction::{OutputIndex, Transaction};
use crate::utxo_pool::{UtxoId, UtxoPool};
use crate::validation::TransactionValidator;

/// Processes batches of candidate transactions against the current UTXO pool.
///
/// The processor owns an independent copy of the pool it is constructed with,
/// so the caller's pool is never affected by processed batches. After each
/// batch the mutated pool is the authoritative state for the next one.
pub struct TransactionProcessor {
    utxo_pool: UtxoPool,
    verifier: Box<dyn SignatureVerifier>,
}

impl TransactionProcessor {
    pub fn new(utxo_pool: &UtxoPool, verifier: Box<dyn SignatureVerifier>) -> Self {
        Self {
            utxo_pool: utxo_pool.clone(),
            verifier,
        }
    }

    /// Selects a mutually valid subset of the candidates and applies its
    /// effects to the pool.
    ///
    /// Candidates are evaluated in the given order, each against the pool
    /// state left behind by the previously accepted ones: an accepted
    /// transaction makes its outputs spendable for the candidates after it,
    /// and a rejected candidate is dropped without being retried.
    ///
    /// Returns the accepted transactions in their original relative order.
    pub fn process(&mut self, candidates: &[Transaction]) -> Vec<Transaction> {
        let mut accepted = Vec::new();
        for candidate in candidates {
            if !TransactionValidator::is_valid(candidate, &self.utxo_pool, self.verifier.as_ref())
            {
                continue;
            }
            self.apply(candidate);
            accepted.push(candidate.clone());
        }
        accepted
    }

    pub fn utxo_pool(&self) -> &UtxoPool {
        &self.utxo_pool
    }

    // A transaction cannot claim its own outputs (they live under its own,
    // different transaction ID), so the insertion and removal order within a
    // single transaction does not matter.
    fn apply(&mut self, transaction: &Transaction) {
        for (index, output) in transaction.outputs().iter().enumerate() {
            let utxo_id = UtxoId::new(*transaction.id(), OutputIndex::new(index as u32));
            self.utxo_pool.insert(utxo_id, output.clone());
        }
        for input in transaction.inputs() {
            self.utxo_pool.remove(input.utxo_id());
        }
    }
}
