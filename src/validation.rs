use crate::pennycoin::Pennycoin;
use crate::signature::SignatureVerifier;
use crate::transaction::Transaction;
use crate::utxo_pool::{UtxoId, UtxoPool};
use std::collections::HashSet;

// Responsible for deciding whether a single transaction can be applied to the
// current UTXO pool. The checks never mutate the pool, so the same transaction
// always gets the same verdict against the same pool state.
pub struct TransactionValidator {}

impl TransactionValidator {
    /// Returns true iff the transaction satisfies all validation rules.
    /// A rule failure is a verdict, not an error: a rejected transaction must
    /// not abort processing of the remaining candidates in a batch.
    pub fn is_valid(
        transaction: &Transaction,
        utxo_pool: &UtxoPool,
        verifier: &dyn SignatureVerifier,
    ) -> bool {
        Self::validate(transaction, utxo_pool, verifier).is_ok()
    }

    /// Checks that:
    ///   - every output amount is non-negative,
    ///   - every input claims an output that exists in the pool,
    ///   - every input signature verifies against the owner of the claimed output,
    ///   - no unspent output is claimed more than once,
    ///   - the total claimed input value covers the total output value.
    pub fn validate(
        transaction: &Transaction,
        utxo_pool: &UtxoPool,
        verifier: &dyn SignatureVerifier,
    ) -> Result<(), String> {
        let total_output = Self::validate_output_amounts(transaction)?;
        let total_input = Self::validate_inputs(transaction, utxo_pool, verifier)?;
        Self::validate_conservation(transaction, total_input, total_output)
    }

    fn validate_output_amounts(transaction: &Transaction) -> Result<Pennycoin, String> {
        let mut total = Pennycoin::zero();
        for (index, output) in transaction.outputs().iter().enumerate() {
            if output.amount().is_negative() {
                return Err(format!(
                    "Transaction: {} output: {} has a negative amount: {}",
                    transaction.id(),
                    index,
                    output.amount()
                ));
            }
            total = total + output.amount();
        }
        Ok(total)
    }

    // An absent or unauthorized claim must never contribute to the input sum,
    // so each input passes the existence and signature checks before its
    // amount is accumulated.
    fn validate_inputs(
        transaction: &Transaction,
        utxo_pool: &UtxoPool,
        verifier: &dyn SignatureVerifier,
    ) -> Result<Pennycoin, String> {
        let mut total = Pennycoin::zero();
        let mut claimed = HashSet::new();
        for (index, input) in transaction.inputs().iter().enumerate() {
            let utxo_id: &UtxoId = input.utxo_id();
            if !utxo_pool.contains(utxo_id) {
                return Err(format!(
                    "Transaction: {} input: {} claims an unknown UTXO: {}",
                    transaction.id(),
                    index,
                    utxo_id
                ));
            }
            let claimed_output = utxo_pool.output(utxo_id)?;
            if !verifier.verify(
                claimed_output.recipient(),
                &transaction.signable_content(index),
                input.signature(),
            ) {
                return Err(format!(
                    "Transaction: {} input: {} has an invalid signature for UTXO: {}",
                    transaction.id(),
                    index,
                    utxo_id
                ));
            }
            if !claimed.insert(*utxo_id) {
                return Err(format!(
                    "Transaction: {} claims UTXO: {} more than once",
                    transaction.id(),
                    utxo_id
                ));
            }
            total = total + claimed_output.amount();
        }
        Ok(total)
    }

    fn validate_conservation(
        transaction: &Transaction,
        total_input: Pennycoin,
        total_output: Pennycoin,
    ) -> Result<(), String> {
        if total_input < total_output {
            Err(format!(
                "Transaction: {} creates value: total input: {} is less than total output: {}",
                transaction.id(),
                total_input,
                total_output
            ))
        } else {
            // Any excess input value is an implicit fee that the ledger does
            // not track or redistribute.
            Ok(())
        }
    }
}
