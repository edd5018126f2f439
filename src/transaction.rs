use crate::hash::Sha256;
use crate::pennycoin::Pennycoin;
use crate::public_key_address::PublicKeyAddress;
use crate::signature::Signature;
use crate::utxo_pool::UtxoId;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A double SHA-256 hash of the transaction data.
#[derive(Debug, Hash, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct TransactionId(Sha256);

impl Display for TransactionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TransactionId {
    pub const fn new(data: Sha256) -> Self {
        Self(data)
    }

    pub fn as_slice(&self) -> &[u8] {
        self.0.as_slice()
    }
}

/// The index of the transaction output, the first one is 0.
#[derive(Debug, Hash, Eq, PartialEq, Copy, Clone, Serialize, Deserialize)]
pub struct OutputIndex(u32);

impl Display for OutputIndex {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl OutputIndex {
    pub const fn new(index: u32) -> Self {
        Self(index)
    }
}

/// A claim on an unspent transaction output, together with the signature
/// that authorizes spending it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionInput {
    // The unspent output this input spends.
    utxo_id: UtxoId,
    // Produced by the owner of the claimed output over the transaction's
    // signable content at this input's position.
    signature: Signature,
}

impl Display for TransactionInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.utxo_id)
    }
}

impl TransactionInput {
    pub fn new(utxo_id: UtxoId, signature: Signature) -> Self {
        Self { utxo_id, signature }
    }

    pub fn utxo_id(&self) -> &UtxoId {
        &self.utxo_id
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }
}

/// An amount of Pennycoin owned by an address. Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransactionOutput {
    amount: Pennycoin,
    recipient: PublicKeyAddress,
}

impl Display for TransactionOutput {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.amount, self.recipient)
    }
}

impl TransactionOutput {
    pub fn new(amount: Pennycoin, recipient: PublicKeyAddress) -> Self {
        Self { amount, recipient }
    }

    pub fn amount(&self) -> Pennycoin {
        self.amount
    }

    pub fn recipient(&self) -> &PublicKeyAddress {
        &self.recipient
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Transaction {
    id: TransactionId,
    inputs: Vec<TransactionInput>,
    outputs: Vec<TransactionOutput>,
}

impl Transaction {
    pub fn new(inputs: Vec<TransactionInput>, outputs: Vec<TransactionOutput>) -> Self {
        let id = Self::hash_transaction_data(&inputs, &outputs);
        Self {
            id,
            inputs,
            outputs,
        }
    }

    pub fn id(&self) -> &TransactionId {
        &self.id
    }

    pub fn inputs(&self) -> &Vec<TransactionInput> {
        &self.inputs
    }

    pub fn outputs(&self) -> &Vec<TransactionOutput> {
        &self.outputs
    }

    /// The exact bytes signed by the owner of the output claimed at `input_index`:
    /// the claimed UTXO ID followed by all outputs.
    /// Signature fields are excluded so the content is stable while signing.
    pub fn signable_content(&self, input_index: usize) -> Vec<u8> {
        let input = &self.inputs[input_index];
        format!("{}{}", input.utxo_id(), Self::join_outputs(&self.outputs)).into_bytes()
    }

    fn hash_transaction_data(
        inputs: &Vec<TransactionInput>,
        outputs: &Vec<TransactionOutput>,
    ) -> TransactionId {
        // Signature bytes are part of the hashed content, so the ID commits to
        // the fully signed transaction.
        let data = format!(
            "{}{}",
            inputs
                .iter()
                .map(|input| format!("{}:{}", input.utxo_id(), input.signature()))
                .collect::<Vec<String>>()
                .join(""),
            Self::join_outputs(outputs)
        );
        TransactionId::new(Sha256::double_digest(data.as_bytes()))
    }

    fn join_outputs(outputs: &Vec<TransactionOutput>) -> String {
        outputs
            .iter()
            .map(TransactionOutput::to_string)
            .collect::<Vec<String>>()
            .join("")
    }
}
