pub mod hash;
pub mod pennycoin;
pub mod public_key_address;
pub mod signature;
pub mod transaction;
pub mod transaction_processor;
pub mod utxo_pool;
pub mod validation;

pub use self::{
    hash::*, pennycoin::*, public_key_address::*, signature::*, transaction::*,
    transaction_processor::*, utxo_pool::*, validation::*,
};
