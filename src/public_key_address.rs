use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

const ADDRESS_BYTE_COUNT: usize = 32;

/// The public-key address that owns a transaction output.
/// The ledger never interprets the bytes; the signature verifier does.
#[derive(Debug, Copy, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct PublicKeyAddress([u8; ADDRESS_BYTE_COUNT]);

impl PublicKeyAddress {
    pub const fn from_raw(raw_bytes: [u8; ADDRESS_BYTE_COUNT]) -> Self {
        Self(raw_bytes)
    }

    pub fn as_raw(&self) -> &[u8; ADDRESS_BYTE_COUNT] {
        &self.0
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0[..]
    }

    pub fn to_hex(&self) -> String {
        hex::encode(self.as_slice())
    }
}

impl Display for PublicKeyAddress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn displays_as_hex() {
        let address = PublicKeyAddress::from_raw([0xab; 32]);
        assert_eq!(address.to_string(), "ab".repeat(32));
    }
}
