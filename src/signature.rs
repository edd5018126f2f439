use crate::public_key_address::PublicKeyAddress;
use ed25519_dalek::Verifier;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Opaque signature bytes attached to a transaction input.
/// The ledger carries them as data; only a `SignatureVerifier` interprets them.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Signature(Vec<u8>);

impl Signature {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.0[..]
    }
}

impl Display for Signature {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", hex::encode(self.as_slice()))
    }
}

/// The capability to check that a signature over the given message was produced
/// by the holder of the key behind the given address.
pub trait SignatureVerifier {
    fn verify(&self, address: &PublicKeyAddress, message: &[u8], signature: &Signature) -> bool;
}

/// Verifies Ed25519 signatures, treating the address bytes as the verifying key.
/// Malformed key or signature bytes fail verification rather than error.
pub struct Ed25519SignatureVerifier;

impl SignatureVerifier for Ed25519SignatureVerifier {
    fn verify(&self, address: &PublicKeyAddress, message: &[u8], signature: &Signature) -> bool {
        let verifying_key = match ed25519_dalek::VerifyingKey::from_bytes(address.as_raw()) {
            Ok(verifying_key) => verifying_key,
            Err(_) => return false,
        };
        let signature = match ed25519_dalek::Signature::from_slice(signature.as_slice()) {
            Ok(signature) => signature,
            Err(_) => return false,
        };
        verifying_key.verify(message, &signature).is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::{Signer, SigningKey};

    fn key_pair(seed: u8) -> (SigningKey, PublicKeyAddress) {
        let signing_key = SigningKey::from_bytes(&[seed; 32]);
        let address = PublicKeyAddress::from_raw(signing_key.verifying_key().to_bytes());
        (signing_key, address)
    }

    fn sign(signing_key: &SigningKey, message: &[u8]) -> Signature {
        Signature::new(signing_key.sign(message).to_bytes().to_vec())
    }

    #[test]
    fn verifies_a_valid_signature() {
        let (signing_key, address) = key_pair(1);
        let message = b"pay 10 to bob";
        let signature = sign(&signing_key, message);
        assert!(Ed25519SignatureVerifier.verify(&address, message, &signature));
    }

    #[test]
    fn rejects_a_different_message() {
        let (signing_key, address) = key_pair(1);
        let signature = sign(&signing_key, b"pay 10 to bob");
        assert!(!Ed25519SignatureVerifier.verify(&address, b"pay 99 to bob", &signature));
    }

    #[test]
    fn rejects_a_different_signer() {
        let (signing_key, _) = key_pair(1);
        let (_, other_address) = key_pair(2);
        let message = b"pay 10 to bob";
        let signature = sign(&signing_key, message);
        assert!(!Ed25519SignatureVerifier.verify(&other_address, message, &signature));
    }

    #[test]
    fn rejects_malformed_signature_bytes() {
        let (_, address) = key_pair(1);
        let signature = Signature::new(vec![0xab; 7]);
        assert!(!Ed25519SignatureVerifier.verify(&address, b"pay 10 to bob", &signature));
    }

    #[test]
    fn rejects_malformed_address_bytes() {
        let (signing_key, _) = key_pair(1);
        let message = b"pay 10 to bob";
        let signature = sign(&signing_key, message);
        let garbage_address = PublicKeyAddress::from_raw([0xff; 32]);
        assert!(!Ed25519SignatureVerifier.verify(&garbage_address, message, &signature));
    }
}
