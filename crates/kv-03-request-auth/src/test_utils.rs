//! Signing helpers for tests.
//!
//! Enabled for this crate's own tests and, through the `test-utils` feature,
//! for downstream crates that need to build signed requests.

use k256::ecdsa::SigningKey;
use k256::elliptic_curve::sec1::ToEncodedPoint;
use kv_01_signature_verification::EcdsaSignature;
use sha2::{Digest, Sha256};
use shared_types::CompressedPoint;

use crate::domain::header::encode_header;
use crate::domain::operation::Operation;

/// A caller identity that can sign requests.
pub struct TestSigner {
    signing_key: SigningKey,
}

impl TestSigner {
    /// Fresh random identity.
    pub fn random() -> Self {
        Self {
            signing_key: SigningKey::random(&mut rand::thread_rng()),
        }
    }

    /// This signer's namespace (compressed public key).
    pub fn namespace(&self) -> CompressedPoint {
        let encoded = self.signing_key.verifying_key().as_affine().to_encoded_point(true);
        CompressedPoint::from_slice(encoded.as_bytes()).expect("compressed point is 33 bytes")
    }

    /// Sign SHA-256(`message`).
    pub fn sign_message(&self, message: &[u8]) -> EcdsaSignature {
        let digest = Sha256::digest(message);
        let (signature, _) = self
            .signing_key
            .sign_prehash_recoverable(&digest)
            .expect("signing a 32-byte digest succeeds");
        let bytes: [u8; 64] = signature
            .to_bytes()
            .as_slice()
            .try_into()
            .expect("signature is 64 bytes");
        EcdsaSignature::from_bytes(&bytes)
    }

    /// Full request body (header + operation body) for `operation`.
    pub fn request(&self, operation: &Operation) -> Vec<u8> {
        let signature = self.sign_message(&operation.canonical_message());
        let mut request = encode_header(&signature, &self.namespace());
        request.extend_from_slice(&operation.encode_body());
        request
    }

    pub fn put_request(&self, key: &[u8], value: &[u8]) -> Vec<u8> {
        let operation = Operation::put(key.to_vec(), value.to_vec()).expect("put fields fit u16");
        self.request(&operation)
    }

    pub fn get_all_request(&self) -> Vec<u8> {
        self.request(&Operation::GetAll)
    }

    pub fn clear_request(&self) -> Vec<u8> {
        self.request(&Operation::Clear)
    }
}
