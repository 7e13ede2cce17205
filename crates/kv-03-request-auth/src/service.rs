//! # Request Authenticator
//!
//! Application service tying header parsing, canonical messages and the
//! signature verifier together. Every check completes before the caller is
//! handed an `AuthorizedRequest`, so storage is never reached on failure.

use kv_01_signature_verification::{EcdsaVerifier, SignatureVerificationApi};
use sha2::{Digest, Sha256};
use shared_types::{CompressedPoint, Hash};
use tracing::{debug, warn};

use crate::domain::errors::AuthError;
use crate::domain::header::{parse_header, AuthContext};
use crate::domain::operation::{Operation, OperationKind};

/// A request whose signature has been checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizedRequest {
    /// The caller's compressed public key.
    pub namespace: CompressedPoint,
    pub operation: Operation,
}

/// Request Authenticator.
///
/// Generic over the verifier so tests can substitute one.
#[derive(Debug, Clone, Default)]
pub struct RequestAuthenticator<V: SignatureVerificationApi = EcdsaVerifier> {
    verifier: V,
}

impl RequestAuthenticator<EcdsaVerifier> {
    /// Authenticator backed by secp256k1 ECDSA.
    pub fn ecdsa() -> Self {
        Self::new(EcdsaVerifier::new())
    }
}

impl<V: SignatureVerificationApi> RequestAuthenticator<V> {
    pub fn new(verifier: V) -> Self {
        Self { verifier }
    }

    /// Check the context's signature over SHA-256(`message`).
    pub fn check_signature(&self, context: &AuthContext, message: &[u8]) -> Result<(), AuthError> {
        let digest: Hash = Sha256::digest(message).into();
        if self
            .verifier
            .verify(&digest, &context.signature, &context.public_key)
        {
            Ok(())
        } else {
            Err(AuthError::SignatureMismatch)
        }
    }

    /// Parse, decode and verify a raw request for the given endpoint.
    pub fn authorize(
        &self,
        kind: OperationKind,
        request: &[u8],
    ) -> Result<AuthorizedRequest, AuthError> {
        let (context, body) = parse_header(request)?;
        let operation = Operation::decode(kind, body)?;

        if let Err(err) = self.check_signature(&context, &operation.canonical_message()) {
            warn!(
                operation = %kind,
                namespace = %context.namespace,
                "Signature rejected"
            );
            return Err(err);
        }

        debug!(operation = %kind, namespace = %context.namespace, "Request authorized");
        Ok(AuthorizedRequest {
            namespace: context.namespace,
            operation,
        })
    }
}
