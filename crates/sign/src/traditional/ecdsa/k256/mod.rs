//! ECDSA over secp256k1
//!
//! Nonces are deterministic (RFC 6979) and signatures are emitted in DER
//! with `s` normalized to the lower half of the group order, as required by
//! Bitcoin-style verifiers. Verification rejects high-S signatures.

use k1ecies_api::{Backend, CurveEngine, PrivateKey, PublicKey, Result, Signature};
use tracing::trace;

use super::common::message_prehash;

/// ECDSA signature scheme over secp256k1
pub struct EcdsaK256;

impl EcdsaK256 {
    /// Sign a 1..=32 byte message
    ///
    /// The message is treated as an already-hashed digest; it is not hashed
    /// again.
    pub fn sign<B: Backend>(backend: &B, key: &PrivateKey, message: &[u8]) -> Result<Signature> {
        let prehash = message_prehash(message)?;
        backend.ensure_curve_available()?;
        trace!(message_len = message.len(), "ecdsa sign");
        backend.curve().sign_prehash(key, &prehash)
    }

    /// Verify `signature` over a 1..=32 byte message
    ///
    /// Fails with `Error::BadSignature` when the signature is well-formed but
    /// does not match, and with an invalid input error when it is not DER.
    pub fn verify<B: Backend>(
        backend: &B,
        key: &PublicKey,
        message: &[u8],
        signature: &Signature,
    ) -> Result<()> {
        let prehash = message_prehash(message)?;
        backend.ensure_curve_available()?;
        trace!(
            message_len = message.len(),
            signature_len = signature.as_bytes().len(),
            "ecdsa verify"
        );
        backend.curve().verify_prehash(key, &prehash, signature)
    }
}
