//! secp256k1 curve engine backed by the `k256` crate
//!
//! Scalars are range-checked by `k256` when a secret key is constructed and
//! points are on-curve checked when decoded from SEC1. Signing uses RFC 6979
//! deterministic nonces and always returns the low-S form.

use ::k256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use ::k256::ecdsa::{SigningKey, VerifyingKey};
use ::k256::elliptic_curve::sec1::ToEncodedPoint;
use ::k256::{Secp256k1, SecretKey};
use k1ecies_api::{
    CompressedPublicKey, CurveEngine, PrivateKey, PublicKey, Result as ApiResult, Signature,
};
use k1ecies_params::traditional::ecdh::SECP256K1_FIELD_ELEMENT_SIZE;
use k1ecies_params::traditional::ecdsa::ECDSA_PREHASH_SIZE;
use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// DER-capable ECDSA signature over secp256k1
type EcdsaSignature = ecdsa::Signature<Secp256k1>;

const ALGORITHM: &str = "ECDSA-secp256k1";

/// The secp256k1 engine
#[derive(Clone, Copy, Debug, Default)]
pub struct K256;

impl K256 {
    fn secret_key(key: &PrivateKey) -> Result<SecretKey> {
        SecretKey::from_bytes(key.as_bytes().into()).map_err(|_| Error::Curve {
            context: "secp256k1 private key",
            details: "scalar is zero or not below the group order".to_string(),
        })
    }

    fn public_point(key: &PublicKey) -> Result<::k256::PublicKey> {
        ::k256::PublicKey::from_sec1_bytes(key.as_bytes()).map_err(|_| Error::Curve {
            context: "secp256k1 public key",
            details: "encoding is not a point on the curve".to_string(),
        })
    }

    fn parse_signature(signature: &Signature) -> Result<EcdsaSignature> {
        EcdsaSignature::from_der(signature.as_bytes()).map_err(|e| Error::Encoding {
            context: "secp256k1 verify",
            details: e.to_string(),
        })
    }
}

impl CurveEngine for K256 {
    fn name(&self) -> &'static str {
        "secp256k1"
    }

    fn validate_private_key(&self, key: &PrivateKey) -> ApiResult<()> {
        Self::secret_key(key)?;
        Ok(())
    }

    fn validate_public_key(&self, key: &PublicKey) -> ApiResult<()> {
        Self::public_point(key)?;
        Ok(())
    }

    fn public_key(&self, key: &PrivateKey) -> ApiResult<PublicKey> {
        let secret = Self::secret_key(key)?;
        let encoded = secret.public_key().to_encoded_point(false);
        PublicKey::from_slice(encoded.as_bytes())
    }

    fn public_key_compressed(&self, key: &PrivateKey) -> ApiResult<CompressedPublicKey> {
        let secret = Self::secret_key(key)?;
        let encoded = secret.public_key().to_encoded_point(true);
        CompressedPublicKey::from_slice(encoded.as_bytes())
    }

    fn diffie_hellman_x(
        &self,
        key: &PrivateKey,
        peer: &PublicKey,
    ) -> ApiResult<Zeroizing<[u8; SECP256K1_FIELD_ELEMENT_SIZE]>> {
        let secret = Self::secret_key(key)?;
        let peer = Self::public_point(peer)?;

        let shared = ::k256::ecdh::diffie_hellman(secret.to_nonzero_scalar(), peer.as_affine());
        let mut x = Zeroizing::new([0u8; SECP256K1_FIELD_ELEMENT_SIZE]);
        x.copy_from_slice(shared.raw_secret_bytes());
        Ok(x)
    }

    fn sign_prehash(&self, key: &PrivateKey, prehash: &[u8; ECDSA_PREHASH_SIZE]) -> ApiResult<Signature> {
        let signing_key = SigningKey::from(&Self::secret_key(key)?);
        let signature: EcdsaSignature =
            signing_key
                .sign_prehash(prehash)
                .map_err(|e| Error::Processing {
                    operation: "secp256k1 sign",
                    details: e.to_string(),
                })?;

        // k256 already emits low-S; normalize regardless of the signer
        let signature = signature.normalize_s().unwrap_or(signature);
        Ok(Signature::from_der(signature.to_der().as_bytes()))
    }

    fn verify_prehash(
        &self,
        key: &PublicKey,
        prehash: &[u8; ECDSA_PREHASH_SIZE],
        signature: &Signature,
    ) -> ApiResult<()> {
        let verifying_key = VerifyingKey::from_sec1_bytes(key.as_bytes()).map_err(|_| Error::Curve {
            context: "secp256k1 public key",
            details: "encoding is not a point on the curve".to_string(),
        })?;
        let signature = Self::parse_signature(signature)?;

        // High-S signatures are rejected here by k256
        verifying_key
            .verify_prehash(prehash, &signature)
            .map_err(|_| Error::Verification { algorithm: ALGORITHM }.into())
    }
}
