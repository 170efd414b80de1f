//! Traits for the primitive capabilities the engine composes

use k1ecies_params::traditional::ecdh::SECP256K1_FIELD_ELEMENT_SIZE;
use k1ecies_params::traditional::ecdsa::ECDSA_PREHASH_SIZE;
use k1ecies_params::traditional::ecies::{ECIES_ENCRYPTION_KEY_SIZE, ECIES_MAC_KEY_SIZE};
use k1ecies_params::utils::hash::SHA512_OUTPUT_SIZE;
use zeroize::Zeroizing;

use crate::error::Result;
use crate::types::{CompressedPublicKey, Iv, MacTag, PrivateKey, PublicKey, Signature};

/// Cryptographically secure random bytes
pub trait RandomSource: Send + Sync {
    /// Human-readable name used in error reports
    fn name(&self) -> &'static str;

    /// Fill `dest` with uniformly random bytes
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()>;

    /// Whether the source can be used in this environment
    fn is_available(&self) -> bool {
        true
    }
}

/// secp256k1 operations
///
/// Implementations own range checks on scalars and on-curve checks on
/// points; failures surface as `Error::InvalidKey`.
pub trait CurveEngine: Send + Sync {
    /// Human-readable name used in error reports
    fn name(&self) -> &'static str;

    /// Reject scalars that are zero or not below the group order
    fn validate_private_key(&self, key: &PrivateKey) -> Result<()>;

    /// Reject encodings that do not decode to a point on the curve
    fn validate_public_key(&self, key: &PublicKey) -> Result<()>;

    /// `key * G`, uncompressed
    fn public_key(&self, key: &PrivateKey) -> Result<PublicKey>;

    /// `key * G`, compressed
    fn public_key_compressed(&self, key: &PrivateKey) -> Result<CompressedPublicKey>;

    /// X-coordinate of `key * peer`, fixed width big-endian
    fn diffie_hellman_x(
        &self,
        key: &PrivateKey,
        peer: &PublicKey,
    ) -> Result<Zeroizing<[u8; SECP256K1_FIELD_ELEMENT_SIZE]>>;

    /// ECDSA over a 32-byte prehash, low-S normalized and DER-encoded
    fn sign_prehash(&self, key: &PrivateKey, prehash: &[u8; ECDSA_PREHASH_SIZE]) -> Result<Signature>;

    /// ECDSA verification over a 32-byte prehash
    ///
    /// Unparseable signatures fail with `Error::InvalidInput`; a signature
    /// that parses but does not match fails with `Error::BadSignature`.
    fn verify_prehash(
        &self,
        key: &PublicKey,
        prehash: &[u8; ECDSA_PREHASH_SIZE],
        signature: &Signature,
    ) -> Result<()>;

    /// Whether the engine can be used in this environment
    fn is_available(&self) -> bool {
        true
    }
}

/// One-shot hash with a 512-bit output
pub trait HashFunction512: Send + Sync {
    /// Human-readable name used in error reports
    fn name(&self) -> &'static str;

    /// Hash `data`
    fn digest(&self, data: &[u8]) -> Result<Zeroizing<[u8; SHA512_OUTPUT_SIZE]>>;

    /// Whether the hash can be used in this environment
    fn is_available(&self) -> bool {
        true
    }
}

/// AES-256 in CBC mode with PKCS#7 padding
pub trait CbcCipher: Send + Sync {
    /// Human-readable name used in error reports
    fn name(&self) -> &'static str;

    /// Encrypt and pad `plaintext`
    fn encrypt(
        &self,
        key: &[u8; ECIES_ENCRYPTION_KEY_SIZE],
        iv: &Iv,
        plaintext: &[u8],
    ) -> Result<Vec<u8>>;

    /// Decrypt and unpad `ciphertext`; bad padding is `Error::DecryptionFailed`
    fn decrypt(
        &self,
        key: &[u8; ECIES_ENCRYPTION_KEY_SIZE],
        iv: &Iv,
        ciphertext: &[u8],
    ) -> Result<Vec<u8>>;

    /// Whether the cipher can be used in this environment
    fn is_available(&self) -> bool {
        true
    }
}

/// Keyed MAC with a 256-bit output
pub trait MacFunction: Send + Sync {
    /// Human-readable name used in error reports
    fn name(&self) -> &'static str;

    /// Produce the tag over `data`
    fn sign(&self, key: &[u8; ECIES_MAC_KEY_SIZE], data: &[u8]) -> Result<MacTag>;

    /// Constant-time check of `tag`; a mismatch is `Error::BadMac`
    fn verify(&self, key: &[u8; ECIES_MAC_KEY_SIZE], data: &[u8], tag: &MacTag) -> Result<()>;

    /// Whether the MAC can be used in this environment
    fn is_available(&self) -> bool {
        true
    }
}
