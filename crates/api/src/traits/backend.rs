//! Bundles the primitive providers handed to the engine

use super::primitives::{CbcCipher, CurveEngine, HashFunction512, MacFunction, RandomSource};
use crate::error::{validate, Result};

/// A complete set of primitives
///
/// The engine holds a backend by value and borrows each provider per call.
/// Swapping the backend (an in-process implementation, a hardware-backed
/// one, a test double) does not change the engine's API.
pub trait Backend: Send + Sync {
    type Random: RandomSource;
    type Curve: CurveEngine;
    type Hash: HashFunction512;
    type Cipher: CbcCipher;
    type Mac: MacFunction;

    /// Secure random source
    fn random(&self) -> &Self::Random;

    /// secp256k1 engine
    fn curve(&self) -> &Self::Curve;

    /// 512-bit hash used by the KDF
    fn hash(&self) -> &Self::Hash;

    /// AES-256-CBC
    fn cipher(&self) -> &Self::Cipher;

    /// HMAC-SHA256
    fn mac(&self) -> &Self::Mac;

    /// Fail with `PrimitiveUnavailable` unless every provider the encrypt
    /// pipeline touches is usable
    fn ensure_encrypt_available(&self) -> Result<()> {
        validate::available(self.random().is_available(), self.random().name())?;
        self.ensure_decrypt_available()
    }

    /// Same as [`Backend::ensure_encrypt_available`] minus the random
    /// source, which decryption never draws from
    fn ensure_decrypt_available(&self) -> Result<()> {
        validate::available(self.curve().is_available(), self.curve().name())?;
        validate::available(self.hash().is_available(), self.hash().name())?;
        validate::available(self.cipher().is_available(), self.cipher().name())?;
        validate::available(self.mac().is_available(), self.mac().name())
    }

    /// Fail with `PrimitiveUnavailable` unless the curve engine is usable
    fn ensure_curve_available(&self) -> Result<()> {
        validate::available(self.curve().is_available(), self.curve().name())
    }
}
