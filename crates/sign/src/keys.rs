//! Key generation and public key derivation

use k1ecies_api::error::validate;
use k1ecies_api::{
    Backend, CompressedPublicKey, CurveEngine, Error, PrivateKey, PublicKey, RandomSource, Result,
};
use k1ecies_params::traditional::ecdh::SECP256K1_PRIVATE_KEY_SIZE;
use tracing::{debug, trace};
use zeroize::Zeroizing;

// Roughly 2^-128 of 32-byte strings are rejected, so only a broken random
// source ever gets near this
const MAX_KEYGEN_ATTEMPTS: usize = 64;

/// Draw a random private key the curve accepts
///
/// Candidates are 32 random bytes; zero and values not below the group
/// order are discarded and redrawn.
pub fn generate_private<B: Backend>(backend: &B) -> Result<PrivateKey> {
    backend.ensure_curve_available()?;
    let random = backend.random();
    validate::available(random.is_available(), random.name())?;

    for attempt in 1..=MAX_KEYGEN_ATTEMPTS {
        let mut candidate = Zeroizing::new([0u8; SECP256K1_PRIVATE_KEY_SIZE]);
        random.fill_bytes(candidate.as_mut())?;

        let key = PrivateKey::new(*candidate);
        if backend.curve().validate_private_key(&key).is_ok() {
            trace!(attempt, "generated private key");
            return Ok(key);
        }
        debug!(attempt, "random scalar rejected by the curve, redrawing");
    }

    Err(Error::RandomGenerationError {
        context: "private key generation",
        message: format!("no valid scalar after {} attempts", MAX_KEYGEN_ATTEMPTS),
    })
}

/// Uncompressed public key `0x04 || X || Y` for `key`
pub fn get_public<B: Backend>(backend: &B, key: &PrivateKey) -> Result<PublicKey> {
    backend.ensure_curve_available()?;
    backend.curve().public_key(key)
}

/// Compressed public key `0x02/0x03 || X` for `key`
pub fn get_public_compressed<B: Backend>(
    backend: &B,
    key: &PrivateKey,
) -> Result<CompressedPublicKey> {
    backend.ensure_curve_available()?;
    backend.curve().public_key_compressed(key)
}

/// A private key together with its uncompressed public key
#[derive(Clone, Debug)]
pub struct Keypair {
    private: PrivateKey,
    public: PublicKey,
}

impl Keypair {
    /// Generate a fresh keypair
    pub fn generate<B: Backend>(backend: &B) -> Result<Self> {
        let private = generate_private(backend)?;
        Self::from_private(backend, private)
    }

    /// Derive the public half of an existing private key
    pub fn from_private<B: Backend>(backend: &B, private: PrivateKey) -> Result<Self> {
        let public = get_public(backend, &private)?;
        Ok(Self { private, public })
    }

    /// The private key
    pub fn private_key(&self) -> &PrivateKey {
        &self.private
    }

    /// The uncompressed public key
    pub fn public_key(&self) -> &PublicKey {
        &self.public
    }

    /// Split into `(private, public)`
    pub fn into_parts(self) -> (PrivateKey, PublicKey) {
        (self.private, self.public)
    }
}
