//! Backend doubles for exercising the failure paths

use k1ecies::api::{
    Backend, CbcCipher, CompressedPublicKey, CurveEngine, Error, HashFunction512, Iv, MacFunction,
    MacTag, PrivateKey, PublicKey, RandomSource, Result, Signature,
};
use k1ecies_algorithms::{Aes256Cbc, HmacSha256, OsRandom, Sha512Hash, K256};
use zeroize::Zeroizing;

/// Which provider a [`TestBackend`] should report as missing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Primitive {
    Random,
    Curve,
    Hash,
    Cipher,
    Mac,
}

/// Wraps a provider and lets a test switch its availability off
#[derive(Clone, Debug)]
pub struct Switchable<P> {
    inner: P,
    available: bool,
}

impl<P> Switchable<P> {
    fn new(inner: P) -> Self {
        Self {
            inner,
            available: true,
        }
    }
}

impl<P: RandomSource> RandomSource for Switchable<P> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        self.inner.fill_bytes(dest)
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

impl<P: CurveEngine> CurveEngine for Switchable<P> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn validate_private_key(&self, key: &PrivateKey) -> Result<()> {
        self.inner.validate_private_key(key)
    }

    fn validate_public_key(&self, key: &PublicKey) -> Result<()> {
        self.inner.validate_public_key(key)
    }

    fn public_key(&self, key: &PrivateKey) -> Result<PublicKey> {
        self.inner.public_key(key)
    }

    fn public_key_compressed(&self, key: &PrivateKey) -> Result<CompressedPublicKey> {
        self.inner.public_key_compressed(key)
    }

    fn diffie_hellman_x(&self, key: &PrivateKey, peer: &PublicKey) -> Result<Zeroizing<[u8; 32]>> {
        self.inner.diffie_hellman_x(key, peer)
    }

    fn sign_prehash(&self, key: &PrivateKey, prehash: &[u8; 32]) -> Result<Signature> {
        self.inner.sign_prehash(key, prehash)
    }

    fn verify_prehash(&self, key: &PublicKey, prehash: &[u8; 32], signature: &Signature) -> Result<()> {
        self.inner.verify_prehash(key, prehash, signature)
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

impl<P: HashFunction512> HashFunction512 for Switchable<P> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn digest(&self, data: &[u8]) -> Result<Zeroizing<[u8; 64]>> {
        self.inner.digest(data)
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

impl<P: CbcCipher> CbcCipher for Switchable<P> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn encrypt(&self, key: &[u8; 32], iv: &Iv, plaintext: &[u8]) -> Result<Vec<u8>> {
        self.inner.encrypt(key, iv, plaintext)
    }

    fn decrypt(&self, key: &[u8; 32], iv: &Iv, ciphertext: &[u8]) -> Result<Vec<u8>> {
        self.inner.decrypt(key, iv, ciphertext)
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

impl<P: MacFunction> MacFunction for Switchable<P> {
    fn name(&self) -> &'static str {
        self.inner.name()
    }

    fn sign(&self, key: &[u8; 32], data: &[u8]) -> Result<MacTag> {
        self.inner.sign(key, data)
    }

    fn verify(&self, key: &[u8; 32], data: &[u8], tag: &MacTag) -> Result<()> {
        self.inner.verify(key, data, tag)
    }

    fn is_available(&self) -> bool {
        self.available
    }
}

/// The default primitives, each of which can be reported missing
#[derive(Clone, Debug)]
pub struct TestBackend<R: RandomSource = OsRandom> {
    random: Switchable<R>,
    curve: Switchable<K256>,
    hash: Switchable<Sha512Hash>,
    cipher: Switchable<Aes256Cbc>,
    mac: Switchable<HmacSha256>,
}

impl TestBackend<OsRandom> {
    /// Everything available, OS randomness
    pub fn new() -> Self {
        Self::with_random(OsRandom)
    }
}

impl Default for TestBackend<OsRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RandomSource> TestBackend<R> {
    /// Everything available, randomness from `random`
    pub fn with_random(random: R) -> Self {
        Self {
            random: Switchable::new(random),
            curve: Switchable::new(K256),
            hash: Switchable::new(Sha512Hash),
            cipher: Switchable::new(Aes256Cbc),
            mac: Switchable::new(HmacSha256),
        }
    }

    /// Report `primitive` as unavailable
    pub fn without(mut self, primitive: Primitive) -> Self {
        match primitive {
            Primitive::Random => self.random.available = false,
            Primitive::Curve => self.curve.available = false,
            Primitive::Hash => self.hash.available = false,
            Primitive::Cipher => self.cipher.available = false,
            Primitive::Mac => self.mac.available = false,
        }
        self
    }
}

impl<R: RandomSource> Backend for TestBackend<R> {
    type Random = Switchable<R>;
    type Curve = Switchable<K256>;
    type Hash = Switchable<Sha512Hash>;
    type Cipher = Switchable<Aes256Cbc>;
    type Mac = Switchable<HmacSha256>;

    fn random(&self) -> &Self::Random {
        &self.random
    }

    fn curve(&self) -> &Self::Curve {
        &self.curve
    }

    fn hash(&self) -> &Self::Hash {
        &self.hash
    }

    fn cipher(&self) -> &Self::Cipher {
        &self.cipher
    }

    fn mac(&self) -> &Self::Mac {
        &self.mac
    }
}

/// A random source that always fails
#[derive(Clone, Copy, Debug, Default)]
pub struct FailingRandom;

impl RandomSource for FailingRandom {
    fn name(&self) -> &'static str {
        "failing random"
    }

    fn fill_bytes(&self, _dest: &mut [u8]) -> Result<()> {
        Err(Error::RandomGenerationError {
            context: "failing random",
            message: "entropy source offline".to_string(),
        })
    }
}

/// A random source that only ever produces zero bytes
///
/// Zero is not a valid secp256k1 scalar, so key generation never succeeds.
#[derive(Clone, Copy, Debug, Default)]
pub struct ZeroRandom;

impl RandomSource for ZeroRandom {
    fn name(&self) -> &'static str {
        "zero random"
    }

    fn fill_bytes(&self, dest: &mut [u8]) -> Result<()> {
        dest.fill(0);
        Ok(())
    }
}
