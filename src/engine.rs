//! The synchronous engine

use k1ecies_algorithms::RustCryptoBackend;
use k1ecies_api::{
    Backend, CbcCipher, CompressedPublicKey, CurveEngine, HashFunction512, MacFunction, PrivateKey,
    PublicKey, Result, SharedSecret, Signature,
};
use k1ecies_pke::{EciesK256, EncryptOptions, Envelope};
use k1ecies_sign::{keys, EcdsaK256, Keypair};
use tracing::debug;

/// ECIES and ECDSA over secp256k1 on an injected backend
///
/// The engine holds no key material; every call takes the keys it needs.
/// Key arguments accept anything byte-like and are length-checked before
/// any cryptographic work, so a 31-byte private key or a public key without
/// the `0x04` prefix is rejected up front.
#[derive(Clone, Debug, Default)]
pub struct Ecies<B: Backend = RustCryptoBackend> {
    backend: B,
}

impl Ecies<RustCryptoBackend> {
    /// Engine on the default RustCrypto backend with OS randomness
    pub fn new() -> Self {
        Self::with_backend(RustCryptoBackend::new())
    }
}

impl<B: Backend> Ecies<B> {
    /// Engine on a caller-supplied backend
    pub fn with_backend(backend: B) -> Self {
        debug!(
            curve = backend.curve().name(),
            hash = backend.hash().name(),
            cipher = backend.cipher().name(),
            mac = backend.mac().name(),
            "ecies engine created"
        );
        Self { backend }
    }

    /// The backend this engine runs on
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Random private key accepted by the curve
    pub fn generate_private(&self) -> Result<PrivateKey> {
        keys::generate_private(&self.backend)
    }

    /// Random keypair
    pub fn generate_keypair(&self) -> Result<Keypair> {
        Keypair::generate(&self.backend)
    }

    /// Uncompressed 65-byte public key of a 32-byte private key
    pub fn get_public(&self, private_key: impl AsRef<[u8]>) -> Result<PublicKey> {
        let private_key = PrivateKey::from_slice(private_key.as_ref())?;
        keys::get_public(&self.backend, &private_key)
    }

    /// Compressed 33-byte public key of a 32-byte private key
    pub fn get_public_compressed(&self, private_key: impl AsRef<[u8]>) -> Result<CompressedPublicKey> {
        let private_key = PrivateKey::from_slice(private_key.as_ref())?;
        keys::get_public_compressed(&self.backend, &private_key)
    }

    /// Low-S DER ECDSA signature over a 1..=32 byte message
    pub fn sign(&self, private_key: impl AsRef<[u8]>, message: impl AsRef<[u8]>) -> Result<Signature> {
        let private_key = PrivateKey::from_slice(private_key.as_ref())?;
        EcdsaK256::sign(&self.backend, &private_key, message.as_ref())
    }

    /// Check a DER signature over a 1..=32 byte message
    ///
    /// A signature that parses but does not match is `Error::BadSignature`.
    pub fn verify(
        &self,
        public_key: impl AsRef<[u8]>,
        message: impl AsRef<[u8]>,
        signature: impl AsRef<[u8]>,
    ) -> Result<()> {
        let public_key = PublicKey::from_slice(public_key.as_ref())?;
        let signature = Signature::from_der(signature.as_ref());
        EcdsaK256::verify(&self.backend, &public_key, message.as_ref(), &signature)
    }

    /// ECDH shared X coordinate, leading zero bytes stripped
    pub fn derive(
        &self,
        private_key: impl AsRef<[u8]>,
        public_key: impl AsRef<[u8]>,
    ) -> Result<SharedSecret> {
        let private_key = PrivateKey::from_slice(private_key.as_ref())?;
        let public_key = PublicKey::from_slice(public_key.as_ref())?;
        EciesK256::derive(&self.backend, &private_key, &public_key)
    }

    /// Encrypt with a random ephemeral key and IV
    pub fn encrypt(&self, public_key_to: impl AsRef<[u8]>, message: impl AsRef<[u8]>) -> Result<Envelope> {
        self.encrypt_with(public_key_to, message, &EncryptOptions::default())
    }

    /// Encrypt with caller-controlled ephemeral key and/or IV
    pub fn encrypt_with(
        &self,
        public_key_to: impl AsRef<[u8]>,
        message: impl AsRef<[u8]>,
        options: &EncryptOptions,
    ) -> Result<Envelope> {
        let public_key_to = PublicKey::from_slice(public_key_to.as_ref())?;
        EciesK256::encrypt(&self.backend, &public_key_to, message.as_ref(), options)
    }

    /// Authenticate and decrypt an envelope
    pub fn decrypt(&self, private_key: impl AsRef<[u8]>, envelope: &Envelope) -> Result<Vec<u8>> {
        let private_key = PrivateKey::from_slice(private_key.as_ref())?;
        EciesK256::decrypt(&self.backend, &private_key, envelope)
    }
}
