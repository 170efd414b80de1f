//! Async facade over [`Ecies`]
//!
//! Every operation completes synchronously; the `async` signatures let
//! callers program against the same contract as backends that do real I/O
//! (hardware tokens, remote signers) without changing call sites.

use k1ecies_algorithms::RustCryptoBackend;
use k1ecies_api::{Backend, CompressedPublicKey, PrivateKey, PublicKey, Result, SharedSecret, Signature};
use k1ecies_pke::{EncryptOptions, Envelope};
use k1ecies_sign::Keypair;

use crate::engine::Ecies;

/// [`Ecies`] with `async fn` methods returning the same results
#[derive(Clone, Debug, Default)]
pub struct AsyncEcies<B: Backend = RustCryptoBackend> {
    inner: Ecies<B>,
}

impl AsyncEcies<RustCryptoBackend> {
    /// Async engine on the default backend
    pub fn new() -> Self {
        Self { inner: Ecies::new() }
    }
}

impl<B: Backend> AsyncEcies<B> {
    /// Async engine on a caller-supplied backend
    pub fn with_backend(backend: B) -> Self {
        Self {
            inner: Ecies::with_backend(backend),
        }
    }

    /// The synchronous engine underneath
    pub fn blocking(&self) -> &Ecies<B> {
        &self.inner
    }

    /// See [`Ecies::generate_private`]
    pub async fn generate_private(&self) -> Result<PrivateKey> {
        self.inner.generate_private()
    }

    /// See [`Ecies::generate_keypair`]
    pub async fn generate_keypair(&self) -> Result<Keypair> {
        self.inner.generate_keypair()
    }

    /// See [`Ecies::get_public`]
    pub async fn get_public(&self, private_key: impl AsRef<[u8]>) -> Result<PublicKey> {
        self.inner.get_public(private_key)
    }

    /// See [`Ecies::get_public_compressed`]
    pub async fn get_public_compressed(&self, private_key: impl AsRef<[u8]>) -> Result<CompressedPublicKey> {
        self.inner.get_public_compressed(private_key)
    }

    /// See [`Ecies::sign`]
    pub async fn sign(&self, private_key: impl AsRef<[u8]>, message: impl AsRef<[u8]>) -> Result<Signature> {
        self.inner.sign(private_key, message)
    }

    /// See [`Ecies::verify`]
    pub async fn verify(
        &self,
        public_key: impl AsRef<[u8]>,
        message: impl AsRef<[u8]>,
        signature: impl AsRef<[u8]>,
    ) -> Result<()> {
        self.inner.verify(public_key, message, signature)
    }

    /// See [`Ecies::derive`]
    pub async fn derive(
        &self,
        private_key: impl AsRef<[u8]>,
        public_key: impl AsRef<[u8]>,
    ) -> Result<SharedSecret> {
        self.inner.derive(private_key, public_key)
    }

    /// See [`Ecies::encrypt`]
    pub async fn encrypt(&self, public_key_to: impl AsRef<[u8]>, message: impl AsRef<[u8]>) -> Result<Envelope> {
        self.inner.encrypt(public_key_to, message)
    }

    /// See [`Ecies::encrypt_with`]
    pub async fn encrypt_with(
        &self,
        public_key_to: impl AsRef<[u8]>,
        message: impl AsRef<[u8]>,
        options: &EncryptOptions,
    ) -> Result<Envelope> {
        self.inner.encrypt_with(public_key_to, message, options)
    }

    /// See [`Ecies::decrypt`]
    pub async fn decrypt(&self, private_key: impl AsRef<[u8]>, envelope: &Envelope) -> Result<Vec<u8>> {
        self.inner.decrypt(private_key, envelope)
    }
}

impl<B: Backend> From<Ecies<B>> for AsyncEcies<B> {
    fn from(inner: Ecies<B>) -> Self {
        Self { inner }
    }
}
