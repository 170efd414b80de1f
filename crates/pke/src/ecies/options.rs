//! Per-call encryption options

use k1ecies_api::{Iv, PrivateKey};

/// Overrides for the random parts of encryption
///
/// Both default to fresh randomness. Fixing them makes encryption
/// deterministic, which is only appropriate for tests and known-answer
/// vectors: reusing an ephemeral key across messages leaks the relation
/// between them.
#[derive(Clone, Debug, Default)]
pub struct EncryptOptions {
    ephem_private_key: Option<PrivateKey>,
    iv: Option<Iv>,
}

impl EncryptOptions {
    /// Random ephemeral key and IV
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `key` instead of a random ephemeral private key
    pub fn with_ephem_private_key(mut self, key: PrivateKey) -> Self {
        self.ephem_private_key = Some(key);
        self
    }

    /// Use `iv` instead of a random IV
    pub fn with_iv(mut self, iv: Iv) -> Self {
        self.iv = Some(iv);
        self
    }

    /// The caller-supplied ephemeral private key, if any
    pub fn ephem_private_key(&self) -> Option<&PrivateKey> {
        self.ephem_private_key.as_ref()
    }

    /// The caller-supplied IV, if any
    pub fn iv(&self) -> Option<&Iv> {
        self.iv.as_ref()
    }
}
