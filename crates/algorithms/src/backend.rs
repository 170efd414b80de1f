//! The default backend

use k1ecies_api::{Backend, RandomSource};

use crate::block::Aes256Cbc;
use crate::ec::K256;
use crate::hash::Sha512Hash;
use crate::mac::HmacSha256;
use crate::random::OsRandom;

/// Every primitive from the RustCrypto crates, with a pluggable random source
///
/// `RustCryptoBackend::default()` draws randomness from the operating
/// system. Use [`RustCryptoBackend::with_random`] to swap in another source,
/// e.g. a [`SeededRandom`](crate::SeededRandom) in tests.
#[derive(Clone, Debug, Default)]
pub struct RustCryptoBackend<R: RandomSource = OsRandom> {
    random: R,
    curve: K256,
    hash: Sha512Hash,
    cipher: Aes256Cbc,
    mac: HmacSha256,
}

impl RustCryptoBackend<OsRandom> {
    /// Backend using the OS random source
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: RandomSource> RustCryptoBackend<R> {
    /// Backend using `random` as its random source
    pub fn with_random(random: R) -> Self {
        Self {
            random,
            curve: K256,
            hash: Sha512Hash,
            cipher: Aes256Cbc,
            mac: HmacSha256,
        }
    }
}

impl<R: RandomSource> Backend for RustCryptoBackend<R> {
    type Random = R;
    type Curve = K256;
    type Hash = Sha512Hash;
    type Cipher = Aes256Cbc;
    type Mac = HmacSha256;

    fn random(&self) -> &R {
        &self.random
    }

    fn curve(&self) -> &K256 {
        &self.curve
    }

    fn hash(&self) -> &Sha512Hash {
        &self.hash
    }

    fn cipher(&self) -> &Aes256Cbc {
        &self.cipher
    }

    fn mac(&self) -> &HmacSha256 {
        &self.mac
    }
}
