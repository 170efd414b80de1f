//! Random sources

use std::sync::Mutex;

use k1ecies_api::{RandomSource, Result as ApiResult};
use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};

use crate::error::Error;

/// The operating system's CSPRNG
#[derive(Clone, Copy, Debug, Default)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn name(&self) -> &'static str {
        "OS random"
    }

    fn fill_bytes(&self, dest: &mut [u8]) -> ApiResult<()> {
        OsRng.try_fill_bytes(dest).map_err(|e| {
            Error::Random {
                source_name: "OS random",
                details: e.to_string(),
            }
            .into()
        })
    }
}

/// Wraps any `CryptoRng` so it can serve as a shared random source
///
/// Mostly useful with a seeded generator for reproducible runs.
#[derive(Debug)]
pub struct SeededRandom<R> {
    rng: Mutex<R>,
}

impl<R: RngCore + CryptoRng> SeededRandom<R> {
    /// Take ownership of `rng`
    pub fn new(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }
}

impl<R: RngCore + CryptoRng + Send> RandomSource for SeededRandom<R> {
    fn name(&self) -> &'static str {
        "seeded random"
    }

    fn fill_bytes(&self, dest: &mut [u8]) -> ApiResult<()> {
        let mut rng = self.rng.lock().map_err(|_| Error::Random {
            source_name: "seeded random",
            details: "generator lock poisoned".to_string(),
        })?;
        rng.try_fill_bytes(dest).map_err(|e| {
            Error::Random {
                source_name: "seeded random",
                details: e.to_string(),
            }
            .into()
        })
    }
}
