//! HMAC-SHA256 provider backed by the `hmac` crate
//!
//! RFC 2104 / FIPS 198-1. Tag verification goes through `verify_slice`,
//! which compares in constant time.

use ::hmac::{Hmac, Mac};
use ::sha2::Sha256;
use k1ecies_api::{MacFunction, MacTag, Result as ApiResult};
use k1ecies_params::traditional::ecies::ECIES_MAC_KEY_SIZE;

use crate::error::{Error, Result};

type HmacSha256Impl = Hmac<Sha256>;

const ALGORITHM: &str = "HMAC-SHA256";

/// HMAC over SHA-256
#[derive(Clone, Copy, Debug, Default)]
pub struct HmacSha256;

impl HmacSha256 {
    fn keyed(key: &[u8; ECIES_MAC_KEY_SIZE], data: &[u8]) -> Result<HmacSha256Impl> {
        let mut mac = <HmacSha256Impl as Mac>::new_from_slice(key)
            .map_err(|_| Error::KeyLength { algorithm: ALGORITHM })?;
        mac.update(data);
        Ok(mac)
    }
}

impl MacFunction for HmacSha256 {
    fn name(&self) -> &'static str {
        ALGORITHM
    }

    fn sign(&self, key: &[u8; ECIES_MAC_KEY_SIZE], data: &[u8]) -> ApiResult<MacTag> {
        let tag = Self::keyed(key, data)?.finalize().into_bytes();
        Ok(MacTag::from_slice(&tag)?)
    }

    fn verify(&self, key: &[u8; ECIES_MAC_KEY_SIZE], data: &[u8], tag: &MacTag) -> ApiResult<()> {
        Self::keyed(key, data)?
            .verify_slice(tag.as_bytes())
            .map_err(|_| Error::MacMismatch { algorithm: ALGORITHM }.into())
    }
}
