//! SHA-512 provider backed by the `sha2` crate

use ::sha2::{Digest, Sha512};
use k1ecies_api::{HashFunction512, Result as ApiResult};
use k1ecies_params::utils::hash::SHA512_OUTPUT_SIZE;
use zeroize::Zeroizing;

/// SHA-512 (FIPS 180-4)
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha512Hash;

impl HashFunction512 for Sha512Hash {
    fn name(&self) -> &'static str {
        "SHA-512"
    }

    fn digest(&self, data: &[u8]) -> ApiResult<Zeroizing<[u8; SHA512_OUTPUT_SIZE]>> {
        let mut out = Zeroizing::new([0u8; SHA512_OUTPUT_SIZE]);
        out.copy_from_slice(&Sha512::digest(data));
        Ok(out)
    }
}
