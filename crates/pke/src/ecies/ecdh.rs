//! Key agreement

use k1ecies_api::{Backend, CurveEngine, PrivateKey, PublicKey, Result, SharedSecret};
use k1ecies_internal::endian::be_trim_leading_zeros;

/// X coordinate of `key * peer`, big-endian with leading zero bytes removed
///
/// The result is 1 to 32 bytes long and is hashed as-is by the KDF. It is
/// never padded back to 32 bytes, so roughly one agreement in 256 yields a
/// 31-byte secret.
pub fn derive<B: Backend>(backend: &B, key: &PrivateKey, peer: &PublicKey) -> Result<SharedSecret> {
    let x = backend.curve().diffie_hellman_x(key, peer)?;
    Ok(SharedSecret::new(be_trim_leading_zeros(&x[..])))
}
