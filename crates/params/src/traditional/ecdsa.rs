//! Constants for ECDSA over secp256k1

/// Smallest message accepted for signing, in bytes
pub const ECDSA_MIN_MESSAGE_SIZE: usize = 1;

/// Largest message accepted for signing, in bytes.
///
/// Messages are digests; shorter input is read as a big-endian integer.
pub const ECDSA_MAX_MESSAGE_SIZE: usize = 32;

/// Size of the prehash handed to the curve engine
pub const ECDSA_PREHASH_SIZE: usize = 32;

/// Largest DER-encoded secp256k1 signature in bytes
pub const ECDSA_MAX_DER_SIGNATURE_SIZE: usize = 72;
