//! Constants for Elliptic Curve Diffie-Hellman on secp256k1

/// Size of a secp256k1 private scalar in bytes
pub const SECP256K1_PRIVATE_KEY_SIZE: usize = 32;

/// Size of a field element (one affine coordinate) in bytes
pub const SECP256K1_FIELD_ELEMENT_SIZE: usize = 32;

/// Size of an uncompressed public key: prefix || X || Y
pub const SECP256K1_PUBLIC_KEY_SIZE: usize = 65;

/// Size of a compressed public key: prefix || X
pub const SECP256K1_COMPRESSED_PUBLIC_KEY_SIZE: usize = 33;

/// SEC1 prefix byte of an uncompressed point
pub const SECP256K1_UNCOMPRESSED_PREFIX: u8 = 0x04;

/// Upper bound on the ECDH shared secret length.
///
/// The X-coordinate is returned without left padding, so the actual length
/// can be shorter.
pub const ECDH_SECP256K1_MAX_SHARED_SECRET_SIZE: usize = SECP256K1_FIELD_ELEMENT_SIZE;
