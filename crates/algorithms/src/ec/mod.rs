//! Elliptic curve providers
//!
//! Only secp256k1 is needed: the engine derives public keys, runs ECDH and
//! signs with ECDSA on that curve alone.

pub mod k256;

pub use self::k256::K256;
