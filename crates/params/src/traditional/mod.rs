//! Constants for secp256k1 key agreement, signatures and ECIES

pub mod ecdh;
pub mod ecdsa;
pub mod ecies;
