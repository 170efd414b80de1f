//! ECDSA over secp256k1

pub mod common;
pub mod k256;

pub use self::k256::EcdsaK256;
