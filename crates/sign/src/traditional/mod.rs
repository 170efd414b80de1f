//! Traditional signature schemes

pub mod ecdsa;

pub use ecdsa::EcdsaK256;
