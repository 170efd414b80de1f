//! secp256k1 keys and ECDSA signatures
//!
//! Everything here runs on an injected [`Backend`](k1ecies_api::Backend);
//! the crate itself does no curve arithmetic. It owns input validation
//! (lengths, encodings, message size) and the shaping of messages into
//! 32-byte prehashes.

pub mod keys;
pub mod traditional;

pub use keys::{generate_private, get_public, get_public_compressed, Keypair};
pub use traditional::ecdsa::EcdsaK256;
