//! ECIES over secp256k1
//!
//! The scheme is the Electrum/bitcore variant: ECDH with an ephemeral key,
//! SHA-512 over the shared X coordinate split into an AES-256 key and an
//! HMAC-SHA256 key, AES-256-CBC with PKCS#7, and encrypt-then-MAC over
//! `iv || ephemeral public key || ciphertext`.

pub mod ecies;

pub use ecies::{EciesK256, EncryptOptions, Envelope};
