//! # k1ecies
//!
//! ECIES over secp256k1 (ECDH, SHA-512 key derivation, AES-256-CBC and
//! HMAC-SHA256) together with ECDSA sign/verify and public key derivation.
//!
//! ## Usage
//!
//! ```
//! use k1ecies::prelude::*;
//!
//! let ecies = Ecies::new();
//! let recipient = ecies.generate_keypair()?;
//!
//! let envelope = ecies.encrypt(recipient.public_key(), b"hello")?;
//! let plaintext = ecies.decrypt(recipient.private_key(), &envelope)?;
//! assert_eq!(plaintext, b"hello");
//! # Ok::<(), k1ecies::Error>(())
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` for [`Envelope`], [`PrivateKey`],
//!   [`PublicKey`], [`CompressedPublicKey`], [`Iv`], [`MacTag`] and [`Signature`]
//! - `full`: all features enabled
//!
//! ## Crate Structure
//!
//! This is a facade crate over several sub-crates:
//!
//! - [`k1ecies-api`](api): error taxonomy, key types and the provider traits
//! - [`k1ecies-algorithms`](algorithms): the default RustCrypto backend
//! - [`k1ecies-sign`](sign): key derivation and ECDSA
//! - [`k1ecies-pke`](pke): the ECIES pipeline

pub use k1ecies_algorithms as algorithms;
pub use k1ecies_api as api;
pub use k1ecies_internal as internal;
pub use k1ecies_params as params;
pub use k1ecies_pke as pke;
pub use k1ecies_sign as sign;

mod asynchronous;
mod engine;

pub use asynchronous::AsyncEcies;
pub use engine::Ecies;

pub use k1ecies_algorithms::RustCryptoBackend;
pub use k1ecies_api::{
    Backend, CompressedPublicKey, Error, Iv, MacTag, PrivateKey, PublicKey, Result, SharedSecret,
    Signature,
};
pub use k1ecies_pke::{EncryptOptions, Envelope};
pub use k1ecies_sign::Keypair;

/// Common imports for k1ecies users
pub mod prelude {
    pub use crate::api::{Error, Result};

    pub use crate::api::{CompressedPublicKey, Iv, PrivateKey, PublicKey, SharedSecret, Signature};

    pub use crate::{AsyncEcies, Ecies, EncryptOptions, Envelope, Keypair};
}
