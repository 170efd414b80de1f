//! Default primitive backend for k1ecies
//!
//! Implements the provider traits of `k1ecies-api` on top of the RustCrypto
//! crates:
//!
//! - [`ec::K256`]: secp256k1 via `k256` (ECDH, ECDSA with RFC 6979 nonces)
//! - [`hash::Sha512Hash`]: SHA-512 via `sha2`
//! - [`block::Aes256Cbc`]: AES-256-CBC with PKCS#7 via `aes` + `cbc`
//! - [`mac::HmacSha256`]: HMAC-SHA256 via `hmac`
//! - [`random::OsRandom`]: the operating system RNG via `rand`
//!
//! [`RustCryptoBackend`] bundles them into a `k1ecies_api::Backend`.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

// Error module and re-exports
pub mod error;
pub use error::{Error, Result};

pub mod block;
pub use block::Aes256Cbc;

pub mod ec;
pub use ec::K256;

pub mod hash;
pub use hash::Sha512Hash;

pub mod mac;
pub use mac::HmacSha256;

pub mod random;
pub use random::{OsRandom, SeededRandom};

mod backend;
pub use backend::RustCryptoBackend;
