//! Provider traits consumed by the ECIES engine
//!
//! The engine never implements elliptic-curve arithmetic, hashing, the
//! block cipher or randomness itself. It reaches each capability through one
//! of these traits, bundled together by a [`Backend`].

pub mod backend;
pub mod primitives;

pub use backend::Backend;
pub use primitives::{CbcCipher, CurveEngine, HashFunction512, MacFunction, RandomSource};
