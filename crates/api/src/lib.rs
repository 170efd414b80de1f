//! Public API traits and types for the k1ecies library
//!
//! This crate provides the API surface shared by every k1ecies component:
//! the error taxonomy, the fixed-size key and tag types, and the provider
//! traits through which the ECIES engine consumes its primitives.

pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, Result};
pub use types::*;

pub use traits::{Backend, CbcCipher, CurveEngine, HashFunction512, MacFunction, RandomSource};
