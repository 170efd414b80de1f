//! Constant values for k1ecies cryptographic operations
//!
//! Sizes of keys, digests, tags and the fixed layout of the ECIES pipeline.
//! Every other crate in the workspace takes its lengths from here.

#![no_std]

pub mod traditional;
pub mod utils;
