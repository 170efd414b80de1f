//! Internal utilities shared by the k1ecies crates
//!
//! Not part of the public API; the layout can change between releases.

#![no_std]

extern crate alloc;

pub mod constant_time;
pub mod endian;
