//! Block cipher providers

pub mod modes;

pub use modes::Aes256Cbc;
