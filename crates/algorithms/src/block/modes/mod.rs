//! Block cipher modes of operation

pub mod cbc;

pub use self::cbc::Aes256Cbc;
