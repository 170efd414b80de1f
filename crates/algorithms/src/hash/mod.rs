//! Hash providers

pub mod sha2;

pub use self::sha2::Sha512Hash;
