//! Message authentication code providers

pub mod hmac;

pub use self::hmac::HmacSha256;
