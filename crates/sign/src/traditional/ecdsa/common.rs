//! Common utilities for ECDSA

use k1ecies_api::error::validate;
use k1ecies_api::{Error, Result};
use k1ecies_internal::endian::be_left_pad;
use k1ecies_params::traditional::ecdsa::{
    ECDSA_MAX_MESSAGE_SIZE, ECDSA_MIN_MESSAGE_SIZE, ECDSA_PREHASH_SIZE,
};

/// Turn a 1..=32 byte message into the 32-byte prehash that gets signed
///
/// The message is read as a big-endian integer, so shorter inputs are
/// left-padded with zeros: `[0x01]` and `[0x00, 0x01]` sign the same value.
pub fn message_prehash(message: &[u8]) -> Result<[u8; ECDSA_PREHASH_SIZE]> {
    validate::length_range(
        "ECDSA message",
        message.len(),
        ECDSA_MIN_MESSAGE_SIZE,
        ECDSA_MAX_MESSAGE_SIZE,
    )?;
    be_left_pad::<ECDSA_PREHASH_SIZE>(message)
        .ok_or_else(|| Error::invalid_input("ECDSA message", "longer than the prehash"))
}
