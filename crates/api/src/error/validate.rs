//! Validation guards run before any cryptographic work

use super::types::{Error, Result};

/// Validate an exact length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::InvalidLength {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that a length falls inside `min..=max`
#[inline(always)]
pub fn length_range(context: &'static str, actual: usize, min: usize, max: usize) -> Result<()> {
    if actual < min || actual > max {
        return Err(Error::InvalidInput {
            context,
            message: format!("length must be between {} and {} bytes, got {}", min, max, actual),
        });
    }
    Ok(())
}

/// Validate the leading byte of an encoding
#[inline(always)]
pub fn prefix(context: &'static str, bytes: &[u8], expected: u8) -> Result<()> {
    match bytes.first() {
        Some(&b) if b == expected => Ok(()),
        Some(&b) => Err(Error::InvalidKey {
            context,
            message: format!("expected prefix 0x{:02x}, got 0x{:02x}", expected, b),
        }),
        None => Err(Error::InvalidKey {
            context,
            message: "empty encoding".to_string(),
        }),
    }
}

/// Validate that a primitive is present in the backend
#[inline(always)]
pub fn available(is_available: bool, primitive: &'static str) -> Result<()> {
    if !is_available {
        return Err(Error::unavailable(primitive));
    }
    Ok(())
}
