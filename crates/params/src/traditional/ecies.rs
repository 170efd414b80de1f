//! Constants for the ECIES pipeline (SHA-512 KDF, AES-256-CBC, HMAC-SHA256)

use crate::utils::hash::{SHA256_OUTPUT_SIZE, SHA512_OUTPUT_SIZE};
use crate::utils::symmetric::{AES256_KEY_SIZE, AES_BLOCK_SIZE};

/// Length of the KDF output that is split into the two keys
pub const ECIES_KDF_OUTPUT_SIZE: usize = SHA512_OUTPUT_SIZE;

/// Length of the AES-256 encryption key, the first half of the KDF output
pub const ECIES_ENCRYPTION_KEY_SIZE: usize = AES256_KEY_SIZE;

/// Length of the HMAC key, the second half of the KDF output
pub const ECIES_MAC_KEY_SIZE: usize = ECIES_KDF_OUTPUT_SIZE - ECIES_ENCRYPTION_KEY_SIZE;

/// Length of the CBC initialization vector
pub const ECIES_IV_SIZE: usize = AES_BLOCK_SIZE;

/// Length of the HMAC-SHA256 tag
pub const ECIES_MAC_SIZE: usize = SHA256_OUTPUT_SIZE;
