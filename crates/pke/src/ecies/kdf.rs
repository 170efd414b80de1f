//! Key derivation: SHA-512 over the shared secret

use k1ecies_api::{HashFunction512, Result, SharedSecret};
use k1ecies_params::traditional::ecies::{ECIES_ENCRYPTION_KEY_SIZE, ECIES_MAC_KEY_SIZE};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The AES key and the MAC key, always derived together
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct DerivedKeys {
    encryption_key: [u8; ECIES_ENCRYPTION_KEY_SIZE],
    mac_key: [u8; ECIES_MAC_KEY_SIZE],
}

impl DerivedKeys {
    /// Hash `secret` and split the digest: bytes `[0, 32)` become the
    /// encryption key, bytes `[32, 64)` the MAC key
    pub fn derive<H: HashFunction512>(hash: &H, secret: &SharedSecret) -> Result<Self> {
        let digest = hash.digest(secret.as_bytes())?;
        let (enc, mac) = digest.split_at(ECIES_ENCRYPTION_KEY_SIZE);

        let mut keys = Self {
            encryption_key: [0u8; ECIES_ENCRYPTION_KEY_SIZE],
            mac_key: [0u8; ECIES_MAC_KEY_SIZE],
        };
        keys.encryption_key.copy_from_slice(enc);
        keys.mac_key.copy_from_slice(mac);
        Ok(keys)
    }

    /// AES-256 key
    pub fn encryption_key(&self) -> &[u8; ECIES_ENCRYPTION_KEY_SIZE] {
        &self.encryption_key
    }

    /// HMAC-SHA256 key
    pub fn mac_key(&self) -> &[u8; ECIES_MAC_KEY_SIZE] {
        &self.mac_key
    }
}
