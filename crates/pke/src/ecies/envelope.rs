//! The encrypted envelope

use k1ecies_api::{Iv, MacTag, PublicKey, Result};
use k1ecies_params::traditional::ecdh::SECP256K1_PUBLIC_KEY_SIZE;
use k1ecies_params::traditional::ecies::ECIES_IV_SIZE;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Output of encryption: everything the recipient needs to decrypt
///
/// Immutable once built. [`Envelope::from_parts`] validates the fixed-size
/// fields; the ciphertext is checked only by the MAC during decryption.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Envelope {
    iv: Iv,
    ephem_public_key: PublicKey,
    #[cfg_attr(feature = "serde", serde(serialize_with = "serialize_bytes"))]
    ciphertext: Vec<u8>,
    mac: MacTag,
}

impl Envelope {
    pub(crate) fn new(iv: Iv, ephem_public_key: PublicKey, ciphertext: Vec<u8>, mac: MacTag) -> Self {
        Self {
            iv,
            ephem_public_key,
            ciphertext,
            mac,
        }
    }

    /// Build an envelope from raw fields, e.g. after reading them off the wire
    ///
    /// Checks the IV is 16 bytes, the ephemeral key 65 bytes starting with
    /// `0x04`, and the MAC 32 bytes.
    pub fn from_parts(
        iv: impl AsRef<[u8]>,
        ephem_public_key: impl AsRef<[u8]>,
        ciphertext: impl Into<Vec<u8>>,
        mac: impl AsRef<[u8]>,
    ) -> Result<Self> {
        Ok(Self {
            iv: Iv::from_slice(iv.as_ref())?,
            ephem_public_key: PublicKey::from_slice(ephem_public_key.as_ref())?,
            ciphertext: ciphertext.into(),
            mac: MacTag::from_slice(mac.as_ref())?,
        })
    }

    /// CBC initialization vector
    pub fn iv(&self) -> &Iv {
        &self.iv
    }

    /// The sender's one-time public key
    pub fn ephem_public_key(&self) -> &PublicKey {
        &self.ephem_public_key
    }

    /// AES-256-CBC output, padding included
    pub fn ciphertext(&self) -> &[u8] {
        &self.ciphertext
    }

    /// HMAC-SHA256 tag
    pub fn mac(&self) -> &MacTag {
        &self.mac
    }

    /// Exactly the bytes the MAC covers: `iv || ephem_public_key || ciphertext`
    pub fn data_to_mac(&self) -> Vec<u8> {
        data_to_mac(&self.iv, &self.ephem_public_key, &self.ciphertext)
    }
}

// Ciphertext goes out as a byte string like the fixed-size fields
#[cfg(feature = "serde")]
fn serialize_bytes<S: serde::Serializer>(bytes: &[u8], serializer: S) -> core::result::Result<S::Ok, S::Error> {
    serializer.serialize_bytes(bytes)
}

pub(crate) fn data_to_mac(iv: &Iv, ephem_public_key: &PublicKey, ciphertext: &[u8]) -> Vec<u8> {
    let mut data = Vec::with_capacity(ECIES_IV_SIZE + SECP256K1_PUBLIC_KEY_SIZE + ciphertext.len());
    data.extend_from_slice(iv.as_bytes());
    data.extend_from_slice(ephem_public_key.as_bytes());
    data.extend_from_slice(ciphertext);
    data
}
