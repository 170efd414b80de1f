//! Core types with length guarantees for the k1ecies library
//!
//! Every quantity with a fixed size is a newtype over a byte array, so a
//! value that exists always has the right length. Slice constructors run the
//! length check first and never coerce.

use core::fmt;
use k1ecies_internal::constant_time::ct_eq;
use k1ecies_params::traditional::ecdh::{
    SECP256K1_COMPRESSED_PUBLIC_KEY_SIZE, SECP256K1_PRIVATE_KEY_SIZE, SECP256K1_PUBLIC_KEY_SIZE,
    SECP256K1_UNCOMPRESSED_PREFIX,
};
use k1ecies_params::traditional::ecies::{ECIES_IV_SIZE, ECIES_MAC_SIZE};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{validate, Error, Result};

/// A secp256k1 private scalar, 32 bytes big-endian
///
/// Range against the curve order is not checked here; the curve engine
/// rejects out-of-range scalars when the key is used. Zeroed on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey([u8; SECP256K1_PRIVATE_KEY_SIZE]);

impl PrivateKey {
    /// Wrap an existing array
    pub fn new(bytes: [u8; SECP256K1_PRIVATE_KEY_SIZE]) -> Self {
        Self(bytes)
    }

    /// Create from a slice, if it has the correct length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("private key", slice.len(), SECP256K1_PRIVATE_KEY_SIZE)?;
        let mut bytes = [0u8; SECP256K1_PRIVATE_KEY_SIZE];
        bytes.copy_from_slice(slice);
        Ok(Self(bytes))
    }

    /// Borrow the raw scalar bytes
    pub fn as_bytes(&self) -> &[u8; SECP256K1_PRIVATE_KEY_SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for PrivateKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for PrivateKey {
    type Error = Error;

    fn try_from(slice: &[u8]) -> Result<Self> {
        Self::from_slice(slice)
    }
}

impl PartialEq for PrivateKey {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.0, other.0)
    }
}

impl Eq for PrivateKey {}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey[REDACTED]")
    }
}

/// An uncompressed secp256k1 public key: `0x04 || X || Y`
///
/// Construction checks length and prefix. Whether the point lies on the
/// curve is checked by the curve engine when the key is used.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; SECP256K1_PUBLIC_KEY_SIZE]);

impl PublicKey {
    /// Wrap an existing array after checking the prefix byte
    pub fn new(bytes: [u8; SECP256K1_PUBLIC_KEY_SIZE]) -> Result<Self> {
        validate::prefix("public key", &bytes, SECP256K1_UNCOMPRESSED_PREFIX)?;
        Ok(Self(bytes))
    }

    /// Create from a slice: length first, then prefix
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("public key", slice.len(), SECP256K1_PUBLIC_KEY_SIZE)?;
        let mut bytes = [0u8; SECP256K1_PUBLIC_KEY_SIZE];
        bytes.copy_from_slice(slice);
        Self::new(bytes)
    }

    /// Borrow the encoded point
    pub fn as_bytes(&self) -> &[u8; SECP256K1_PUBLIC_KEY_SIZE] {
        &self.0
    }

    /// Copy the encoded point into a vector
    pub fn to_vec(&self) -> Vec<u8> {
        self.0.to_vec()
    }
}

impl AsRef<[u8]> for PublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl TryFrom<&[u8]> for PublicKey {
    type Error = Error;

    fn try_from(slice: &[u8]) -> Result<Self> {
        Self::from_slice(slice)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", hex::encode(self.0))
    }
}

/// A compressed secp256k1 public key: `0x02/0x03 || X`
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CompressedPublicKey([u8; SECP256K1_COMPRESSED_PUBLIC_KEY_SIZE]);

impl CompressedPublicKey {
    /// Create from a slice, checking length and the parity prefix
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length(
            "compressed public key",
            slice.len(),
            SECP256K1_COMPRESSED_PUBLIC_KEY_SIZE,
        )?;
        if slice[0] != 0x02 && slice[0] != 0x03 {
            return Err(Error::invalid_key(
                "compressed public key",
                format!("expected prefix 0x02 or 0x03, got 0x{:02x}", slice[0]),
            ));
        }
        let mut bytes = [0u8; SECP256K1_COMPRESSED_PUBLIC_KEY_SIZE];
        bytes.copy_from_slice(slice);
        Ok(Self(bytes))
    }

    /// Borrow the encoded point
    pub fn as_bytes(&self) -> &[u8; SECP256K1_COMPRESSED_PUBLIC_KEY_SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for CompressedPublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for CompressedPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CompressedPublicKey({})", hex::encode(self.0))
    }
}

/// A DER-encoded ECDSA signature
///
/// Holds whatever bytes the caller supplied; the curve engine parses them
/// during verification.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Signature(Vec<u8>);

impl Signature {
    /// Wrap DER bytes
    pub fn from_der(der: impl Into<Vec<u8>>) -> Self {
        Self(der.into())
    }

    /// Borrow the DER bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Take the DER bytes
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Signature({})", hex::encode(&self.0))
    }
}

/// ECDH output: the X-coordinate of the shared point as a minimal
/// big-endian integer (no left padding). Zeroed on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SharedSecret(Vec<u8>);

impl SharedSecret {
    /// Wrap already-encoded secret bytes
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }

    /// Borrow the secret bytes
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Length in bytes, at most 32 for secp256k1
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false for values produced by key agreement
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for SharedSecret {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq for SharedSecret {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(&self.0, &other.0)
    }
}

impl Eq for SharedSecret {}

impl fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SharedSecret({} bytes)[REDACTED]", self.0.len())
    }
}

/// A 16-byte CBC initialization vector
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Iv([u8; ECIES_IV_SIZE]);

impl Iv {
    /// Wrap an existing array
    pub fn new(bytes: [u8; ECIES_IV_SIZE]) -> Self {
        Self(bytes)
    }

    /// Create from a slice, if it has the correct length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("iv", slice.len(), ECIES_IV_SIZE)?;
        let mut bytes = [0u8; ECIES_IV_SIZE];
        bytes.copy_from_slice(slice);
        Ok(Self(bytes))
    }

    /// Borrow the IV bytes
    pub fn as_bytes(&self) -> &[u8; ECIES_IV_SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for Iv {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Iv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Iv({})", hex::encode(self.0))
    }
}

/// A 32-byte HMAC-SHA256 tag
///
/// Equality is constant-time.
#[derive(Clone, Copy)]
pub struct MacTag([u8; ECIES_MAC_SIZE]);

impl MacTag {
    /// Wrap an existing array
    pub fn new(bytes: [u8; ECIES_MAC_SIZE]) -> Self {
        Self(bytes)
    }

    /// Create from a slice, if it has the correct length
    pub fn from_slice(slice: &[u8]) -> Result<Self> {
        validate::length("mac", slice.len(), ECIES_MAC_SIZE)?;
        let mut bytes = [0u8; ECIES_MAC_SIZE];
        bytes.copy_from_slice(slice);
        Ok(Self(bytes))
    }

    /// Borrow the tag bytes
    pub fn as_bytes(&self) -> &[u8; ECIES_MAC_SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for MacTag {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq for MacTag {
    fn eq(&self, other: &Self) -> bool {
        ct_eq(self.0, other.0)
    }
}

impl Eq for MacTag {}

impl fmt::Debug for MacTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MacTag({})", hex::encode(self.0))
    }
}

/// Serde support: fixed-size values travel as byte strings and are
/// length-checked on the way back in.
#[cfg(feature = "serde")]
mod serde_impls {
    use super::{CompressedPublicKey, Iv, MacTag, PrivateKey, PublicKey, Signature};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use zeroize::Zeroize;

    macro_rules! impl_serde_bytes {
        ($ty:ty, $ctor:path) => {
            impl Serialize for $ty {
                fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                    serializer.serialize_bytes(self.as_ref())
                }
            }

            impl<'de> Deserialize<'de> for $ty {
                fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                    let bytes = Vec::<u8>::deserialize(deserializer)?;
                    $ctor(&bytes).map_err(D::Error::custom)
                }
            }
        };
    }

    impl_serde_bytes!(PublicKey, PublicKey::from_slice);
    impl_serde_bytes!(CompressedPublicKey, CompressedPublicKey::from_slice);
    impl_serde_bytes!(Iv, Iv::from_slice);
    impl_serde_bytes!(MacTag, MacTag::from_slice);

    impl Serialize for PrivateKey {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_bytes(&self.0)
        }
    }

    impl<'de> Deserialize<'de> for PrivateKey {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            let mut bytes = Vec::<u8>::deserialize(deserializer)?;
            let key = PrivateKey::from_slice(&bytes);
            bytes.zeroize();
            key.map_err(D::Error::custom)
        }
    }

    impl Serialize for Signature {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_bytes(&self.0)
        }
    }

    impl<'de> Deserialize<'de> for Signature {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            Ok(Signature::from_der(Vec::<u8>::deserialize(deserializer)?))
        }
    }
}
