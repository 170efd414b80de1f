//! AES-256 in CBC mode with PKCS#7 padding
//!
//! Backed by the `aes` and `cbc` crates. Follows NIST SP 800-38A; the IV is
//! supplied by the caller for every message.

use ::cbc::cipher::block_padding::Pkcs7;
use ::cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use k1ecies_api::{CbcCipher, Iv, Result as ApiResult};
use k1ecies_params::traditional::ecies::ECIES_ENCRYPTION_KEY_SIZE;

use crate::error::Error;

type Encryptor = ::cbc::Encryptor<::aes::Aes256>;
type Decryptor = ::cbc::Decryptor<::aes::Aes256>;

const ALGORITHM: &str = "AES-256-CBC";

/// AES-256-CBC with PKCS#7 padding
#[derive(Clone, Copy, Debug, Default)]
pub struct Aes256Cbc;

impl CbcCipher for Aes256Cbc {
    fn name(&self) -> &'static str {
        ALGORITHM
    }

    fn encrypt(
        &self,
        key: &[u8; ECIES_ENCRYPTION_KEY_SIZE],
        iv: &Iv,
        plaintext: &[u8],
    ) -> ApiResult<Vec<u8>> {
        let cipher = Encryptor::new_from_slices(key, iv.as_bytes())
            .map_err(|_| Error::KeyLength { algorithm: ALGORITHM })?;
        Ok(cipher.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
    }

    fn decrypt(
        &self,
        key: &[u8; ECIES_ENCRYPTION_KEY_SIZE],
        iv: &Iv,
        ciphertext: &[u8],
    ) -> ApiResult<Vec<u8>> {
        let cipher = Decryptor::new_from_slices(key, iv.as_bytes())
            .map_err(|_| Error::KeyLength { algorithm: ALGORITHM })?;
        // Covers both a non-block-aligned input and a bad final block
        cipher
            .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
            .map_err(|_| Error::Padding { algorithm: ALGORITHM }.into())
    }
}
