//! ECIES over secp256k1 with AES-256-CBC and HMAC-SHA256
//!
//! Encryption:
//!
//! 1. take the supplied ephemeral private key or draw a random one
//! 2. `R = r * G`
//! 3. `Px = X(r * Q)` with leading zero bytes stripped
//! 4. `SHA-512(Px) = k_enc || k_mac`
//! 5. `C = AES-256-CBC(k_enc, iv, m)` with PKCS#7 padding
//! 6. `T = HMAC-SHA256(k_mac, iv || R || C)`
//!
//! Decryption recomputes `Px` from the recipient key and `R`, checks `T` in
//! constant time, and only then decrypts.

pub mod ecdh;
pub mod envelope;
pub mod kdf;
pub mod options;

pub use envelope::Envelope;
pub use options::EncryptOptions;

use k1ecies_api::{
    Backend, CbcCipher, CurveEngine, Error, Iv, MacFunction, PrivateKey, PublicKey, RandomSource,
    Result, SharedSecret,
};
use k1ecies_api::error::ResultExt;
use k1ecies_params::traditional::ecies::ECIES_IV_SIZE;
use k1ecies_sign::keys::{generate_private, get_public};
use tracing::{debug, trace};

use envelope::data_to_mac;
use kdf::DerivedKeys;

/// ECIES over secp256k1
pub struct EciesK256;

impl EciesK256 {
    /// Shared secret between `key` and `peer`; see [`ecdh::derive`]
    pub fn derive<B: Backend>(backend: &B, key: &PrivateKey, peer: &PublicKey) -> Result<SharedSecret> {
        backend.ensure_curve_available()?;
        ecdh::derive(backend, key, peer)
    }

    /// Encrypt `message` to `to`
    ///
    /// Any message length is accepted, including zero. Fails with
    /// `Error::PrimitiveUnavailable` before doing any work when the backend
    /// lacks a primitive the pipeline needs.
    pub fn encrypt<B: Backend>(
        backend: &B,
        to: &PublicKey,
        message: &[u8],
        options: &EncryptOptions,
    ) -> Result<Envelope> {
        backend.ensure_encrypt_available()?;
        debug!(
            message_len = message.len(),
            fixed_ephemeral = options.ephem_private_key().is_some(),
            fixed_iv = options.iv().is_some(),
            "ecies encrypt"
        );

        let ephem_private_key = match options.ephem_private_key() {
            Some(key) => key.clone(),
            None => generate_private(backend)?,
        };
        let ephem_public_key = get_public(backend, &ephem_private_key)?;

        let px = ecdh::derive(backend, &ephem_private_key, to)?;
        let keys = DerivedKeys::derive(backend.hash(), &px)?;
        trace!(px_len = px.len(), "derived encryption and mac keys");

        let iv = match options.iv() {
            Some(iv) => *iv,
            None => random_iv(backend)?,
        };

        let ciphertext = backend.cipher().encrypt(keys.encryption_key(), &iv, message)?;
        let mac = backend
            .mac()
            .sign(keys.mac_key(), &data_to_mac(&iv, &ephem_public_key, &ciphertext))?;
        trace!(ciphertext_len = ciphertext.len(), "envelope sealed");

        Ok(Envelope::new(iv, ephem_public_key, ciphertext, mac))
    }

    /// Decrypt `envelope` with the recipient's private key
    ///
    /// The MAC is checked before any decryption. A mismatch, including an
    /// ephemeral key that is not a curve point, is `Error::BadMac`; a padding
    /// failure after a good MAC is `Error::DecryptionFailed`.
    pub fn decrypt<B: Backend>(backend: &B, key: &PrivateKey, envelope: &Envelope) -> Result<Vec<u8>> {
        backend.ensure_decrypt_available()?;
        debug!(ciphertext_len = envelope.ciphertext().len(), "ecies decrypt");

        backend.curve().validate_private_key(key)?;
        backend
            .curve()
            .validate_public_key(envelope.ephem_public_key())
            .map_err(|_| Error::BadMac {
                context: "ECIES ephemeral public key",
            })?;

        let px = ecdh::derive(backend, key, envelope.ephem_public_key())?;
        let keys = DerivedKeys::derive(backend.hash(), &px)?;

        backend
            .mac()
            .verify(keys.mac_key(), &envelope.data_to_mac(), envelope.mac())
            .with_context("ECIES decrypt")?;
        trace!("mac verified");

        backend
            .cipher()
            .decrypt(keys.encryption_key(), envelope.iv(), envelope.ciphertext())
            .with_context("ECIES decrypt")
    }
}

fn random_iv<B: Backend>(backend: &B) -> Result<Iv> {
    let mut iv = [0u8; ECIES_IV_SIZE];
    backend.random().fill_bytes(&mut iv)?;
    Ok(Iv::new(iv))
}
