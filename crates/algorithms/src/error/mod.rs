//! Error handling for the primitive providers
//!
//! Provider failures are collected here and converted into the API error
//! taxonomy at the trait boundary.

use k1ecies_api::Error as CoreError;
use thiserror::Error as ThisError;

/// The error type for primitive providers
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// The curve rejected a scalar or a point encoding
    #[error("{context}: {details}")]
    Curve {
        /// Operation that rejected the input
        context: &'static str,
        /// Message from the curve implementation
        details: String,
    },

    /// A signature could not be decoded
    #[error("{context}: malformed signature: {details}")]
    Encoding {
        /// Operation that tried to decode
        context: &'static str,
        /// Decoder message
        details: String,
    },

    /// A well-formed signature did not verify
    #[error("{algorithm}: signature verification failed")]
    Verification {
        /// Algorithm that rejected the signature
        algorithm: &'static str,
    },

    /// Key or IV of the wrong size handed to a cipher or MAC
    #[error("{algorithm}: invalid key or IV length")]
    KeyLength {
        /// Algorithm that rejected the length
        algorithm: &'static str,
    },

    /// PKCS#7 unpadding failed
    #[error("{algorithm}: invalid padding")]
    Padding {
        /// Algorithm whose unpadding failed
        algorithm: &'static str,
    },

    /// MAC tag mismatch
    #[error("{algorithm}: tag mismatch")]
    MacMismatch {
        /// MAC algorithm
        algorithm: &'static str,
    },

    /// The random source failed
    #[error("{source_name}: {details}")]
    Random {
        /// Name of the random source
        source_name: &'static str,
        /// Message from the source
        details: String,
    },

    /// Processing error during a primitive operation
    #[error("{operation}: {details}")]
    Processing {
        /// Operation that failed
        operation: &'static str,
        /// Additional details about the failure
        details: String,
    },
}

/// Result type for primitive providers
pub type Result<T> = core::result::Result<T, Error>;

impl From<Error> for CoreError {
    fn from(err: Error) -> Self {
        match err {
            Error::Curve { context, details } => CoreError::InvalidKey {
                context,
                message: details,
            },
            Error::Encoding { context, details } => CoreError::InvalidInput {
                context,
                message: details,
            },
            Error::Verification { algorithm } => CoreError::BadSignature { context: algorithm },
            Error::KeyLength { algorithm } => CoreError::Other {
                context: algorithm,
                message: "invalid key or IV length".to_string(),
            },
            Error::Padding { algorithm } => CoreError::DecryptionFailed {
                context: algorithm,
                message: "invalid padding".to_string(),
            },
            Error::MacMismatch { algorithm } => CoreError::BadMac { context: algorithm },
            Error::Random {
                source_name,
                details,
            } => CoreError::RandomGenerationError {
                context: source_name,
                message: details,
            },
            Error::Processing { operation, details } => CoreError::Other {
                context: operation,
                message: details,
            },
        }
    }
}
