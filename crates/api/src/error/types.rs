//! Error type definitions for ECIES and signature operations

use thiserror::Error as ThisError;

/// Primary error type for every k1ecies operation
///
/// Variants fall into the classes callers need to tell apart: malformed
/// input (`InvalidLength`, `InvalidKey`, `InvalidInput`), authentication
/// failures (`BadSignature`, `BadMac`), symmetric decryption failures, and
/// problems with the primitive backend itself.
///
/// To detect rejected input, call [`Error::is_invalid_input`] rather than
/// matching the `InvalidInput` variant: a 31-byte private key is
/// `InvalidLength` and a public key without the `0x04` prefix is
/// `InvalidKey`.
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum Error {
    /// Input with the wrong length
    #[error("{context}: invalid length (expected {expected}, got {actual})")]
    InvalidLength {
        context: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Key bytes of the right size that are still unusable
    #[error("Invalid key: {context}: {message}")]
    InvalidKey {
        context: &'static str,
        message: String,
    },

    /// Malformed message or signature
    #[error("Invalid input: {context}: {message}")]
    InvalidInput {
        context: &'static str,
        message: String,
    },

    /// ECDSA verification failed
    #[error("Bad signature: {context}")]
    BadSignature { context: &'static str },

    /// HMAC verification failed, nothing was decrypted
    #[error("Bad MAC: {context}")]
    BadMac { context: &'static str },

    /// Symmetric decryption failed after the MAC was accepted
    #[error("Decryption failed: {context}: {message}")]
    DecryptionFailed {
        context: &'static str,
        message: String,
    },

    /// A required primitive is absent from the backend
    #[error("{primitive} is unavailable: {message}")]
    PrimitiveUnavailable {
        primitive: &'static str,
        message: String,
    },

    /// The random source could not produce bytes
    #[error("Random generation error: {context}: {message}")]
    RandomGenerationError {
        context: &'static str,
        message: String,
    },

    /// Other error
    #[error("{context}: {message}")]
    Other {
        context: &'static str,
        message: String,
    },
}

/// Result type for k1ecies operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Shorthand for an `InvalidKey` error
    pub fn invalid_key(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidKey {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for an `InvalidInput` error
    pub fn invalid_input(context: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for a `DecryptionFailed` error
    pub fn decryption_failed(context: &'static str, message: impl Into<String>) -> Self {
        Self::DecryptionFailed {
            context,
            message: message.into(),
        }
    }

    /// Shorthand for a `PrimitiveUnavailable` error
    pub fn unavailable(primitive: &'static str) -> Self {
        Self::PrimitiveUnavailable {
            primitive,
            message: "not provided by the configured backend".to_string(),
        }
    }

    /// True for every error raised by input validation
    ///
    /// `InvalidLength`, `InvalidKey` and `InvalidInput` all mean the caller
    /// handed in something malformed; no cryptographic work was attempted.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            Self::InvalidLength { .. } | Self::InvalidKey { .. } | Self::InvalidInput { .. }
        )
    }

    /// True when an authenticity check rejected the input
    pub fn is_authentication_failure(&self) -> bool {
        matches!(self, Self::BadSignature { .. } | Self::BadMac { .. })
    }

    /// Replace the context of an existing error, keeping its details
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::InvalidKey { message, .. } => Self::InvalidKey { context, message },
            Self::InvalidInput { message, .. } => Self::InvalidInput { context, message },
            Self::BadSignature { .. } => Self::BadSignature { context },
            Self::BadMac { .. } => Self::BadMac { context },
            Self::DecryptionFailed { message, .. } => Self::DecryptionFailed { context, message },
            Self::PrimitiveUnavailable { primitive, message } => {
                Self::PrimitiveUnavailable { primitive, message }
            }
            Self::RandomGenerationError { message, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::Other { message, .. } => Self::Other { context, message },
        }
    }

    /// Replace the message of an existing error
    ///
    /// Variants without a message field are returned unchanged.
    pub fn with_message(self, message: impl Into<String>) -> Self {
        let message = message.into();
        match self {
            Self::InvalidKey { context, .. } => Self::InvalidKey { context, message },
            Self::InvalidInput { context, .. } => Self::InvalidInput { context, message },
            Self::DecryptionFailed { context, .. } => Self::DecryptionFailed { context, message },
            Self::PrimitiveUnavailable { primitive, .. } => {
                Self::PrimitiveUnavailable { primitive, message }
            }
            Self::RandomGenerationError { context, .. } => {
                Self::RandomGenerationError { context, message }
            }
            Self::Other { context, .. } => Self::Other { context, message },
            other => other,
        }
    }
}
