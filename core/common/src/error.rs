//! Common error types for CipherKit.

use thiserror::Error;

/// Top-level error type for CipherKit operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Key length not accepted by the cipher.
    #[error("Invalid key: {0}")]
    InvalidKey(String),

    /// Initialization vector missing or of the wrong length.
    #[error("Invalid IV: {0}")]
    InvalidIv(String),

    /// AEAD nonce of the wrong length.
    #[error("Invalid nonce: {0}")]
    InvalidNonce(String),

    /// Input not aligned to the cipher block size.
    #[error("Invalid length: {0}")]
    InvalidLength(String),

    /// Padding could not be removed.
    #[error("Invalid padding: {0}")]
    InvalidPadding(String),

    /// AEAD tag did not verify.
    #[error("Authentication failed")]
    AuthenticationFailed,

    /// RSA decryption failed.
    #[error("Decryption failed")]
    DecryptionFailed,

    /// Signature did not verify.
    #[error("Verification failed")]
    VerificationFailed,

    /// Message too long for the RSA modulus and padding scheme.
    #[error("Message too long")]
    MessageTooLong,

    /// Output could not be encoded.
    #[error("Encode error: {0}")]
    Encode(String),

    /// Hex or base64 input is malformed.
    #[error("Decode error: {0}")]
    Decode(String),

    /// Requested hash is not available for this operation.
    #[error("Hash unavailable: {0}")]
    HashUnavailable(String),

    /// PEM or DER key data is malformed or of the wrong type.
    #[error("Key format error: {0}")]
    KeyFormat(String),

    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Random number generator failed.
    #[error("Random error: {0}")]
    Random(String),

    /// Invalid input provided.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Operation not supported by the underlying primitive.
    #[error("Unsupported: {0}")]
    Unsupported(String),
}

/// Result type alias using the common Error.
pub type Result<T> = std::result::Result<T, Error>;

impl From<hex::FromHexError> for Error {
    fn from(e: hex::FromHexError) -> Self {
        Error::Decode(format!("hex: {}", e))
    }
}

impl From<base64::DecodeError> for Error {
    fn from(e: base64::DecodeError) -> Self {
        Error::Decode(format!("base64: {}", e))
    }
}
