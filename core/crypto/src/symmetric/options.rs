//! Options shared by every symmetric cipher call.

use serde::{Deserialize, Serialize};

use crate::padding::Padding;
use cipherkit_common::Encoding;

/// Encoding, padding and associated data for a symmetric operation.
///
/// Builder methods overwrite earlier settings, so the last one wins.
///
/// ```
/// use cipherkit_crypto::symmetric::CipherOptions;
/// use cipherkit_crypto::Padding;
///
/// let opts = CipherOptions::new().with_zero().with_pkcs7().with_hex();
/// assert_eq!(opts.padding, Padding::Pkcs7);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CipherOptions {
    /// Encoding of ciphertext output (and of ciphertext input on decrypt).
    pub encoding: Encoding,
    /// Padding for ECB and CBC; ignored by stream and AEAD modes.
    pub padding: Padding,
    /// GCM associated data; ignored by other modes.
    pub additional: Vec<u8>,
}

impl CipherOptions {
    /// Raw output, no padding, no associated data.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ciphertext encoding.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Hex-encode ciphertext.
    pub fn with_hex(self) -> Self {
        self.with_encoding(Encoding::Hex)
    }

    /// Base64-encode ciphertext.
    pub fn with_base64(self) -> Self {
        self.with_encoding(Encoding::Base64)
    }

    /// Set the ECB/CBC padding.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Zero padding.
    pub fn with_zero(self) -> Self {
        self.with_padding(Padding::Zero)
    }

    /// PKCS#5 padding; identical to PKCS#7.
    pub fn with_pkcs5(self) -> Self {
        self.with_padding(Padding::Pkcs5)
    }

    /// PKCS#7 padding.
    pub fn with_pkcs7(self) -> Self {
        self.with_padding(Padding::Pkcs7)
    }

    /// Set GCM associated data.
    pub fn with_additional(mut self, additional: impl Into<Vec<u8>>) -> Self {
        self.additional = additional.into();
        self
    }
}
