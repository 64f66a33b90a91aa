//! PEM and DER codecs for asymmetric keys.
//!
//! Keys are serialized to DER in one of the PKCS#1, PKCS#8 or PKIX
//! formats and wrapped in a single PEM block:
//!
//! | Format | PEM label |
//! |--------|-----------|
//! | PKCS#1 private (RSA only) | `RSA PRIVATE KEY` |
//! | PKCS#8 private | `PRIVATE KEY` |
//! | PKCS#1 public (RSA only) | `RSA PUBLIC KEY` |
//! | PKIX public | `PUBLIC KEY` |
//!
//! The codecs are generic over [`PrivateKeyDer`] and [`PublicKeyDer`],
//! which are implemented by the RSA and Ed25519 key types only.

use std::fmt;

use pem::{EncodeConfig, LineEnding, Pem};
use pkcs8::der::Decode;
use pkcs8::spki::SubjectPublicKeyInfoRef;
use pkcs8::{ObjectIdentifier, PrivateKeyInfo};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use cipherkit_common::{Error, Result};

/// OID of `rsaEncryption`.
pub const RSA_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.113549.1.1.1");

/// OID of `id-Ed25519`.
pub const ED25519_OID: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.3.101.112");

/// DER format for private keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrivateKeyFormat {
    /// `RSAPrivateKey` (RSA only).
    Pkcs1,
    /// `PrivateKeyInfo`, any key type.
    #[default]
    Pkcs8,
}

impl PrivateKeyFormat {
    /// PEM label for this format.
    pub fn label(&self) -> &'static str {
        match self {
            PrivateKeyFormat::Pkcs1 => "RSA PRIVATE KEY",
            PrivateKeyFormat::Pkcs8 => "PRIVATE KEY",
        }
    }
}

impl fmt::Display for PrivateKeyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrivateKeyFormat::Pkcs1 => f.write_str("pkcs1"),
            PrivateKeyFormat::Pkcs8 => f.write_str("pkcs8"),
        }
    }
}

/// DER format for public keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicKeyFormat {
    /// `RSAPublicKey` (RSA only).
    Pkcs1,
    /// `SubjectPublicKeyInfo`, any key type.
    #[default]
    Pkix,
}

impl PublicKeyFormat {
    /// PEM label for this format.
    pub fn label(&self) -> &'static str {
        match self {
            PublicKeyFormat::Pkcs1 => "RSA PUBLIC KEY",
            PublicKeyFormat::Pkix => "PUBLIC KEY",
        }
    }
}

impl fmt::Display for PublicKeyFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PublicKeyFormat::Pkcs1 => f.write_str("pkcs1"),
            PublicKeyFormat::Pkix => f.write_str("pkix"),
        }
    }
}

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// A private key with DER encodings.
pub trait PrivateKeyDer: sealed::Sealed + Sized {
    /// Key category name, used in error messages.
    const ALGORITHM: &'static str;
    /// Algorithm OID expected inside PKCS#8 documents.
    const OID: ObjectIdentifier;

    fn to_pkcs8_der(&self) -> Result<Zeroizing<Vec<u8>>>;
    fn from_pkcs8_der(der: &[u8]) -> Result<Self>;

    fn to_pkcs1_der(&self) -> Result<Zeroizing<Vec<u8>>> {
        Err(pkcs1_unsupported(Self::ALGORITHM))
    }

    fn from_pkcs1_der(_der: &[u8]) -> Result<Self> {
        Err(pkcs1_unsupported(Self::ALGORITHM))
    }
}

/// A public key with DER encodings.
pub trait PublicKeyDer: sealed::Sealed + Sized {
    /// Key category name, used in error messages.
    const ALGORITHM: &'static str;
    /// Algorithm OID expected inside PKIX documents.
    const OID: ObjectIdentifier;

    fn to_pkix_der(&self) -> Result<Vec<u8>>;
    fn from_pkix_der(der: &[u8]) -> Result<Self>;

    fn to_pkcs1_der(&self) -> Result<Vec<u8>> {
        Err(pkcs1_unsupported(Self::ALGORITHM))
    }

    fn from_pkcs1_der(_der: &[u8]) -> Result<Self> {
        Err(pkcs1_unsupported(Self::ALGORITHM))
    }
}

fn pkcs1_unsupported(algorithm: &str) -> Error {
    Error::KeyFormat(format!("PKCS#1 cannot hold {} keys", algorithm))
}

/// Wrap DER bytes in a PEM block with 64-column base64 lines.
pub fn encode_pem(label: &str, der: &[u8]) -> String {
    let block = Pem::new(label, der.to_vec());
    pem::encode_config(&block, EncodeConfig::new().set_line_ending(LineEnding::LF))
}

/// Extract the label and DER payload of the first PEM block in `text`.
///
/// # Errors
/// - `Error::KeyFormat` if no well-formed PEM block is found
pub fn decode_pem(text: &[u8]) -> Result<(String, Zeroizing<Vec<u8>>)> {
    let block =
        pem::parse(text).map_err(|e| Error::KeyFormat(format!("no PEM block found: {}", e)))?;
    let label = block.tag().to_string();
    Ok((label, Zeroizing::new(block.into_contents())))
}

fn check_label(found: &str, expected: &str) -> Result<()> {
    if found != expected {
        return Err(Error::KeyFormat(format!(
            "expected PEM block \"{}\", found \"{}\"",
            expected, found
        )));
    }
    Ok(())
}

fn check_oid(found: ObjectIdentifier, expected: ObjectIdentifier, algorithm: &str) -> Result<()> {
    if found != expected {
        return Err(Error::KeyFormat(format!(
            "unexpected key type: expected {} ({}), found {}",
            algorithm, expected, found
        )));
    }
    Ok(())
}

/// Encode a private key as PEM text.
pub fn encode_private_key<K: PrivateKeyDer>(
    key: &K,
    format: PrivateKeyFormat,
) -> Result<Zeroizing<String>> {
    let der = match format {
        PrivateKeyFormat::Pkcs1 => key.to_pkcs1_der()?,
        PrivateKeyFormat::Pkcs8 => key.to_pkcs8_der()?,
    };
    Ok(Zeroizing::new(encode_pem(format.label(), &der)))
}

/// Decode a private key from PEM text.
///
/// # Errors
/// - `Error::KeyFormat` if the PEM block is missing, carries a different
///   label, fails to parse, or holds a key of another type
pub fn decode_private_key<K: PrivateKeyDer>(text: &[u8], format: PrivateKeyFormat) -> Result<K> {
    let (label, der) = decode_pem(text)?;
    check_label(&label, format.label())?;

    match format {
        PrivateKeyFormat::Pkcs1 => K::from_pkcs1_der(&der),
        PrivateKeyFormat::Pkcs8 => {
            let info = PrivateKeyInfo::from_der(&der)
                .map_err(|e| Error::KeyFormat(format!("invalid PKCS#8 document: {}", e)))?;
            check_oid(info.algorithm.oid, K::OID, K::ALGORITHM)?;
            K::from_pkcs8_der(&der)
        }
    }
}

/// Encode a public key as PEM text.
pub fn encode_public_key<K: PublicKeyDer>(key: &K, format: PublicKeyFormat) -> Result<String> {
    let der = match format {
        PublicKeyFormat::Pkcs1 => key.to_pkcs1_der()?,
        PublicKeyFormat::Pkix => key.to_pkix_der()?,
    };
    Ok(encode_pem(format.label(), &der))
}

/// Decode a public key from PEM text.
///
/// # Errors
/// - `Error::KeyFormat` as for [`decode_private_key`]
pub fn decode_public_key<K: PublicKeyDer>(text: &[u8], format: PublicKeyFormat) -> Result<K> {
    let (label, der) = decode_pem(text)?;
    check_label(&label, format.label())?;

    match format {
        PublicKeyFormat::Pkcs1 => K::from_pkcs1_der(&der),
        PublicKeyFormat::Pkix => {
            let spki = SubjectPublicKeyInfoRef::from_der(&der)
                .map_err(|e| Error::KeyFormat(format!("invalid PKIX document: {}", e)))?;
            check_oid(spki.algorithm.oid, K::OID, K::ALGORITHM)?;
            K::from_pkix_der(&der)
        }
    }
}
