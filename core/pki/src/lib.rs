//! Public-key facade for CipherKit.
//!
//! This module provides:
//! - RSA encryption (PKCS#1 v1.5, OAEP) and signatures (PKCS#1 v1.5, PSS)
//! - Ed25519 and Ed25519ph signatures
//! - PEM codecs for PKCS#1, PKCS#8 and PKIX key documents
//! - Key file storage
//!
//! # Security Guarantees
//! - Private keys zeroize on drop and print redacted in `Debug`
//! - PEM and DER buffers holding private keys are zeroized after use
//! - Key files are never overwritten

pub mod ed25519;
pub mod keystore;
pub mod options;
pub mod rsa;
pub mod x509;

pub use options::{Ed25519Options, KeyOptions, RsaOptions};
pub use x509::{PrivateKeyDer, PrivateKeyFormat, PublicKeyDer, PublicKeyFormat};
