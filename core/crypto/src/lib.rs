//! Symmetric primitives, digests and randomness for CipherKit.
//!
//! This module provides:
//! - AES, DES and 3DES in ECB/CBC/CFB/OFB/CTR modes, plus AES-GCM
//! - None/Zero/PKCS#5/PKCS#7 padding
//! - MD5 and SHA digests, HMAC over the same digests
//! - CRC-32, CRC-64 and FNV checksums
//! - Secure random generation, with a separate weak generator for demos
//!
//! # Security Guarantees
//! - Caller buffers are never encrypted or decrypted in place
//! - No plaintext or key material is ever logged
//! - The primitives themselves come from the RustCrypto crates

pub mod checksum;
pub mod hash;
pub mod mac;
pub mod padding;
pub mod random;
pub mod symmetric;

pub use hash::HashAlgorithm;
pub use padding::Padding;
pub use random::RandomSource;
pub use symmetric::CipherOptions;
