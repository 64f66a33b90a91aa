//! Symmetric cipher facade.
//!
//! Each cipher family module (`aes`, `des`, `tdes`) exposes
//! `encrypt_<mode>` / `decrypt_<mode>` free functions taking a
//! [`CipherOptions`] for padding, output encoding and (GCM only)
//! associated data.
//!
//! | Mode | IV | Padding | Output length |
//! |------|----|---------|---------------|
//! | ECB  | none | applied | multiple of block size |
//! | CBC  | block size | applied | multiple of block size |
//! | CFB, OFB, CTR | block size | ignored | input length |
//! | GCM (AES) | 12-byte nonce | ignored | input length + 16 |

pub mod aes;
pub mod des;
mod modes;
pub mod options;
pub mod tdes;

pub use modes::{GCM_NONCE_SIZE, GCM_TAG_SIZE};
pub use options::CipherOptions;
