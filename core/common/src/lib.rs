//! Common utilities and types shared across CipherKit modules.
//!
//! This crate provides the error taxonomy, byte buffers and output
//! encodings used by both the symmetric and the public-key facades.

pub mod bytes;
pub mod encoding;
pub mod error;

pub use bytes::{write_new_file, ByteString};
pub use encoding::Encoding;
pub use error::{Error, Result};
