//! Byte buffers shared across CipherKit modules.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use crate::encoding::Encoding;
use crate::Result;

/// Permission bits for files created by [`ByteString::write_to_file`].
pub const FILE_MODE: u32 = 0o644;

/// An owned, contiguous byte buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ByteString(Vec<u8>);

impl ByteString {
    /// Create a byte string from owned bytes.
    pub fn new(data: Vec<u8>) -> Self {
        Self(data)
    }

    /// Get the raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Consume into the inner vector.
    pub fn into_vec(self) -> Vec<u8> {
        self.0
    }

    /// Get the length.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Lowercase hex representation.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }

    /// Standard padded base64 representation.
    pub fn to_base64(&self) -> String {
        use base64::{engine::general_purpose::STANDARD, Engine as _};
        STANDARD.encode(&self.0)
    }

    /// Re-encode the bytes with the given encoding.
    pub fn encode(&self, encoding: Encoding) -> Vec<u8> {
        encoding.encode(&self.0)
    }

    /// Write all bytes to a sink.
    pub fn write_to<W: Write>(&self, mut sink: W) -> Result<()> {
        sink.write_all(&self.0)?;
        sink.flush()?;
        Ok(())
    }

    /// Write all bytes to a new file.
    ///
    /// # Preconditions
    /// - `path` must not exist
    ///
    /// # Postconditions
    /// - File is created with mode 0644 (on Unix) and holds exactly these bytes
    ///
    /// # Errors
    /// - `Error::Io` if the file already exists or cannot be written
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        write_new_file(path.as_ref(), &self.0)
    }
}

impl From<Vec<u8>> for ByteString {
    fn from(data: Vec<u8>) -> Self {
        Self(data)
    }
}

impl From<&[u8]> for ByteString {
    fn from(data: &[u8]) -> Self {
        Self(data.to_vec())
    }
}

impl From<&str> for ByteString {
    fn from(data: &str) -> Self {
        Self(data.as_bytes().to_vec())
    }
}

impl AsRef<[u8]> for ByteString {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Create `path` exclusively and write `data` into it.
///
/// The handle is closed when it goes out of scope, on success and on error.
pub fn write_new_file(path: &Path, data: &[u8]) -> Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create_new(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }

    let mut file = options.open(path)?;
    file.write_all(data)?;
    file.sync_all()?;
    Ok(())
}
