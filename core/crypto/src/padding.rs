//! Block padding schemes.
//!
//! `Pkcs5` and `Pkcs7` share one implementation: PKCS#5 is the historical
//! name for PKCS#7 over 8-byte blocks.

use serde::{Deserialize, Serialize};

use cipherkit_common::{Error, Result};

/// Padding applied before ECB/CBC encryption and removed after decryption.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Padding {
    /// No padding; input must already be block-aligned for ECB/CBC.
    #[default]
    None,
    /// Zero-fill up to the next block boundary (always at least one byte).
    Zero,
    /// Alias of [`Padding::Pkcs7`].
    Pkcs5,
    /// `k` copies of byte `k`, with `1 <= k <= block_size`.
    Pkcs7,
}

/// Largest block size a single PKCS#7 pad byte can describe.
pub const MAX_BLOCK_SIZE: usize = 255;

fn check_block_size(block_size: usize) -> Result<()> {
    if block_size == 0 || block_size > MAX_BLOCK_SIZE {
        return Err(Error::InvalidInput(format!(
            "block size must be 1..={}, got {}",
            MAX_BLOCK_SIZE, block_size
        )));
    }
    Ok(())
}

impl Padding {
    /// Return a padded copy of `data` for the given block size.
    ///
    /// # Errors
    /// - `Error::InvalidInput` if `block_size` is not in `1..=255`
    pub fn pad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        check_block_size(block_size)?;
        let fill = block_size - data.len() % block_size;
        let mut out = Vec::with_capacity(data.len() + fill);
        out.extend_from_slice(data);
        match self {
            Padding::None => {}
            Padding::Zero => out.resize(data.len() + fill, 0),
            Padding::Pkcs5 | Padding::Pkcs7 => out.resize(data.len() + fill, fill as u8),
        }
        Ok(out)
    }

    /// Return `data` with its padding removed.
    ///
    /// # Errors
    /// - `Error::InvalidInput` if `block_size` is not in `1..=255`
    /// - `Error::InvalidPadding` if a PKCS#7 pad byte is zero or exceeds
    ///   the block size or the input length
    pub fn unpad(&self, data: &[u8], block_size: usize) -> Result<Vec<u8>> {
        check_block_size(block_size)?;
        match self {
            Padding::None => Ok(data.to_vec()),
            Padding::Zero => {
                let stripped = data
                    .iter()
                    .rev()
                    .take(block_size)
                    .take_while(|&&b| b == 0)
                    .count();
                Ok(data[..data.len() - stripped].to_vec())
            }
            Padding::Pkcs5 | Padding::Pkcs7 => {
                let k = match data.last() {
                    Some(&k) => k as usize,
                    None => return Err(Error::InvalidPadding("empty input".to_string())),
                };
                if k == 0 || k > data.len() || k > block_size {
                    return Err(Error::InvalidPadding(format!(
                        "pad byte {} out of range for block size {}",
                        k, block_size
                    )));
                }
                Ok(data[..data.len() - k].to_vec())
            }
        }
    }
}
