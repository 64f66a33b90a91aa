//! Random byte and string generation.
//!
//! The top-level functions draw from the operating system CSPRNG. The
//! [`weak`] module is a separate, non-cryptographic generator for
//! placeholder IVs and keys in demos and tests.

use std::fmt;
use std::sync::{Mutex, PoisonError};

use rand_core::{CryptoRngCore, OsRng, RngCore};

use cipherkit_common::{Error, Result};

/// The 62-symbol alphabet used for printable random output.
pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Largest multiple of the alphabet size that fits in a byte.
const ALPHABET_ZONE: u8 = 248;

/// Generate `n` bytes from the OS CSPRNG.
///
/// # Errors
/// - `Error::Random` if the OS generator fails
pub fn bytes(n: usize) -> Result<Vec<u8>> {
    let mut out = vec![0u8; n];
    OsRng
        .try_fill_bytes(&mut out)
        .map_err(|e| Error::Random(e.to_string()))?;
    Ok(out)
}

/// Generate `n` alphanumeric characters from the OS CSPRNG.
///
/// # Errors
/// - `Error::Random` if the OS generator fails
pub fn string(n: usize) -> Result<String> {
    let mut out = String::with_capacity(n);
    let mut buf = [0u8; 64];
    while out.len() < n {
        OsRng
            .try_fill_bytes(&mut buf)
            .map_err(|e| Error::Random(e.to_string()))?;
        // Rejection sampling keeps the distribution uniform.
        for &b in buf.iter().filter(|&&b| b < ALPHABET_ZONE) {
            if out.len() == n {
                break;
            }
            out.push(ALPHABET[(b % 62) as usize] as char);
        }
    }
    Ok(out)
}

/// Non-cryptographic random generation.
///
/// # Security
/// Output is predictable. Never use it for production keys, IVs or nonces.
pub mod weak {
    use rand::distributions::Alphanumeric;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use tracing::warn;

    /// Generate `n` alphanumeric bytes.
    pub fn bytes(n: usize) -> Vec<u8> {
        warn!(len = n, "Generating weak random bytes");
        SmallRng::from_entropy()
            .sample_iter(Alphanumeric)
            .take(n)
            .collect()
    }

    /// Generate a string of `n` alphanumeric characters.
    pub fn string(n: usize) -> String {
        bytes(n).into_iter().map(char::from).collect()
    }

    /// Return `dst` with `n` alphanumeric bytes appended.
    pub fn append_bytes(mut dst: Vec<u8>, n: usize) -> Vec<u8> {
        dst.extend(bytes(n));
        dst
    }
}

/// Random source used by operations that consume randomness.
///
/// Defaults to the OS CSPRNG. A caller-supplied generator is kept behind a
/// mutex so the source can be shared between threads.
#[derive(Default)]
pub struct RandomSource {
    custom: Option<Mutex<Box<dyn CryptoRngCore + Send>>>,
}

impl RandomSource {
    /// Use the OS CSPRNG.
    pub fn os() -> Self {
        Self { custom: None }
    }

    /// Use a caller-supplied cryptographic generator.
    pub fn custom<R: CryptoRngCore + Send + 'static>(rng: R) -> Self {
        Self {
            custom: Some(Mutex::new(Box::new(rng))),
        }
    }

    /// Check whether this source is the OS CSPRNG.
    pub fn is_os(&self) -> bool {
        self.custom.is_none()
    }

    /// Run `f` with exclusive access to the generator.
    pub fn with_rng<T>(&self, f: impl FnOnce(&mut dyn CryptoRngCore) -> T) -> T {
        match &self.custom {
            None => f(&mut OsRng),
            Some(rng) => {
                let mut guard = rng.lock().unwrap_or_else(PoisonError::into_inner);
                f(guard.as_mut())
            }
        }
    }

    /// Fill `dest` with random bytes.
    ///
    /// # Errors
    /// - `Error::Random` if the generator fails
    pub fn fill(&self, dest: &mut [u8]) -> Result<()> {
        self.with_rng(|rng| rng.try_fill_bytes(dest))
            .map_err(|e| Error::Random(e.to_string()))
    }
}

impl fmt::Debug for RandomSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_os() {
            write!(f, "RandomSource(Os)")
        } else {
            write!(f, "RandomSource(Custom)")
        }
    }
}
