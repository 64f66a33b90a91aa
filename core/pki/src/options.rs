//! Options records for the public-key facade.

use std::fmt;

use rand_core::CryptoRngCore;
use zeroize::Zeroizing;

use crate::x509::{PrivateKeyFormat, PublicKeyFormat};
use cipherkit_common::Encoding;
use cipherkit_crypto::{HashAlgorithm, RandomSource};

/// Options for RSA encryption and signatures.
///
/// `hash` selects the OAEP digest and `crypto_hash` the digest the
/// caller used to produce a signature input.
#[derive(Debug, Default)]
pub struct RsaOptions {
    pub random: RandomSource,
    /// OAEP digest.
    pub hash: HashAlgorithm,
    /// Digest of the data passed to sign/verify.
    pub crypto_hash: HashAlgorithm,
    /// PSS salt length; `None` means the digest length.
    pub salt: Option<usize>,
    /// Encoding of ciphertext and signature bytes.
    pub encoding: Encoding,
}

impl RsaOptions {
    /// OS randomness, SHA-256 for both digests, raw output.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw randomness from `rng` instead of the OS generator.
    pub fn with_random<R: CryptoRngCore + Send + 'static>(mut self, rng: R) -> Self {
        self.random = RandomSource::custom(rng);
        self
    }

    /// Set the OAEP digest.
    pub fn with_hash(mut self, hash: HashAlgorithm) -> Self {
        self.hash = hash;
        self
    }

    /// Set the digest of sign/verify inputs.
    pub fn with_crypto_hash(mut self, hash: HashAlgorithm) -> Self {
        self.crypto_hash = hash;
        self
    }

    /// Set the PSS salt length in bytes.
    pub fn with_salt(mut self, salt: usize) -> Self {
        self.salt = Some(salt);
        self
    }

    /// Set the ciphertext and signature encoding.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Hex-encode output.
    pub fn with_hex(self) -> Self {
        self.with_encoding(Encoding::Hex)
    }

    /// Base64-encode output.
    pub fn with_base64(self) -> Self {
        self.with_encoding(Encoding::Base64)
    }

    pub(crate) fn salt_len(&self) -> usize {
        self.salt.unwrap_or_else(|| self.crypto_hash.size())
    }
}

/// Options for Ed25519 signatures.
///
/// Without a `crypto_hash` the message is signed as-is (pure Ed25519).
/// `Sha512` switches to Ed25519ph, which may carry a `context`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Ed25519Options {
    pub crypto_hash: Option<HashAlgorithm>,
    pub context: Option<Vec<u8>>,
    pub encoding: Encoding,
}

impl Ed25519Options {
    /// Pure Ed25519, raw signatures.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-hash messages; only `Sha512` is accepted at signing time.
    pub fn with_crypto_hash(mut self, hash: HashAlgorithm) -> Self {
        self.crypto_hash = Some(hash);
        self
    }

    /// Set the Ed25519ph context string.
    pub fn with_context(mut self, context: impl Into<Vec<u8>>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Set the signature encoding.
    pub fn with_encoding(mut self, encoding: Encoding) -> Self {
        self.encoding = encoding;
        self
    }

    /// Hex-encode signatures.
    pub fn with_hex(self) -> Self {
        self.with_encoding(Encoding::Hex)
    }

    /// Base64-encode signatures.
    pub fn with_base64(self) -> Self {
        self.with_encoding(Encoding::Base64)
    }
}

/// Options for key generation and key file I/O.
#[derive(Default)]
pub struct KeyOptions {
    pub random: RandomSource,
    /// Ed25519 seed; used only when exactly 32 bytes long.
    pub seed: Option<Zeroizing<Vec<u8>>>,
    pub encode_private: PrivateKeyFormat,
    pub encode_public: PublicKeyFormat,
    pub decode_private: PrivateKeyFormat,
    pub decode_public: PublicKeyFormat,
}

impl KeyOptions {
    /// OS randomness, PKCS#8 private keys and PKIX public keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Draw randomness from `rng` instead of the OS generator.
    pub fn with_random<R: CryptoRngCore + Send + 'static>(mut self, rng: R) -> Self {
        self.random = RandomSource::custom(rng);
        self
    }

    /// Derive Ed25519 keys from a 32-byte seed.
    pub fn with_seed(mut self, seed: impl Into<Vec<u8>>) -> Self {
        self.seed = Some(Zeroizing::new(seed.into()));
        self
    }

    /// Set the format private keys are written in.
    pub fn with_encode_private(mut self, format: PrivateKeyFormat) -> Self {
        self.encode_private = format;
        self
    }

    /// Set the format public keys are written in.
    pub fn with_encode_public(mut self, format: PublicKeyFormat) -> Self {
        self.encode_public = format;
        self
    }

    /// Set the format private keys are read in.
    pub fn with_decode_private(mut self, format: PrivateKeyFormat) -> Self {
        self.decode_private = format;
        self
    }

    /// Set the format public keys are read in.
    pub fn with_decode_public(mut self, format: PublicKeyFormat) -> Self {
        self.decode_public = format;
        self
    }
}

impl fmt::Debug for KeyOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyOptions")
            .field("random", &self.random)
            .field("seed", &self.seed.as_ref().map(|_| "[REDACTED]"))
            .field("encode_private", &self.encode_private)
            .field("encode_public", &self.encode_public)
            .field("decode_private", &self.decode_private)
            .field("decode_public", &self.decode_public)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_rsa_defaults() {
        let opts = RsaOptions::new();
        assert!(opts.random.is_os());
        assert_eq!(opts.hash, HashAlgorithm::Sha256);
        assert_eq!(opts.crypto_hash, HashAlgorithm::Sha256);
        assert_eq!(opts.salt_len(), 32);
        assert_eq!(opts.encoding, Encoding::None);
    }

    #[test]
    fn test_rsa_builders_last_wins() {
        let opts = RsaOptions::new()
            .with_random(StdRng::seed_from_u64(7))
            .with_crypto_hash(HashAlgorithm::Sha512)
            .with_hex()
            .with_base64();
        assert!(!opts.random.is_os());
        assert_eq!(opts.salt_len(), 64);
        assert_eq!(opts.encoding, Encoding::Base64);
        assert_eq!(opts.with_salt(8).salt_len(), 8);
    }

    #[test]
    fn test_ed25519_builders() {
        let opts = Ed25519Options::new()
            .with_crypto_hash(HashAlgorithm::Sha512)
            .with_context(b"ctx".to_vec())
            .with_hex();
        assert_eq!(opts.crypto_hash, Some(HashAlgorithm::Sha512));
        assert_eq!(opts.context.as_deref(), Some(&b"ctx"[..]));
        assert_eq!(opts.encoding, Encoding::Hex);
    }

    #[test]
    fn test_key_options_defaults() {
        let opts = KeyOptions::new();
        assert_eq!(opts.encode_private, PrivateKeyFormat::Pkcs8);
        assert_eq!(opts.decode_private, PrivateKeyFormat::Pkcs8);
        assert_eq!(opts.encode_public, PublicKeyFormat::Pkix);
        assert_eq!(opts.decode_public, PublicKeyFormat::Pkix);
        assert!(opts.seed.is_none());
    }

    #[test]
    fn test_key_options_debug_redacts_seed() {
        let opts = KeyOptions::new().with_seed(vec![0x42u8; 32]);
        let debug = format!("{:?}", opts);
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("66"));
    }
}
