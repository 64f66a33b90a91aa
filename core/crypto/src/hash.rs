//! Message digests: MD5 and the SHA-1/SHA-2 family.

use std::fmt;
use std::str::FromStr;

use digest::Digest;
use serde::{Deserialize, Serialize};

use cipherkit_common::{Encoding, Error};

/// Identifier for a supported message digest.
///
/// Used where an operation needs to pick a digest at runtime, such as
/// OAEP, PSS and PKCS#1 v1.5 signatures or Ed25519ph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HashAlgorithm {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgorithm {
    /// Digest output length in bytes.
    pub fn size(&self) -> usize {
        match self {
            HashAlgorithm::Md5 => 16,
            HashAlgorithm::Sha1 => 20,
            HashAlgorithm::Sha224 => 28,
            HashAlgorithm::Sha256 => 32,
            HashAlgorithm::Sha384 => 48,
            HashAlgorithm::Sha512 => 64,
        }
    }

    /// Canonical lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            HashAlgorithm::Md5 => "md5",
            HashAlgorithm::Sha1 => "sha1",
            HashAlgorithm::Sha224 => "sha224",
            HashAlgorithm::Sha256 => "sha256",
            HashAlgorithm::Sha384 => "sha384",
            HashAlgorithm::Sha512 => "sha512",
        }
    }

    /// Compute the raw digest of `data`.
    pub fn digest(&self, data: &[u8]) -> Vec<u8> {
        match self {
            HashAlgorithm::Md5 => digest_with::<md5::Md5>(data),
            HashAlgorithm::Sha1 => digest_with::<sha1::Sha1>(data),
            HashAlgorithm::Sha224 => digest_with::<sha2::Sha224>(data),
            HashAlgorithm::Sha256 => digest_with::<sha2::Sha256>(data),
            HashAlgorithm::Sha384 => digest_with::<sha2::Sha384>(data),
            HashAlgorithm::Sha512 => digest_with::<sha2::Sha512>(data),
        }
    }
}

impl Default for HashAlgorithm {
    fn default() -> Self {
        HashAlgorithm::Sha256
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for HashAlgorithm {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "").as_str() {
            "md5" => Ok(HashAlgorithm::Md5),
            "sha1" => Ok(HashAlgorithm::Sha1),
            "sha224" => Ok(HashAlgorithm::Sha224),
            "sha256" => Ok(HashAlgorithm::Sha256),
            "sha384" => Ok(HashAlgorithm::Sha384),
            "sha512" => Ok(HashAlgorithm::Sha512),
            _ => Err(Error::HashUnavailable(s.to_string())),
        }
    }
}

fn digest_with<D: Digest>(data: &[u8]) -> Vec<u8> {
    D::digest(data).to_vec()
}

/// MD5 digest (16 bytes), encoded.
pub fn md5(data: &[u8], encoding: Encoding) -> Vec<u8> {
    encoding.encode(&HashAlgorithm::Md5.digest(data))
}

/// SHA-1 digest (20 bytes), encoded.
pub fn sha1(data: &[u8], encoding: Encoding) -> Vec<u8> {
    encoding.encode(&HashAlgorithm::Sha1.digest(data))
}

/// SHA-224 digest (28 bytes), encoded.
pub fn sha224(data: &[u8], encoding: Encoding) -> Vec<u8> {
    encoding.encode(&HashAlgorithm::Sha224.digest(data))
}

/// SHA-256 digest (32 bytes), encoded.
pub fn sha256(data: &[u8], encoding: Encoding) -> Vec<u8> {
    encoding.encode(&HashAlgorithm::Sha256.digest(data))
}

/// SHA-384 digest (48 bytes), encoded.
pub fn sha384(data: &[u8], encoding: Encoding) -> Vec<u8> {
    encoding.encode(&HashAlgorithm::Sha384.digest(data))
}

/// SHA-512 digest (64 bytes), encoded.
pub fn sha512(data: &[u8], encoding: Encoding) -> Vec<u8> {
    encoding.encode(&HashAlgorithm::Sha512.digest(data))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_empty() {
        assert_eq!(
            sha256(b"", Encoding::Hex),
            b"e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855".to_vec()
        );
    }

    #[test]
    fn test_md5_and_sha1_vectors() {
        assert_eq!(md5(b"", Encoding::Hex), b"d41d8cd98f00b204e9800998ecf8427e".to_vec());
        assert_eq!(
            sha1(b"abc", Encoding::Hex),
            b"a9993e364706816aba3e25717850c26c9cd0d89d".to_vec()
        );
    }

    #[test]
    fn test_sha224_vector() {
        assert_eq!(
            sha224(b"abc", Encoding::Hex),
            b"23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7".to_vec()
        );
    }

    #[test]
    fn test_raw_lengths() {
        for alg in [
            HashAlgorithm::Md5,
            HashAlgorithm::Sha1,
            HashAlgorithm::Sha224,
            HashAlgorithm::Sha256,
            HashAlgorithm::Sha384,
            HashAlgorithm::Sha512,
        ] {
            assert_eq!(alg.digest(b"data").len(), alg.size());
        }
        assert_eq!(sha384(b"x", Encoding::None).len(), 48);
        assert_eq!(sha512(b"x", Encoding::None).len(), 64);
    }

    #[test]
    fn test_base64_encoding() {
        let raw = HashAlgorithm::Sha256.digest(b"hello");
        let encoded = sha256(b"hello", Encoding::Base64);
        assert_eq!(Encoding::Base64.decode(&encoded).unwrap(), raw);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("SHA-256".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Sha256);
        assert_eq!("md5".parse::<HashAlgorithm>().unwrap(), HashAlgorithm::Md5);
        assert!(matches!(
            "whirlpool".parse::<HashAlgorithm>(),
            Err(Error::HashUnavailable(_))
        ));
        assert_eq!(HashAlgorithm::Sha384.to_string(), "sha384");
    }
}
