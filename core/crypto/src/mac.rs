//! Keyed message authentication codes (HMAC).

use digest::core_api::BlockSizeUser;
use digest::Digest;
use hmac::{Mac, SimpleHmac};

use crate::hash::HashAlgorithm;
use cipherkit_common::{Encoding, Error, Result};

/// Compute an HMAC tag over `data` with the given digest, encoded.
///
/// # Errors
/// - `Error::InvalidKey` if the MAC rejects the key
pub fn hmac(alg: HashAlgorithm, key: &[u8], data: &[u8], encoding: Encoding) -> Result<Vec<u8>> {
    let tag = match alg {
        HashAlgorithm::Md5 => tag_with::<md5::Md5>(key, data)?,
        HashAlgorithm::Sha1 => tag_with::<sha1::Sha1>(key, data)?,
        HashAlgorithm::Sha224 => tag_with::<sha2::Sha224>(key, data)?,
        HashAlgorithm::Sha256 => tag_with::<sha2::Sha256>(key, data)?,
        HashAlgorithm::Sha384 => tag_with::<sha2::Sha384>(key, data)?,
        HashAlgorithm::Sha512 => tag_with::<sha2::Sha512>(key, data)?,
    };
    Ok(encoding.encode(&tag))
}

fn tag_with<D: Digest + BlockSizeUser>(key: &[u8], data: &[u8]) -> Result<Vec<u8>> {
    let mut mac = <SimpleHmac<D> as Mac>::new_from_slice(key)
        .map_err(|e| Error::InvalidKey(format!("HMAC key rejected: {}", e)))?;
    mac.update(data);
    Ok(mac.finalize().into_bytes().to_vec())
}

/// HMAC-MD5, encoded.
pub fn hmac_md5(key: &[u8], data: &[u8], encoding: Encoding) -> Result<Vec<u8>> {
    hmac(HashAlgorithm::Md5, key, data, encoding)
}

/// HMAC-SHA-1, encoded.
pub fn hmac_sha1(key: &[u8], data: &[u8], encoding: Encoding) -> Result<Vec<u8>> {
    hmac(HashAlgorithm::Sha1, key, data, encoding)
}

/// HMAC-SHA-224, encoded.
pub fn hmac_sha224(key: &[u8], data: &[u8], encoding: Encoding) -> Result<Vec<u8>> {
    hmac(HashAlgorithm::Sha224, key, data, encoding)
}

/// HMAC-SHA-256, encoded.
pub fn hmac_sha256(key: &[u8], data: &[u8], encoding: Encoding) -> Result<Vec<u8>> {
    hmac(HashAlgorithm::Sha256, key, data, encoding)
}

/// HMAC-SHA-384, encoded.
pub fn hmac_sha384(key: &[u8], data: &[u8], encoding: Encoding) -> Result<Vec<u8>> {
    hmac(HashAlgorithm::Sha384, key, data, encoding)
}

/// HMAC-SHA-512, encoded.
pub fn hmac_sha512(key: &[u8], data: &[u8], encoding: Encoding) -> Result<Vec<u8>> {
    hmac(HashAlgorithm::Sha512, key, data, encoding)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hmac_sha256_unicode() {
        let tag = hmac_sha256(b"key", "你好，世界".as_bytes(), Encoding::Hex).unwrap();
        assert_eq!(
            tag,
            b"ecebc269659999d50a6f74743f5814cf08000c7f7da1bf4efd46ed651778ed94".to_vec()
        );
    }

    #[test]
    fn test_hmac_rfc2202_md5_and_sha1() {
        let data = b"what do ya want for nothing?";
        assert_eq!(
            hmac_md5(b"Jefe", data, Encoding::Hex).unwrap(),
            b"750c783e6ab0b503eaa86e310a5db738".to_vec()
        );
        assert_eq!(
            hmac_sha1(b"Jefe", data, Encoding::Hex).unwrap(),
            b"effcdf6ae5eb2fa2d27416d5f184df9c259a7c79".to_vec()
        );
    }

    #[test]
    fn test_hmac_lengths() {
        assert_eq!(hmac_sha224(b"k", b"d", Encoding::None).unwrap().len(), 28);
        assert_eq!(hmac_sha384(b"k", b"d", Encoding::None).unwrap().len(), 48);
        assert_eq!(hmac_sha512(b"k", b"d", Encoding::None).unwrap().len(), 64);
    }

    #[test]
    fn test_hmac_key_matters() {
        let a = hmac_sha256(b"key-a", b"msg", Encoding::None).unwrap();
        let b = hmac_sha256(b"key-b", b"msg", Encoding::None).unwrap();
        assert_ne!(a, b);
        // Empty and very long keys are both accepted.
        assert!(hmac_sha256(b"", b"msg", Encoding::None).is_ok());
        assert!(hmac_sha256(&[7u8; 300], b"msg", Encoding::None).is_ok());
    }
}
