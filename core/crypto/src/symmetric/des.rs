//! Single DES in ECB, CBC, CFB, OFB and CTR modes.
//!
//! DES is kept for interoperability with legacy systems. Keys and IVs are
//! both 8 bytes.

use des::Des;

use super::modes;
use super::options::CipherOptions;
use cipherkit_common::Result;

/// DES block size in bytes.
pub const BLOCK_SIZE: usize = 8;

/// DES key size in bytes.
pub const KEY_SIZE: usize = 8;

/// Encrypt with DES in ECB mode.
pub fn encrypt_ecb(plaintext: &[u8], key: &[u8], opts: &CipherOptions) -> Result<Vec<u8>> {
    modes::ecb_encrypt::<Des>(plaintext, key, opts)
}

/// Decrypt DES-ECB ciphertext.
pub fn decrypt_ecb(ciphertext: &[u8], key: &[u8], opts: &CipherOptions) -> Result<Vec<u8>> {
    modes::ecb_decrypt::<Des>(ciphertext, key, opts)
}

/// Encrypt with DES in CBC mode.
pub fn encrypt_cbc(plaintext: &[u8], key: &[u8], iv: &[u8], opts: &CipherOptions) -> Result<Vec<u8>> {
    modes::cbc_encrypt::<cbc::Encryptor<Des>>(plaintext, key, iv, opts)
}

/// Decrypt DES-CBC ciphertext.
pub fn decrypt_cbc(ciphertext: &[u8], key: &[u8], iv: &[u8], opts: &CipherOptions) -> Result<Vec<u8>> {
    modes::cbc_decrypt::<cbc::Decryptor<Des>>(ciphertext, key, iv, opts)
}

/// Encrypt with DES in full-block CFB mode.
pub fn encrypt_cfb(plaintext: &[u8], key: &[u8], iv: &[u8], opts: &CipherOptions) -> Result<Vec<u8>> {
    modes::cfb_encrypt::<cfb_mode::Encryptor<Des>>(plaintext, key, iv, opts)
}

/// Decrypt DES-CFB ciphertext.
pub fn decrypt_cfb(ciphertext: &[u8], key: &[u8], iv: &[u8], opts: &CipherOptions) -> Result<Vec<u8>> {
    modes::cfb_decrypt::<cfb_mode::Decryptor<Des>>(ciphertext, key, iv, opts)
}

/// Encrypt with DES in OFB mode.
pub fn encrypt_ofb(plaintext: &[u8], key: &[u8], iv: &[u8], opts: &CipherOptions) -> Result<Vec<u8>> {
    modes::stream_encrypt::<ofb::Ofb<Des>>(plaintext, key, iv, opts)
}

/// Decrypt DES-OFB ciphertext.
pub fn decrypt_ofb(ciphertext: &[u8], key: &[u8], iv: &[u8], opts: &CipherOptions) -> Result<Vec<u8>> {
    modes::stream_decrypt::<ofb::Ofb<Des>>(ciphertext, key, iv, opts)
}

/// Encrypt with DES in CTR mode; the whole IV is a 64-bit big-endian counter.
pub fn encrypt_ctr(plaintext: &[u8], key: &[u8], iv: &[u8], opts: &CipherOptions) -> Result<Vec<u8>> {
    modes::stream_encrypt::<ctr::Ctr64BE<Des>>(plaintext, key, iv, opts)
}

/// Decrypt DES-CTR ciphertext.
pub fn decrypt_ctr(ciphertext: &[u8], key: &[u8], iv: &[u8], opts: &CipherOptions) -> Result<Vec<u8>> {
    modes::stream_decrypt::<ctr::Ctr64BE<Des>>(ciphertext, key, iv, opts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cipherkit_common::Error;

    const KEY: &[u8] = b"12345678";
    const IV: &[u8] = b"87654321";

    #[test]
    fn test_cbc_pkcs7_empty_vector() {
        let opts = CipherOptions::new().with_pkcs7().with_hex();
        let ct = encrypt_cbc(b"", KEY, IV, &opts).unwrap();
        assert_eq!(ct, b"cdacc683dab0afbc".to_vec());
        assert!(decrypt_cbc(&ct, KEY, IV, &opts).unwrap().is_empty());
    }

    #[test]
    fn test_ecb_known_answer() {
        // FIPS 81 style single-block check.
        let key = hex::decode("133457799bbcdff1").unwrap();
        let pt = hex::decode("0123456789abcdef").unwrap();
        let ct = encrypt_ecb(&pt, &key, &CipherOptions::new().with_hex()).unwrap();
        assert_eq!(ct, b"85e813540f0ab405".to_vec());
    }

    #[test]
    fn test_pkcs5_block_count() {
        let opts = CipherOptions::new().with_pkcs5();
        assert_eq!(encrypt_ecb(b"", KEY, &opts).unwrap().len(), BLOCK_SIZE);
        assert_eq!(encrypt_ecb(b"1234567", KEY, &opts).unwrap().len(), BLOCK_SIZE);
        assert_eq!(encrypt_ecb(b"12345678", KEY, &opts).unwrap().len(), 2 * BLOCK_SIZE);
    }

    #[test]
    fn test_invalid_key_and_iv() {
        let opts = CipherOptions::new().with_pkcs7();
        assert!(matches!(encrypt_ecb(b"x", b"1234567", &opts), Err(Error::InvalidKey(_))));
        assert!(matches!(
            encrypt_cbc(b"x", b"123456789", IV, &opts),
            Err(Error::InvalidKey(_))
        ));
        assert!(matches!(
            encrypt_ctr(b"x", KEY, b"1234567890123456", &opts),
            Err(Error::InvalidIv(_))
        ));
    }

    #[test]
    fn test_stream_roundtrips() {
        let opts = CipherOptions::new().with_base64();
        let plaintext = b"legacy DES traffic, 33 bytes long";

        let ct = encrypt_cfb(plaintext, KEY, IV, &opts).unwrap();
        assert_eq!(decrypt_cfb(&ct, KEY, IV, &opts).unwrap(), plaintext);
        let ct = encrypt_ofb(plaintext, KEY, IV, &opts).unwrap();
        assert_eq!(decrypt_ofb(&ct, KEY, IV, &opts).unwrap(), plaintext);
        let ct = encrypt_ctr(plaintext, KEY, IV, &opts).unwrap();
        assert_eq!(decrypt_ctr(&ct, KEY, IV, &opts).unwrap(), plaintext);
    }

    #[test]
    fn test_zero_padding_on_unpadded_data() {
        let opts = CipherOptions::new();
        let ct = encrypt_ecb(b"abcdefgh", KEY, &opts).unwrap();
        let zero = CipherOptions::new().with_zero();
        assert_eq!(decrypt_ecb(&ct, KEY, &zero).unwrap(), b"abcdefgh");
    }
}
