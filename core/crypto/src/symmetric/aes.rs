//! AES in ECB, CBC, CFB, OFB, CTR and GCM modes.
//!
//! The key length selects the variant: 16 bytes for AES-128, 24 for
//! AES-192 and 32 for AES-256. IVs are 16 bytes; GCM nonces are 12.

use aes::{Aes128, Aes192, Aes256};
use aes_gcm::aead::consts::U12;
use aes_gcm::AesGcm;

use super::modes::{self, GCM_NONCE_SIZE};
use super::options::CipherOptions;
use crate::random::RandomSource;
use cipherkit_common::{Error, Result};

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;

/// Pick the AES variant from the key length and run `$run::<variant type>`.
macro_rules! with_aes {
    ($key:expr, |$cipher:ident| $run:expr) => {
        match $key.len() {
            16 => {
                type $cipher = Aes128;
                $run
            }
            24 => {
                type $cipher = Aes192;
                $run
            }
            32 => {
                type $cipher = Aes256;
                $run
            }
            n => Err(Error::InvalidKey(format!(
                "AES key must be 16, 24 or 32 bytes, got {}",
                n
            ))),
        }
    };
}

/// Encrypt with AES in ECB mode.
///
/// # Errors
/// - `Error::InvalidKey` if the key is not 16, 24 or 32 bytes
/// - `Error::InvalidLength` if the padded input is not block-aligned
pub fn encrypt_ecb(plaintext: &[u8], key: &[u8], opts: &CipherOptions) -> Result<Vec<u8>> {
    with_aes!(key, |C| modes::ecb_encrypt::<C>(plaintext, key, opts))
}

/// Decrypt AES-ECB ciphertext.
pub fn decrypt_ecb(ciphertext: &[u8], key: &[u8], opts: &CipherOptions) -> Result<Vec<u8>> {
    with_aes!(key, |C| modes::ecb_decrypt::<C>(ciphertext, key, opts))
}

/// Encrypt with AES in CBC mode.
///
/// # Errors
/// - `Error::InvalidKey` for a bad key length
/// - `Error::InvalidIv` if `iv` is not 16 bytes
/// - `Error::InvalidLength` if the padded input is not block-aligned
pub fn encrypt_cbc(plaintext: &[u8], key: &[u8], iv: &[u8], opts: &CipherOptions) -> Result<Vec<u8>> {
    with_aes!(key, |C| modes::cbc_encrypt::<cbc::Encryptor<C>>(plaintext, key, iv, opts))
}

/// Decrypt AES-CBC ciphertext.
pub fn decrypt_cbc(ciphertext: &[u8], key: &[u8], iv: &[u8], opts: &CipherOptions) -> Result<Vec<u8>> {
    with_aes!(key, |C| modes::cbc_decrypt::<cbc::Decryptor<C>>(ciphertext, key, iv, opts))
}

/// Encrypt with AES in full-block CFB mode. Output length equals input length.
pub fn encrypt_cfb(plaintext: &[u8], key: &[u8], iv: &[u8], opts: &CipherOptions) -> Result<Vec<u8>> {
    with_aes!(key, |C| modes::cfb_encrypt::<cfb_mode::Encryptor<C>>(plaintext, key, iv, opts))
}

/// Decrypt AES-CFB ciphertext.
pub fn decrypt_cfb(ciphertext: &[u8], key: &[u8], iv: &[u8], opts: &CipherOptions) -> Result<Vec<u8>> {
    with_aes!(key, |C| modes::cfb_decrypt::<cfb_mode::Decryptor<C>>(ciphertext, key, iv, opts))
}

/// Encrypt with AES in OFB mode.
pub fn encrypt_ofb(plaintext: &[u8], key: &[u8], iv: &[u8], opts: &CipherOptions) -> Result<Vec<u8>> {
    with_aes!(key, |C| modes::stream_encrypt::<ofb::Ofb<C>>(plaintext, key, iv, opts))
}

/// Decrypt AES-OFB ciphertext.
pub fn decrypt_ofb(ciphertext: &[u8], key: &[u8], iv: &[u8], opts: &CipherOptions) -> Result<Vec<u8>> {
    with_aes!(key, |C| modes::stream_decrypt::<ofb::Ofb<C>>(ciphertext, key, iv, opts))
}

/// Encrypt with AES in CTR mode; the whole IV is a 128-bit big-endian counter.
pub fn encrypt_ctr(plaintext: &[u8], key: &[u8], iv: &[u8], opts: &CipherOptions) -> Result<Vec<u8>> {
    with_aes!(key, |C| modes::stream_encrypt::<ctr::Ctr128BE<C>>(plaintext, key, iv, opts))
}

/// Decrypt AES-CTR ciphertext.
pub fn decrypt_ctr(ciphertext: &[u8], key: &[u8], iv: &[u8], opts: &CipherOptions) -> Result<Vec<u8>> {
    with_aes!(key, |C| modes::stream_decrypt::<ctr::Ctr128BE<C>>(ciphertext, key, iv, opts))
}

/// Encrypt with AES-GCM.
///
/// # Preconditions
/// - `nonce` must be 12 bytes and unique for each message under `key`
///
/// # Postconditions
/// - Returns `ciphertext || tag`, encoded per `opts`
/// - Associated data comes from `opts.additional`
///
/// # Errors
/// - `Error::InvalidKey` for a bad key length
/// - `Error::InvalidNonce` if `nonce` is not 12 bytes
pub fn encrypt_gcm(plaintext: &[u8], key: &[u8], nonce: &[u8], opts: &CipherOptions) -> Result<Vec<u8>> {
    with_aes!(key, |C| modes::gcm_encrypt::<AesGcm<C, U12>>(plaintext, key, nonce, opts))
}

/// Decrypt and authenticate AES-GCM output.
///
/// # Errors
/// - `Error::AuthenticationFailed` if ciphertext, nonce, key or associated
///   data differ from encryption
pub fn decrypt_gcm(ciphertext: &[u8], key: &[u8], nonce: &[u8], opts: &CipherOptions) -> Result<Vec<u8>> {
    with_aes!(key, |C| modes::gcm_decrypt::<AesGcm<C, U12>>(ciphertext, key, nonce, opts))
}

/// Generate a random 12-byte GCM nonce from the OS CSPRNG.
pub fn nonce() -> Result<[u8; GCM_NONCE_SIZE]> {
    let mut nonce = [0u8; GCM_NONCE_SIZE];
    RandomSource::os().fill(&mut nonce)?;
    Ok(nonce)
}
