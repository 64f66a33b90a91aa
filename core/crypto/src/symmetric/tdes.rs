//! Triple DES (EDE, three keys) in ECB, CBC, CFB, OFB and CTR modes.

use des::TdesEde3;

use super::modes;
use super::options::CipherOptions;
use cipherkit_common::Result;

/// 3DES block size in bytes.
pub const BLOCK_SIZE: usize = 8;

/// 3DES key size in bytes (K1 || K2 || K3).
pub const KEY_SIZE: usize = 24;

/// Encrypt with 3DES in ECB mode.
pub fn encrypt_ecb(plaintext: &[u8], key: &[u8], opts: &CipherOptions) -> Result<Vec<u8>> {
    modes::ecb_encrypt::<TdesEde3>(plaintext, key, opts)
}

/// Decrypt 3DES-ECB ciphertext.
pub fn decrypt_ecb(ciphertext: &[u8], key: &[u8], opts: &CipherOptions) -> Result<Vec<u8>> {
    modes::ecb_decrypt::<TdesEde3>(ciphertext, key, opts)
}

/// Encrypt with 3DES in CBC mode.
pub fn encrypt_cbc(plaintext: &[u8], key: &[u8], iv: &[u8], opts: &CipherOptions) -> Result<Vec<u8>> {
    modes::cbc_encrypt::<cbc::Encryptor<TdesEde3>>(plaintext, key, iv, opts)
}

/// Decrypt 3DES-CBC ciphertext.
pub fn decrypt_cbc(ciphertext: &[u8], key: &[u8], iv: &[u8], opts: &CipherOptions) -> Result<Vec<u8>> {
    modes::cbc_decrypt::<cbc::Decryptor<TdesEde3>>(ciphertext, key, iv, opts)
}

/// Encrypt with 3DES in CFB mode.
pub fn encrypt_cfb(plaintext: &[u8], key: &[u8], iv: &[u8], opts: &CipherOptions) -> Result<Vec<u8>> {
    modes::cfb_encrypt::<cfb_mode::Encryptor<TdesEde3>>(plaintext, key, iv, opts)
}

/// Decrypt 3DES-CFB ciphertext.
pub fn decrypt_cfb(ciphertext: &[u8], key: &[u8], iv: &[u8], opts: &CipherOptions) -> Result<Vec<u8>> {
    modes::cfb_decrypt::<cfb_mode::Decryptor<TdesEde3>>(ciphertext, key, iv, opts)
}

/// Encrypt with 3DES in OFB mode.
pub fn encrypt_ofb(plaintext: &[u8], key: &[u8], iv: &[u8], opts: &CipherOptions) -> Result<Vec<u8>> {
    modes::stream_encrypt::<ofb::Ofb<TdesEde3>>(plaintext, key, iv, opts)
}

/// Decrypt 3DES-OFB ciphertext.
pub fn decrypt_ofb(ciphertext: &[u8], key: &[u8], iv: &[u8], opts: &CipherOptions) -> Result<Vec<u8>> {
    modes::stream_decrypt::<ofb::Ofb<TdesEde3>>(ciphertext, key, iv, opts)
}

/// Encrypt with 3DES in CTR mode.
pub fn encrypt_ctr(plaintext: &[u8], key: &[u8], iv: &[u8], opts: &CipherOptions) -> Result<Vec<u8>> {
    modes::stream_encrypt::<ctr::Ctr64BE<TdesEde3>>(plaintext, key, iv, opts)
}

/// Decrypt 3DES-CTR ciphertext.
pub fn decrypt_ctr(ciphertext: &[u8], key: &[u8], iv: &[u8], opts: &CipherOptions) -> Result<Vec<u8>> {
    modes::stream_decrypt::<ctr::Ctr64BE<TdesEde3>>(ciphertext, key, iv, opts)
}
