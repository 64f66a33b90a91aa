//! Block cipher modes, generic over the underlying block cipher.
//!
//! Every function works on a fresh owned buffer; caller input is never
//! transformed in place. Encryption pads (ECB/CBC only), transforms and
//! encodes. Decryption decodes, transforms and unpads (ECB/CBC only).
//! Plaintext scratch buffers are zeroized on drop in every mode.

use aes_gcm::aead::{Aead, Payload};
use cipher::generic_array::GenericArray;
use cipher::{
    AsyncStreamCipher, BlockDecrypt, BlockDecryptMut, BlockEncrypt, BlockEncryptMut, KeyInit,
    KeyIvInit, StreamCipher,
};
use zeroize::Zeroizing;

use super::options::CipherOptions;
use cipherkit_common::{Error, Result};

/// GCM nonce length in bytes.
pub const GCM_NONCE_SIZE: usize = 12;

/// GCM authentication tag length in bytes.
pub const GCM_TAG_SIZE: usize = 16;

fn new_cipher<C: KeyInit>(key: &[u8]) -> Result<C> {
    C::new_from_slice(key).map_err(|_| {
        Error::InvalidKey(format!(
            "expected {} bytes, got {}",
            C::key_size(),
            key.len()
        ))
    })
}

/// Validate key and IV lengths, then build the mode.
fn new_mode<M: KeyIvInit>(key: &[u8], iv: &[u8]) -> Result<M> {
    if key.len() != M::key_size() {
        return Err(Error::InvalidKey(format!(
            "expected {} bytes, got {}",
            M::key_size(),
            key.len()
        )));
    }
    if iv.len() != M::iv_size() {
        return Err(Error::InvalidIv(format!(
            "expected {} bytes, got {}",
            M::iv_size(),
            iv.len()
        )));
    }
    M::new_from_slices(key, iv).map_err(|e| Error::InvalidKey(e.to_string()))
}

fn check_aligned(len: usize, block_size: usize) -> Result<()> {
    if len % block_size != 0 {
        return Err(Error::InvalidLength(format!(
            "{} bytes is not a multiple of the {}-byte block size",
            len, block_size
        )));
    }
    Ok(())
}

pub(crate) fn ecb_encrypt<C>(plaintext: &[u8], key: &[u8], opts: &CipherOptions) -> Result<Vec<u8>>
where
    C: KeyInit + BlockEncrypt,
{
    let cipher = new_cipher::<C>(key)?;
    let block_size = C::block_size();

    let mut buf = Zeroizing::new(opts.padding.pad(plaintext, block_size)?);
    check_aligned(buf.len(), block_size)?;
    for block in buf.chunks_exact_mut(block_size) {
        cipher.encrypt_block(GenericArray::from_mut_slice(block));
    }

    Ok(opts.encoding.encode(&buf))
}

pub(crate) fn ecb_decrypt<C>(ciphertext: &[u8], key: &[u8], opts: &CipherOptions) -> Result<Vec<u8>>
where
    C: KeyInit + BlockDecrypt,
{
    let cipher = new_cipher::<C>(key)?;
    let block_size = C::block_size();

    let mut buf = Zeroizing::new(opts.encoding.decode(ciphertext)?);
    check_aligned(buf.len(), block_size)?;
    for block in buf.chunks_exact_mut(block_size) {
        cipher.decrypt_block(GenericArray::from_mut_slice(block));
    }

    opts.padding.unpad(&buf, block_size)
}

pub(crate) fn cbc_encrypt<M>(
    plaintext: &[u8],
    key: &[u8],
    iv: &[u8],
    opts: &CipherOptions,
) -> Result<Vec<u8>>
where
    M: KeyIvInit + BlockEncryptMut,
{
    let mut mode = new_mode::<M>(key, iv)?;
    let block_size = M::block_size();

    let mut buf = Zeroizing::new(opts.padding.pad(plaintext, block_size)?);
    check_aligned(buf.len(), block_size)?;
    for block in buf.chunks_exact_mut(block_size) {
        mode.encrypt_block_mut(GenericArray::from_mut_slice(block));
    }

    Ok(opts.encoding.encode(&buf))
}

pub(crate) fn cbc_decrypt<M>(
    ciphertext: &[u8],
    key: &[u8],
    iv: &[u8],
    opts: &CipherOptions,
) -> Result<Vec<u8>>
where
    M: KeyIvInit + BlockDecryptMut,
{
    let mut mode = new_mode::<M>(key, iv)?;
    let block_size = M::block_size();

    let mut buf = Zeroizing::new(opts.encoding.decode(ciphertext)?);
    check_aligned(buf.len(), block_size)?;
    for block in buf.chunks_exact_mut(block_size) {
        mode.decrypt_block_mut(GenericArray::from_mut_slice(block));
    }

    opts.padding.unpad(&buf, block_size)
}

pub(crate) fn cfb_encrypt<M>(
    plaintext: &[u8],
    key: &[u8],
    iv: &[u8],
    opts: &CipherOptions,
) -> Result<Vec<u8>>
where
    M: KeyIvInit + AsyncStreamCipher + BlockEncryptMut,
{
    let mode = new_mode::<M>(key, iv)?;
    let mut buf = Zeroizing::new(plaintext.to_vec());
    mode.encrypt(&mut buf);
    Ok(opts.encoding.encode(&buf))
}

pub(crate) fn cfb_decrypt<M>(
    ciphertext: &[u8],
    key: &[u8],
    iv: &[u8],
    opts: &CipherOptions,
) -> Result<Vec<u8>>
where
    M: KeyIvInit + AsyncStreamCipher + BlockDecryptMut,
{
    let mode = new_mode::<M>(key, iv)?;
    let mut buf = Zeroizing::new(opts.encoding.decode(ciphertext)?);
    mode.decrypt(&mut buf);
    Ok(buf.to_vec())
}

/// Keystream modes (OFB, CTR) are their own inverse.
pub(crate) fn stream_encrypt<S>(
    plaintext: &[u8],
    key: &[u8],
    iv: &[u8],
    opts: &CipherOptions,
) -> Result<Vec<u8>>
where
    S: KeyIvInit + StreamCipher,
{
    let mut mode = new_mode::<S>(key, iv)?;
    let mut buf = Zeroizing::new(plaintext.to_vec());
    mode.apply_keystream(&mut buf);
    Ok(opts.encoding.encode(&buf))
}

pub(crate) fn stream_decrypt<S>(
    ciphertext: &[u8],
    key: &[u8],
    iv: &[u8],
    opts: &CipherOptions,
) -> Result<Vec<u8>>
where
    S: KeyIvInit + StreamCipher,
{
    let mut mode = new_mode::<S>(key, iv)?;
    let mut buf = Zeroizing::new(opts.encoding.decode(ciphertext)?);
    mode.apply_keystream(&mut buf);
    Ok(buf.to_vec())
}

fn check_nonce(nonce: &[u8]) -> Result<()> {
    if nonce.len() != GCM_NONCE_SIZE {
        return Err(Error::InvalidNonce(format!(
            "expected {} bytes, got {}",
            GCM_NONCE_SIZE,
            nonce.len()
        )));
    }
    Ok(())
}

/// Returns `ciphertext || tag`.
pub(crate) fn gcm_encrypt<A>(
    plaintext: &[u8],
    key: &[u8],
    nonce: &[u8],
    opts: &CipherOptions,
) -> Result<Vec<u8>>
where
    A: KeyInit + Aead,
{
    let cipher = new_cipher::<A>(key)?;
    check_nonce(nonce)?;

    let payload = Payload {
        msg: plaintext,
        aad: &opts.additional,
    };
    let sealed = cipher
        .encrypt(GenericArray::from_slice(nonce), payload)
        .map_err(|_| Error::InvalidLength("plaintext too long for GCM".to_string()))?;

    Ok(opts.encoding.encode(&sealed))
}

pub(crate) fn gcm_decrypt<A>(
    ciphertext: &[u8],
    key: &[u8],
    nonce: &[u8],
    opts: &CipherOptions,
) -> Result<Vec<u8>>
where
    A: KeyInit + Aead,
{
    let cipher = new_cipher::<A>(key)?;
    check_nonce(nonce)?;

    let sealed = opts.encoding.decode(ciphertext)?;
    if sealed.len() < GCM_TAG_SIZE {
        return Err(Error::AuthenticationFailed);
    }

    let payload = Payload {
        msg: &sealed,
        aad: &opts.additional,
    };
    cipher
        .decrypt(GenericArray::from_slice(nonce), payload)
        .map_err(|_| Error::AuthenticationFailed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use aes::Aes128;

    const KEY: &[u8] = b"0123456789abcdef";
    const IV: &[u8] = b"fedcba9876543210";

    #[test]
    fn test_keystream_modes_decode_then_transform() {
        let plaintext = b"odd-length secret, 29 bytes!!".to_vec();
        let copy = plaintext.clone();

        for opts in [CipherOptions::new().with_hex(), CipherOptions::new().with_base64()] {
            let ct = cfb_encrypt::<cfb_mode::Encryptor<Aes128>>(&plaintext, KEY, IV, &opts).unwrap();
            let pt = cfb_decrypt::<cfb_mode::Decryptor<Aes128>>(&ct, KEY, IV, &opts).unwrap();
            assert_eq!(pt, plaintext);

            let ct = stream_encrypt::<ofb::Ofb<Aes128>>(&plaintext, KEY, IV, &opts).unwrap();
            let pt = stream_decrypt::<ofb::Ofb<Aes128>>(&ct, KEY, IV, &opts).unwrap();
            assert_eq!(pt, plaintext);

            let ct = stream_encrypt::<ctr::Ctr128BE<Aes128>>(&plaintext, KEY, IV, &opts).unwrap();
            let pt = stream_decrypt::<ctr::Ctr128BE<Aes128>>(&ct, KEY, IV, &opts).unwrap();
            assert_eq!(pt, plaintext);
        }
        assert_eq!(plaintext, copy);
    }

    #[test]
    fn test_keystream_decrypt_rejects_bad_encoding() {
        let opts = CipherOptions::new().with_hex();
        assert!(cfb_decrypt::<cfb_mode::Decryptor<Aes128>>(b"zz", KEY, IV, &opts).is_err());
        assert!(stream_decrypt::<ctr::Ctr128BE<Aes128>>(b"zz", KEY, IV, &opts).is_err());
    }
}
