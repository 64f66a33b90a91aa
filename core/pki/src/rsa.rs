//! RSA encryption and signatures.
//!
//! Wraps the `rsa` crate keys with:
//! - PKCS#1 v1.5 and OAEP encryption
//! - PKCS#1 v1.5 and PSS signatures over caller-supplied digests
//! - A PKCS#1 v1.5 session-key decryption that never reports padding errors
//!
//! Signature inputs are digests. Hash the message first with the algorithm
//! named by [`RsaOptions::crypto_hash`].

use std::fmt;

use md5::Md5;
use pkcs8::ObjectIdentifier;
use rsa::pkcs1::{DecodeRsaPrivateKey, DecodeRsaPublicKey, EncodeRsaPrivateKey, EncodeRsaPublicKey};
use rsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, Pkcs1v15Encrypt, Pkcs1v15Sign, Pss, RsaPrivateKey, RsaPublicKey};
use sha1::Sha1;
use sha2::{Sha224, Sha256, Sha384, Sha512};
use subtle::{Choice, ConditionallySelectable};
use tracing::debug;
use zeroize::Zeroizing;

use crate::options::{KeyOptions, RsaOptions};
use crate::x509::{sealed, PrivateKeyDer, PublicKeyDer, RSA_OID};
use cipherkit_common::{Error, Result};
use cipherkit_crypto::HashAlgorithm;

/// Bytes of PKCS#1 v1.5 encryption overhead.
const PKCS1V15_OVERHEAD: usize = 11;

/// An RSA private key.
#[derive(Clone, PartialEq, Eq)]
pub struct PrivateKey(RsaPrivateKey);

/// An RSA public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PublicKey(RsaPublicKey);

/// Generate an RSA key pair of `bits` bits using `opts.random`.
///
/// # Errors
/// - `Error::InvalidInput` if the primitive rejects the bit size
pub fn generate_keys(bits: usize, opts: &KeyOptions) -> Result<(PrivateKey, PublicKey)> {
    debug!(bits, "Generating RSA key pair");
    let key = opts
        .random
        .with_rng(|mut rng| RsaPrivateKey::new(&mut rng, bits))
        .map_err(map_rsa_error)?;
    let private = PrivateKey(key);
    let public = private.public_key();
    Ok((private, public))
}

fn map_rsa_error(e: rsa::Error) -> Error {
    match e {
        rsa::Error::MessageTooLong => Error::MessageTooLong,
        rsa::Error::Decryption => Error::DecryptionFailed,
        rsa::Error::Verification => Error::VerificationFailed,
        other => Error::InvalidInput(other.to_string()),
    }
}

fn oaep(hash: HashAlgorithm, label: &str) -> Oaep {
    macro_rules! build {
        ($d:ty) => {
            if label.is_empty() {
                Oaep::new::<$d>()
            } else {
                Oaep::new_with_label::<$d, _>(label)
            }
        };
    }
    match hash {
        HashAlgorithm::Md5 => build!(Md5),
        HashAlgorithm::Sha1 => build!(Sha1),
        HashAlgorithm::Sha224 => build!(Sha224),
        HashAlgorithm::Sha256 => build!(Sha256),
        HashAlgorithm::Sha384 => build!(Sha384),
        HashAlgorithm::Sha512 => build!(Sha512),
    }
}

fn pkcs1v15_sign(hash: HashAlgorithm) -> Pkcs1v15Sign {
    match hash {
        HashAlgorithm::Md5 => Pkcs1v15Sign::new::<Md5>(),
        HashAlgorithm::Sha1 => Pkcs1v15Sign::new::<Sha1>(),
        HashAlgorithm::Sha224 => Pkcs1v15Sign::new::<Sha224>(),
        HashAlgorithm::Sha256 => Pkcs1v15Sign::new::<Sha256>(),
        HashAlgorithm::Sha384 => Pkcs1v15Sign::new::<Sha384>(),
        HashAlgorithm::Sha512 => Pkcs1v15Sign::new::<Sha512>(),
    }
}

fn pss(hash: HashAlgorithm, salt: usize) -> Pss {
    match hash {
        HashAlgorithm::Md5 => Pss::new_with_salt::<Md5>(salt),
        HashAlgorithm::Sha1 => Pss::new_with_salt::<Sha1>(salt),
        HashAlgorithm::Sha224 => Pss::new_with_salt::<Sha224>(salt),
        HashAlgorithm::Sha256 => Pss::new_with_salt::<Sha256>(salt),
        HashAlgorithm::Sha384 => Pss::new_with_salt::<Sha384>(salt),
        HashAlgorithm::Sha512 => Pss::new_with_salt::<Sha512>(salt),
    }
}

fn check_digest(hashed: &[u8], hash: HashAlgorithm) -> Result<()> {
    if hashed.len() != hash.size() {
        return Err(Error::InvalidInput(format!(
            "{} digest must be {} bytes, got {}",
            hash,
            hash.size(),
            hashed.len()
        )));
    }
    Ok(())
}

impl PublicKey {
    /// Modulus size in bytes.
    pub fn size(&self) -> usize {
        self.0.size()
    }

    /// Modulus size in bits.
    pub fn bits(&self) -> usize {
        self.0.n().bits() as usize
    }

    /// Encrypt with PKCS#1 v1.5 padding.
    ///
    /// # Errors
    /// - `Error::MessageTooLong` if `msg` exceeds `size() - 11` bytes
    pub fn encrypt_pkcs1v15(&self, msg: &[u8], opts: &RsaOptions) -> Result<Vec<u8>> {
        let ct = opts
            .random
            .with_rng(|mut rng| self.0.encrypt(&mut rng, Pkcs1v15Encrypt, msg))
            .map_err(map_rsa_error)?;
        Ok(opts.encoding.encode(&ct))
    }

    /// Encrypt with OAEP using `opts.hash` and `label`.
    ///
    /// # Errors
    /// - `Error::MessageTooLong` if `msg` does not fit the modulus
    pub fn encrypt_oaep(&self, msg: &[u8], label: &str, opts: &RsaOptions) -> Result<Vec<u8>> {
        let padding = oaep(opts.hash, label);
        let ct = opts
            .random
            .with_rng(|mut rng| self.0.encrypt(&mut rng, padding, msg))
            .map_err(map_rsa_error)?;
        Ok(opts.encoding.encode(&ct))
    }

    /// Verify a PKCS#1 v1.5 signature over a `opts.crypto_hash` digest.
    ///
    /// # Errors
    /// - `Error::Decode` if `sig` is not valid in `opts.encoding`
    /// - `Error::InvalidInput` if `hashed` has the wrong length
    /// - `Error::VerificationFailed` if the signature does not match
    pub fn verify_pkcs1v15(&self, hashed: &[u8], sig: &[u8], opts: &RsaOptions) -> Result<()> {
        let sig = opts.encoding.decode(sig)?;
        check_digest(hashed, opts.crypto_hash)?;
        self.0
            .verify(pkcs1v15_sign(opts.crypto_hash), hashed, &sig)
            .map_err(|_| Error::VerificationFailed)
    }

    /// Verify a PSS signature over a `opts.crypto_hash` digest.
    ///
    /// The salt length must match the one used to sign.
    pub fn verify_pss(&self, digest: &[u8], sig: &[u8], opts: &RsaOptions) -> Result<()> {
        let sig = opts.encoding.decode(sig)?;
        check_digest(digest, opts.crypto_hash)?;
        self.0
            .verify(pss(opts.crypto_hash, opts.salt_len()), digest, &sig)
            .map_err(|_| Error::VerificationFailed)
    }
}

impl PrivateKey {
    /// Derive the public half.
    pub fn public_key(&self) -> PublicKey {
        PublicKey(self.0.to_public_key())
    }

    /// Modulus size in bytes.
    pub fn size(&self) -> usize {
        self.0.size()
    }

    /// Decrypt PKCS#1 v1.5 ciphertext with blinding drawn from `opts.random`.
    ///
    /// # Errors
    /// - `Error::Decode` if `ciphertext` is not valid in `opts.encoding`
    /// - `Error::DecryptionFailed` on any padding or key mismatch
    pub fn decrypt_pkcs1v15(&self, ciphertext: &[u8], opts: &RsaOptions) -> Result<Vec<u8>> {
        let ct = opts.encoding.decode(ciphertext)?;
        opts.random
            .with_rng(|mut rng| self.0.decrypt_blinded(&mut rng, Pkcs1v15Encrypt, &ct))
            .map_err(map_rsa_error)
    }

    /// Decrypt a PKCS#1 v1.5 session key into `key`.
    ///
    /// `key` is first filled with random bytes. It is overwritten with the
    /// decrypted session key only if decryption succeeds and the result
    /// has exactly `key.len()` bytes; the choice is made without branching
    /// on the outcome. Callers detect a bad ciphertext later, when the
    /// random key fails to authenticate.
    ///
    /// # Errors
    /// - `Error::InvalidInput` if `key.len() + 11` exceeds the modulus size
    /// - `Error::Decode` if `ciphertext` is not valid in `opts.encoding`
    /// - `Error::InvalidLength` if the ciphertext is not modulus-sized
    /// - `Error::Random` if the generator fails
    pub fn decrypt_pkcs1v15_session_key(
        &self,
        ciphertext: &[u8],
        key: &mut [u8],
        opts: &RsaOptions,
    ) -> Result<()> {
        let size = self.size();
        if key.len() + PKCS1V15_OVERHEAD > size {
            return Err(Error::InvalidInput(format!(
                "session key of {} bytes does not fit a {}-byte modulus",
                key.len(),
                size
            )));
        }

        let ct = opts.encoding.decode(ciphertext)?;
        if ct.len() != size {
            return Err(Error::InvalidLength(format!(
                "ciphertext must be {} bytes, got {}",
                size,
                ct.len()
            )));
        }

        opts.random.fill(key)?;

        let decrypted = opts
            .random
            .with_rng(|mut rng| self.0.decrypt_blinded(&mut rng, Pkcs1v15Encrypt, &ct));
        let (valid, candidate) = match decrypted {
            Ok(plain) if plain.len() == key.len() => (Choice::from(1), Zeroizing::new(plain)),
            _ => (Choice::from(0), Zeroizing::new(vec![0u8; key.len()])),
        };

        for (dst, src) in key.iter_mut().zip(candidate.iter()) {
            dst.conditional_assign(src, valid);
        }
        Ok(())
    }

    /// Decrypt OAEP ciphertext produced with the same hash and label.
    pub fn decrypt_oaep(&self, ciphertext: &[u8], label: &str, opts: &RsaOptions) -> Result<Vec<u8>> {
        let ct = opts.encoding.decode(ciphertext)?;
        let padding = oaep(opts.hash, label);
        opts.random
            .with_rng(|mut rng| self.0.decrypt_blinded(&mut rng, padding, &ct))
            .map_err(map_rsa_error)
    }

    /// Sign a `opts.crypto_hash` digest with PKCS#1 v1.5 padding.
    ///
    /// # Errors
    /// - `Error::InvalidInput` if `hashed` has the wrong length
    pub fn sign_pkcs1v15(&self, hashed: &[u8], opts: &RsaOptions) -> Result<Vec<u8>> {
        check_digest(hashed, opts.crypto_hash)?;
        let sig = opts
            .random
            .with_rng(|mut rng| self.0.sign_with_rng(&mut rng, pkcs1v15_sign(opts.crypto_hash), hashed))
            .map_err(map_rsa_error)?;
        Ok(opts.encoding.encode(&sig))
    }

    /// Sign a `opts.crypto_hash` digest with PSS and a random salt.
    pub fn sign_pss(&self, digest: &[u8], opts: &RsaOptions) -> Result<Vec<u8>> {
        check_digest(digest, opts.crypto_hash)?;
        let padding = pss(opts.crypto_hash, opts.salt_len());
        let sig = opts
            .random
            .with_rng(|mut rng| self.0.sign_with_rng(&mut rng, padding, digest))
            .map_err(map_rsa_error)?;
        Ok(opts.encoding.encode(&sig))
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rsa::PrivateKey({} bits, [REDACTED])", self.public_key().bits())
    }
}

impl From<RsaPrivateKey> for PrivateKey {
    fn from(key: RsaPrivateKey) -> Self {
        Self(key)
    }
}

impl From<RsaPublicKey> for PublicKey {
    fn from(key: RsaPublicKey) -> Self {
        Self(key)
    }
}

fn der_error(kind: &str, e: impl fmt::Display) -> Error {
    Error::KeyFormat(format!("invalid RSA {}: {}", kind, e))
}

impl sealed::Sealed for PrivateKey {}
impl sealed::Sealed for PublicKey {}

impl PrivateKeyDer for PrivateKey {
    const ALGORITHM: &'static str = "RSA";
    const OID: ObjectIdentifier = RSA_OID;

    fn to_pkcs8_der(&self) -> Result<Zeroizing<Vec<u8>>> {
        let doc = self.0.to_pkcs8_der().map_err(|e| Error::Encode(e.to_string()))?;
        Ok(Zeroizing::new(doc.as_bytes().to_vec()))
    }

    fn from_pkcs8_der(der: &[u8]) -> Result<Self> {
        RsaPrivateKey::from_pkcs8_der(der)
            .map(Self)
            .map_err(|e| der_error("PKCS#8 private key", e))
    }

    fn to_pkcs1_der(&self) -> Result<Zeroizing<Vec<u8>>> {
        let doc = self.0.to_pkcs1_der().map_err(|e| Error::Encode(e.to_string()))?;
        Ok(Zeroizing::new(doc.as_bytes().to_vec()))
    }

    fn from_pkcs1_der(der: &[u8]) -> Result<Self> {
        RsaPrivateKey::from_pkcs1_der(der)
            .map(Self)
            .map_err(|e| der_error("PKCS#1 private key", e))
    }
}

impl PublicKeyDer for PublicKey {
    const ALGORITHM: &'static str = "RSA";
    const OID: ObjectIdentifier = RSA_OID;

    fn to_pkix_der(&self) -> Result<Vec<u8>> {
        let doc = self
            .0
            .to_public_key_der()
            .map_err(|e| Error::Encode(e.to_string()))?;
        Ok(doc.as_bytes().to_vec())
    }

    fn from_pkix_der(der: &[u8]) -> Result<Self> {
        RsaPublicKey::from_public_key_der(der)
            .map(Self)
            .map_err(|e| der_error("PKIX public key", e))
    }

    fn to_pkcs1_der(&self) -> Result<Vec<u8>> {
        let doc = self.0.to_pkcs1_der().map_err(|e| Error::Encode(e.to_string()))?;
        Ok(doc.as_bytes().to_vec())
    }

    fn from_pkcs1_der(der: &[u8]) -> Result<Self> {
        RsaPublicKey::from_pkcs1_der(der)
            .map(Self)
            .map_err(|e| der_error("PKCS#1 public key", e))
    }
}
