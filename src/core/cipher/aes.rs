//! AES-256-GCM backend implementation.
//!
//! Output layout is `nonce (12) ‖ ciphertext ‖ tag (16)`, base64 encoded.

use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, Key, KeyInit, Nonce};
use tracing::trace;
use zeroize::Zeroizing;

use super::Cipher;
use crate::core::constants::NONCE_LEN;
use crate::core::domain::{DerivedKey, SealedSecret};
use crate::core::random::{self, OsRandom, RandomSource};
use crate::error::{AuthError, InputError, Result};

/// AES-256-GCM cipher owning the session key.
///
/// The key is zeroed when the cipher is dropped. A fresh 96-bit nonce is
/// drawn from `R` for every seal; nonces are never derived from a counter.
pub struct AesGcm<R = OsRandom> {
    key: DerivedKey,
    random: R,
}

impl AesGcm<OsRandom> {
    /// Create a cipher drawing nonces from the OS generator.
    pub fn new(key: DerivedKey) -> Self {
        Self::with_random(key, OsRandom)
    }
}

impl<R: RandomSource> AesGcm<R> {
    /// Create a cipher with a custom nonce source.
    pub fn with_random(key: DerivedKey, random: R) -> Self {
        Self { key, random }
    }

    // Built per call so expanded round keys do not outlive the operation.
    fn engine(&self) -> Aes256Gcm {
        Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(self.key.expose()))
    }
}

impl<R: RandomSource> Cipher for AesGcm<R> {
    fn name(&self) -> &'static str {
        "aes-256-gcm"
    }

    fn seal(&self, plaintext: &[u8]) -> Result<SealedSecret> {
        trace!(plaintext_len = plaintext.len(), "sealing");

        let nonce: [u8; NONCE_LEN] = random::array(&self.random)?;
        let ciphertext = self
            .engine()
            .encrypt(Nonce::from_slice(&nonce), plaintext)
            .map_err(|_| InputError::InvalidValue {
                field: "plaintext",
                reason: "too long to seal".to_string(),
            })?;

        let mut out = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        out.extend_from_slice(&nonce);
        out.extend_from_slice(&ciphertext);

        trace!(sealed_len = out.len(), "sealed");
        Ok(SealedSecret::from_bytes(&out))
    }

    fn open(&self, sealed: &SealedSecret) -> Result<Zeroizing<Vec<u8>>> {
        let bytes = sealed.decode()?;
        trace!(sealed_len = bytes.len(), "opening");

        if bytes.len() < NONCE_LEN {
            return Err(InputError::SealedSecretTooShort {
                len: bytes.len(),
                min: NONCE_LEN,
            }
            .into());
        }

        let (nonce, body) = bytes.split_at(NONCE_LEN);
        let plaintext = self
            .engine()
            .decrypt(Nonce::from_slice(nonce), body)
            .map_err(|_| AuthError::OpenFailed)?;

        Ok(Zeroizing::new(plaintext))
    }
}

impl<R> std::fmt::Debug for AesGcm<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AesGcm")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}
