//! Authenticated encryption of stored secrets.
//!
//! A [`Cipher`] owns the derived key for its whole lifetime and seals each
//! value with a fresh random nonce. Opening fails uniformly with
//! `AuthError::OpenFailed` on any integrity problem: wrong key, flipped
//! bits, or truncation all look the same to the caller.
//!
//! ## Backends
//!
//! - **AES-256-GCM** ([`AesGcm`]): default, 96-bit random nonces, no
//!   associated data.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Cipher` trait
//! 2. Add the implementation in a new file (e.g., `chacha.rs`)
//! 3. Re-export from this module
//!
//! Sealed values carry no algorithm marker, so a second backend cannot read
//! values written by the first.

use zeroize::{Zeroize, Zeroizing};

use crate::core::domain::SealedSecret;
use crate::error::{InputError, Result};

mod aes;

pub use aes::AesGcm;

/// Authenticated cipher over the session key.
pub trait Cipher {
    /// Encrypt `plaintext` under a fresh nonce.
    ///
    /// # Errors
    ///
    /// Returns `RandomError` if no nonce could be drawn.
    fn seal(&self, plaintext: &[u8]) -> Result<SealedSecret>;

    /// Decrypt and authenticate a sealed value.
    ///
    /// # Errors
    ///
    /// Returns `InputError` if the text is not base64 or is shorter than a
    /// nonce, and `AuthError::OpenFailed` for every other failure.
    fn open(&self, sealed: &SealedSecret) -> Result<Zeroizing<Vec<u8>>>;

    /// Backend name for display.
    fn name(&self) -> &'static str;

    /// Seal a UTF-8 string.
    fn seal_str(&self, plaintext: &str) -> Result<SealedSecret> {
        self.seal(plaintext.as_bytes())
    }

    /// Open a value that was sealed with [`Cipher::seal_str`].
    ///
    /// # Errors
    ///
    /// As [`Cipher::open`], plus `InputError::NotUtf8`.
    fn open_str(&self, sealed: &SealedSecret) -> Result<Zeroizing<String>> {
        let mut bytes = self.open(sealed)?;
        let text = String::from_utf8(std::mem::take(&mut *bytes)).map_err(|e| {
            e.into_bytes().zeroize();
            InputError::NotUtf8
        })?;
        Ok(Zeroizing::new(text))
    }
}
