//! Master passphrase type.
//!
//! A non-empty passphrase held in zeroizing memory. Construction is the
//! only validation point, so every consumer can assume it is non-empty.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use sha2::{Digest, Sha256};
use zeroize::Zeroizing;

use crate::core::types::EncodedHash;
use crate::error::{InputError, Result};

/// The user's master passphrase.
pub struct Passphrase(Zeroizing<String>);

impl Passphrase {
    /// Wrap a passphrase, rejecting the empty string.
    ///
    /// # Errors
    ///
    /// Returns `InputError::EmptyPassphrase` for `""`.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = Zeroizing::new(value.into());
        if value.is_empty() {
            return Err(InputError::EmptyPassphrase.into());
        }
        Ok(Self(value))
    }

    /// Raw UTF-8 bytes, for key derivation.
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Base64 SHA-256 of the passphrase, the form kept in the master record.
    ///
    /// This is an unsalted fast hash. It is kept for on-disk compatibility;
    /// the salted PBKDF2 key is what actually protects entries.
    pub fn verification_hash(&self) -> EncodedHash {
        let digest = Sha256::digest(self.0.as_bytes());
        STANDARD.encode(digest)
    }
}

impl std::fmt::Debug for Passphrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Passphrase([REDACTED])")
    }
}
