//! Key derivation.
//!
//! Turns a passphrase and salt into a 32-byte AES-256 key with
//! PBKDF2-HMAC-SHA256. Derivation is pure: no I/O and no logging of inputs
//! or outputs. The iteration count is the brute-force cost and is not
//! something to tune down for speed.

use sha2::Sha256;
use zeroize::Zeroize;

use crate::core::constants::{KDF_ITERATIONS, KEY_LEN};
use crate::core::domain::{DerivedKey, Passphrase, Salt};

/// Passphrase-to-key derivation.
pub trait KeyDerivation {
    /// Derive a key. Deterministic for identical inputs.
    fn derive(&self, passphrase: &Passphrase, salt: &Salt) -> DerivedKey;
}

/// PBKDF2 with HMAC-SHA256.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pbkdf2 {
    iterations: u32,
}

impl Pbkdf2 {
    /// PBKDF2 with a custom iteration count.
    ///
    /// # Panics
    ///
    /// Panics if `iterations` is zero.
    pub fn new(iterations: u32) -> Self {
        assert!(iterations > 0, "PBKDF2 iteration count must be positive");
        Self { iterations }
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Derive from raw bytes.
    ///
    /// # Panics
    ///
    /// Panics if `salt` is empty.
    pub fn derive_raw(&self, passphrase: &[u8], salt: &[u8]) -> DerivedKey {
        assert!(!salt.is_empty(), "PBKDF2 salt must not be empty");
        let mut out = [0u8; KEY_LEN];
        pbkdf2::pbkdf2_hmac::<Sha256>(passphrase, salt, self.iterations, &mut out);
        let key = DerivedKey::from_bytes(out);
        out.zeroize();
        key
    }
}

impl Default for Pbkdf2 {
    fn default() -> Self {
        Self::new(KDF_ITERATIONS)
    }
}

impl KeyDerivation for Pbkdf2 {
    fn derive(&self, passphrase: &Passphrase, salt: &Salt) -> DerivedKey {
        self.derive_raw(passphrase.as_bytes(), salt.as_bytes())
    }
}
