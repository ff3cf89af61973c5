//! Master passphrase bootstrap.
//!
//! Establishes the passphrase on first run and verifies it on every later
//! run, then derives the session key from the store's single salt.
//!
//! The master record is never overwritten here: a mismatching passphrase
//! is an authentication failure, not a reset. Replacing the record is only
//! done through [`crate::core::store::EntryStore::rotate_master`].

use subtle::ConstantTimeEq;
use tracing::{debug, info, warn};

use crate::core::constants::SALT_LEN;
use crate::core::domain::{DerivedKey, MasterCredentialRecord, Passphrase, Salt, SaltRecord};
use crate::core::kdf::{KeyDerivation, Pbkdf2};
use crate::core::random::{self, OsRandom, RandomSource};
use crate::core::store::CredentialStore;
use crate::error::{AuthError, Result};

/// How a bootstrap concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bootstrap {
    /// No master record existed; the passphrase was recorded.
    Established,
    /// The passphrase matched the stored record.
    Verified,
}

/// Owns the passphrase verification and salt lifecycle.
#[derive(Debug, Default)]
pub struct MasterCredentialManager<K = Pbkdf2, R = OsRandom> {
    kdf: K,
    random: R,
}

impl<K: KeyDerivation> MasterCredentialManager<K, OsRandom> {
    /// Manager drawing salts from the OS generator.
    pub fn new(kdf: K) -> Self {
        Self::with_random(kdf, OsRandom)
    }
}

impl<K: KeyDerivation, R: RandomSource> MasterCredentialManager<K, R> {
    /// Manager with a custom salt source.
    pub fn with_random(kdf: K, random: R) -> Self {
        Self { kdf, random }
    }

    /// Verify (or establish on first run) the passphrase and derive the key.
    ///
    /// Consumes the passphrase; it is zeroed when this call returns.
    ///
    /// # Errors
    ///
    /// - `AuthError::IncorrectPassphrase` if a different passphrase was
    ///   established. The store is left untouched and no key is derived.
    /// - `StoreError` if the store cannot be read or written.
    /// - `RandomError` if a first-run salt cannot be generated.
    pub fn bootstrap_or_verify<S: CredentialStore + ?Sized>(
        &self,
        store: &mut S,
        passphrase: Passphrase,
    ) -> Result<DerivedKey> {
        self.bootstrap(store, passphrase).map(|(key, _)| key)
    }

    /// As [`Self::bootstrap_or_verify`], also reporting whether the record
    /// was established or verified.
    pub fn bootstrap<S: CredentialStore + ?Sized>(
        &self,
        store: &mut S,
        passphrase: Passphrase,
    ) -> Result<(DerivedKey, Bootstrap)> {
        let outcome = self.establish_or_verify(store, &passphrase)?;
        let salt = self.get_or_create_salt(store)?;
        let key = self.kdf.derive(&passphrase, &salt);
        debug!(outcome = ?outcome, "session key derived");
        Ok((key, outcome))
    }

    /// Check `passphrase` against the stored record without deriving a key.
    ///
    /// Returns `false` if no record exists.
    pub fn verify<S: CredentialStore + ?Sized>(
        &self,
        store: &S,
        passphrase: &Passphrase,
    ) -> Result<bool> {
        Ok(store
            .read_master_hash()?
            .map(|record| hashes_match(&record.hash, &passphrase.verification_hash()))
            .unwrap_or(false))
    }

    /// Derive the key for `passphrase` under the store's salt, without
    /// touching the master record.
    pub fn derive_for<S: CredentialStore + ?Sized>(
        &self,
        store: &mut S,
        passphrase: &Passphrase,
    ) -> Result<DerivedKey> {
        let salt = self.get_or_create_salt(store)?;
        Ok(self.kdf.derive(passphrase, &salt))
    }

    /// Return the store's salt, generating and persisting it on first use.
    ///
    /// Idempotent: once a salt is stored it is returned unchanged and
    /// never replaced.
    ///
    /// # Errors
    ///
    /// `StoreError` on read/write failure or a corrupt salt record;
    /// `RandomError` if a new salt cannot be generated.
    pub fn get_or_create_salt<S: CredentialStore + ?Sized>(&self, store: &mut S) -> Result<Salt> {
        if let Some(record) = store.read_salt()? {
            return record.salt();
        }

        let salt = Salt::from_bytes(random::array::<SALT_LEN>(&self.random)?);
        store.write_salt(SaltRecord::new(&salt))?;
        info!("generated new salt");
        Ok(salt)
    }

    fn establish_or_verify<S: CredentialStore + ?Sized>(
        &self,
        store: &mut S,
        passphrase: &Passphrase,
    ) -> Result<Bootstrap> {
        let hash = passphrase.verification_hash();

        match store.read_master_hash()? {
            None => {
                store.write_master_hash(MasterCredentialRecord::new(hash))?;
                info!("master passphrase established");
                Ok(Bootstrap::Established)
            }
            Some(record) if hashes_match(&record.hash, &hash) => {
                debug!("master passphrase verified");
                Ok(Bootstrap::Verified)
            }
            Some(_) => {
                warn!("master passphrase rejected");
                Err(AuthError::IncorrectPassphrase.into())
            }
        }
    }
}

fn hashes_match(stored: &str, candidate: &str) -> bool {
    stored.as_bytes().ct_eq(candidate.as_bytes()).into()
}
