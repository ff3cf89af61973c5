//! Vault.
//!
//! The primary interface for lockbox operations: owns the store and the
//! session cipher, and provides all entry operations.

use chrono::Utc;
use tracing::{debug, info};

use crate::core::cipher::{AesGcm, Cipher};
use crate::core::config::Settings;
use crate::core::domain::{
    Entry, EntryUpdate, MasterCredentialRecord, NewEntry, Passphrase, RevealedEntry,
};
use crate::core::kdf::{KeyDerivation, Pbkdf2};
use crate::core::master::{Bootstrap, MasterCredentialManager};
use crate::core::store::{CredentialStore, EntryStore, Filesystem, Store};
use crate::core::validation;
use crate::error::{ConfigError, EntryError, Result};

/// An unlocked vault.
///
/// Holds the only copy of the session key (inside the cipher); it is
/// zeroed when the vault is dropped.
pub struct Vault<S, K = Pbkdf2> {
    store: S,
    cipher: AesGcm,
    manager: MasterCredentialManager<K>,
}

impl<S: std::fmt::Debug, K> std::fmt::Debug for Vault<S, K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Vault")
            .field("store", &self.store)
            .field("cipher", &self.cipher)
            .finish_non_exhaustive()
    }
}

impl Vault<Filesystem> {
    // --- Construction ---
    /// Create a vault at the configured path and establish its passphrase.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::AlreadyInitialized` if the store already has a
    /// master record.
    pub fn init(settings: &Settings, passphrase: Passphrase) -> Result<Self> {
        let store = Filesystem::open_or_create(&settings.store_path, settings.kdf_iterations)?;
        if store.read_master_hash()?.is_some() {
            return Err(ConfigError::AlreadyInitialized {
                path: settings.store_path.display().to_string(),
            }
            .into());
        }

        let manager = MasterCredentialManager::new(Pbkdf2::new(store.kdf_iterations()));
        let (vault, outcome) = Self::unlock_with(store, manager, passphrase)?;
        debug_assert_eq!(outcome, Bootstrap::Established);
        info!(path = %settings.store_path.display(), "vault initialized");
        Ok(vault)
    }

    /// Open an existing vault and verify the passphrase.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if there is no store or it has
    /// no master record, and `AuthError::IncorrectPassphrase` on mismatch.
    pub fn open(settings: &Settings, passphrase: Passphrase) -> Result<Self> {
        let store = Filesystem::open(&settings.store_path)?;
        if store.read_master_hash()?.is_none() {
            return Err(ConfigError::NotInitialized {
                path: settings.store_path.display().to_string(),
            }
            .into());
        }

        let manager = MasterCredentialManager::new(Pbkdf2::new(store.kdf_iterations()));
        Self::unlock_with(store, manager, passphrase).map(|(vault, _)| vault)
    }
}

impl<S: Store, K: KeyDerivation> Vault<S, K> {
    /// Bootstrap `store` with `passphrase` and take ownership of both.
    ///
    /// Establishes the passphrase if the store has none yet.
    pub fn unlock(store: S, kdf: K, passphrase: Passphrase) -> Result<Self> {
        Self::unlock_with(store, MasterCredentialManager::new(kdf), passphrase)
            .map(|(vault, _)| vault)
    }

    fn unlock_with(
        mut store: S,
        manager: MasterCredentialManager<K>,
        passphrase: Passphrase,
    ) -> Result<(Self, Bootstrap)> {
        let (key, outcome) = manager.bootstrap(&mut store, passphrase)?;
        let cipher = AesGcm::new(key);
        debug!(cipher = cipher.name(), "vault unlocked");
        let vault = Self {
            store,
            cipher,
            manager,
        };
        Ok((vault, outcome))
    }

    /// Underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Release the store; the session key is zeroed.
    pub fn into_store(self) -> S {
        self.store
    }

    /// Session cipher, for sealing values outside entries.
    pub fn cipher(&self) -> &AesGcm {
        &self.cipher
    }

    // --- Entries ---
    /// Add an entry, sealing its password.
    ///
    /// # Errors
    ///
    /// Returns `InputError::EmptyField` for a missing service, username or
    /// password, and `EntryError::AlreadyExists` for a duplicate key.
    pub fn add(&mut self, new: NewEntry) -> Result<Entry> {
        validation::validate_entry(&new.service, &new.username, &new.password)?;

        if self.store.find_entry(&new.service, &new.username)?.is_some() {
            return Err(EntryError::AlreadyExists {
                service: new.service,
                username: new.username,
            }
            .into());
        }

        let now = Utc::now();
        let entry = Entry {
            password: self.cipher.seal_str(&new.password)?,
            service: new.service,
            username: new.username,
            url: new.url,
            notes: new.notes,
            created_at: now,
            updated_at: now,
        };
        self.store.put_entry(entry.clone())?;

        debug!(entry = %entry, "entry added");
        Ok(entry)
    }

    /// Fetch an entry and open its password.
    ///
    /// # Errors
    ///
    /// Returns `EntryError::NotFound` if absent and `AuthError::OpenFailed`
    /// if the stored value does not authenticate under the session key.
    pub fn get(&self, service: &str, username: &str) -> Result<RevealedEntry> {
        let entry = self.find(service, username)?;
        let password = self.cipher.open_str(&entry.password)?;

        Ok(RevealedEntry {
            service: entry.service,
            username: entry.username,
            password,
            url: entry.url,
            notes: entry.notes,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
        })
    }

    /// All entries, passwords still sealed.
    pub fn list(&self) -> Result<Vec<Entry>> {
        self.store.list_entries()
    }

    /// Entries whose service, username or url contains `term`, ignoring
    /// case. Passwords stay sealed.
    pub fn search(&self, term: &str) -> Result<Vec<Entry>> {
        Ok(self
            .store
            .list_entries()?
            .into_iter()
            .filter(|e| e.matches(term))
            .collect())
    }

    /// Apply a partial update. A new password is sealed under a fresh nonce.
    ///
    /// # Errors
    ///
    /// Returns `EntryError::NotFound` if absent and `InputError::EmptyField`
    /// for an empty replacement password.
    pub fn update(&mut self, service: &str, username: &str, update: EntryUpdate) -> Result<Entry> {
        let mut entry = self.find(service, username)?;

        if let Some(password) = update.password {
            validation::require("password", &password)?;
            entry.password = self.cipher.seal_str(&password)?;
        }
        if let Some(url) = update.url {
            entry.url = url;
        }
        if let Some(notes) = update.notes {
            entry.notes = notes;
        }
        entry.updated_at = Utc::now();

        self.store.put_entry(entry.clone())?;
        debug!(entry = %entry, "entry updated");
        Ok(entry)
    }

    /// Remove an entry.
    ///
    /// # Errors
    ///
    /// Returns `EntryError::NotFound` if absent.
    pub fn remove(&mut self, service: &str, username: &str) -> Result<()> {
        if !self.store.delete_entry(service, username)? {
            return Err(not_found(service, username));
        }
        debug!(service, username, "entry removed");
        Ok(())
    }

    // --- Lifecycle ---
    /// Replace the master passphrase.
    ///
    /// Derives the new key from the existing salt, re-seals every entry,
    /// and commits the new master record together with the re-sealed
    /// entries. On any error before the commit the store is unchanged and
    /// the vault keeps its current key.
    pub fn change_passphrase(&mut self, new: Passphrase) -> Result<()> {
        let record = MasterCredentialRecord::new(new.verification_hash());
        let next = AesGcm::new(self.manager.derive_for(&mut self.store, &new)?);

        let mut resealed = Vec::new();
        for entry in self.store.list_entries()? {
            let plaintext = self.cipher.open(&entry.password)?;
            resealed.push(Entry {
                password: next.seal(&plaintext)?,
                ..entry
            });
        }

        let count = resealed.len();
        self.store.rotate_master(record, resealed)?;
        self.cipher = next;

        info!(entries = count, "master passphrase changed");
        Ok(())
    }

    fn find(&self, service: &str, username: &str) -> Result<Entry> {
        self.store
            .find_entry(service, username)?
            .ok_or_else(|| not_found(service, username))
    }
}

fn not_found(service: &str, username: &str) -> crate::error::Error {
    EntryError::NotFound {
        service: service.to_string(),
        username: username.to_string(),
    }
    .into()
}
