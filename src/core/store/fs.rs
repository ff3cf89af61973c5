//! Filesystem-based storage implementation.
//!
//! The whole store is one TOML document (`~/.lockbox/vault.toml` by
//! default). Every write produces a new document that replaces the old one
//! with a single rename, so a crash never leaves a half-written store.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::{CredentialStore, EntryStore};
use crate::core::domain::{Entry, MasterCredentialRecord, SaltRecord};
use crate::error::{ConfigError, Result, StoreError};

/// Validate file permissions (Unix only).
#[cfg(unix)]
fn check_permissions(path: &Path) {
    use std::os::unix::fs::PermissionsExt;

    if let Ok(metadata) = fs::metadata(path) {
        let mode = metadata.permissions().mode() & 0o777;
        if mode != 0o600 {
            warn!(
                path = %path.display(),
                mode = %format!("{:o}", mode),
                "insecure store file permissions"
            );
        }
    }
}

/// On-disk layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Document {
    lockbox: Meta,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    master: Option<MasterCredentialRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    salt: Option<SaltRecord>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    entries: Vec<Entry>,
}

/// Store metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct Meta {
    /// Version that created the store
    version: String,
    /// PBKDF2 iterations fixed at creation
    kdf_iterations: u32,
}

/// TOML file store.
#[derive(Debug)]
pub struct Filesystem {
    path: PathBuf,
    doc: Document,
}

impl Filesystem {
    /// Open an existing store.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if the file does not exist and
    /// `StoreError` if it cannot be read or parsed.
    pub fn open(path: &Path) -> Result<Self> {
        debug!(path = %path.display(), "opening store");

        if !path.exists() {
            return Err(ConfigError::NotInitialized {
                path: path.display().to_string(),
            }
            .into());
        }

        #[cfg(unix)]
        check_permissions(path);

        let contents = fs::read_to_string(path).map_err(StoreError::ReadFailed)?;
        let doc: Document = toml::from_str(&contents).map_err(StoreError::Parse)?;

        if doc.lockbox.kdf_iterations == 0 {
            return Err(StoreError::Corrupt("kdf_iterations must be positive".to_string()).into());
        }

        debug!(
            entries = doc.entries.len(),
            has_master = doc.master.is_some(),
            has_salt = doc.salt.is_some(),
            "store loaded"
        );

        Ok(Self {
            path: path.to_path_buf(),
            doc,
        })
    }

    /// Open the store at `path`, writing an empty one first if none exists.
    ///
    /// `kdf_iterations` only applies to a newly created file.
    pub fn open_or_create(path: &Path, kdf_iterations: u32) -> Result<Self> {
        if path.exists() {
            return Self::open(path);
        }

        debug!(path = %path.display(), kdf_iterations, "creating store");
        let doc = Document {
            lockbox: Meta {
                version: env!("CARGO_PKG_VERSION").to_string(),
                kdf_iterations,
            },
            master: None,
            salt: None,
            entries: Vec::new(),
        };
        write_document(path, &doc)?;

        Ok(Self {
            path: path.to_path_buf(),
            doc,
        })
    }

    /// Location of the store file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// PBKDF2 iterations recorded at creation.
    pub fn kdf_iterations(&self) -> u32 {
        self.doc.lockbox.kdf_iterations
    }

    /// Version string recorded at creation.
    pub fn version(&self) -> &str {
        &self.doc.lockbox.version
    }

    // Apply a change to a copy and swap it in only after it is on disk.
    fn commit(&mut self, change: impl FnOnce(&mut Document)) -> Result<()> {
        let mut next = self.doc.clone();
        change(&mut next);
        write_document(&self.path, &next)?;
        self.doc = next;
        Ok(())
    }
}

fn write_document(path: &Path, doc: &Document) -> Result<()> {
    let contents = toml::to_string_pretty(doc).map_err(StoreError::Serialize)?;

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(StoreError::WriteFailed)?;
    }

    let tmp = tmp_path(path);
    let written = write_private(&tmp, contents.as_bytes()).and_then(|()| fs::rename(&tmp, path));
    if let Err(e) = written {
        // The tmp file holds the full store; never leave it behind.
        let _ = fs::remove_file(&tmp);
        return Err(StoreError::WriteFailed(e).into());
    }

    debug!(path = %path.display(), "store saved");
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

/// Write `contents` to a file that is owner-only (Unix) before any byte lands.
fn write_private(path: &Path, contents: &[u8]) -> io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }

    let mut file = options.open(path)?;

    // `mode` only applies on creation; a stale tmp file keeps its old bits.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.set_permissions(fs::Permissions::from_mode(0o600))?;
    }

    file.write_all(contents)?;
    file.sync_all()
}

impl CredentialStore for Filesystem {
    fn read_master_hash(&self) -> Result<Option<MasterCredentialRecord>> {
        Ok(self.doc.master.clone())
    }

    fn write_master_hash(&mut self, record: MasterCredentialRecord) -> Result<()> {
        self.commit(|doc| doc.master = Some(record))
    }

    fn read_salt(&self) -> Result<Option<SaltRecord>> {
        Ok(self.doc.salt.clone())
    }

    fn write_salt(&mut self, record: SaltRecord) -> Result<()> {
        self.commit(|doc| doc.salt = Some(record))
    }
}

impl EntryStore for Filesystem {
    fn list_entries(&self) -> Result<Vec<Entry>> {
        Ok(super::sorted(&self.doc.entries))
    }

    fn find_entry(&self, service: &str, username: &str) -> Result<Option<Entry>> {
        Ok(self
            .doc
            .entries
            .iter()
            .find(|e| e.is(service, username))
            .cloned())
    }

    fn put_entry(&mut self, entry: Entry) -> Result<()> {
        self.commit(|doc| super::upsert(&mut doc.entries, entry))
    }

    fn delete_entry(&mut self, service: &str, username: &str) -> Result<bool> {
        if self.find_entry(service, username)?.is_none() {
            return Ok(false);
        }
        self.commit(|doc| {
            super::remove(&mut doc.entries, service, username);
        })?;
        Ok(true)
    }

    fn rotate_master(
        &mut self,
        record: MasterCredentialRecord,
        entries: Vec<Entry>,
    ) -> Result<()> {
        self.commit(|doc| {
            doc.master = Some(record);
            doc.entries = entries;
        })
    }
}
