//! Record storage.
//!
//! The bootstrap core sees the store only through [`CredentialStore`]: one
//! slot for the master record, one for the salt. Credential entries live
//! behind [`EntryStore`]. Write methods take `&mut self`, so a read followed
//! by a conditional write under one borrow is a single critical section.
//! Sharing a store across threads requires wrapping it in a mutex that is
//! held for the whole read-then-write sequence.
//!
//! ## Adding a New Storage Backend
//!
//! 1. Implement `CredentialStore` and `EntryStore`
//! 2. Add the implementation in a new file (e.g., `sqlite.rs`)
//! 3. Re-export from this module

use crate::core::domain::{Entry, MasterCredentialRecord, SaltRecord};
use crate::error::Result;

mod fs;
mod memory;

pub use fs::Filesystem;
pub use memory::MemoryStore;

/// Persistence for the master record and the salt.
pub trait CredentialStore {
    /// Current master record, if one was established.
    fn read_master_hash(&self) -> Result<Option<MasterCredentialRecord>>;

    /// Replace the master record slot.
    fn write_master_hash(&mut self, record: MasterCredentialRecord) -> Result<()>;

    /// Current salt record, if one was generated.
    fn read_salt(&self) -> Result<Option<SaltRecord>>;

    /// Replace the salt slot.
    fn write_salt(&mut self, record: SaltRecord) -> Result<()>;
}

/// Persistence for credential entries.
pub trait EntryStore {
    /// All entries ordered by service, then username.
    fn list_entries(&self) -> Result<Vec<Entry>>;

    /// Entry stored under `service`/`username`.
    fn find_entry(&self, service: &str, username: &str) -> Result<Option<Entry>>;

    /// Insert, or replace the entry with the same service and username.
    fn put_entry(&mut self, entry: Entry) -> Result<()>;

    /// Delete an entry. Returns `false` if nothing was stored under the key.
    fn delete_entry(&mut self, service: &str, username: &str) -> Result<bool>;

    /// Replace the master record and every entry in a single commit.
    fn rotate_master(&mut self, record: MasterCredentialRecord, entries: Vec<Entry>)
        -> Result<()>;
}

/// A complete backend.
pub trait Store: CredentialStore + EntryStore {}

impl<T: CredentialStore + EntryStore> Store for T {}

fn sorted(entries: &[Entry]) -> Vec<Entry> {
    let mut out = entries.to_vec();
    out.sort_by(|a, b| (&a.service, &a.username).cmp(&(&b.service, &b.username)));
    out
}

fn upsert(entries: &mut Vec<Entry>, entry: Entry) {
    match entries
        .iter_mut()
        .find(|e| e.is(&entry.service, &entry.username))
    {
        Some(existing) => *existing = entry,
        None => entries.push(entry),
    }
}

fn remove(entries: &mut Vec<Entry>, service: &str, username: &str) -> bool {
    let before = entries.len();
    entries.retain(|e| !e.is(service, username));
    entries.len() != before
}
