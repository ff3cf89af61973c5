//! In-process storage.
//!
//! Nothing is persisted; used by tests and by callers embedding the vault.

use super::{CredentialStore, EntryStore};
use crate::core::domain::{Entry, MasterCredentialRecord, SaltRecord};
use crate::error::Result;

/// Store held entirely in memory.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    master: Option<MasterCredentialRecord>,
    salt: Option<SaltRecord>,
    entries: Vec<Entry>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CredentialStore for MemoryStore {
    fn read_master_hash(&self) -> Result<Option<MasterCredentialRecord>> {
        Ok(self.master.clone())
    }

    fn write_master_hash(&mut self, record: MasterCredentialRecord) -> Result<()> {
        self.master = Some(record);
        Ok(())
    }

    fn read_salt(&self) -> Result<Option<SaltRecord>> {
        Ok(self.salt.clone())
    }

    fn write_salt(&mut self, record: SaltRecord) -> Result<()> {
        self.salt = Some(record);
        Ok(())
    }
}

impl EntryStore for MemoryStore {
    fn list_entries(&self) -> Result<Vec<Entry>> {
        Ok(super::sorted(&self.entries))
    }

    fn find_entry(&self, service: &str, username: &str) -> Result<Option<Entry>> {
        Ok(self
            .entries
            .iter()
            .find(|e| e.is(service, username))
            .cloned())
    }

    fn put_entry(&mut self, entry: Entry) -> Result<()> {
        super::upsert(&mut self.entries, entry);
        Ok(())
    }

    fn delete_entry(&mut self, service: &str, username: &str) -> Result<bool> {
        Ok(super::remove(&mut self.entries, service, username))
    }

    fn rotate_master(
        &mut self,
        record: MasterCredentialRecord,
        entries: Vec<Entry>,
    ) -> Result<()> {
        self.master = Some(record);
        self.entries = entries;
        Ok(())
    }
}
