//! Domain types.
//!
//! Keys, passphrases, sealed values, persisted records and entries.

mod entry;
mod key;
mod passphrase;
mod record;
mod secret;

pub use entry::{Entry, EntryUpdate, NewEntry, RevealedEntry};
pub use key::DerivedKey;
pub use passphrase::Passphrase;
pub use record::{MasterCredentialRecord, Salt, SaltRecord};
pub use secret::SealedSecret;
