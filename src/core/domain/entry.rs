//! Credential entry types.
//!
//! An entry is keyed by (service, username). Only the password is sealed;
//! url and notes are stored as given.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use zeroize::Zeroizing;

use crate::core::domain::SealedSecret;
use crate::core::types::{ServiceName, Username};

/// A stored credential with its password sealed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    pub service: ServiceName,
    pub username: Username,
    pub password: SealedSecret,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub url: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Entry {
    /// True if this entry is stored under `service`/`username`.
    pub fn is(&self, service: &str, username: &str) -> bool {
        self.service == service && self.username == username
    }

    /// Case-insensitive substring match over service, username and url.
    pub fn matches(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.service.to_lowercase().contains(&term)
            || self.username.to_lowercase().contains(&term)
            || self.url.to_lowercase().contains(&term)
    }
}

impl std::fmt::Display for Entry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.service, self.username)
    }
}

/// Input for creating an entry.
pub struct NewEntry {
    pub service: ServiceName,
    pub username: Username,
    pub password: Zeroizing<String>,
    pub url: String,
    pub notes: String,
}

/// Partial update; `None` fields are left unchanged.
#[derive(Default)]
pub struct EntryUpdate {
    pub password: Option<Zeroizing<String>>,
    pub url: Option<String>,
    pub notes: Option<String>,
}

impl EntryUpdate {
    pub fn is_empty(&self) -> bool {
        self.password.is_none() && self.url.is_none() && self.notes.is_none()
    }
}

/// An entry with its password opened.
pub struct RevealedEntry {
    pub service: ServiceName,
    pub username: Username,
    pub password: Zeroizing<String>,
    pub url: String,
    pub notes: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl std::fmt::Debug for RevealedEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevealedEntry")
            .field("service", &self.service)
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}
