//! Persisted bootstrap records.
//!
//! The store keeps exactly one master record and one salt record. Both are
//! written once and read back on every later start.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::constants::SALT_LEN;
use crate::core::types::{EncodedHash, EncodedSalt};
use crate::error::{Result, StoreError};

/// Verification hash of the master passphrase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MasterCredentialRecord {
    /// Base64 SHA-256 digest (44 characters).
    pub hash: EncodedHash,
    pub created_at: DateTime<Utc>,
}

impl MasterCredentialRecord {
    pub fn new(hash: EncodedHash) -> Self {
        Self {
            hash,
            created_at: Utc::now(),
        }
    }
}

/// The single key-derivation salt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaltRecord {
    /// Base64 of the 32 salt bytes (44 characters).
    pub value: EncodedSalt,
    pub created_at: DateTime<Utc>,
}

impl SaltRecord {
    pub fn new(salt: &Salt) -> Self {
        Self {
            value: STANDARD.encode(salt.as_bytes()),
            created_at: Utc::now(),
        }
    }

    /// Decode the stored salt.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Corrupt` if the text is not base64 of exactly
    /// 32 bytes.
    pub fn salt(&self) -> Result<Salt> {
        let bytes = STANDARD
            .decode(self.value.as_bytes())
            .map_err(|_| StoreError::Corrupt("salt is not valid base64".to_string()))?;
        let bytes: [u8; SALT_LEN] = bytes.try_into().map_err(|b: Vec<u8>| {
            StoreError::Corrupt(format!(
                "salt has {} bytes, expected {}",
                b.len(),
                SALT_LEN
            ))
        })?;
        Ok(Salt(bytes))
    }
}

/// Raw salt bytes. Not secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Salt([u8; SALT_LEN]);

impl Salt {
    pub fn from_bytes(bytes: [u8; SALT_LEN]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; SALT_LEN] {
        &self.0
    }
}
