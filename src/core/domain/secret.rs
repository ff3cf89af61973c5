//! Sealed secret type.
//!
//! The stored form of an encrypted value: base64 of
//! `nonce (12) ‖ ciphertext ‖ tag (16)`. No version or algorithm marker is
//! embedded, so the format is implicit across a deployment.

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use serde::{Deserialize, Serialize};

use crate::error::{InputError, Result};

/// An authenticated-encrypted value in its textual transport form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SealedSecret(String);

impl SealedSecret {
    /// Encode raw `nonce ‖ ciphertext ‖ tag` bytes.
    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self(STANDARD.encode(bytes))
    }

    /// Wrap stored text without validating it; [`SealedSecret::decode`]
    /// reports malformed content when the value is opened.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Decode back to raw bytes.
    ///
    /// # Errors
    ///
    /// Returns `InputError::MalformedSealedSecret` if the text is not base64.
    pub fn decode(&self) -> Result<Vec<u8>> {
        STANDARD
            .decode(self.0.as_bytes())
            .map_err(|_| InputError::MalformedSealedSecret.into())
    }

    /// Textual form as stored.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SealedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
