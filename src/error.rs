//! Error types.
//!
//! Each concern has its own enum; [`Error`] aggregates them for the
//! application boundary. Messages never include passphrases, keys, or
//! plaintext secret values.

use thiserror::Error;

/// Top-level error type for all lockbox operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Random(#[from] RandomError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Entry(#[from] EntryError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Caller-correctable input problems. Nothing is mutated when these occur.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("master passphrase cannot be empty")]
    EmptyPassphrase,

    #[error("sealed secret is not valid base64")]
    MalformedSealedSecret,

    #[error("sealed secret is too short ({len} bytes, need at least {min})")]
    SealedSecretTooShort { len: usize, min: usize },

    #[error("decrypted value is not valid UTF-8")]
    NotUtf8,

    #[error("{field} cannot be empty")]
    EmptyField { field: &'static str },

    #[error("invalid {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("prompt failed: {0}")]
    Prompt(String),
}

/// Authentication failures. Deliberately carry no detail about the cause.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("incorrect master passphrase")]
    IncorrectPassphrase,

    #[error("authentication failed: sealed secret could not be opened")]
    OpenFailed,
}

/// Persistence failures from the record store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("failed to read store: {0}")]
    ReadFailed(#[source] std::io::Error),

    #[error("failed to write store: {0}")]
    WriteFailed(#[source] std::io::Error),

    #[error("failed to parse store: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize store: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("store is corrupt: {0}")]
    Corrupt(String),

    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// The secure random source could not produce bytes.
#[derive(Error, Debug)]
pub enum RandomError {
    #[error("secure random source unavailable: {0}")]
    Unavailable(String),
}

/// Configuration and store lifecycle problems.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("not initialized: no vault at {path}")]
    NotInitialized { path: String },

    #[error("already initialized: vault exists at {path}")]
    AlreadyInitialized { path: String },

    #[error("invalid setting {name}: {reason}")]
    InvalidSetting { name: &'static str, reason: String },

    #[error("unable to determine home directory")]
    NoHomeDir,
}

/// Credential entry lookups.
#[derive(Error, Debug)]
pub enum EntryError {
    #[error("no entry for {service} ({username})")]
    NotFound { service: String, username: String },

    #[error("entry already exists for {service} ({username})")]
    AlreadyExists { service: String, username: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// True for passphrase or tag verification failures.
    pub fn is_auth(&self) -> bool {
        matches!(self, Error::Auth(_))
    }

    /// Short remediation hint shown under the error message by the CLI.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Error::Config(ConfigError::NotInitialized { .. }) => Some("run: lockbox init"),
            Error::Config(ConfigError::AlreadyInitialized { .. }) => {
                Some("use --store to pick another location")
            }
            Error::Auth(AuthError::IncorrectPassphrase) => {
                Some("the vault only opens with the passphrase it was created with")
            }
            Error::Entry(EntryError::NotFound { .. }) => Some("run: lockbox search <term>"),
            Error::Entry(EntryError::AlreadyExists { .. }) => {
                Some("run: lockbox update <service> <username>")
            }
            _ => None,
        }
    }
}
