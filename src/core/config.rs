//! Runtime settings.
//!
//! Resolves the store location and KDF cost from command-line flags,
//! environment variables, and defaults, in that order.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Settings resolved once per process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Store file location.
    pub store_path: PathBuf,
    /// PBKDF2 iterations used when a new store is created.
    pub kdf_iterations: u32,
}

impl Settings {
    /// Resolve settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidSetting` for a malformed
    /// `LOCKBOX_KDF_ITERATIONS` and `ConfigError::NoHomeDir` if no store
    /// path was given and the home directory is unknown.
    pub fn resolve(store_flag: Option<PathBuf>) -> Result<Self> {
        Self::from_sources(
            store_flag,
            std::env::var(constants::ENV_STORE).ok(),
            std::env::var(constants::ENV_KDF_ITERATIONS).ok(),
            dirs::home_dir().as_deref(),
        )
    }

    /// Resolve settings from explicit sources.
    pub fn from_sources(
        store_flag: Option<PathBuf>,
        store_env: Option<String>,
        iterations_env: Option<String>,
        home: Option<&Path>,
    ) -> Result<Self> {
        let store_path = match (store_flag, store_env.filter(|s| !s.is_empty())) {
            (Some(path), _) => path,
            (None, Some(env)) => PathBuf::from(env),
            (None, None) => home
                .ok_or(ConfigError::NoHomeDir)?
                .join(constants::STORE_DIR)
                .join(constants::STORE_FILE),
        };

        let kdf_iterations = match iterations_env {
            Some(raw) => parse_iterations(&raw)?,
            None => constants::KDF_ITERATIONS,
        };

        debug!(store = %store_path.display(), kdf_iterations, "settings resolved");

        Ok(Self {
            store_path,
            kdf_iterations,
        })
    }
}

fn parse_iterations(raw: &str) -> Result<u32> {
    match raw.trim().parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(ConfigError::InvalidSetting {
            name: constants::ENV_KDF_ITERATIONS,
            reason: format!("expected a positive integer, got '{}'", raw),
        }
        .into()),
    }
}
