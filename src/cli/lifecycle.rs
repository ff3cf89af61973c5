//! Vault lifecycle commands: init, passwd, status.

use tracing::info;

use crate::cli::{output, prompt};
use crate::core::config::Settings;
use crate::core::store::{CredentialStore, EntryStore, Filesystem};
use crate::core::vault::Vault;
use crate::error::{ConfigError, Error, Result};

/// Create a vault and establish its master passphrase.
pub fn init(settings: &Settings) -> Result<()> {
    // Refuse before prompting; `Vault::init` re-checks under the open store.
    match Filesystem::open(&settings.store_path) {
        Ok(store) => {
            if store.read_master_hash()?.is_some() {
                return Err(ConfigError::AlreadyInitialized {
                    path: settings.store_path.display().to_string(),
                }
                .into());
            }
        }
        Err(Error::Config(ConfigError::NotInitialized { .. })) => {}
        Err(e) => return Err(e),
    }

    let passphrase = prompt::initial()?;

    output::progress("Deriving key");
    let result = Vault::init(settings, passphrase);
    output::progress_done(result.is_ok());
    result?;

    output::success(&format!(
        "initialized {}",
        output::path(&settings.store_path.display().to_string())
    ));
    output::dimmed("the passphrase cannot be recovered; keep it somewhere safe");
    Ok(())
}

/// Change the master passphrase.
pub fn passwd(settings: &Settings) -> Result<()> {
    let mut vault = Vault::open(settings, prompt::current()?)?;
    let replacement = prompt::replacement()?;

    output::progress("Re-sealing entries");
    let result = vault.change_passphrase(replacement);
    output::progress_done(result.is_ok());
    result?;

    info!("passphrase rotated");
    output::success("master passphrase changed");
    Ok(())
}

/// Show where the vault lives and what it holds. Does not need the
/// passphrase.
pub fn status(settings: &Settings) -> Result<()> {
    output::section("Lockbox Status");
    output::kv(
        "store:     ",
        output::path(&settings.store_path.display().to_string()),
    );

    let store = match Filesystem::open(&settings.store_path) {
        Ok(store) => store,
        Err(Error::Config(ConfigError::NotInitialized { .. })) => {
            output::kv("state:     ", "not initialized");
            output::hint("run: lockbox init");
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    let master = store.read_master_hash()?;
    let state = if master.is_some() {
        "initialized"
    } else {
        "no master passphrase"
    };
    output::kv("state:     ", state);
    output::kv("format:    ", format!("v{}", store.version()));
    output::kv("iterations:", store.kdf_iterations());
    output::kv("entries:   ", store.list_entries()?.len());
    if let Some(record) = master {
        output::kv("created:   ", record.created_at.format("%Y-%m-%d %H:%M"));
    }
    Ok(())
}
