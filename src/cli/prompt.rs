//! Passphrase input.
//!
//! Reads from `LOCKBOX_PASSPHRASE` / `LOCKBOX_NEW_PASSPHRASE` when set,
//! otherwise prompts on the terminal with hidden input.

use dialoguer::Password;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::constants;
use crate::core::domain::Passphrase;
use crate::error::{InputError, Result};

/// Current master passphrase.
pub fn current() -> Result<Passphrase> {
    read(constants::ENV_PASSPHRASE, "Master passphrase", false)
}

/// Passphrase for a new vault, confirmed when typed.
pub fn initial() -> Result<Passphrase> {
    read(constants::ENV_PASSPHRASE, "Choose a master passphrase", true)
}

/// Replacement passphrase for `passwd`, confirmed when typed.
pub fn replacement() -> Result<Passphrase> {
    read(constants::ENV_NEW_PASSPHRASE, "New master passphrase", true)
}

/// Entry password typed interactively.
pub fn entry_password() -> Result<Zeroizing<String>> {
    Password::new()
        .with_prompt("Password")
        .interact()
        .map(Zeroizing::new)
        .map_err(|e| InputError::Prompt(e.to_string()).into())
}

fn read(env: &str, prompt: &str, confirm: bool) -> Result<Passphrase> {
    if let Ok(value) = std::env::var(env) {
        debug!(source = env, "passphrase from environment");
        return Passphrase::new(value);
    }

    let mut input = Password::new().with_prompt(prompt).allow_empty_password(true);
    if confirm {
        input = input.with_confirmation("Confirm passphrase", "Passphrases do not match");
    }

    let value = input
        .interact()
        .map_err(|e| InputError::Prompt(e.to_string()))?;
    Passphrase::new(value)
}
