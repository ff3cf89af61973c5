//! Entry commands: add, get, list, search, update, rm.

use std::io::{self, BufRead, IsTerminal};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::info;
use zeroize::Zeroizing;

use crate::cli::{output, prompt, PasswordSource};
use crate::core::config::Settings;
use crate::core::domain::{Entry, EntryUpdate, NewEntry};
use crate::core::generator::{self, GeneratorOptions};
use crate::core::vault::Vault;
use crate::error::{InputError, Result};

const MASK: &str = "••••••••";

/// Entry as printed by `--json`; the sealed password is left out.
#[derive(Serialize)]
struct Listing<'a> {
    service: &'a str,
    username: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    url: &'a str,
    #[serde(skip_serializing_if = "str::is_empty")]
    notes: &'a str,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl<'a> From<&'a Entry> for Listing<'a> {
    fn from(e: &'a Entry) -> Self {
        Self {
            service: &e.service,
            username: &e.username,
            url: &e.url,
            notes: &e.notes,
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}

/// Add a credential.
pub fn add(
    settings: &Settings,
    service: String,
    username: String,
    source: &PasswordSource,
    url: String,
    notes: String,
) -> Result<()> {
    let mut vault = Vault::open(settings, prompt::current()?)?;

    let password = match resolve_password(source)? {
        Some(password) => password,
        None => read_password()?,
    };

    let entry = vault.add(NewEntry {
        service,
        username,
        password,
        url,
        notes,
    })?;

    info!(entry = %entry, "added");
    output::success(&format!("added {}", entry));
    if source.generate {
        output::hint("run: lockbox get <service> <username> to view the generated password");
    }
    Ok(())
}

/// Show one credential with its password.
pub fn get(settings: &Settings, service: &str, username: &str) -> Result<()> {
    let vault = Vault::open(settings, prompt::current()?)?;
    let entry = vault.get(service, username)?;

    output::header(&entry.service);
    output::kv("username:", &entry.username);
    output::kv("password:", entry.password.as_str());
    if !entry.url.is_empty() {
        output::kv("url:     ", &entry.url);
    }
    if !entry.notes.is_empty() {
        output::kv("notes:   ", &entry.notes);
    }
    output::kv("updated: ", entry.updated_at.format("%Y-%m-%d %H:%M"));
    Ok(())
}

/// List every credential with passwords masked.
pub fn list(settings: &Settings, json: bool) -> Result<()> {
    let vault = Vault::open(settings, prompt::current()?)?;
    print_entries(&vault.list()?, json, "no entries stored")
}

/// List credentials matching `term`.
pub fn search(settings: &Settings, term: &str, json: bool) -> Result<()> {
    let vault = Vault::open(settings, prompt::current()?)?;
    print_entries(
        &vault.search(term)?,
        json,
        &format!("no entries match '{}'", term),
    )
}

/// Update a credential's password, url or notes.
pub fn update(
    settings: &Settings,
    service: &str,
    username: &str,
    source: &PasswordSource,
    url: Option<String>,
    notes: Option<String>,
) -> Result<()> {
    let update = EntryUpdate {
        password: resolve_password(source)?,
        url,
        notes,
    };
    if update.is_empty() {
        return Err(InputError::InvalidValue {
            field: "update",
            reason: "nothing to change (use --password, --generate, --url or --notes)"
                .to_string(),
        }
        .into());
    }

    let mut vault = Vault::open(settings, prompt::current()?)?;
    let entry = vault.update(service, username, update)?;
    output::success(&format!("updated {}", entry));
    Ok(())
}

/// Remove a credential.
pub fn rm(settings: &Settings, service: &str, username: &str) -> Result<()> {
    let mut vault = Vault::open(settings, prompt::current()?)?;
    vault.remove(service, username)?;
    output::success(&format!("removed {} ({})", service, username));
    Ok(())
}

fn print_entries(entries: &[Entry], json: bool, empty: &str) -> Result<()> {
    if json {
        let listing: Vec<Listing> = entries.iter().map(Listing::from).collect();
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(());
    }

    if entries.is_empty() {
        output::dimmed(empty);
        return Ok(());
    }

    for entry in entries {
        output::list_item(&format!("{}  {}", entry, MASK));
    }
    output::dimmed(&format!(
        "{} entr{}",
        entries.len(),
        if entries.len() == 1 { "y" } else { "ies" }
    ));
    Ok(())
}

/// Password from `--password` or `--generate`, if either was given.
fn resolve_password(source: &PasswordSource) -> Result<Option<Zeroizing<String>>> {
    if let Some(password) = &source.password {
        return Ok(Some(Zeroizing::new(password.clone())));
    }
    if source.generate {
        let options = GeneratorOptions {
            length: source.length,
            ..GeneratorOptions::default()
        };
        return generator::generate(&options).map(Some);
    }
    Ok(None)
}

// Piped stdin is read as one line; a terminal gets a hidden prompt.
fn read_password() -> Result<Zeroizing<String>> {
    if io::stdin().is_terminal() {
        return prompt::entry_password();
    }

    let mut line = Zeroizing::new(String::new());
    io::stdin().lock().read_line(&mut line)?;
    let trimmed = line.trim_end_matches(['\r', '\n']);
    Ok(Zeroizing::new(trimmed.to_string()))
}
