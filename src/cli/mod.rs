//! Command-line interface.

pub mod completions;
pub mod entries;
pub mod generate;
pub mod lifecycle;
pub mod output;
pub mod prompt;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::config::Settings;
use crate::core::generator::{GeneratorOptions, DEFAULT_LENGTH};

/// Lockbox - a local password vault under one master passphrase.
#[derive(Parser)]
#[command(
    name = "lockbox",
    about = "A local password vault under one master passphrase",
    version
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Store file (default: ~/.lockbox/vault.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Create a vault and set its master passphrase
    Init,

    /// Add a credential
    Add {
        /// Service name (e.g., github.com)
        service: String,
        /// Account name
        username: String,
        #[command(flatten)]
        password: PasswordSource,
        /// Login URL
        #[arg(long, default_value = "")]
        url: String,
        /// Free-form notes
        #[arg(long, default_value = "")]
        notes: String,
    },

    /// Show a credential with its password
    Get {
        service: String,
        username: String,
    },

    /// List credentials (passwords hidden)
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Search service, username and url
    Search {
        term: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change a credential's password, url or notes
    Update {
        service: String,
        username: String,
        #[command(flatten)]
        password: PasswordSource,
        /// New login URL
        #[arg(long)]
        url: Option<String>,
        /// New notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Remove a credential
    Rm {
        service: String,
        username: String,
    },

    /// Generate a random password
    Generate {
        #[command(flatten)]
        options: GenerateArgs,
    },

    /// Change the master passphrase and re-seal every credential
    Passwd,

    /// Show vault location and summary
    Status,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Where a credential's password comes from.
#[derive(Args, Debug, Clone)]
pub struct PasswordSource {
    /// Password value (prompted when neither this nor --generate is given)
    #[arg(short, long, conflicts_with = "generate")]
    pub password: Option<String>,

    /// Generate a random password
    #[arg(short, long)]
    pub generate: bool,

    /// Length of a generated password
    #[arg(long, default_value_t = DEFAULT_LENGTH, requires = "generate")]
    pub length: usize,
}

/// Generator flags.
#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Password length
    #[arg(short, long, default_value_t = DEFAULT_LENGTH)]
    pub length: usize,
    /// Leave out lowercase letters
    #[arg(long)]
    pub no_lower: bool,
    /// Leave out uppercase letters
    #[arg(long)]
    pub no_upper: bool,
    /// Leave out digits
    #[arg(long)]
    pub no_digits: bool,
    /// Leave out symbols
    #[arg(long)]
    pub no_symbols: bool,
    /// Leave out look-alike characters (i, l, o, 0, 1, ...)
    #[arg(long)]
    pub exclude_similar: bool,
}

impl From<&GenerateArgs> for GeneratorOptions {
    fn from(args: &GenerateArgs) -> Self {
        Self {
            length: args.length,
            lower: !args.no_lower,
            upper: !args.no_upper,
            digits: !args.no_digits,
            symbols: !args.no_symbols,
            exclude_similar: args.exclude_similar,
        }
    }
}

/// Supported shells for completions.
#[derive(clap::ValueEnum, Clone, Debug)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Execute a command.
pub fn execute(command: Command, store: Option<PathBuf>) -> crate::error::Result<()> {
    use Command::*;

    // These two never touch the store.
    match &command {
        Generate { options } => return generate::execute(options),
        Completions { shell } => return completions::execute(shell.clone()),
        _ => {}
    }

    let settings = Settings::resolve(store)?;

    match command {
        Init => lifecycle::init(&settings),
        Add {
            service,
            username,
            password,
            url,
            notes,
        } => entries::add(&settings, service, username, &password, url, notes),
        Get { service, username } => entries::get(&settings, &service, &username),
        List { json } => entries::list(&settings, json),
        Search { term, json } => entries::search(&settings, &term, json),
        Update {
            service,
            username,
            password,
            url,
            notes,
        } => entries::update(&settings, &service, &username, &password, url, notes),
        Rm { service, username } => entries::rm(&settings, &service, &username),
        Passwd => lifecycle::passwd(&settings),
        Status => lifecycle::status(&settings),
        Generate { .. } | Completions { .. } => Ok(()),
    }
}
