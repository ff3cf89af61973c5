//! Lockbox - a local password vault sealed under one master passphrase.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── entries       # add/get/list/search/update/rm
//! │   ├── generate      # Password generator
//! │   ├── lifecycle     # init/passwd/status
//! │   ├── prompt        # Passphrase input
//! │   └── output        # Terminal formatting
//! └── core/             # Core library components
//!     ├── kdf           # PBKDF2-HMAC-SHA256 key derivation
//!     ├── master        # Passphrase bootstrap and salt lifecycle
//!     ├── cipher/       # Authenticated encryption
//!     │   ├── mod       # Cipher trait
//!     │   └── aes       # AES-256-GCM implementation
//!     ├── store/        # Record storage
//!     │   ├── mod       # CredentialStore and EntryStore traits
//!     │   ├── fs        # TOML file backend
//!     │   └── memory    # In-process backend
//!     ├── vault         # Entry operations over an unlocked store
//!     └── generator     # Password generation and strength checks
//! ```
//!
//! # Startup
//!
//! The master manager verifies (or, on first run, records) the passphrase
//! hash, fetches or creates the single salt, and derives the session key.
//! The key is moved into one cipher that lives for the rest of the process
//! and is zeroed when dropped.

pub mod cli;
pub mod core;
pub mod error;
