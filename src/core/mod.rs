//! Core library components.
//!
//! Key derivation, passphrase bootstrap, authenticated encryption, record
//! storage and the vault built on top of them.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod domain;
pub mod generator;
pub mod kdf;
pub mod master;
pub mod random;
pub mod store;
pub mod types;
pub mod validation;
pub mod vault;
