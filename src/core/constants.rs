//! Constants used throughout lockbox.
//!
//! Centralizes file names, environment variables, and cryptographic sizes.

/// Store directory relative to HOME (~/.lockbox).
pub const STORE_DIR: &str = ".lockbox";

/// Store file name inside [`STORE_DIR`].
pub const STORE_FILE: &str = "vault.toml";

/// Overrides the store path.
pub const ENV_STORE: &str = "LOCKBOX_STORE";

/// Supplies the master passphrase without prompting.
pub const ENV_PASSPHRASE: &str = "LOCKBOX_PASSPHRASE";

/// Supplies the replacement passphrase for `lockbox passwd`.
pub const ENV_NEW_PASSPHRASE: &str = "LOCKBOX_NEW_PASSPHRASE";

/// PBKDF2 iteration count for newly created stores.
pub const ENV_KDF_ITERATIONS: &str = "LOCKBOX_KDF_ITERATIONS";

/// Tracing filter directive.
pub const ENV_LOG: &str = "LOCKBOX_LOG";

/// Set to `json` for one JSON object per log line.
pub const ENV_LOG_FORMAT: &str = "LOCKBOX_LOG_FORMAT";

/// PBKDF2-HMAC-SHA256 iterations.
pub const KDF_ITERATIONS: u32 = 100_000;

/// AES-256 key length.
pub const KEY_LEN: usize = 32;

/// Salt length in bytes.
pub const SALT_LEN: usize = 32;

/// AES-GCM nonce length in bytes.
pub const NONCE_LEN: usize = 12;

/// AES-GCM authentication tag length in bytes.
pub const TAG_LEN: usize = 16;

/// Length of a base64-encoded 32-byte value.
pub const ENCODED_DIGEST_LEN: usize = 44;
