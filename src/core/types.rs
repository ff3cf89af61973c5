//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// Name of the service a credential belongs to (e.g., github.com).
pub type ServiceName = String;

/// Account name within a service.
pub type Username = String;

/// Base64 text of a SHA-256 digest of the master passphrase.
pub type EncodedHash = String;

/// Base64 text of the 32 salt bytes.
pub type EncodedSalt = String;
