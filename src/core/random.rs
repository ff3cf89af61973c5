//! Secure random byte source.
//!
//! Salts and nonces are drawn through [`RandomSource`] so a failing
//! platform generator surfaces as [`RandomError`] instead of a panic.

use rand::rngs::OsRng;
use rand::RngCore;
use tracing::error;

use crate::error::{RandomError, Result};

/// Cryptographically secure random byte generator.
pub trait RandomSource {
    /// Fill `dest` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns `RandomError::Unavailable` if the generator fails. Callers
    /// must treat this as fatal: a partially filled buffer is never used.
    fn fill(&self, dest: &mut [u8]) -> Result<()>;
}

impl<R: RandomSource + ?Sized> RandomSource for &R {
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        (**self).fill(dest)
    }
}

/// Operating system CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl RandomSource for OsRandom {
    fn fill(&self, dest: &mut [u8]) -> Result<()> {
        let len = dest.len();
        OsRng.try_fill_bytes(dest).map_err(|e| {
            error!(len, "os random source failed");
            RandomError::Unavailable(e.to_string()).into()
        })
    }
}

/// Draw a fixed-size array from `source`.
pub fn array<const N: usize>(source: &impl RandomSource) -> Result<[u8; N]> {
    let mut bytes = [0u8; N];
    source.fill(&mut bytes)?;
    Ok(bytes)
}
