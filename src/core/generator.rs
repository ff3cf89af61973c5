//! Password generation and strength checks.

use serde::Serialize;
use zeroize::Zeroizing;

use crate::core::random::{OsRandom, RandomSource};
use crate::error::{InputError, Result};

const LOWER: &str = "abcdefghijklmnopqrstuvwxyz";
const LOWER_CLEAR: &str = "abcdefghjkmnpqrstuvwxyz";
const UPPER: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const UPPER_CLEAR: &str = "ABCDEFGHJKMNPQRSTUVWXYZ";
const DIGITS: &str = "0123456789";
const DIGITS_CLEAR: &str = "23456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";
const SYMBOLS_CLEAR: &str = "!@#$%^&*-_=+[]{}:;";

/// Default generated length.
pub const DEFAULT_LENGTH: usize = 16;

/// Character classes and length for [`generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    pub length: usize,
    pub lower: bool,
    pub upper: bool,
    pub digits: bool,
    pub symbols: bool,
    /// Drop look-alike characters such as `l`, `1`, `O` and `0`.
    pub exclude_similar: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            length: DEFAULT_LENGTH,
            lower: true,
            upper: true,
            digits: true,
            symbols: true,
            exclude_similar: false,
        }
    }
}

impl GeneratorOptions {
    /// Characters the generator will draw from. Selecting no class at all
    /// selects every class.
    pub fn charset(&self) -> Vec<char> {
        let pick = |on: bool, full: &'static str, clear: &'static str| -> &'static str {
            match (on, self.exclude_similar) {
                (false, _) => "",
                (true, false) => full,
                (true, true) => clear,
            }
        };

        let any = self.lower || self.upper || self.digits || self.symbols;
        let on = |flag: bool| flag || !any;

        [
            pick(on(self.lower), LOWER, LOWER_CLEAR),
            pick(on(self.upper), UPPER, UPPER_CLEAR),
            pick(on(self.digits), DIGITS, DIGITS_CLEAR),
            pick(on(self.symbols), SYMBOLS, SYMBOLS_CLEAR),
        ]
        .concat()
        .chars()
        .collect()
    }
}

/// Generate a password from the OS generator.
pub fn generate(options: &GeneratorOptions) -> Result<Zeroizing<String>> {
    generate_with(options, &OsRandom)
}

/// Generate a password from `random`.
///
/// # Errors
///
/// Returns `InputError::InvalidValue` if `length` is zero and `RandomError`
/// if the source fails.
pub fn generate_with(
    options: &GeneratorOptions,
    random: &impl RandomSource,
) -> Result<Zeroizing<String>> {
    if options.length == 0 {
        return Err(InputError::InvalidValue {
            field: "length",
            reason: "must be at least 1".to_string(),
        }
        .into());
    }

    let charset = options.charset();
    let mut out = Zeroizing::new(String::with_capacity(options.length));
    for _ in 0..options.length {
        out.push(charset[uniform_index(random, charset.len())?]);
    }
    Ok(out)
}

// Rejection sampling so every character is equally likely.
fn uniform_index(random: &impl RandomSource, n: usize) -> Result<usize> {
    let n = n as u32;
    let zone = u32::MAX - (u32::MAX % n);
    loop {
        let mut buf = [0u8; 4];
        random.fill(&mut buf)?;
        let v = u32::from_le_bytes(buf);
        if v < zone {
            return Ok((v % n) as usize);
        }
    }
}

/// Composition report for a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Strength {
    pub has_lower: bool,
    pub has_upper: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
    /// At least 8 characters.
    pub min_length: bool,
    /// At least 12 characters.
    pub good_length: bool,
}

impl Strength {
    pub fn evaluate(password: &str) -> Self {
        let count = password.chars().count();
        Self {
            has_lower: password.chars().any(|c| c.is_ascii_lowercase()),
            has_upper: password.chars().any(|c| c.is_ascii_uppercase()),
            has_digit: password.chars().any(|c| c.is_ascii_digit()),
            has_symbol: password.chars().any(|c| SYMBOLS.contains(c)),
            min_length: count >= 8,
            good_length: count >= 12,
        }
    }

    /// Number of satisfied checks, 0 to 6.
    pub fn score(&self) -> u8 {
        [
            self.has_lower,
            self.has_upper,
            self.has_digit,
            self.has_symbol,
            self.min_length,
            self.good_length,
        ]
        .iter()
        .filter(|&&b| b)
        .count() as u8
    }

    pub fn label(&self) -> &'static str {
        match self.score() {
            0..=2 => "weak",
            3..=4 => "fair",
            5 => "good",
            _ => "strong",
        }
    }
}
