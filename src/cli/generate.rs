//! Generate command.
//!
//! Prints a random password on stdout and its strength on stderr, so the
//! password alone can be piped.

use crate::cli::{output, GenerateArgs};
use crate::core::generator::{self, GeneratorOptions, Strength};
use crate::error::Result;

/// Generate and print a password.
pub fn execute(args: &GenerateArgs) -> Result<()> {
    let options = GeneratorOptions::from(args);
    let password = generator::generate(&options)?;

    println!("{}", password.as_str());

    let strength = Strength::evaluate(&password);
    eprintln!(
        "{}",
        output::path(&format!("strength: {} ({}/6)", strength.label(), strength.score()))
    );
    Ok(())
}
