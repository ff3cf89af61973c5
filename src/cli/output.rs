//! Terminal output helpers.
//!
//! Results go to stdout; errors, hints and progress go to stderr. Styling is
//! dropped when `NO_COLOR` is set or the terminal has no color support.

use std::fmt::Display;
use std::io::{self, Write};

use console::{style, StyledObject};

const RULE_WIDTH: usize = 56;

fn colors_enabled() -> bool {
    std::env::var_os("NO_COLOR").is_none() && console::colors_enabled()
}

// Apply `paint` only when colors are on.
fn styled<D: Display>(value: D, paint: fn(StyledObject<D>) -> StyledObject<D>) -> String {
    if colors_enabled() {
        paint(style(value)).to_string()
    } else {
        value.to_string()
    }
}

/// `✓ msg` on stdout.
pub fn success(msg: &str) {
    println!("{} {}", styled("✓", |s| s.green()), msg);
}

/// `✗ msg` on stderr.
pub fn error(msg: &str) {
    eprintln!("{} {}", styled("✗", |s| s.red()), msg);
}

/// `→ msg` on stderr, e.g. `→ run: lockbox init`.
pub fn hint(msg: &str) {
    eprintln!("{} {}", styled("→", |s| s.cyan()), styled(msg, |s| s.cyan()));
}

/// Bold title line.
pub fn header(title: &str) {
    println!("{}", styled(title, |s| s.bold()));
}

/// Blank line, title, rule.
pub fn section(title: &str) {
    println!();
    header(title);
    println!("{}", styled("─".repeat(RULE_WIDTH), |s| s.dim()));
}

/// Indented `label  value` pair.
pub fn kv(label: &str, value: impl Display) {
    println!(
        "  {}  {}",
        styled(label, |s| s.dim()),
        styled(value.to_string(), |s| s.bold())
    );
}

pub fn list_item(item: &str) {
    println!("  • {}", item);
}

/// Secondary text, e.g. counts and empty-state messages.
pub fn dimmed(msg: &str) {
    println!("{}", styled(msg, |s| s.dim()));
}

/// A path rendered for display.
pub fn path(p: &str) -> String {
    styled(p, |s| s.cyan())
}

/// Begin `Label... ` on stderr; finish it with [`progress_done`].
pub fn progress(label: &str) {
    eprint!("{}... ", styled(label, |s| s.dim()));
    let _ = io::stderr().flush();
}

pub fn progress_done(ok: bool) {
    if ok {
        eprintln!("{}", styled("ok", |s| s.green()));
    } else {
        eprintln!("{}", styled("failed", |s| s.red()));
    }
}
