//! Tests for `lockbox generate`.

use crate::support::*;

fn generated(args: &[&str]) -> String {
    let t = Test::new();
    let output = t.cmd().arg("generate").args(args).output().unwrap();
    assert_success(&output);
    stdout(&output).trim_end().to_string()
}

#[test]
fn test_generate_default_length() {
    assert_eq!(generated(&[]).chars().count(), 16);
}

#[test]
fn test_generate_needs_no_vault() {
    let t = Test::new();
    let output = t.cmd().arg("generate").output().unwrap();
    assert_success(&output);
    assert!(!t.store_path().exists());
}

#[test]
fn test_generate_reports_strength_on_stderr() {
    let t = Test::new();
    let output = t
        .cmd()
        .args(["generate", "--length", "128"])
        .output()
        .unwrap();

    assert_success(&output);
    assert_stderr_contains(&output, "strength: strong (6/6)");
    assert_eq!(stdout(&output).lines().count(), 1);
}

#[test]
fn test_generate_digits_only() {
    let pw = generated(&["--length", "40", "--no-lower", "--no-upper", "--no-symbols"]);
    assert_eq!(pw.len(), 40);
    assert!(pw.chars().all(|c| c.is_ascii_digit()));
}

#[test]
fn test_generate_exclude_similar() {
    let pw = generated(&["--length", "200", "--exclude-similar"]);
    assert!(!pw.contains(['0', '1', 'O', 'o', 'l', 'I', 'i', 'L']));
}

#[test]
fn test_generate_zero_length_fails() {
    let t = Test::new();
    let output = t
        .cmd()
        .args(["generate", "--length", "0"])
        .output()
        .unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "length");
}

#[test]
fn test_generate_differs_each_time() {
    assert_ne!(generated(&["--length", "32"]), generated(&["--length", "32"]));
}
