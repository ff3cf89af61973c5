//! Tests for `lockbox status` and `lockbox completions`.

use crate::support::*;
use predicates::prelude::*;

#[test]
fn test_status_uninitialized() {
    let t = Test::new();
    let output = t.status();

    assert_success(&output);
    assert_stdout_contains(&output, "not initialized");
    assert_stderr_contains(&output, "lockbox init");
}

#[test]
fn test_status_initialized() {
    let t = Test::with_entries(STANDARD_ENTRIES);

    // Status never needs the passphrase.
    let output = t
        .cmd_with_passphrase("not-the-passphrase")
        .arg("status")
        .output()
        .unwrap();

    assert_success(&output);
    assert_stdout_contains(&output, "initialized");
    assert_stdout_contains(&output, "1000");
    assert_stdout_contains(&output, "entries:");
    assert_stdout_contains(&output, "3");
}

#[test]
fn test_completions_bash() {
    Test::new()
        .cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lockbox"));
}

#[test]
fn test_help_lists_commands() {
    let mut assert = Test::new().cmd().arg("--help").assert().success();
    for command in ["init", "add", "get", "list", "search", "update", "rm", "generate", "passwd"] {
        assert = assert.stdout(predicate::str::contains(command));
    }
}

#[test]
fn test_unknown_command_fails() {
    Test::new()
        .cmd()
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}
