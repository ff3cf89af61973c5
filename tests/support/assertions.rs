//! Test assertion helpers.

use std::process::Output;

/// Stdout as a String.
pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

/// Stderr as a String.
pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

/// Panic with stderr unless the command exited zero.
pub fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "lockbox exited with {}:\n{}",
        output.status,
        stderr(output)
    );
}

/// Panic if the command exited zero.
pub fn assert_failure(output: &Output) {
    assert!(
        !output.status.success(),
        "lockbox succeeded unexpectedly:\n{}",
        stdout(output)
    );
}

pub fn assert_stdout_contains(output: &Output, expected: &str) {
    expect_in("stdout", &stdout(output), expected);
}

pub fn assert_stderr_contains(output: &Output, expected: &str) {
    expect_in("stderr", &stderr(output), expected);
}

/// Panic if `secret` shows up on either stream.
pub fn assert_not_leaked(output: &Output, secret: &str) {
    for (name, text) in [("stdout", stdout(output)), ("stderr", stderr(output))] {
        assert!(!text.contains(secret), "{} leaked {:?}:\n{}", name, secret, text);
    }
}

fn expect_in(name: &str, text: &str, expected: &str) {
    assert!(
        text.contains(expected),
        "{} missing {:?}, got:\n{}",
        name,
        expected,
        text
    );
}
