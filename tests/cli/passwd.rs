//! Tests for `lockbox passwd`.

use crate::support::*;

#[test]
fn test_passwd_reseals_entries() {
    let t = Test::with_entries(STANDARD_ENTRIES);
    let before = t.store_contents();

    let output = t.passwd("battery-staple");
    assert_success(&output);
    assert_stdout_contains(&output, "master passphrase changed");
    assert_ne!(t.store_contents(), before);

    // Old passphrase no longer opens the vault.
    let output = t.get("github.com", "alice");
    assert_failure(&output);
    assert_stderr_contains(&output, "incorrect master passphrase");

    // New one opens every entry.
    for (service, username, password) in STANDARD_ENTRIES {
        let output = t
            .cmd_with_passphrase("battery-staple")
            .args(["get", service, username])
            .output()
            .unwrap();
        assert_success(&output);
        assert_stdout_contains(&output, password);
    }
}

#[test]
fn test_passwd_keeps_salt() {
    let t = Test::with_entries(STANDARD_ENTRIES);
    let salt_line = |contents: &str| {
        contents
            .lines()
            .skip_while(|l| *l != "[salt]")
            .find(|l| l.starts_with("value = "))
            .map(str::to_string)
    };

    let before = salt_line(&t.store_contents());
    assert_success(&t.passwd("battery-staple"));
    assert_eq!(salt_line(&t.store_contents()), before);
}

#[test]
fn test_passwd_empty_replacement_fails() {
    let t = Test::with_entries(STANDARD_ENTRIES);
    let before = t.store_contents();

    let output = t.passwd("");
    assert_failure(&output);
    assert_stderr_contains(&output, "cannot be empty");
    assert_eq!(t.store_contents(), before);
}

#[test]
fn test_passwd_wrong_current_fails() {
    let t = Test::with_entries(STANDARD_ENTRIES);
    let before = t.store_contents();

    let output = t
        .cmd_with_passphrase("wrong-pass")
        .arg("passwd")
        .env("LOCKBOX_NEW_PASSPHRASE", "battery-staple")
        .output()
        .unwrap();

    assert_failure(&output);
    assert_eq!(t.store_contents(), before);
}
