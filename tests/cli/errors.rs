//! Error reporting and hints.

use crate::support::*;

#[test]
fn test_commands_before_init_fail_with_hint() {
    let t = Test::new();

    for args in [
        vec!["list"],
        vec!["get", "a", "b"],
        vec!["search", "a"],
        vec!["rm", "a", "b"],
        vec!["passwd"],
    ] {
        let output = t.cmd().args(&args).output().unwrap();
        assert_failure(&output);
        assert_stderr_contains(&output, "not initialized");
        assert_stderr_contains(&output, "lockbox init");
    }
}

#[test]
fn test_wrong_passphrase_rejected() {
    let t = Test::with_entries(STANDARD_ENTRIES);

    let output = t
        .cmd_with_passphrase("wrong-pass")
        .args(["get", "github.com", "alice"])
        .output()
        .unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "incorrect master passphrase");
    assert_not_leaked(&output, "gh-Pa55word!");
    assert_not_leaked(&output, "wrong-pass");
}

#[test]
fn test_wrong_passphrase_leaves_store_untouched() {
    let t = Test::with_entries(STANDARD_ENTRIES);
    let before = t.store_contents();

    let output = t
        .cmd_with_passphrase("wrong-pass")
        .args(["add", "x", "y", "--password", "z"])
        .output()
        .unwrap();

    assert_failure(&output);
    assert_eq!(t.store_contents(), before);
}

#[test]
fn test_corrupt_store_reported() {
    let t = Test::init();
    std::fs::write(t.store_path(), "this is = not [valid toml").unwrap();

    let output = t.list();
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse store");
}

#[test]
fn test_tampered_password_fails_authentication() {
    let t = Test::with_entries(&[("github.com", "alice", "gh-Pa55word!")]);

    // Swap the sealed password for a well-formed one that was never
    // produced under this vault's key.
    let contents = t.store_contents();
    let forged = "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA";
    let tampered: String = contents
        .lines()
        .map(|line| {
            if line.starts_with("password = ") {
                format!("password = \"{}\"", forged)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n");
    std::fs::write(t.store_path(), tampered).unwrap();

    let output = t.get("github.com", "alice");
    assert_failure(&output);
    assert_stderr_contains(&output, "authentication failed");
}
