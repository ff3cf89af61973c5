//! Tests for `lockbox init`.

use crate::support::*;

#[test]
fn test_init_creates_store() {
    let t = Test::new();
    let output = t.init_cmd();

    assert_success(&output);
    assert_stdout_contains(&output, "initialized");
    assert!(t.store_path().exists());

    let contents = t.store_contents();
    assert!(contents.contains("[lockbox]"));
    assert!(contents.contains("kdf_iterations = 1000"));
    assert!(contents.contains("[master]"));
    assert!(contents.contains("[salt]"));
}

#[test]
fn test_init_does_not_store_passphrase() {
    let t = Test::new();
    assert_success(&t.init_cmd());
    assert!(!t.store_contents().contains(PASSPHRASE));
}

#[test]
fn test_init_twice_fails() {
    let t = Test::init();
    let before = t.store_contents();

    let output = t.init_cmd();
    assert_failure(&output);
    assert_stderr_contains(&output, "already initialized");
    assert_eq!(t.store_contents(), before);
}

#[test]
fn test_init_empty_passphrase_fails() {
    let t = Test::new();
    let output = t.cmd_with_passphrase("").arg("init").output().unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "cannot be empty");
    assert!(!t.store_path().exists());
}

#[test]
fn test_init_unreadable_store_fails_before_prompting() {
    let t = Test::new();
    std::fs::write(t.store_path(), "this is [not toml").unwrap();

    // No passphrase in the environment: reaching the prompt would fail differently.
    let output = t
        .cmd()
        .env_remove("LOCKBOX_PASSPHRASE")
        .arg("init")
        .output()
        .unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "failed to parse store");
    assert!(!stderr(&output).contains("prompt failed"));
    assert_eq!(t.store_contents(), "this is [not toml");
}

#[test]
fn test_init_respects_store_flag() {
    let t = Test::new();
    let custom = t.dir.path().join("nested").join("other.toml");

    let output = t
        .cmd()
        .arg("--store")
        .arg(&custom)
        .arg("init")
        .output()
        .unwrap();

    assert_success(&output);
    assert!(custom.exists());
    assert!(!t.store_path().exists());
}

#[test]
fn test_init_invalid_iterations_fails() {
    let t = Test::new();
    let output = t
        .cmd()
        .env("LOCKBOX_KDF_ITERATIONS", "zero")
        .arg("init")
        .output()
        .unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "LOCKBOX_KDF_ITERATIONS");
}

#[cfg(unix)]
#[test]
fn test_store_file_is_private() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::init();
    let mode = std::fs::metadata(t.store_path())
        .unwrap()
        .permissions()
        .mode();
    assert_eq!(mode & 0o777, 0o600);
}
