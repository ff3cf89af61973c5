//! Tests for the entry commands.

use crate::support::*;

#[test]
fn test_add_and_get() {
    let t = Test::init();

    let output = t.add("github.com", "alice", "gh-Pa55word!");
    assert_success(&output);
    assert_stdout_contains(&output, "added github.com (alice)");

    let output = t.get("github.com", "alice");
    assert_success(&output);
    assert_stdout_contains(&output, "gh-Pa55word!");
}

#[test]
fn test_password_is_sealed_on_disk() {
    let t = Test::with_entries(STANDARD_ENTRIES);
    let contents = t.store_contents();

    for (service, username, password) in STANDARD_ENTRIES {
        assert!(contents.contains(service));
        assert!(contents.contains(username));
        assert!(!contents.contains(password), "{} stored in the clear", service);
    }
}

#[test]
fn test_add_via_stdin() {
    let t = Test::init();

    let output = t
        .cmd()
        .args(["add", "db", "admin"])
        .write_stdin("piped-secret\n")
        .output()
        .unwrap();
    assert_success(&output);

    assert_stdout_contains(&t.get("db", "admin"), "piped-secret");
}

#[test]
fn test_add_empty_password_fails() {
    let t = Test::init();

    let output = t
        .cmd()
        .args(["add", "db", "admin"])
        .write_stdin("\n")
        .output()
        .unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "password cannot be empty");
    assert_eq!(t.list_json().as_array().unwrap().len(), 0);
}

#[test]
fn test_add_whitespace_password() {
    let t = Test::init();

    assert_success(&t.add("db", "admin", "   "));
    assert_success(&t.get("db", "admin"));
    assert_eq!(t.list_json().as_array().unwrap().len(), 1);
}

#[test]
fn test_add_duplicate_fails() {
    let t = Test::init();
    assert_success(&t.add("github.com", "alice", "one"));

    let output = t.add("github.com", "alice", "two");
    assert_failure(&output);
    assert_stderr_contains(&output, "already exists");
    assert_stderr_contains(&output, "lockbox update");

    assert_stdout_contains(&t.get("github.com", "alice"), "one");
}

#[test]
fn test_add_generated_password() {
    let t = Test::init();

    let output = t
        .cmd()
        .args(["add", "bank", "carol", "--generate", "--length", "24"])
        .output()
        .unwrap();
    assert_success(&output);

    let shown = stdout(&t.get("bank", "carol"));
    let line = shown
        .lines()
        .find(|l| l.contains("password:"))
        .expect("no password line");
    let password = line.split_whitespace().last().unwrap();
    assert_eq!(password.chars().count(), 24);
}

#[test]
fn test_unusual_passwords_roundtrip() {
    let t = Test::init();
    for (i, password) in UNUSUAL_PASSWORDS.iter().enumerate() {
        let service = format!("svc{}", i);
        assert_success(&t.add(&service, "user", password));
        assert_stdout_contains(&t.get(&service, "user"), password);
    }
}

#[test]
fn test_get_missing_fails() {
    let t = Test::init();
    let output = t.get("nowhere", "nobody");

    assert_failure(&output);
    assert_stderr_contains(&output, "no entry for nowhere (nobody)");
}

#[test]
fn test_list_masks_passwords() {
    let t = Test::with_entries(STANDARD_ENTRIES);
    let output = t.list();

    assert_success(&output);
    assert_stdout_contains(&output, "github.com (alice)");
    assert_stdout_contains(&output, "3 entries");
    for (_, _, password) in STANDARD_ENTRIES {
        assert_not_leaked(&output, password);
    }
}

#[test]
fn test_list_empty() {
    let t = Test::init();
    let output = t.list();

    assert_success(&output);
    assert_stdout_contains(&output, "no entries stored");
}

#[test]
fn test_list_json() {
    let t = Test::with_entries(STANDARD_ENTRIES);
    let json = t.list_json();
    let items = json.as_array().unwrap();

    assert_eq!(items.len(), 3);
    assert_eq!(items[0]["service"], "github.com");
    assert_eq!(items[0]["username"], "alice");
    assert!(items[0].get("password").is_none());
}

#[test]
fn test_search_case_insensitive() {
    let t = Test::with_entries(STANDARD_ENTRIES);

    let output = t.search("GIT");
    assert_success(&output);
    assert_stdout_contains(&output, "github.com");
    assert_stdout_contains(&output, "gitlab.com");
    assert!(!stdout(&output).contains("mail.example.com"));

    let output = t.search("bob");
    assert_stdout_contains(&output, "mail.example.com");
}

#[test]
fn test_search_no_match() {
    let t = Test::with_entries(STANDARD_ENTRIES);
    let output = t.search("zzz");

    assert_success(&output);
    assert_stdout_contains(&output, "no entries match 'zzz'");
}

#[test]
fn test_update_password_and_notes() {
    let t = Test::with_entries(STANDARD_ENTRIES);

    let output = t
        .cmd()
        .args([
            "update",
            "github.com",
            "alice",
            "--password",
            "rotated-pw",
            "--notes",
            "2fa on phone",
        ])
        .output()
        .unwrap();
    assert_success(&output);
    assert_stdout_contains(&output, "updated github.com (alice)");

    let shown = t.get("github.com", "alice");
    assert_stdout_contains(&shown, "rotated-pw");
    assert_stdout_contains(&shown, "2fa on phone");
}

#[test]
fn test_update_nothing_fails() {
    let t = Test::with_entries(STANDARD_ENTRIES);
    let output = t
        .cmd()
        .args(["update", "github.com", "alice"])
        .output()
        .unwrap();

    assert_failure(&output);
    assert_stderr_contains(&output, "nothing to change");
}

#[test]
fn test_rm() {
    let t = Test::with_entries(STANDARD_ENTRIES);

    assert_success(&t.rm("github.com", "alice"));
    assert_failure(&t.get("github.com", "alice"));
    assert_eq!(t.list_json().as_array().unwrap().len(), 2);

    let output = t.rm("github.com", "alice");
    assert_failure(&output);
    assert_stderr_contains(&output, "no entry");
}
