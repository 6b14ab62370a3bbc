//! Tests for `understudy generate` command.
//!
//! A full generation run needs the agent binary and credentials; these tests
//! cover the validation path in front of it.

use crate::support::*;

#[test]
fn test_generate_without_config_fails() {
    let t = Test::new();

    let output = t.generate(&["--role", "user", "the cart can be emptied"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "not initialized");
}

#[test]
fn test_generate_unknown_role_fails() {
    let t = Test::with_roles(&["admin"]);

    let output = t.generate(&["--role", "ghost", "the cart can be emptied"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "role not found: ghost");
}

#[test]
fn test_generate_without_credential_state_fails() {
    let t = Test::with_roles(&["admin"]);
    std::fs::remove_file(t.project_path(".auth/admin.json")).unwrap();

    let output = t.generate(&["--role", "admin", "the cart can be emptied"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "no credential state");
    assert_stderr_contains(&output, "understudy login admin");
}

#[test]
fn test_generate_requires_role_flag() {
    let t = Test::with_roles(&["admin"]);

    let output = t.generate(&["the cart can be emptied"]);
    assert_failure(&output);
}

#[test]
fn test_generate_requires_description() {
    let t = Test::with_roles(&["admin"]);

    let output = t.generate(&["--role", "admin"]);
    assert_failure(&output);
}
