//! Tests for `understudy login` command.
//!
//! Recording a real login needs a browser, so these tests cover the paths
//! that fail before the recorder starts.

use crate::support::*;

#[test]
fn test_login_without_config_fails() {
    let t = Test::new();

    let output = t.login(&["user"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "not initialized");
    assert_stderr_contains(&output, "understudy init");
}

#[test]
fn test_login_rejects_invalid_role_name() {
    let t = Test::init();

    let output = t.login(&["bad/role"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "invalid role name");
}

#[test]
fn test_login_without_role_non_interactive_fails() {
    let t = Test::init();

    let output = t.login(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "role name");
}

#[test]
fn test_login_refresh_unknown_role_fails() {
    let t = Test::with_roles(&["admin"]);

    let output = t.login(&["ghost", "--refresh"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "role not found: ghost");
}

#[test]
fn test_login_role_flag_form_accepted() {
    let t = Test::with_roles(&["admin"]);

    // Flag and positional forms resolve the same role; unknown name still
    // fails the refresh lookup either way.
    let output = t.login(&["--role", "ghost", "--refresh"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "role not found: ghost");
}
