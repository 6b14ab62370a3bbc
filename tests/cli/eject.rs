//! Tests for `understudy eject` command.

use crate::support::*;

#[test]
fn test_eject_without_config_fails() {
    let t = Test::new();

    let output = t.eject(&["--force"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "not initialized");
}

#[test]
fn test_eject_dry_run_removes_nothing() {
    let t = Test::with_roles(&["admin", "user"]);

    let output = t.eject(&["--dry-run"]);
    assert_success(&output);
    assert_stdout_contains(&output, "dry run");

    assert!(t.project_path(".understudy.toml").exists());
    assert!(t.project_path(".auth/admin.json").exists());
    assert!(t.project_path(".auth/user.json").exists());
    assert!(t.project_path(".github/workflows/e2e.yml").exists());
}

#[test]
fn test_eject_force_removes_tool_owned_files() {
    let t = Test::with_roles(&["admin"]);

    let output = t.eject(&["--force"]);
    assert_success(&output);

    assert!(!t.project_path(".understudy.toml").exists());
    assert!(!t.project_path(".auth").exists());
    assert!(!t.project_path("e2e/auth.setup.ts").exists());
    assert!(!t.project_path(".github/workflows/e2e.yml").exists());
}

#[test]
fn test_eject_leaves_user_owned_files() {
    let t = Test::with_roles(&["admin"]);
    std::fs::write(t.project_path(".env"), "DATABASE_URL=postgres://db\n").unwrap();

    let output = t.eject(&["--force"]);
    assert_success(&output);

    assert!(t.project_path(".env").exists());
    assert!(t.project_path("playwright.config.ts").exists());
}

#[test]
fn test_eject_role_removes_only_that_role() {
    let t = Test::with_roles(&["admin", "user"]);

    let output = t.eject(&["--role", "user", "--force"]);
    assert_success(&output);

    // user's artifacts and registry entry are gone, admin's are untouched
    assert!(!t.project_path(".auth/user.json").exists());
    assert!(t.project_path(".auth/admin.json").exists());

    let config = t.read(".understudy.toml");
    assert!(!config.contains("name = \"user\""));
    assert!(config.contains("name = \"admin\""));
}

#[test]
fn test_eject_unknown_role_fails() {
    let t = Test::with_roles(&["admin"]);

    let output = t.eject(&["--role", "ghost", "--force"]);
    assert_failure(&output);
    assert_stderr_contains(&output, "role not found: ghost");
}

#[test]
fn test_eject_non_interactive_requires_force() {
    let t = Test::with_roles(&["admin"]);

    let output = t.eject(&[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "--force");

    assert!(t.project_path(".understudy.toml").exists());
}
