//! Tests for `understudy init` command.

use crate::support::*;

#[test]
fn test_init_scaffolds_project() {
    let t = Test::new();

    let output = t.init_cmd();
    assert_success(&output);
    assert_stdout_contains(&output, "initialized");

    assert!(t.project_path(".understudy.toml").exists());
    assert!(t.project_path("playwright.config.ts").exists());
    assert!(t.project_path("e2e/auth.setup.ts").exists());
    assert!(t.project_path(".github/workflows/e2e.yml").exists());
    assert!(t.project_path(".auth").is_dir());
    assert!(t.project_path("e2e").is_dir());
}

#[test]
fn test_init_twice_fails() {
    let t = Test::init();

    let output = t.init_cmd();
    assert_failure(&output);
    assert_stderr_contains(&output, "already initialized");
}

#[test]
fn test_init_no_ci_skips_workflow() {
    let t = Test::new();

    let output = t.init_with(&["--yes", "--no-ci"]);
    assert_success(&output);

    assert!(!t.project_path(".github/workflows/e2e.yml").exists());
    let config = t.read(".understudy.toml");
    assert!(config.contains("enabled = false"));
}

#[test]
fn test_init_flags_override_defaults() {
    let t = Test::new();

    let output = t.init_with(&[
        "--yes",
        "--test-dir",
        "tests-e2e",
        "--base-url",
        "https://staging.corp.io",
        "--auth-dir",
        "playwright/.auth",
    ]);
    assert_success(&output);

    let config = t.read(".understudy.toml");
    assert!(config.contains("test_dir = \"tests-e2e\""));
    assert!(config.contains("base_url = \"https://staging.corp.io\""));
    assert!(config.contains("auth_dir = \"playwright/.auth\""));

    let playwright = t.read("playwright.config.ts");
    assert!(playwright.contains("testDir: \"tests-e2e\""));
    assert!(playwright.contains("https://staging.corp.io"));
}

#[test]
fn test_init_non_interactive_uses_defaults_without_yes() {
    // stdin is not a terminal here, so prompts fall back to defaults
    let t = Test::new();

    let output = t.init_with(&[]);
    assert_success(&output);
    assert!(t.project_path(".understudy.toml").exists());
}

#[test]
fn test_init_keeps_existing_playwright_config() {
    let t = Test::new();
    std::fs::write(t.project_path("playwright.config.ts"), "// user-owned\n").unwrap();

    let output = t.init_cmd();
    assert_success(&output);

    assert_eq!(t.read("playwright.config.ts"), "// user-owned\n");
    assert_stdout_contains(&output, "left untouched");
}

#[test]
fn test_init_writes_gitignore_entries() {
    let t = Test::new();

    let output = t.init_cmd();
    assert_success(&output);

    let gitignore = t.read(".gitignore");
    assert!(gitignore.contains(".env"));
    assert!(gitignore.contains("!.env.example"));
    assert!(gitignore.contains(".auth/"));
}

#[test]
fn test_init_setup_script_has_markers() {
    let t = Test::init();

    let setup = t.read("e2e/auth.setup.ts");
    assert!(setup.contains("understudy:roles:start"));
    assert!(setup.contains("understudy:roles:end"));
}
