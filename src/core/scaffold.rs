//! Embedded templates for project scaffolding.
//!
//! Rendered once during `init`; later per-role edits to these files go
//! through the agent-driven mutation path.

use std::path::Path;

use crate::core::config::{ProjectConfig, Role};
use crate::error::Result;

/// Playwright configuration template.
const PLAYWRIGHT_CONFIG: &str = r#"import { defineConfig, devices } from "@playwright/test";

/**
 * See https://playwright.dev/docs/test-configuration
 */
export default defineConfig({
  testDir: "__TEST_DIR__",

  /* Fail the build on CI if you accidentally left test.only in the source code */
  forbidOnly: !!process.env.CI,

  /* Retry on CI only */
  retries: process.env.CI ? 2 : 0,

  /* Opt out of parallel tests on CI */
  workers: process.env.CI ? 1 : undefined,

  reporter: "html",

  /* Shared settings for all projects */
  use: {
    baseURL: process.env.QA_BASE_URL ?? "__BASE_URL__",
    trace: "on-first-retry",
  },

  projects: [
    {
      name: "setup",
      testMatch: /.*\.setup\.ts/,
    },
    {
      name: "chromium",
      use: { ...devices["Desktop Chrome"] },
      dependencies: ["setup"],
    },
  ],
});
"#;

/// Auth setup-script template.
///
/// Sign-in blocks for each recorded role are appended between the markers.
const SETUP_SCRIPT: &str = r#"import { test as setup } from "@playwright/test";

/**
 * Re-creates storage state for each role before the test projects run.
 * Credentials come from the environment; see .env.example.
 */

// understudy:roles:start
// understudy:roles:end
"#;

/// GitHub Actions workflow template.
const WORKFLOW: &str = r#"name: e2e
on:
  push:
    branches: [main]
  pull_request:

jobs:
  e2e:
    runs-on: ubuntu-latest
    timeout-minutes: 30
    steps:
      - uses: actions/checkout@v4
      - uses: actions/setup-node@v4
        with:
          node-version: 20
      - name: Install dependencies
        run: npm ci
      - name: Install Playwright browsers
        run: npx playwright install --with-deps chromium
      - name: Run Playwright tests
        run: npx playwright test
        env:
          QA_BASE_URL: ${{ vars.QA_BASE_URL }}
      - uses: actions/upload-artifact@v4
        if: always()
        with:
          name: playwright-report
          path: playwright-report/
"#;

/// Render the Playwright configuration for this project.
pub fn render_playwright_config(config: &ProjectConfig) -> String {
    PLAYWRIGHT_CONFIG
        .replace("__TEST_DIR__", &config.project.test_dir)
        .replace("__BASE_URL__", &config.project.base_url)
}

/// Render the auth setup script.
pub fn render_setup_script(_config: &ProjectConfig) -> String {
    SETUP_SCRIPT.to_string()
}

/// Render the CI workflow.
pub fn render_workflow(_config: &ProjectConfig) -> String {
    WORKFLOW.to_string()
}

/// The Playwright project block a registered role contributes to the config.
///
/// Used verbatim in agent instructions and in the manual fallback text, so
/// the user applies exactly what the agent would have.
pub fn role_project_block(role: &Role) -> String {
    let test_match = role
        .test_match
        .as_ref()
        .and_then(|globs| globs.first())
        .map(|g| format!("\n      testMatch: \"{}\",", g))
        .unwrap_or_default();

    format!(
        r#"    {{
      name: "{name}",
      use: {{
        ...devices["Desktop Chrome"],
        storageState: "{storage}",
      }},{test_match}
      dependencies: ["setup"],
    }},"#,
        name = role.name,
        storage = role.storage_path,
    )
}

/// The sign-in block a registered role contributes to the setup script.
pub fn role_setup_block(role: &Role, env_vars: &[String]) -> String {
    let email = env_vars
        .iter()
        .find(|v| v.ends_with("_EMAIL"))
        .cloned()
        .unwrap_or_else(|| "QA_USER_EMAIL".to_string());
    let password = env_vars
        .iter()
        .find(|v| v.ends_with("_PASSWORD"))
        .cloned()
        .unwrap_or_else(|| "QA_USER_PASSWORD".to_string());

    format!(
        r#"setup("authenticate {name}", async ({{ page }}) => {{
  await page.goto("/login");
  await page.getByRole("textbox", {{ name: /email|username/i }}).fill(process.env.{email}!);
  await page.getByRole("textbox", {{ name: /password/i }}).fill(process.env.{password}!);
  await page.getByRole("button", {{ name: /sign in|log in/i }}).click();
  await page.waitForURL("**/*");
  await page.context().storageState({{ path: "{storage}" }});
}});"#,
        name = role.name,
        storage = role.storage_path,
    )
}

/// The `env:` lines a role's secrets contribute to the CI test step.
pub fn workflow_env_lines(env_vars: &[String]) -> String {
    env_vars
        .iter()
        .map(|name| format!("          {name}: ${{{{ secrets.{name} }}}}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write a rendered template unless the target already exists.
///
/// Existing files are user-owned by then; scaffolding never overwrites.
/// Returns whether the file was written.
pub fn write_if_missing(path: &Path, contents: &str) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, contents)?;
    Ok(true)
}
