//! Constants used throughout understudy.
//!
//! Centralizes magic strings and configuration values.

/// Configuration file name (.understudy.toml).
pub const CONFIG_FILE: &str = ".understudy.toml";

/// Environment variables file name (.env).
pub const ENV_FILE: &str = ".env";

/// Committed companion listing variable names without values.
pub const ENV_EXAMPLE_FILE: &str = ".env.example";

/// Default directory for generated tests.
pub const DEFAULT_TEST_DIR: &str = "e2e";

/// Default directory for per-role storage-state files.
pub const DEFAULT_AUTH_DIR: &str = ".auth";

/// Default application URL used when recording and running tests.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Default Playwright configuration path.
pub const DEFAULT_PLAYWRIGHT_CONFIG: &str = "playwright.config.ts";

/// Default GitHub Actions workflow path.
pub const DEFAULT_WORKFLOW_PATH: &str = ".github/workflows/e2e.yml";

/// Gitignore entries to protect secrets.
///
/// The auth directory is appended separately since its name is configurable.
/// Storage-state files hold live session cookies and must never be committed.
pub const GITIGNORE_ENTRIES: &[&str] = &[".env", ".env.*", "!.env.example"];

/// Accessible-name fragments that mark an email or username field.
///
/// Matching is case-sensitive substring containment, so both capitalized
/// labels ("Email address") and attribute-style names ("user_email") hit.
pub const EMAIL_FIELD_KEYWORDS: &[&str] =
    &["Email", "email", "Username", "username", "User", "user"];

/// Accessible-name fragments that mark a password field.
pub const PASSWORD_FIELD_KEYWORDS: &[&str] = &["Password", "password"];

/// Values that look like seeded demo data rather than real credentials.
///
/// Compared against the whole value, case-insensitively. A value equal to
/// one of these is never treated as a secret, even when typed into a
/// credential field.
pub const PLACEHOLDER_VALUES: &[&str] = &[
    "test",
    "demo",
    "sample",
    "example",
    "placeholder",
    "lorem",
    "ipsum",
    "john",
    "jane",
    "doe",
    "admin",
    "user",
    "guest",
    "test123",
    "password123",
];

/// Substrings that betray a CSS/test-id selector pasted into a fill call.
pub const SELECTOR_MARKERS: &[&str] = &["data-testid", "data-cy", "class=", "id="];
