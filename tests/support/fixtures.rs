//! Test fixtures and constants.

/// A recorded login script with one email and one password fill.
pub const LOGIN_TRANSCRIPT: &str = r#"import { test, expect } from '@playwright/test';

test('test', async ({ page }) => {
  await page.goto('http://localhost:3000/login');
  await page.getByRole('textbox', { name: 'Email' }).fill('alice@example.com');
  await page.getByRole('textbox', { name: 'Password' }).fill('s3cr3t!');
  await page.getByRole('button', { name: 'Sign in' }).click();
});
"#;

/// Same flow, but against an admin-labelled email field.
pub const ADMIN_LOGIN_TRANSCRIPT: &str = r#"import { test, expect } from '@playwright/test';

test('test', async ({ page }) => {
  await page.goto('http://localhost:3000/admin/login');
  await page.getByRole('textbox', { name: 'Admin Email' }).fill('root@corp.io');
  await page.getByRole('textbox', { name: 'Password' }).fill('Sup3r-S3cret!');
  await page.getByRole('button', { name: 'Sign in' }).click();
});
"#;

/// A recording full of placeholder and selector-shaped values only.
pub const NOISY_TRANSCRIPT: &str = r#"import { test, expect } from '@playwright/test';

test('test', async ({ page }) => {
  await page.getByRole('textbox', { name: 'Email' }).fill('test');
  await page.getByRole('textbox', { name: 'Username' }).fill('admin');
  await page.getByRole('textbox', { name: 'Password' }).fill('#login-btn');
});
"#;

/// Render a config document with the given roles registered.
pub fn config_with_roles(roles: &[&str]) -> String {
    let mut doc = String::from(
        r#"[project]
version = "0.1.0"
base_url = "http://localhost:3000"
test_dir = "e2e"
auth_dir = ".auth"
env_file = ".env"
playwright_config = "playwright.config.ts"

[github_actions]
enabled = true
path = ".github/workflows/e2e.yml"

[setup]
enabled = true
path = "e2e/auth.setup.ts"
"#,
    );

    for role in roles {
        doc.push_str(&format!(
            r#"
[[roles]]
name = "{role}"
storage_path = ".auth/{role}.json"
test_match = ["e2e/{role}/**/*.spec.ts"]
env_vars = ["QA_{upper}_EMAIL", "QA_{upper}_PASSWORD"]
folder = "e2e/{role}"
"#,
            role = role,
            upper = role.to_uppercase(),
        ));
    }

    doc
}
