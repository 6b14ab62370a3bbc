//! Generate command - synthesize a test from a natural-language description.
//!
//! The agent drives a live browser against the role's saved session, then
//! writes the test. Unlike the best-effort config edits, a failed generation
//! run is fatal: there is nothing to fall back to.

use std::path::Path;

use crate::agent::AgentClient;
use crate::cli::output;
use crate::core::config::{ProjectConfig, Role};
use crate::error::{ConfigError, Error, Result};

/// Turn budget for a full generation run.
///
/// Generation explores the app in a browser before writing code, which takes
/// far more turns than a config edit.
const GENERATE_MAX_TURNS: u32 = 30;

/// Generate a test for the given role.
pub fn execute(role_name: &str, description: &str, show_prompt: bool) -> Result<()> {
    let config = ProjectConfig::load()?;

    let role = config
        .find_role(role_name)
        .ok_or_else(|| ConfigError::RoleNotFound(role_name.to_string()))?;

    if !Path::new(&role.storage_path).exists() {
        return Err(Error::Other(format!(
            "no credential state at {} - run `understudy login {}` first",
            role.storage_path, role.name
        )));
    }

    let instruction = build_instruction(&config, role, description);
    if show_prompt {
        output::section("Agent instruction");
        println!("{}", instruction);
    }

    let mut agent = AgentClient::new(std::env::current_dir()?)?
        .with_max_turns(GENERATE_MAX_TURNS)
        .with_allowed_tools(
            ["Read", "Write", "Edit", "Glob", "Grep", "Bash"]
                .iter()
                .map(|t| t.to_string())
                .collect(),
        );
    agent.ensure_credentials()?;

    output::section(&format!("Generating test for '{}'", role.name));
    let report = agent.run(&instruction)?;

    output::success("test generated");
    if let Some(cost) = report.cost_usd {
        output::kv("cost", format!("${:.4}", cost));
    }
    if let Some(turns) = report.num_turns {
        output::kv("turns", turns);
    }
    if let Some(ms) = report.duration_ms {
        output::kv("duration", format!("{:.1}s", ms as f64 / 1000.0));
    }

    Ok(())
}

/// Build the full instruction for one generation run.
fn build_instruction(config: &ProjectConfig, role: &Role, description: &str) -> String {
    let target_dir = role
        .folder
        .clone()
        .unwrap_or_else(|| config.project.test_dir.clone());
    let env_vars = role
        .env_vars
        .as_ref()
        .map(|vars| vars.join(", "))
        .unwrap_or_else(|| "none recorded".to_string());

    format!(
        "Write a Playwright test for the following scenario and verify it passes.\n\
         \n\
         Scenario: {description}\n\
         \n\
         Project facts:\n\
         - Base URL: {base_url}\n\
         - The test runs as role '{role}' under the Playwright project \"{role}\",\n\
           which loads the saved session from {storage} - do not sign in manually.\n\
         - Put the test file in {target_dir}/ with a .spec.ts suffix.\n\
         - Credentials, if ever needed, come from the environment ({env_vars});\n\
           never hardcode secrets.\n\
         - Use accessible selectors (getByRole, getByLabel) over CSS selectors.\n\
         \n\
         When the file is written, run `npx playwright test --project={role}` and\n\
         fix the test until it passes.",
        description = description,
        base_url = config.project.base_url,
        role = role.name,
        storage = role.storage_path,
        target_dir = target_dir,
        env_vars = env_vars,
    )
}
