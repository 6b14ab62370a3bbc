//! Init command - scaffold a Playwright test project.

use std::io::{self, IsTerminal};
use std::path::Path;

use dialoguer::Input;
use tracing::info;

use crate::cli::output;
use crate::core::config::{ensure_gitignore, ProjectConfig};
use crate::core::{constants, scaffold};
use crate::error::{ConfigError, Result};

/// Flag overrides for the init prompts.
pub struct InitOptions {
    pub config_path: Option<String>,
    pub test_dir: Option<String>,
    pub base_url: Option<String>,
    pub auth_dir: Option<String>,
    pub env_file: Option<String>,
    pub no_ci: bool,
    pub yes: bool,
}

/// Initialize understudy in the current directory.
pub fn execute(opts: InitOptions) -> Result<()> {
    if ProjectConfig::exists() {
        return Err(ConfigError::AlreadyInitialized.into());
    }

    let interactive = io::stdin().is_terminal() && !opts.yes;

    let base_url = resolve(
        opts.base_url,
        "Application URL",
        constants::DEFAULT_BASE_URL,
        interactive,
    )?;
    let test_dir = resolve(
        opts.test_dir,
        "Test directory",
        constants::DEFAULT_TEST_DIR,
        interactive,
    )?;
    let auth_dir = resolve(
        opts.auth_dir,
        "Auth state directory",
        constants::DEFAULT_AUTH_DIR,
        interactive,
    )?;
    let env_file = resolve(
        opts.env_file,
        "Env file",
        constants::ENV_FILE,
        interactive,
    )?;
    let config_path = resolve(
        opts.config_path,
        "Playwright config",
        constants::DEFAULT_PLAYWRIGHT_CONFIG,
        interactive,
    )?;

    info!(base_url = %base_url, "initializing project");

    let mut config = ProjectConfig::new(base_url, test_dir, auth_dir, env_file, config_path);
    config.github_actions.enabled = !opts.no_ci;
    config.setup.enabled = true;
    config.setup.path = format!("{}/auth.setup.ts", config.project.test_dir);
    config.setup.project_name = Some(config.project_id());

    std::fs::create_dir_all(&config.project.test_dir)?;
    std::fs::create_dir_all(&config.project.auth_dir)?;

    let playwright_path = Path::new(&config.project.playwright_config);
    if scaffold::write_if_missing(playwright_path, &scaffold::render_playwright_config(&config))? {
        output::kv("config", output::path(&config.project.playwright_config));
    } else {
        output::dimmed(&format!(
            "{} already exists, left untouched",
            config.project.playwright_config
        ));
    }

    if scaffold::write_if_missing(
        Path::new(&config.setup.path),
        &scaffold::render_setup_script(&config),
    )? {
        output::kv("setup", output::path(&config.setup.path));
    }

    if config.github_actions.enabled
        && scaffold::write_if_missing(
            Path::new(&config.github_actions.path),
            &scaffold::render_workflow(&config),
        )?
    {
        output::kv("workflow", output::path(&config.github_actions.path));
    }

    ensure_gitignore(&config.project.auth_dir)?;
    config.save()?;

    output::success("understudy initialized");
    output::kv("base url", &config.project.base_url);
    output::kv("tests", output::path(&config.project.test_dir));
    println!();
    println!(
        "Next: {} to record a login",
        output::cmd("understudy login <role>")
    );

    Ok(())
}

/// Resolve a setting from its flag, an interactive prompt, or the default.
fn resolve(
    flag: Option<String>,
    prompt: &str,
    default: &str,
    interactive: bool,
) -> Result<String> {
    if let Some(value) = flag {
        return Ok(value);
    }
    if interactive {
        let value = Input::new()
            .with_prompt(prompt)
            .default(default.to_string())
            .interact_text()?;
        return Ok(value);
    }
    Ok(default.to_string())
}
