//! Eject command - remove tool-owned files.
//!
//! Removal is best-effort per file: a failed removal is reported and the
//! remaining targets are still attempted. Env files are never deleted; they
//! may carry user-owned keys alongside the appended ones.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use dialoguer::Confirm;
use tracing::info;

use crate::agent::mutations;
use crate::cli::output;
use crate::core::config::ProjectConfig;
use crate::core::roles;
use crate::error::{ConfigError, Error, Result};

/// Remove tool-owned files, or a single role's artifacts.
pub fn execute(role: Option<&str>, dry_run: bool, force: bool) -> Result<()> {
    let mut config = ProjectConfig::load()?;

    match role {
        Some(name) => eject_role(&mut config, name, dry_run, force),
        None => eject_all(&config, dry_run, force),
    }
}

/// Remove one role: its files, its registry entry, its artifact blocks.
fn eject_role(config: &mut ProjectConfig, name: &str, dry_run: bool, force: bool) -> Result<()> {
    // The registry itself treats removal of an unknown name as a no-op;
    // the command layer reports it instead of silently "succeeding".
    let role = config
        .find_role(name)
        .cloned()
        .ok_or_else(|| ConfigError::RoleNotFound(name.to_string()))?;

    let auth_dir = config.project.auth_dir.trim_end_matches('/');
    let mut targets = vec![
        PathBuf::from(&role.storage_path),
        PathBuf::from(format!("{}/{}.login.ts", auth_dir, name)),
    ];
    if let Some(folder) = &role.folder {
        targets.push(PathBuf::from(folder));
    }
    let targets: Vec<PathBuf> = targets.into_iter().filter(|p| p.exists()).collect();

    output::section(&format!("Ejecting role '{}'", name));
    for target in &targets {
        output::list_item(&output::path(&target.display().to_string()));
    }
    output::list_item("registry entry in .understudy.toml");

    if dry_run {
        output::dimmed("dry run, nothing removed");
        return Ok(());
    }
    if !confirmed(force)? {
        output::dimmed("aborted");
        return Ok(());
    }

    remove_all(&targets);

    roles::remove_role(config, name)?;
    output::success(&format!("removed role '{}'", name));

    mutations::apply_or_degrade(&mutations::role_removal(config, &role));

    Ok(())
}

/// Remove every tool-owned artifact.
///
/// The Playwright config and the env files survive: the config is edited by
/// the user after scaffolding, and env files may hold keys this tool never
/// wrote.
fn eject_all(config: &ProjectConfig, dry_run: bool, force: bool) -> Result<()> {
    let mut targets = vec![
        ProjectConfig::config_path(),
        PathBuf::from(&config.project.auth_dir),
    ];
    if config.setup.enabled {
        targets.push(PathBuf::from(&config.setup.path));
    }
    if config.github_actions.enabled {
        targets.push(PathBuf::from(&config.github_actions.path));
    }
    for role in &config.roles {
        if let Some(folder) = &role.folder {
            targets.push(PathBuf::from(folder));
        }
    }
    let targets: Vec<PathBuf> = targets.into_iter().filter(|p| p.exists()).collect();

    output::section("Ejecting understudy");
    for target in &targets {
        output::list_item(&output::path(&target.display().to_string()));
    }

    if dry_run {
        output::dimmed("dry run, nothing removed");
        return Ok(());
    }
    if !confirmed(force)? {
        output::dimmed("aborted");
        return Ok(());
    }

    remove_all(&targets);

    output::success("understudy ejected");
    output::dimmed(&format!(
        "{} and {} left in place",
        config.project.env_file, config.project.playwright_config
    ));

    Ok(())
}

/// Ask before destroying anything, unless forced.
fn confirmed(force: bool) -> Result<bool> {
    if force {
        return Ok(true);
    }
    if !io::stdin().is_terminal() {
        return Err(Error::Other(
            "refusing to remove files without --force in non-interactive mode".to_string(),
        ));
    }
    Ok(Confirm::new()
        .with_prompt("Remove these files?")
        .default(false)
        .interact()?)
}

/// Remove files and directories, reporting per-target failures.
fn remove_all(targets: &[PathBuf]) {
    for target in targets {
        let result = if target.is_dir() {
            std::fs::remove_dir_all(target)
        } else {
            std::fs::remove_file(target)
        };
        match result {
            Ok(()) => info!(target = %target.display(), "removed"),
            Err(e) => output::warn(&format!("could not remove {}: {}", target.display(), e)),
        }
    }
}
