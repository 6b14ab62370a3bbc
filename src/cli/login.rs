//! Login command - record a role's login flow.
//!
//! Records an interactive sign-in with the Playwright recorder, redacts the
//! captured credentials into environment variables, registers the role, and
//! best-effort updates the external artifacts.

use std::io::{self, IsTerminal};
use std::path::Path;

use chrono::Utc;
use dialoguer::{Confirm, Input};
use tracing::info;

use crate::agent::mutations;
use crate::cli::output;
use crate::core::config::{ProjectConfig, Role};
use crate::core::detect::{detect_credentials, CredentialKind, DetectionRules};
use crate::core::{envfile, naming, redact, roles};
use crate::error::{ConfigError, Result, ValidationError};
use crate::recorder;

/// Record a login flow and register the role.
pub fn execute(role_name: Option<String>, refresh: bool) -> Result<()> {
    let mut config = ProjectConfig::load()?;

    let role_name = match role_name {
        Some(name) => name,
        None if io::stdin().is_terminal() => Input::new()
            .with_prompt("Role name")
            .default("user".to_string())
            .interact_text()?,
        None => return Err(ValidationError::EmptyRoleName.into()),
    };
    roles::validate_role_name(&role_name)?;

    if refresh {
        return refresh_role(&mut config, &role_name);
    }

    let auth_dir = config.project.auth_dir.trim_end_matches('/').to_string();
    let storage_path = format!("{}/{}.json", auth_dir, role_name);
    let script_path = format!("{}/{}.login.ts", auth_dir, role_name);

    output::section(&format!("Recording login for '{}'", role_name));
    output::dimmed("Sign in in the recorder window, then close it.");

    let transcript = recorder::record_login(
        &config.project.base_url,
        Path::new(&storage_path),
        Path::new(&script_path),
    )?;

    let env_names = redact_and_store(&config, &role_name, &transcript, Path::new(&script_path))?;

    let folder = format!("{}/{}", config.project.test_dir, role_name);
    std::fs::create_dir_all(&folder)?;

    let role = Role {
        name: role_name.clone(),
        storage_path,
        test_match: Some(vec![format!("{}/**/*.spec.ts", folder)]),
        env_vars: (!env_names.is_empty()).then(|| env_names.clone()),
        folder: Some(folder),
        recorded_at: Some(Utc::now().to_rfc3339()),
    };

    roles::add_role(&mut config, role.clone())?;
    output::success(&format!("registered role '{}'", role_name));

    mutations::apply_or_degrade(&mutations::role_registration(&config, &role));

    println!();
    println!(
        "Next: {} to generate a test",
        output::cmd(&format!(
            "understudy generate --role {} \"<what to verify>\"",
            role_name
        ))
    );

    Ok(())
}

/// Detect credentials, rewrite the recorded script, and feed the env files.
///
/// Env-file failures are warnings: a consistent registry matters more than a
/// convenience append the user can redo by hand.
fn redact_and_store(
    config: &ProjectConfig,
    role_name: &str,
    transcript: &str,
    script_path: &Path,
) -> Result<Vec<String>> {
    let detected = detect_credentials(transcript, &DetectionRules::default());
    if detected.is_empty() {
        output::dimmed("no credentials detected to redact");
        return Ok(Vec::new());
    }

    let vars = redact::dedup(naming::name_credentials(&detected, Some(role_name)));

    output::header(&format!("{} credential(s) detected:", vars.len()));
    for var in &vars {
        let kind = match var.kind {
            CredentialKind::Email => "email",
            CredentialKind::Password => "password",
        };
        output::list_item(&format!("{} ({})", output::key(&var.name), kind));
    }

    let proceed = if io::stdin().is_terminal() {
        Confirm::new()
            .with_prompt("Replace recorded credentials with environment variables?")
            .default(true)
            .interact()?
    } else {
        true
    };
    if !proceed {
        output::warn("recorded script keeps literal credentials");
        return Ok(Vec::new());
    }

    let rewritten = redact::rewrite(transcript, &vars);
    std::fs::write(script_path, rewritten)?;
    info!(script = %script_path.display(), "credentials redacted");

    let env_path = Path::new(&config.project.env_file);
    let pairs: Vec<(String, String)> = vars
        .iter()
        .map(|v| (v.name.clone(), v.value.clone()))
        .collect();
    match envfile::append_missing(env_path, &pairs) {
        Ok(added) if !added.is_empty() => output::success(&format!(
            "appended {} line(s) to {}",
            added.len(),
            output::path(&config.project.env_file)
        )),
        Ok(_) => {}
        Err(e) => output::warn(&format!(
            "could not update {}: {}",
            config.project.env_file, e
        )),
    }

    let names: Vec<String> = vars.iter().map(|v| v.name.clone()).collect();
    let example_path = format!("{}.example", config.project.env_file);
    if let Err(e) = envfile::append_example(Path::new(&example_path), &names) {
        output::warn(&format!("could not update {}: {}", example_path, e));
    }

    Ok(names)
}

/// Re-record an existing role's credential state.
///
/// The registry entry is untouched apart from its `recorded_at` stamp; env
/// files and CI artifacts are already wired up from the first recording.
fn refresh_role(config: &mut ProjectConfig, role_name: &str) -> Result<()> {
    let role = config
        .find_role(role_name)
        .cloned()
        .ok_or_else(|| ConfigError::RoleNotFound(role_name.to_string()))?;

    let auth_dir = config.project.auth_dir.trim_end_matches('/');
    let script_path = format!("{}/{}.login.ts", auth_dir, role_name);

    output::section(&format!("Refreshing login for '{}'", role_name));
    let transcript = recorder::record_login(
        &config.project.base_url,
        Path::new(&role.storage_path),
        Path::new(&script_path),
    )?;

    // Redact the fresh script too; naming is deterministic, so the same
    // variables come out and nothing downstream changes.
    let detected = detect_credentials(&transcript, &DetectionRules::default());
    if !detected.is_empty() {
        let vars = redact::dedup(naming::name_credentials(&detected, Some(role_name)));
        std::fs::write(&script_path, redact::rewrite(&transcript, &vars))?;
    }

    if let Some(entry) = config.roles.iter_mut().find(|r| r.name == role_name) {
        entry.recorded_at = Some(Utc::now().to_rfc3339());
    }
    config.save()?;

    output::success(&format!("refreshed credential state for '{}'", role_name));
    Ok(())
}
