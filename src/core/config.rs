//! Configuration file management.
//!
//! Handles reading, writing, and validating `.understudy.toml` configuration
//! files. The document is the aggregate root for everything the tool owns:
//! project paths, CI and setup-script settings, and the role registry.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::debug;

use crate::core::constants;
use crate::core::naming;
use crate::core::types::RoleName;
use crate::error::{ConfigError, Result};

/// Project configuration stored in `.understudy.toml`
#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectConfig {
    /// Project metadata and paths
    pub project: ProjectMeta,
    /// GitHub Actions workflow settings
    #[serde(default)]
    pub github_actions: GithubActions,
    /// Auth setup-script settings
    #[serde(default)]
    pub setup: SetupScript,
    /// Registered roles, unique by name
    #[serde(default)]
    pub roles: Vec<Role>,
}

/// Metadata section of the configuration
#[derive(Debug, Serialize, Deserialize)]
pub struct ProjectMeta {
    /// Configuration version
    pub version: String,
    /// Application URL tests run against
    pub base_url: String,
    /// Directory holding generated tests
    pub test_dir: String,
    /// Directory holding per-role storage-state files
    pub auth_dir: String,
    /// Path of the local env file secrets are appended to
    pub env_file: String,
    /// Path of the Playwright configuration
    pub playwright_config: String,
}

/// GitHub Actions workflow settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GithubActions {
    /// Whether a workflow is scaffolded and kept up to date
    pub enabled: bool,
    /// Workflow file path
    pub path: String,
}

impl Default for GithubActions {
    fn default() -> Self {
        Self {
            enabled: true,
            path: constants::DEFAULT_WORKFLOW_PATH.to_string(),
        }
    }
}

/// Auth setup-script settings.
///
/// The setup script re-creates storage state in CI by replaying each role's
/// sign-in with credentials taken from the environment.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct SetupScript {
    /// Whether the setup script is scaffolded and kept up to date
    pub enabled: bool,
    /// Setup script path
    pub path: String,
    /// Playwright project name the setup script registers under
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
}

/// A registered role: a named identity with its own saved session state.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Role {
    /// Unique role name
    pub name: RoleName,
    /// Path of the storage-state file recorded for this role
    pub storage_path: String,
    /// Test-file globs that run under this role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub test_match: Option<Vec<String>>,
    /// Environment variable names holding this role's credentials
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env_vars: Option<Vec<String>>,
    /// Directory for tests generated for this role
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
    /// When the storage state was last recorded (RFC 3339)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<String>,
}

impl ProjectConfig {
    /// Create a new configuration with the given project paths
    pub fn new(
        base_url: String,
        test_dir: String,
        auth_dir: String,
        env_file: String,
        playwright_config: String,
    ) -> Self {
        Self {
            project: ProjectMeta {
                version: env!("CARGO_PKG_VERSION").to_string(),
                base_url,
                test_dir,
                auth_dir,
                env_file,
                playwright_config,
            },
            github_actions: GithubActions::default(),
            setup: SetupScript::default(),
            roles: Vec::new(),
        }
    }

    /// Path to the configuration file in the current directory
    pub fn config_path() -> PathBuf {
        PathBuf::from(constants::CONFIG_FILE)
    }

    /// Check if a configuration file exists in the current directory
    pub fn exists() -> bool {
        Self::config_path().exists()
    }

    /// Load configuration from `.understudy.toml`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotInitialized` if the file doesn't exist,
    /// or `ConfigError::Parse` if the TOML is malformed.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        debug!(path = %path.display(), "loading config");

        if !path.exists() {
            return Err(ConfigError::NotInitialized.into());
        }
        let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
        let config: Self = toml::from_str(&contents).map_err(ConfigError::Parse)?;

        debug!(roles = config.roles.len(), "config loaded");

        // Validate the loaded configuration
        config.validate()?;

        Ok(config)
    }

    /// Save configuration to `.understudy.toml`
    ///
    /// The document is written wholesale; there is no partial update.
    ///
    /// # Errors
    ///
    /// Returns error if serialization or file write fails.
    pub fn save(&self) -> Result<()> {
        debug!("saving config");

        let contents = toml::to_string_pretty(self).map_err(ConfigError::Serialize)?;
        std::fs::write(Self::config_path(), contents)?;

        Ok(())
    }

    /// Unique project identifier based on the current directory name
    pub fn project_id(&self) -> String {
        std::env::current_dir()
            .ok()
            .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
            .unwrap_or_else(|| "default".to_string())
    }

    /// Look up a role by name
    pub fn find_role(&self, name: &str) -> Option<&Role> {
        self.roles.iter().find(|r| r.name == name)
    }

    /// Validate the configuration structure and contents
    ///
    /// Checks:
    /// - Version field is present
    /// - Required path fields are non-empty and project-relative
    /// - Role names are unique and well-formed
    /// - Recorded env var names are valid shell identifiers
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` on validation failure.
    pub fn validate(&self) -> Result<()> {
        debug!("validating config");

        if self.project.version.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "version",
                reason: "missing version".to_string(),
            }
            .into());
        }

        let paths: [(&'static str, &str); 5] = [
            ("base_url", &self.project.base_url),
            ("test_dir", &self.project.test_dir),
            ("auth_dir", &self.project.auth_dir),
            ("env_file", &self.project.env_file),
            ("playwright_config", &self.project.playwright_config),
        ];
        for (field, value) in paths {
            if value.is_empty() {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: "must not be empty".to_string(),
                }
                .into());
            }
        }
        for &(field, value) in &paths[1..] {
            if std::path::Path::new(value).is_absolute() {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("must be project-relative, got: {}", value),
                }
                .into());
            }
        }

        let mut seen = std::collections::BTreeSet::new();
        for role in &self.roles {
            crate::core::roles::validate_role_name(&role.name)?;
            if !seen.insert(role.name.as_str()) {
                return Err(ConfigError::InvalidValue {
                    field: "roles",
                    reason: format!("duplicate role name: {}", role.name),
                }
                .into());
            }
            for var in role.env_vars.iter().flatten() {
                naming::validate_env_key(var)?;
            }
        }

        Ok(())
    }
}

/// Ensure `.gitignore` contains entries protecting recorded sessions
///
/// Adds `.env`, `.env.*`, `!.env.example`, and the auth directory if not
/// already present.
///
/// # Errors
///
/// Returns error if file operations fail.
pub fn ensure_gitignore(auth_dir: &str) -> Result<()> {
    let gitignore = std::path::Path::new(".gitignore");

    let existing = if gitignore.exists() {
        std::fs::read_to_string(gitignore)?
    } else {
        String::new()
    };

    let auth_entry = format!("{}/", auth_dir.trim_end_matches('/'));
    let mut entries: Vec<&str> = constants::GITIGNORE_ENTRIES.to_vec();
    entries.push(&auth_entry);

    let mut updated = existing.clone();
    for entry in entries {
        if !existing.lines().any(|l| l.trim() == entry) {
            if !updated.is_empty() && !updated.ends_with('\n') {
                updated.push('\n');
            }
            updated.push_str(entry);
            updated.push('\n');
        }
    }

    if updated != existing {
        std::fs::write(gitignore, updated)?;
    }

    Ok(())
}
