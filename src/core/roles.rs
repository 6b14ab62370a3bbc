//! Role registry operations.
//!
//! Roles live inside the project configuration; these helpers mutate the
//! loaded document and persist it wholesale.

use tracing::debug;

use crate::core::config::{ProjectConfig, Role};
use crate::error::{Result, ValidationError};

/// Add a role, replacing any existing role with the same name.
///
/// Add is an upsert: calling it twice with the same name leaves exactly one
/// entry, carrying the last write's fields.
///
/// # Errors
///
/// Returns error if the role name is invalid or the save fails.
pub fn add_role(config: &mut ProjectConfig, role: Role) -> Result<()> {
    validate_role_name(&role.name)?;

    let replaced = config.roles.iter().any(|r| r.name == role.name);
    config.roles.retain(|r| r.name != role.name);
    config.roles.push(role);
    config.save()?;

    if replaced {
        debug!("replaced existing role entry");
    }
    Ok(())
}

/// Remove a role by name.
///
/// Removing a name that is not registered is a silent no-op; callers that
/// must report "not found" check existence first.
///
/// # Errors
///
/// Returns error if the save fails.
pub fn remove_role(config: &mut ProjectConfig, name: &str) -> Result<()> {
    config.roles.retain(|r| r.name != name);
    config.save()?;
    Ok(())
}

/// Validate a role name.
///
/// Role names become file stems and env-var prefixes, so they must be
/// non-empty and free of path separators and whitespace.
///
/// # Errors
///
/// Returns `ValidationError` if the name is invalid.
pub fn validate_role_name(name: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyRoleName.into());
    }

    for ch in name.chars() {
        if ch.is_whitespace() || ch == '/' || ch == '\\' || ch == '.' {
            return Err(ValidationError::InvalidRoleName {
                name: name.to_string(),
                reason: format!("contains '{}'", ch),
            }
            .into());
        }
    }

    Ok(())
}
