//! Environment variable name derivation.
//!
//! Maps detected credentials to deterministic, role-scoped variable names of
//! the form `QA_{ROLE}_EMAIL` / `QA_{ROLE}_PASSWORD`.

use crate::core::detect::{CredentialKind, DetectedCredential};
use crate::core::types::EnvKey;
use crate::error::{Result, ValidationError};

/// A named credential destined for the environment.
#[derive(Debug, Clone, PartialEq)]
pub struct EnvVar {
    /// Derived variable name
    pub name: EnvKey,
    /// Literal value the name stands for
    pub value: String,
    /// Field category the value came from
    pub kind: CredentialKind,
}

/// Derive the environment variable name for one detected credential.
///
/// The role prefix is the uppercased role name, `USER` when no role is
/// given. Admin-flavored fields are pinned to `QA_ADMIN_*` regardless of
/// role: a field or value mentioning `admin` never gets namespaced under a
/// non-admin role.
pub fn derive_env_name(
    kind: CredentialKind,
    field_context: &str,
    value: &str,
    role: Option<&str>,
) -> String {
    let admin_flavored = field_context.to_lowercase().contains("admin")
        || value.to_lowercase().contains("admin");

    let prefix = if admin_flavored {
        "ADMIN".to_string()
    } else {
        role.map(role_prefix)
            .filter(|p| !p.is_empty())
            .unwrap_or_else(|| "USER".to_string())
    };

    format!("QA_{}_{}", prefix, kind.env_suffix())
}

/// Name every detected credential for the given role, in detection order.
pub fn name_credentials(detected: &[DetectedCredential], role: Option<&str>) -> Vec<EnvVar> {
    detected
        .iter()
        .map(|c| EnvVar {
            name: derive_env_name(c.kind, &c.field_context, &c.literal_value, role),
            value: c.literal_value.clone(),
            kind: c.kind,
        })
        .collect()
}

/// Uppercase a role name and fold everything non-alphanumeric to `_`.
fn role_prefix(role: &str) -> String {
    role.trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_uppercase()
            } else {
                '_'
            }
        })
        .collect()
}

/// Validate an environment variable name.
///
/// Names must be valid shell identifiers:
/// - Only A-Z, 0-9, and underscore
/// - Cannot start with a digit
/// - Cannot be empty
///
/// # Errors
///
/// Returns `ValidationError::InvalidEnvKey` if the name is invalid.
pub fn validate_env_key(key: &str) -> Result<()> {
    let mut chars = key.chars();
    let valid = match chars.next() {
        None => false,
        Some(first) => {
            !first.is_ascii_digit()
                && std::iter::once(first)
                    .chain(chars)
                    .all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
    };

    if valid {
        Ok(())
    } else {
        Err(ValidationError::InvalidEnvKey(key.to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_scoped_names() {
        assert_eq!(
            derive_env_name(CredentialKind::Email, "Email", "a@b.io", Some("checkout")),
            "QA_CHECKOUT_EMAIL"
        );
        assert_eq!(
            derive_env_name(CredentialKind::Password, "Password", "x!", Some("checkout")),
            "QA_CHECKOUT_PASSWORD"
        );
    }

    #[test]
    fn test_default_role_is_user() {
        assert_eq!(
            derive_env_name(CredentialKind::Email, "Email", "a@b.io", None),
            "QA_USER_EMAIL"
        );
    }

    #[test]
    fn test_admin_field_context_overrides_role() {
        assert_eq!(
            derive_env_name(CredentialKind::Email, "Admin Email", "a@b.io", Some("user")),
            "QA_ADMIN_EMAIL"
        );
    }

    #[test]
    fn test_admin_value_overrides_role() {
        assert_eq!(
            derive_env_name(
                CredentialKind::Password,
                "Password",
                "administrator-pw!",
                Some("user")
            ),
            "QA_ADMIN_PASSWORD"
        );
    }

    #[test]
    fn test_role_prefix_sanitized() {
        assert_eq!(
            derive_env_name(CredentialKind::Email, "Email", "a@b.io", Some("power-user 2")),
            "QA_POWER_USER_2_EMAIL"
        );
    }

    #[test]
    fn test_naming_is_deterministic() {
        let a = derive_env_name(CredentialKind::Email, "Email", "a@b.io", Some("checkout"));
        let b = derive_env_name(CredentialKind::Email, "Email", "a@b.io", Some("checkout"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_validate_env_key() {
        assert!(validate_env_key("QA_USER_EMAIL").is_ok());
        assert!(validate_env_key("_PRIVATE").is_ok());
        assert!(validate_env_key("").is_err());
        assert!(validate_env_key("1KEY").is_err());
        assert!(validate_env_key("QA-USER").is_err());
        assert!(validate_env_key("QA USER").is_err());
    }
}
