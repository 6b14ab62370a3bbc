//! Type aliases for domain concepts.
//!
//! Provides semantic type aliases to make function signatures more descriptive.

/// A role name (e.g., "admin", "checkout").
///
/// Unique key into the role registry.
pub type RoleName = String;

/// An environment variable name (e.g., QA_USER_EMAIL).
///
/// Must be a valid shell identifier.
pub type EnvKey = String;

/// The full text of a recorded browser script.
pub type Transcript = String;
