//! Error types for understudy operations.
//!
//! Errors are layered: each subsystem has its own enum, and the top-level
//! [`Error`] wraps them via `#[from]` so call sites can use `?` freely.

use thiserror::Error;

/// Configuration document errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("not initialized: run `understudy init` first")]
    NotInitialized,

    #[error("already initialized: .understudy.toml exists")]
    AlreadyInitialized,

    #[error("failed to read config: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("role not found: {0}")]
    RoleNotFound(String),

    #[error("invalid config value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// AI coding agent errors.
#[derive(Error, Debug)]
pub enum AgentError {
    #[error("no API key available and none supplied")]
    MissingCredentials,

    #[error("agent binary not found: {0}")]
    BinaryNotFound(String),

    #[error("agent ran out of turns before finishing")]
    TurnsExhausted,

    #[error("agent run failed: {0}")]
    Execution(String),

    #[error("malformed agent stream message: {0}")]
    Stream(#[from] serde_json::Error),
}

/// Browser recorder errors.
#[derive(Error, Debug)]
pub enum RecorderError {
    #[error("recorder binary not found: {0}")]
    BinaryNotFound(String),

    #[error("recording session exited with status {0}")]
    Interrupted(i32),

    #[error("no transcript produced at {0}")]
    NoTranscript(String),
}

/// Input validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("role name cannot be empty")]
    EmptyRoleName,

    #[error("invalid role name '{name}': {reason}")]
    InvalidRoleName { name: String, reason: String },

    #[error("invalid environment variable name '{0}'")]
    InvalidEnvKey(String),
}

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Agent(#[from] AgentError),

    #[error(transparent)]
    Recorder(#[from] RecorderError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, Error>;
