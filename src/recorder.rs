//! Playwright recorder invocation.
//!
//! Runs `npx playwright codegen` as a blocking foreground subprocess that
//! inherits the terminal. The user drives the browser; the recorder writes a
//! storage-state file and a script of the recorded actions.

use std::path::Path;
use std::process::Command;

use tracing::{debug, info};

use crate::core::types::Transcript;
use crate::error::{RecorderError, Result};

/// Record a login flow interactively.
///
/// Blocks until the user closes the recorder window. Returns the recorded
/// script text.
///
/// # Errors
///
/// Returns `RecorderError::BinaryNotFound` if `npx` is missing,
/// `RecorderError::Interrupted` if the recorder exits non-zero, and
/// `RecorderError::NoTranscript` if no script was produced.
pub fn record_login(base_url: &str, storage_path: &Path, script_path: &Path) -> Result<Transcript> {
    let npx = which::which("npx").map_err(|_| RecorderError::BinaryNotFound("npx".into()))?;

    for path in [storage_path, script_path] {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
    }

    info!(url = base_url, "starting recorder");

    let status = Command::new(npx)
        .args(["playwright", "codegen", base_url])
        .arg("--save-storage")
        .arg(storage_path)
        .arg("--output")
        .arg(script_path)
        .args(["--target", "playwright-test"])
        .status()?;

    if !status.success() {
        return Err(RecorderError::Interrupted(status.code().unwrap_or(-1)).into());
    }

    if !script_path.exists() {
        return Err(
            RecorderError::NoTranscript(script_path.display().to_string()).into(),
        );
    }

    let transcript = std::fs::read_to_string(script_path)?;
    debug!(bytes = transcript.len(), "recorded script read");

    Ok(transcript)
}
