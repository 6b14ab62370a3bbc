//! Append operations for .env files.
//!
//! The tool never rewrites an env file: existing lines are user-owned. New
//! variables are appended, and keys already present are left untouched.

use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;

use crate::core::naming;
use crate::error::Result;

/// Keys already defined in an env file.
///
/// Skips empty lines and comments. A missing file yields an empty set.
pub fn existing_keys(path: &Path) -> Result<BTreeSet<String>> {
    let mut keys = BTreeSet::new();

    if !path.exists() {
        return Ok(keys);
    }

    let contents = std::fs::read_to_string(path)?;
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((key, _)) = line.split_once('=') {
            keys.insert(key.trim().to_string());
        }
    }

    Ok(keys)
}

/// Append `KEY=value` lines for keys not yet present.
///
/// Returns the keys actually appended. Values containing spaces or `#` are
/// quoted.
///
/// # Errors
///
/// Returns error if a key is not a valid env var name or the write fails.
pub fn append_missing(path: &Path, pairs: &[(String, String)]) -> Result<Vec<String>> {
    for (key, _) in pairs {
        naming::validate_env_key(key)?;
    }

    let present = existing_keys(path)?;
    let missing: Vec<&(String, String)> =
        pairs.iter().filter(|(k, _)| !present.contains(k)).collect();

    if missing.is_empty() {
        return Ok(Vec::new());
    }

    let mut block = String::new();
    if needs_leading_newline(path)? {
        block.push('\n');
    }
    for (key, value) in &missing {
        if value.contains(' ') || value.contains('#') {
            block.push_str(&format!("{}=\"{}\"\n", key, value));
        } else {
            block.push_str(&format!("{}={}\n", key, value));
        }
    }

    let mut file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    file.write_all(block.as_bytes())?;

    Ok(missing.iter().map(|(k, _)| k.clone()).collect())
}

/// Append `KEY=` stubs to the committed example file for missing keys.
///
/// # Errors
///
/// Returns error if a key is invalid or the write fails.
pub fn append_example(path: &Path, keys: &[String]) -> Result<Vec<String>> {
    let stubs: Vec<(String, String)> =
        keys.iter().map(|k| (k.clone(), String::new())).collect();
    append_missing(path, &stubs)
}

/// Whether appended content must start with a newline to stay line-oriented.
fn needs_leading_newline(path: &Path) -> Result<bool> {
    if !path.exists() {
        return Ok(false);
    }
    let contents = std::fs::read_to_string(path)?;
    Ok(!contents.is_empty() && !contents.ends_with('\n'))
}
