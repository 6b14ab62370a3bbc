//! Secret redaction in recorded browser scripts.
//!
//! Replaces every quoted occurrence of a detected credential value with a
//! `process.env` reference, after de-duplicating the variable list.

use regex::Regex;
use tracing::debug;

use crate::core::naming::EnvVar;

/// Drop repeated variables, first occurrence wins.
///
/// An entry is dropped when its name OR its value was already seen, even if
/// the other field differs. Two variables must never collide on a name, and
/// one literal secret must never be described by two names.
pub fn dedup(vars: Vec<EnvVar>) -> Vec<EnvVar> {
    let mut seen_names = std::collections::HashSet::new();
    let mut seen_values = std::collections::HashSet::new();
    let mut kept = Vec::new();

    for var in vars {
        if seen_names.contains(&var.name) || seen_values.contains(&var.value) {
            debug!(name = %var.name, "dropping duplicate env var");
            continue;
        }
        seen_names.insert(var.name.clone());
        seen_values.insert(var.value.clone());
        kept.push(var);
    }

    kept
}

/// Replace quoted credential literals with environment references.
///
/// Each value is matched quote-delimited (either quote style) and replaced
/// globally with `process.env.{NAME}!`. Values are regex-escaped first, so
/// metacharacters in passwords cannot widen the match. Callers are expected
/// to pass a de-duplicated list; substitution is then unambiguous regardless
/// of order.
pub fn rewrite(transcript: &str, vars: &[EnvVar]) -> String {
    let mut text = transcript.to_string();

    for var in vars {
        let escaped = regex::escape(&var.value);
        let pattern = format!("'{escaped}'|\"{escaped}\"");
        let re = Regex::new(&pattern).expect("escaped literal is a valid pattern");
        let reference = format!("process.env.{}!", var.name);
        text = re.replace_all(&text, reference.as_str()).into_owned();
    }

    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::detect::CredentialKind;

    fn var(name: &str, value: &str, kind: CredentialKind) -> EnvVar {
        EnvVar {
            name: name.to_string(),
            value: value.to_string(),
            kind,
        }
    }

    #[test]
    fn test_dedup_repeated_name() {
        let vars = vec![
            var("QA_USER_PASSWORD", "first!", CredentialKind::Password),
            var("QA_USER_PASSWORD", "second!", CredentialKind::Password),
        ];
        let kept = dedup(vars);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].value, "first!");
    }

    #[test]
    fn test_dedup_repeated_value_different_name() {
        // Same password typed into two differently-named fields.
        let vars = vec![
            var("QA_USER_PASSWORD", "shared!", CredentialKind::Password),
            var("QA_ADMIN_PASSWORD", "shared!", CredentialKind::Password),
        ];
        let kept = dedup(vars);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].name, "QA_USER_PASSWORD");
    }

    #[test]
    fn test_dedup_is_idempotent() {
        let vars = vec![
            var("QA_USER_EMAIL", "a@b.io", CredentialKind::Email),
            var("QA_USER_PASSWORD", "pw!", CredentialKind::Password),
        ];
        let once = dedup(vars);
        let twice = dedup(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_rewrite_replaces_quoted_occurrences() {
        let script = r#"
await page.getByRole('textbox', { name: 'Email' }).fill('alice@corp.io');
await page.getByRole('textbox', { name: 'Password' }).fill('s3cr3t!');
"#;
        let vars = vec![
            var("QA_USER_EMAIL", "alice@corp.io", CredentialKind::Email),
            var("QA_USER_PASSWORD", "s3cr3t!", CredentialKind::Password),
        ];
        let out = rewrite(script, &vars);

        assert!(!out.contains("'alice@corp.io'"));
        assert!(!out.contains("'s3cr3t!'"));
        assert!(out.contains(".fill(process.env.QA_USER_EMAIL!)"));
        assert!(out.contains(".fill(process.env.QA_USER_PASSWORD!)"));
    }

    #[test]
    fn test_rewrite_handles_both_quote_styles() {
        let script = r#"fill("alice@corp.io"); fill('alice@corp.io');"#;
        let vars = vec![var("QA_USER_EMAIL", "alice@corp.io", CredentialKind::Email)];
        let out = rewrite(script, &vars);
        assert_eq!(out, "fill(process.env.QA_USER_EMAIL!); fill(process.env.QA_USER_EMAIL!);");
    }

    #[test]
    fn test_rewrite_escapes_metacharacters() {
        // A password that is almost a regex wildcard must not match "aXb".
        let script = r#"fill('a.b'); fill('aXb');"#;
        let vars = vec![var("QA_USER_PASSWORD", "a.b", CredentialKind::Password)];
        let out = rewrite(script, &vars);
        assert!(out.contains("process.env.QA_USER_PASSWORD!"));
        assert!(out.contains("'aXb'"));
    }

    #[test]
    fn test_rewrite_leaves_unquoted_text_alone() {
        let script = "// password is s3cr3t! according to the fixture";
        let vars = vec![var("QA_USER_PASSWORD", "s3cr3t!", CredentialKind::Password)];
        assert_eq!(rewrite(script, &vars), script);
    }

    #[test]
    fn test_rewrite_with_no_vars_is_identity() {
        let script = "await page.goto('https://corp.io');";
        assert_eq!(rewrite(script, &[]), script);
    }
}
