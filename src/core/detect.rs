//! Credential detection in recorded browser scripts.
//!
//! Scans Playwright-recorded scripts for fill actions on fields whose
//! accessible name marks them as email/username or password inputs, and
//! extracts the literal values typed into them. Detection is a pure function
//! over the script text; the keyword and placeholder lists are injectable
//! through [`DetectionRules`].

use regex::Regex;

use crate::core::constants;

/// Category of a detected credential field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialKind {
    Email,
    Password,
}

impl CredentialKind {
    /// Suffix used when deriving environment variable names.
    pub fn env_suffix(&self) -> &'static str {
        match self {
            Self::Email => "EMAIL",
            Self::Password => "PASSWORD",
        }
    }
}

/// A literal credential value found in a recorded script.
///
/// Transient: produced per detection pass, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectedCredential {
    /// Accessible name of the field the value was typed into
    pub field_context: String,
    /// The literal value from the fill call
    pub literal_value: String,
    /// Field category
    pub kind: CredentialKind,
}

/// Keyword and placeholder lists driving detection.
#[derive(Debug, Clone)]
pub struct DetectionRules {
    /// Name fragments marking email/username fields (case-sensitive)
    pub email_keywords: Vec<String>,
    /// Name fragments marking password fields (case-sensitive)
    pub password_keywords: Vec<String>,
    /// Whole values treated as seeded demo data (case-insensitive)
    pub placeholder_values: Vec<String>,
}

impl Default for DetectionRules {
    fn default() -> Self {
        let owned = |s: &[&str]| s.iter().map(|k| k.to_string()).collect();
        Self {
            email_keywords: owned(constants::EMAIL_FIELD_KEYWORDS),
            password_keywords: owned(constants::PASSWORD_FIELD_KEYWORDS),
            placeholder_values: owned(constants::PLACEHOLDER_VALUES),
        }
    }
}

impl DetectionRules {
    fn classify(&self, field: &str) -> Option<CredentialKind> {
        if self.email_keywords.iter().any(|k| field.contains(k.as_str())) {
            return Some(CredentialKind::Email);
        }
        if self
            .password_keywords
            .iter()
            .any(|k| field.contains(k.as_str()))
        {
            return Some(CredentialKind::Password);
        }
        None
    }

    fn is_placeholder(&self, value: &str) -> bool {
        let lower = value.to_lowercase();
        self.placeholder_values.iter().any(|p| lower == *p)
    }
}

/// Locator name attribute followed by a fill call within one statement.
///
/// Recorded scripts pair the two, possibly across line breaks:
///
/// ```text
/// await page.getByRole('textbox', { name: 'Email' }).fill('a@b.io');
/// ```
const NAME_FILL_PAIR: &str =
    r#"name\s*:\s*(?:'([^']*)'|"([^"]*)")[^;]*?\.fill\(\s*(?:'([^']*)'|"([^"]*)")\s*\)"#;

/// Find credential values typed into email/username and password fields.
///
/// Returns detections in first-match order. Values that look like selectors
/// or seeded demo data are discarded, never emitted. An empty result is not
/// an error: it means there is nothing to redact.
pub fn detect_credentials(transcript: &str, rules: &DetectionRules) -> Vec<DetectedCredential> {
    let pair = Regex::new(NAME_FILL_PAIR).expect("statement pattern compiles");

    let mut found = Vec::new();
    for caps in pair.captures_iter(transcript) {
        let field = caps
            .get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str())
            .unwrap_or_default();
        let value = caps
            .get(3)
            .or_else(|| caps.get(4))
            .map(|m| m.as_str())
            .unwrap_or_default();

        let Some(kind) = rules.classify(field) else {
            continue;
        };
        if value.is_empty() || looks_like_selector(value) || rules.is_placeholder(value) {
            continue;
        }

        found.push(DetectedCredential {
            field_context: field.to_string(),
            literal_value: value.to_string(),
            kind,
        });
    }

    found
}

/// Heuristic for values that are CSS selectors or test ids, not credentials.
///
/// Catches leading `#`/`.`, attribute syntax, test-id markers, and bare
/// lowercase element-like identifiers such as `login-btn`.
pub fn looks_like_selector(value: &str) -> bool {
    if value.starts_with('#') || value.starts_with('.') {
        return true;
    }
    if value.contains('[') && value.contains(']') {
        return true;
    }
    if constants::SELECTOR_MARKERS.iter().any(|m| value.contains(m)) {
        return true;
    }
    let bare_ident = Regex::new(r"^[a-z][a-z0-9-]*$").expect("identifier pattern compiles");
    bare_ident.is_match(value)
}
