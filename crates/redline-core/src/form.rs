//! Redaction form state and field naming conventions

use serde::{Deserialize, Serialize};

use crate::Action;

/// Name prefix of a term's action selector
pub const ACTION_FIELD_PREFIX: &str = "redact_";
/// Name prefix of a term's custom-value input
pub const CUSTOM_FIELD_PREFIX: &str = "custom_";
pub const ADDITIONAL_TERM_PREFIX: &str = "additional_term_";
pub const ADDITIONAL_REPLACEMENT_PREFIX: &str = "additional_replacement_";

pub fn action_field_name(term: &str) -> String {
    format!("{}{}", ACTION_FIELD_PREFIX, term)
}

pub fn custom_field_name(term: &str) -> String {
    format!("{}{}", CUSTOM_FIELD_PREFIX, term)
}

pub fn additional_term_field(seq: u32) -> String {
    format!("{}{}", ADDITIONAL_TERM_PREFIX, seq)
}

pub fn additional_replacement_field(seq: u32) -> String {
    format!("{}{}", ADDITIONAL_REPLACEMENT_PREFIX, seq)
}

/// Term key encoded in an action selector name, if the name is one
pub fn term_key(field_name: &str) -> Option<&str> {
    field_name.strip_prefix(ACTION_FIELD_PREFIX)
}

/// A term and the treatment chosen for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    pub key: String,
    /// Selector value exactly as it stands on the page
    pub value: String,
    /// `None` when `value` names no known action
    pub action: Option<Action>,
    /// Only carried when `action` is `Custom`
    pub custom_value: Option<String>,
    /// Heading of the UI group the term was rendered under
    pub group: Option<String>,
}

impl Term {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            key: key.into(),
            action: value.parse().ok(),
            value,
            custom_value: None,
            group: None,
        }
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }
}

/// Snapshot of every named field on the page, in document order.
///
/// Duplicate names are kept as-is; the page is responsible for uniqueness.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedactionForm {
    fields: Vec<(String, String)>,
}

impl RedactionForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Ad-hoc `(sequence, term, replacement)` triples with a non-blank term
    pub fn additional_terms(&self) -> Vec<(u32, String, String)> {
        let mut out = Vec::new();
        for (name, value) in &self.fields {
            let Some(seq) = name
                .strip_prefix(ADDITIONAL_TERM_PREFIX)
                .and_then(|s| s.parse::<u32>().ok())
            else {
                continue;
            };
            if value.trim().is_empty() {
                continue;
            }
            let replacement = self
                .get(&additional_replacement_field(seq))
                .unwrap_or_default()
                .to_string();
            out.push((seq, value.clone(), replacement));
        }
        out
    }
}

impl FromIterator<(String, String)> for RedactionForm {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_term_parses_known_actions() {
        let term = Term::new("Alice", "MASK");
        assert_eq!(term.value, "MASK");
        assert_eq!(term.action, Some(Action::Mask));
    }

    #[test]
    fn test_term_keeps_unknown_value() {
        let term = Term::new("Carol", "SHRED");
        assert_eq!(term.value, "SHRED");
        assert_eq!(term.action, None);
    }

    #[test]
    fn test_form_lookup_and_order() {
        let mut form = RedactionForm::new();
        form.push("redact_Alice", "MASK");
        form.push("custom_Alice", "");
        assert_eq!(form.len(), 2);
        assert_eq!(form.get("redact_Alice"), Some("MASK"));
        assert_eq!(form.fields()[1].0, "custom_Alice");
        assert_eq!(form.get("redact_Bob"), None);
    }

    #[test]
    fn test_additional_terms_skip_blank() {
        let mut form = RedactionForm::new();
        form.push(additional_term_field(1), "Project X");
        form.push(additional_replacement_field(1), "the project");
        form.push(additional_term_field(2), "   ");
        form.push(additional_replacement_field(2), "ignored");

        let extra = form.additional_terms();
        assert_eq!(
            extra,
            vec![(1, "Project X".to_string(), "the project".to_string())]
        );
    }

    #[test]
    fn test_term_key() {
        assert_eq!(term_key("redact_Alice"), Some("Alice"));
        assert_eq!(term_key("custom_Alice"), None);
    }
}
