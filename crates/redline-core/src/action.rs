//! Redaction actions

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Treatment applied to a term.
///
/// Form fields and the wire carry the upper-case spelling; parsing accepts
/// any case because the inline editor prompt asks for lower case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Action {
    Ignore,
    Redact,
    Mask,
    Custom,
}

impl Action {
    /// Value an action selector holds when the custom input must be shown
    pub const CUSTOM_SENTINEL: &'static str = "CUSTOM";

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Ignore => "IGNORE",
            Action::Redact => "REDACT",
            Action::Mask => "MASK",
            Action::Custom => "CUSTOM",
        }
    }

    /// True when a raw selector value means "custom". Exact match, like the
    /// option values the server renders.
    pub fn is_custom_value(value: &str) -> bool {
        value == Self::CUSTOM_SENTINEL
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "IGNORE" => Ok(Action::Ignore),
            "REDACT" | "REDACTED" => Ok(Action::Redact),
            "MASK" => Ok(Action::Mask),
            "CUSTOM" => Ok(Action::Custom),
            _ => Err(Error::InvalidAction(s.to_string())),
        }
    }
}
