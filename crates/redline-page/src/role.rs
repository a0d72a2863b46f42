//! Semantic roles of page elements
//!
//! Roles are resolved once when an element enters the page, either from an
//! explicit `data-role` attribute or from the markup conventions the server
//! templates follow. Event dispatch keys on the role, never on selectors.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use redline_core::form::ACTION_FIELD_PREFIX;

use crate::node::{input_type, is_button_type};

pub const ROLE_ATTR: &str = "data-role";
pub const COMMAND_ATTR: &str = "data-command";
pub const ORIGINAL_TERM_ATTR: &str = "data-original";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Role {
    RedactionForm,
    ActionSelector,
    CustomInput,
    GroupContainer,
    GroupHeading,
    RedactedTerm,
    PreviewTrigger,
    PreviewModal,
    PreviewContent,
    ModalClose,
    AddTermTrigger,
    AdditionalTerms,
    /// Button or link invoking a registered command through `data-command`
    CommandControl,
    /// Form control invoking a registered command when its value changes
    CommandField,
}

/// Ancestry of an element, as far as role inference cares
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scope {
    /// Some ancestor is a group container
    pub in_group: bool,
    /// Some ancestor is the preview modal
    pub in_modal: bool,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::RedactionForm => "redaction-form",
            Role::ActionSelector => "action-selector",
            Role::CustomInput => "custom-input",
            Role::GroupContainer => "group",
            Role::GroupHeading => "group-heading",
            Role::RedactedTerm => "redacted-term",
            Role::PreviewTrigger => "preview-trigger",
            Role::PreviewModal => "preview-modal",
            Role::PreviewContent => "preview-content",
            Role::ModalClose => "modal-close",
            Role::AddTermTrigger => "add-term",
            Role::AdditionalTerms => "additional-terms",
            Role::CommandControl => "command",
            Role::CommandField => "command-field",
        }
    }

    /// Resolve the role of a new element.
    ///
    /// `scope` makes an `h3` a group heading only inside a group, and a
    /// `.close` control the modal close only inside the preview modal.
    pub fn infer(
        tag: &str,
        attrs: &BTreeMap<String, String>,
        classes: &[String],
        scope: Scope,
    ) -> Option<Role> {
        if let Some(explicit) = attrs.get(ROLE_ATTR) {
            match explicit.parse() {
                Ok(role) => return Some(role),
                Err(_) => tracing::warn!("Ignoring unknown data-role: {}", explicit),
            }
        }

        if let Some(role) = attrs.get("id").and_then(|id| Self::from_dom_id(id)) {
            return Some(role);
        }

        if attrs.contains_key(COMMAND_ATTR) {
            return Some(if holds_value(tag, attrs) {
                Role::CommandField
            } else {
                Role::CommandControl
            });
        }

        let has_class = |c: &str| classes.iter().any(|x| x == c);

        if matches!(tag, "select" | "input")
            && attrs
                .get("name")
                .is_some_and(|n| n.starts_with(ACTION_FIELD_PREFIX))
        {
            return Some(Role::ActionSelector);
        }
        if has_class("custom-input") {
            return Some(Role::CustomInput);
        }
        if has_class("redacted-term") {
            return Some(Role::RedactedTerm);
        }
        if has_class("redaction-group") {
            return Some(Role::GroupContainer);
        }
        if has_class("close") && scope.in_modal {
            return Some(Role::ModalClose);
        }
        if tag == "h3" && scope.in_group {
            return Some(Role::GroupHeading);
        }
        None
    }

    fn from_dom_id(id: &str) -> Option<Role> {
        match id {
            "redactionForm" => Some(Role::RedactionForm),
            "previewButton" => Some(Role::PreviewTrigger),
            "previewModal" => Some(Role::PreviewModal),
            "previewContent" => Some(Role::PreviewContent),
            "addTerm" => Some(Role::AddTermTrigger),
            "additionalTerms" => Some(Role::AdditionalTerms),
            _ => None,
        }
    }
}

/// Controls whose interaction is a value change rather than a click
fn holds_value(tag: &str, attrs: &BTreeMap<String, String>) -> bool {
    match tag {
        "select" | "textarea" => true,
        "input" => input_type(tag, attrs).is_some_and(|t| !is_button_type(&t)),
        _ => false,
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let role = match s {
            "redaction-form" => Role::RedactionForm,
            "action-selector" => Role::ActionSelector,
            "custom-input" => Role::CustomInput,
            "group" => Role::GroupContainer,
            "group-heading" => Role::GroupHeading,
            "redacted-term" => Role::RedactedTerm,
            "preview-trigger" => Role::PreviewTrigger,
            "preview-modal" => Role::PreviewModal,
            "preview-content" => Role::PreviewContent,
            "modal-close" => Role::ModalClose,
            "add-term" => Role::AddTermTrigger,
            "additional-terms" => Role::AdditionalTerms,
            "command" => Role::CommandControl,
            "command-field" => Role::CommandField,
            other => return Err(format!("unknown role: {}", other)),
        };
        Ok(role)
    }
}
