//! Inline correction of a single redacted term

use std::cell::RefCell;

use redline_client::RedactionBackend;
use redline_core::UpdateRequest;
use redline_page::role::ORIGINAL_TERM_ATTR;
use redline_page::{NodeId, Page};

use crate::{Host, Result};

pub const UPDATE_FAILED_MESSAGE: &str = "Failed to update redaction.";
pub const UPDATE_ERROR_MESSAGE: &str = "Error updating redaction.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineEditOutcome {
    /// Server accepted the change; a reload was requested
    Applied { term: String, action: String },
    /// Server answered `success: false`
    Rejected { term: String },
    /// Request never completed
    Failed { term: String },
    /// User dismissed the prompt or left it empty
    Cancelled,
    /// Clicked element carries no original term
    NoTerm,
}

pub fn prompt_message(term: &str) -> String {
    format!("Edit action for {}: (ignore/redact/mask/custom)", term)
}

pub fn confirmation_message(term: &str, action: &str) -> String {
    format!("Redaction updated for term: {}. Action: {}", term, action)
}

/// Ask for a new action for the clicked term and push it to the server.
///
/// Nothing on the page changes here: a successful update reloads the page
/// so the server re-renders it.
pub async fn edit_term(
    page: &RefCell<Page>,
    target: NodeId,
    backend: &dyn RedactionBackend,
    host: &dyn Host,
) -> Result<InlineEditOutcome> {
    let term = page
        .borrow()
        .element(target)?
        .attr(ORIGINAL_TERM_ATTR)
        .map(String::from);
    let Some(term) = term else {
        tracing::warn!("Redacted term {} has no {} attribute", target, ORIGINAL_TERM_ATTR);
        return Ok(InlineEditOutcome::NoTerm);
    };

    let action = match host.prompt(&prompt_message(&term)).await {
        Some(action) if !action.is_empty() => action,
        _ => return Ok(InlineEditOutcome::Cancelled),
    };

    let request = UpdateRequest::new(term.clone(), action.clone());
    match backend.update_redaction(&request).await {
        Ok(response) if response.success => {
            host.alert(&confirmation_message(&term, &action));
            host.reload();
            Ok(InlineEditOutcome::Applied { term, action })
        }
        Ok(_) => {
            host.alert(UPDATE_FAILED_MESSAGE);
            Ok(InlineEditOutcome::Rejected { term })
        }
        Err(e) => {
            tracing::error!("Error updating redaction: {}", e);
            host.alert(UPDATE_ERROR_MESSAGE);
            Ok(InlineEditOutcome::Failed { term })
        }
    }
}
