//! Preview round trip and modal

use std::cell::RefCell;

use redline_client::RedactionBackend;
use redline_core::{Error, preview_markup};
use redline_page::{NodeId, Page, Role};

use crate::Host;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewOutcome {
    /// Preview rendered and modal opened
    Shown,
    /// Server answered with `{error}`; the user was alerted
    Rejected(String),
    /// Transport or decoding failure, or the preview surfaces are missing; logged only
    Failed,
}

/// Preview surfaces, resolved once when the page is ready
#[derive(Debug, Clone, Default)]
pub struct PreviewController {
    form: Option<NodeId>,
    modal: Option<NodeId>,
    content: Option<NodeId>,
}

impl PreviewController {
    pub fn resolve(page: &Page) -> Self {
        Self {
            form: page.first_by_role(Role::RedactionForm),
            modal: page.first_by_role(Role::PreviewModal),
            content: page.first_by_role(Role::PreviewContent),
        }
    }

    /// Submit the current form and display the result.
    ///
    /// The page is not borrowed while the request is in flight, so other
    /// events (including another preview) may be handled meanwhile; whichever
    /// response lands last owns the modal content.
    pub async fn request(
        &self,
        page: &RefCell<Page>,
        backend: &dyn RedactionBackend,
        host: &dyn Host,
    ) -> PreviewOutcome {
        let Some(form_id) = self.form else {
            tracing::error!("Error: no redaction form on the page");
            return PreviewOutcome::Failed;
        };
        let form = page.borrow().form_data(form_id);

        let response = match backend.preview(&form).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!("Error: {}", e);
                return PreviewOutcome::Failed;
            }
        };

        match response.into_result() {
            Ok(text) => match self.display(&mut page.borrow_mut(), &text) {
                Ok(()) => PreviewOutcome::Shown,
                Err(e) => {
                    tracing::error!("Error: {}", e);
                    PreviewOutcome::Failed
                }
            },
            Err(Error::Server(message)) => {
                host.alert(&message);
                PreviewOutcome::Rejected(message)
            }
            Err(e) => {
                tracing::error!("Error: {}", e);
                PreviewOutcome::Failed
            }
        }
    }

    fn display(&self, page: &mut Page, preview: &str) -> redline_page::Result<()> {
        let content = self
            .content
            .ok_or_else(|| redline_page::PageError::MissingElement("preview content".into()))?;
        let modal = self
            .modal
            .ok_or_else(|| redline_page::PageError::MissingElement("preview modal".into()))?;

        page.set_markup(content, &preview_markup(preview))?;
        page.set_visible(modal, true)
    }

    /// Hide the modal. No network traffic.
    pub fn close(&self, page: &mut Page) -> redline_page::Result<()> {
        match self.modal {
            Some(modal) => page.set_visible(modal, false),
            None => Ok(()),
        }
    }
}
