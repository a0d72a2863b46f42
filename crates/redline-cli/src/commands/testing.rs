//! Fixtures shared by the command tests

use std::rc::Rc;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use redline_client::RedactionBackend;
use redline_config::EditorConfig;
use redline_controller::Controller;
use redline_core::{
    Error, PreviewResponse, RedactionForm, Result, SearchResponse, UpdateRequest, UpdateResponse,
};
use redline_page::Page;

use crate::host::TerminalHost;

pub const PAGE: &str = r#"
<html><body>
<form id="redactionForm" method="post">
  <div class="redaction-group">
    <h3>PERSON</h3>
    <select id="group_PERSON" data-command="apply-to-group" data-group="PERSON">
      <option value="REDACT">Redact</option>
      <option value="MASK">Mask</option>
    </select>
    <select name="redact_Alice">
      <option value="REDACT" selected>Redact</option>
      <option value="MASK">Mask</option>
      <option value="CUSTOM">Custom</option>
    </select>
    <input type="text" name="custom_Alice" class="custom-input" style="display: none;">
  </div>
  <div class="redaction-group">
    <h3>ORG</h3>
    <select name="redact_Acme">
      <option value="IGNORE" selected>Ignore</option>
      <option value="MASK">Mask</option>
    </select>
    <input type="text" name="custom_Acme" class="custom-input" style="display: none;">
  </div>
  <div id="additionalTerms"></div>
  <button type="button" id="addTerm">Add term</button>
  <button type="button" id="previewButton">Preview</button>
</form>
<div id="previewModal" style="display:none">
  <span class="close">&times;</span>
  <div id="previewContent"></div>
</div>
<p>Signed <span class="redacted-term" data-original="Alice">[[REDACTED_1a2b3c4d]]</span>.</p>
</body></html>
"#;

/// Echoes the submitted fields back as `name=value` preview lines.
///
/// Updates answer with the configured verdict; `None` fails as a transport
/// error.
pub struct EchoBackend {
    update: Option<bool>,
    pub updates: Mutex<Vec<UpdateRequest>>,
}

#[async_trait]
impl RedactionBackend for EchoBackend {
    async fn preview(&self, form: &RedactionForm) -> Result<PreviewResponse> {
        let lines: Vec<String> = form
            .fields()
            .iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect();
        Ok(PreviewResponse::preview(lines.join("\n")))
    }

    async fn update_redaction(&self, request: &UpdateRequest) -> Result<UpdateResponse> {
        self.updates.lock().unwrap().push(request.clone());
        match self.update {
            Some(success) => Ok(UpdateResponse { success }),
            None => Err(Error::Transport("connection refused".to_string())),
        }
    }

    async fn search(&self, _query: &str) -> Result<SearchResponse> {
        Err(Error::Transport("connection refused".to_string()))
    }
}

/// Controller over [`PAGE`] whose host answers the first prompt with `answer`
pub fn controller(update: Option<bool>, answer: Option<&str>) -> (Controller, Arc<EchoBackend>) {
    let page = Page::from_html(PAGE).unwrap();
    let backend = Arc::new(EchoBackend {
        update,
        updates: Mutex::new(Vec::new()),
    });
    let host = Rc::new(TerminalHost::new(answer.map(String::from)));
    let controller =
        Controller::ready(page, backend.clone(), host, &EditorConfig::default()).unwrap();
    (controller, backend)
}

pub fn value_of(controller: &Controller, name: &str) -> Option<String> {
    let page = controller.page();
    page.find_by_name(name)
        .and_then(|id| page.value(id))
        .map(String::from)
}
