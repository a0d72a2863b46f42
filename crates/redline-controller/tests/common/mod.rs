// tests/common/mod.rs

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use redline_client::RedactionBackend;
use redline_config::EditorConfig;
use redline_controller::{Controller, Host};
use redline_core::{
    Error, PreviewResponse, RedactionForm, Result, SearchResponse, UpdateRequest, UpdateResponse,
};
use redline_page::{NodeId, Page};

/// Review page with two groups, the preview modal and a dismissable flash message
pub const REVIEW_PAGE: &str = r#"
<html><body>
<div class="flash">Document loaded <span class="close" id="dismissFlash">&times;</span></div>
<form id="redactionForm" method="post">
  <div class="redaction-group">
    <h3>PERSON</h3>
    <select id="group_PERSON" data-command="apply-to-group" data-group="PERSON">
      <option value="IGNORE">Ignore</option>
      <option value="REDACT">Redact</option>
      <option value="MASK">Mask</option>
      <option value="CUSTOM">Custom</option>
    </select>
    <div class="item">
      <select name="redact_Alice">
        <option value="IGNORE">Ignore</option>
        <option value="REDACT" selected>Redact</option>
        <option value="MASK">Mask</option>
        <option value="CUSTOM">Custom</option>
      </select>
      <input type="text" name="custom_Alice" class="custom-input" style="display: none;">
    </div>
    <div class="item">
      <select name="redact_Bob">
        <option value="IGNORE">Ignore</option>
        <option value="REDACT" selected>Redact</option>
        <option value="MASK">Mask</option>
        <option value="CUSTOM">Custom</option>
      </select>
      <input type="text" name="custom_Bob" class="custom-input" style="display: none;">
    </div>
  </div>
  <div class="redaction-group">
    <h3>ORG</h3>
    <div class="item">
      <select name="redact_Acme">
        <option value="IGNORE" selected>Ignore</option>
        <option value="REDACT">Redact</option>
        <option value="MASK">Mask</option>
        <option value="CUSTOM">Custom</option>
      </select>
      <input type="text" name="custom_Acme" class="custom-input" style="display: none;">
    </div>
  </div>
  <div id="additionalTerms"></div>
  <button type="button" id="addTerm">Add term</button>
  <button type="button" id="previewButton">Preview</button>
</form>
<div id="previewModal" style="display:none">
  <span class="close">&times;</span>
  <div id="previewContent"></div>
</div>
<p>Contact <span class="redacted-term" data-original="Alice">[[REDACTED_1a2b3c4d]]</span> today.</p>
<p>Filed by <span class="redacted-term">[[REDACTED_9f8e7d6c]]</span>.</p>
</body></html>
"#;

/// Host that records dialogs and answers prompts from a queue
#[derive(Default)]
pub struct RecordingHost {
    pub alerts: RefCell<Vec<String>>,
    pub prompts: RefCell<Vec<String>>,
    answers: RefCell<VecDeque<Option<String>>>,
    reloads: Cell<usize>,
}

impl RecordingHost {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn answer(&self, answer: Option<&str>) {
        self.answers
            .borrow_mut()
            .push_back(answer.map(String::from));
    }

    pub fn alerts(&self) -> Vec<String> {
        self.alerts.borrow().clone()
    }

    pub fn reloads(&self) -> usize {
        self.reloads.get()
    }
}

#[async_trait(?Send)]
impl Host for RecordingHost {
    fn alert(&self, message: &str) {
        self.alerts.borrow_mut().push(message.to_string());
    }

    async fn prompt(&self, message: &str) -> Option<String> {
        self.prompts.borrow_mut().push(message.to_string());
        self.answers.borrow_mut().pop_front().flatten()
    }

    fn reload(&self) {
        self.reloads.set(self.reloads.get() + 1);
    }
}

/// Backend answering from queued responses and recording what it was sent.
///
/// An empty queue answers with a transport error.
#[derive(Default)]
pub struct ScriptedBackend {
    previews: Mutex<VecDeque<Result<PreviewResponse>>>,
    updates: Mutex<VecDeque<Result<UpdateResponse>>>,
    pub forms: Mutex<Vec<RedactionForm>>,
    pub update_requests: Mutex<Vec<UpdateRequest>>,
}

impl ScriptedBackend {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push_preview(&self, response: Result<PreviewResponse>) {
        self.previews.lock().unwrap().push_back(response);
    }

    pub fn push_update(&self, response: Result<UpdateResponse>) {
        self.updates.lock().unwrap().push_back(response);
    }

    pub fn forms(&self) -> Vec<RedactionForm> {
        self.forms.lock().unwrap().clone()
    }

    pub fn update_requests(&self) -> Vec<UpdateRequest> {
        self.update_requests.lock().unwrap().clone()
    }
}

fn unscripted() -> Error {
    Error::Transport("connection refused".to_string())
}

#[async_trait]
impl RedactionBackend for ScriptedBackend {
    async fn preview(&self, form: &RedactionForm) -> Result<PreviewResponse> {
        self.forms.lock().unwrap().push(form.clone());
        self.previews
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(unscripted()))
    }

    async fn update_redaction(&self, request: &UpdateRequest) -> Result<UpdateResponse> {
        self.update_requests.lock().unwrap().push(request.clone());
        self.updates
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(unscripted()))
    }

    async fn search(&self, _query: &str) -> Result<SearchResponse> {
        Err(unscripted())
    }
}

pub struct TestEnv {
    pub controller: Controller,
    pub backend: Arc<ScriptedBackend>,
    pub host: Rc<RecordingHost>,
}

impl TestEnv {
    pub fn new() -> Self {
        Self::with_editor(&EditorConfig::default())
    }

    pub fn with_editor(editor: &EditorConfig) -> Self {
        Self::from_html(REVIEW_PAGE, editor)
    }

    pub fn from_html(html: &str, editor: &EditorConfig) -> Self {
        let page = Page::from_html(html).unwrap();
        let backend = ScriptedBackend::new();
        let host = RecordingHost::new();
        let controller =
            Controller::ready(page, backend.clone(), host.clone(), editor).unwrap();
        Self {
            controller,
            backend,
            host,
        }
    }

    /// Element with the given DOM id
    pub fn by_id(&self, dom_id: &str) -> NodeId {
        self.controller
            .page()
            .find_by_dom_id(dom_id)
            .unwrap_or_else(|| panic!("no element #{dom_id}"))
    }

    /// Form control with the given `name`
    pub fn by_name(&self, name: &str) -> NodeId {
        self.controller
            .page()
            .find_by_name(name)
            .unwrap_or_else(|| panic!("no control named {name}"))
    }

    pub fn value(&self, id: NodeId) -> Option<String> {
        self.controller.page().value(id).map(String::from)
    }

    pub fn is_visible(&self, id: NodeId) -> bool {
        self.controller.page().is_visible(id)
    }
}
