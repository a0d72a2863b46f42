use std::cell::{Ref, RefCell, RefMut};
use std::rc::Rc;
use std::sync::Arc;

use redline_client::RedactionBackend;
use redline_config::EditorConfig;
use redline_core::form::term_key;
use redline_core::{Action, Term};
use redline_page::role::COMMAND_ATTR;
use redline_page::{NodeId, Page, Role};

use crate::commands::{CommandArgs, CommandRegistry};
use crate::dispatch::{DispatchTable, Event, Handler};
use crate::inline_edit::{InlineEditOutcome, edit_term};
use crate::preview::{PreviewController, PreviewOutcome};
use crate::term_adder::{SlotId, TermAdder};
use crate::toggle::toggle_custom_input;
use crate::{Host, Result};

/// What handling one event amounted to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// No handler for the target's role
    Ignored,
    Toggled(Option<NodeId>),
    Preview(PreviewOutcome),
    PreviewClosed,
    InlineEdit(InlineEditOutcome),
    SlotAdded(Option<SlotId>),
    Command(Vec<NodeId>),
}

/// Controller for one page load.
///
/// Single-threaded: the page sits in a `RefCell` and is never borrowed
/// across an await, so concurrent dispatches interleave at network and
/// prompt suspension points only.
pub struct Controller {
    page: RefCell<Page>,
    backend: Arc<dyn RedactionBackend>,
    host: Rc<dyn Host>,
    routes: DispatchTable,
    commands: CommandRegistry,
    preview: PreviewController,
    term_adder: TermAdder,
}

impl Controller {
    /// Wire every component to a freshly loaded page
    pub fn ready(
        mut page: Page,
        backend: Arc<dyn RedactionBackend>,
        host: Rc<dyn Host>,
        editor: &EditorConfig,
    ) -> Result<Self> {
        let preview = PreviewController::resolve(&page);
        let term_adder = TermAdder::resolve(&mut page, editor.max_additional_terms)?;

        tracing::info!(
            selectors = page.find_by_role(Role::ActionSelector).len(),
            redacted_terms = page.find_by_role(Role::RedactedTerm).len(),
            max_additional_terms = editor.max_additional_terms,
            "Controller ready"
        );

        Ok(Self {
            page: RefCell::new(page),
            backend,
            host,
            routes: DispatchTable::new(),
            commands: CommandRegistry::new(),
            preview,
            term_adder,
        })
    }

    pub fn page(&self) -> Ref<'_, Page> {
        self.page.borrow()
    }

    /// Mutable access for script-driven page changes between events
    pub fn page_mut(&self) -> RefMut<'_, Page> {
        self.page.borrow_mut()
    }

    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    pub fn term_adder(&self) -> &TermAdder {
        &self.term_adder
    }

    /// Route an event by the role of its target
    pub async fn dispatch(&self, event: Event) -> Result<DispatchOutcome> {
        let role = self.page.borrow().role(event.target);
        let Some(handler) = role.and_then(|role| self.routes.route(event.kind, role)) else {
            tracing::trace!(target_node = %event.target, ?role, "No route for event");
            return Ok(DispatchOutcome::Ignored);
        };

        match handler {
            Handler::ToggleCustomInput => {
                let toggled = toggle_custom_input(&mut self.page.borrow_mut(), event.target)?;
                Ok(DispatchOutcome::Toggled(toggled))
            }
            Handler::OpenPreview => {
                let outcome = self
                    .preview
                    .request(&self.page, self.backend.as_ref(), self.host.as_ref())
                    .await;
                Ok(DispatchOutcome::Preview(outcome))
            }
            Handler::ClosePreview => {
                self.preview.close(&mut self.page.borrow_mut())?;
                Ok(DispatchOutcome::PreviewClosed)
            }
            Handler::InlineEdit => {
                let outcome = edit_term(
                    &self.page,
                    event.target,
                    self.backend.as_ref(),
                    self.host.as_ref(),
                )
                .await?;
                Ok(DispatchOutcome::InlineEdit(outcome))
            }
            Handler::AddTerm => {
                let slot = self.term_adder.add_slot(&mut self.page.borrow_mut())?;
                Ok(DispatchOutcome::SlotAdded(slot))
            }
            Handler::InvokeCommand => {
                let mut page = self.page.borrow_mut();
                let name = page
                    .element(event.target)?
                    .attr(COMMAND_ATTR)
                    .unwrap_or_default()
                    .to_string();
                let args = CommandArgs::from_element(&page, event.target)?;
                let changed = self.commands.invoke(&name, &mut page, &args)?;
                Ok(DispatchOutcome::Command(changed))
            }
        }
    }

    pub async fn click(&self, target: NodeId) -> Result<DispatchOutcome> {
        self.dispatch(Event::click(target)).await
    }

    /// Set a control's value as the user would, then signal the change
    pub async fn change(&self, target: NodeId, value: &str) -> Result<DispatchOutcome> {
        self.page.borrow_mut().set_value(target, value)?;
        self.dispatch(Event::change(target)).await
    }

    /// Invoke a published command directly
    pub fn invoke_command(&self, name: &str, args: &CommandArgs) -> Result<Vec<NodeId>> {
        self.commands
            .invoke(name, &mut self.page.borrow_mut(), args)
    }

    /// Terms as currently configured on the page, with their group headings
    pub fn terms(&self) -> Result<Vec<Term>> {
        let page = self.page.borrow();
        let mut terms = Vec::new();

        for selector in page.find_by_role(Role::ActionSelector) {
            let element = page.element(selector)?;
            let Some(key) = element.name().and_then(term_key) else {
                continue;
            };
            let mut term = Term::new(key, page.value(selector).unwrap_or_default());

            if term.action == Some(Action::Custom) {
                term.custom_value = page
                    .next_element_sibling(selector)
                    .filter(|id| page.role(*id) == Some(Role::CustomInput))
                    .and_then(|id| page.value(id))
                    .map(String::from);
            }
            if let Some(group) = page
                .closest(selector, Role::GroupContainer)
                .and_then(|container| page.group_label(container))
            {
                term = term.with_group(group);
            }
            terms.push(term);
        }
        Ok(terms)
    }
}
