//! Event routing by element role

use std::collections::HashMap;

use redline_page::{NodeId, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    /// Value of a form control changed
    Change,
}

/// A user event on a page element
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub target: NodeId,
}

impl Event {
    pub fn click(target: NodeId) -> Self {
        Self {
            kind: EventKind::Click,
            target,
        }
    }

    pub fn change(target: NodeId) -> Self {
        Self {
            kind: EventKind::Change,
            target,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    ToggleCustomInput,
    OpenPreview,
    ClosePreview,
    InlineEdit,
    AddTerm,
    InvokeCommand,
}

/// Maps `(event kind, target role)` to the handler that owns it
#[derive(Debug, Clone)]
pub struct DispatchTable {
    routes: HashMap<(EventKind, Role), Handler>,
}

impl DispatchTable {
    pub fn new() -> Self {
        let mut table = Self {
            routes: HashMap::new(),
        };
        table.insert(EventKind::Change, Role::ActionSelector, Handler::ToggleCustomInput);
        table.insert(EventKind::Click, Role::PreviewTrigger, Handler::OpenPreview);
        table.insert(EventKind::Click, Role::ModalClose, Handler::ClosePreview);
        table.insert(EventKind::Click, Role::RedactedTerm, Handler::InlineEdit);
        table.insert(EventKind::Click, Role::AddTermTrigger, Handler::AddTerm);
        table.insert(EventKind::Click, Role::CommandControl, Handler::InvokeCommand);
        table.insert(EventKind::Change, Role::CommandField, Handler::InvokeCommand);
        table
    }

    pub fn insert(&mut self, kind: EventKind, role: Role, handler: Handler) {
        self.routes.insert((kind, role), handler);
    }

    pub fn route(&self, kind: EventKind, role: Role) -> Option<Handler> {
        self.routes.get(&(kind, role)).copied()
    }
}

impl Default for DispatchTable {
    fn default() -> Self {
        Self::new()
    }
}
