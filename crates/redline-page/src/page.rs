//! Element arena and DOM-style queries

use redline_core::RedactionForm;

use crate::node::{NodeKind, Slot};
use crate::role::ORIGINAL_TERM_ATTR;
use crate::node::is_button_type;
use crate::{Element, ElementBuilder, NodeId, PageError, Result, Role, Scope};

/// In-memory document for one page load.
///
/// Nodes are never freed; replacing an element's content detaches the old
/// children, which are then unreachable from the root.
#[derive(Debug, Clone)]
pub struct Page {
    nodes: Vec<Slot>,
    root: NodeId,
}

impl Page {
    pub fn new() -> Self {
        let root = Slot {
            kind: NodeKind::Element(ElementBuilder::new("#document").build(Scope::default())),
            parent: None,
            children: Vec::new(),
        };
        Self {
            nodes: vec![root],
            root: NodeId(0),
        }
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Append an element as the last child of `parent`
    pub fn append(&mut self, parent: NodeId, builder: ElementBuilder) -> Result<NodeId> {
        self.element(parent)?;
        let scope = Scope {
            in_group: self.closest(parent, Role::GroupContainer).is_some(),
            in_modal: self.closest(parent, Role::PreviewModal).is_some(),
        };
        let element = builder.build(scope);
        Ok(self.push_node(parent, NodeKind::Element(element)))
    }

    pub fn append_text(&mut self, parent: NodeId, text: &str) -> Result<NodeId> {
        self.element(parent)?;
        Ok(self.push_node(parent, NodeKind::Text(text.to_string())))
    }

    fn push_node(&mut self, parent: NodeId, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Slot {
            kind,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    fn slot(&self, id: NodeId) -> Result<&Slot> {
        self.nodes.get(id.0).ok_or(PageError::UnknownNode(id))
    }

    pub fn element(&self, id: NodeId) -> Result<&Element> {
        match &self.slot(id)?.kind {
            NodeKind::Element(el) => Ok(el),
            NodeKind::Text(_) => Err(PageError::NotAnElement(id)),
        }
    }

    pub fn element_mut(&mut self, id: NodeId) -> Result<&mut Element> {
        match self.nodes.get_mut(id.0).map(|s| &mut s.kind) {
            Some(NodeKind::Element(el)) => Ok(el),
            Some(NodeKind::Text(_)) => Err(PageError::NotAnElement(id)),
            None => Err(PageError::UnknownNode(id)),
        }
    }

    pub fn role(&self, id: NodeId) -> Option<Role> {
        self.element(id).ok().and_then(|el| el.role)
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes.get(id.0).and_then(|s| s.parent)
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        self.nodes
            .get(id.0)
            .map(|s| s.children.as_slice())
            .unwrap_or_default()
    }

    /// Descendants of `id` in document order, excluding `id` itself
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(id).iter().rev().copied().collect();
        while let Some(next) = stack.pop() {
            out.push(next);
            stack.extend(self.children(next).iter().rev().copied());
        }
        out
    }

    /// Every element reachable from the root, in document order
    pub fn elements(&self) -> Vec<NodeId> {
        self.descendants(self.root)
            .into_iter()
            .filter(|id| self.element(*id).is_ok())
            .collect()
    }

    pub fn find_by_dom_id(&self, dom_id: &str) -> Option<NodeId> {
        self.elements()
            .into_iter()
            .find(|id| self.element(*id).is_ok_and(|el| el.dom_id() == Some(dom_id)))
    }

    /// First form control with the given `name`
    pub fn find_by_name(&self, name: &str) -> Option<NodeId> {
        self.elements()
            .into_iter()
            .find(|id| self.element(*id).is_ok_and(|el| el.name() == Some(name)))
    }

    pub fn find_by_role(&self, role: Role) -> Vec<NodeId> {
        self.elements()
            .into_iter()
            .filter(|id| self.role(*id) == Some(role))
            .collect()
    }

    pub fn first_by_role(&self, role: Role) -> Option<NodeId> {
        self.elements()
            .into_iter()
            .find(|id| self.role(*id) == Some(role))
    }

    /// Next sibling that is an element, skipping text
    pub fn next_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.parent(id)?;
        let siblings = self.children(parent);
        let pos = siblings.iter().position(|s| *s == id)?;
        siblings[pos + 1..]
            .iter()
            .copied()
            .find(|s| self.element(*s).is_ok())
    }

    /// Nearest inclusive ancestor carrying `role`
    pub fn closest(&self, id: NodeId, role: Role) -> Option<NodeId> {
        let mut current = Some(id);
        while let Some(node) = current {
            if self.role(node) == Some(role) {
                return Some(node);
            }
            current = self.parent(node);
        }
        None
    }

    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        let Ok(slot) = self.slot(id) else {
            return;
        };
        match &slot.kind {
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::Element(el) => {
                if let Some(markup) = &el.markup {
                    out.push_str(markup);
                }
                for child in &slot.children {
                    self.collect_text(*child, out);
                }
            }
        }
    }

    pub fn value(&self, id: NodeId) -> Option<&str> {
        self.element(id).ok().and_then(|el| el.value.as_deref())
    }

    pub fn set_value(&mut self, id: NodeId, value: &str) -> Result<()> {
        self.element_mut(id)?.value = Some(value.to_string());
        Ok(())
    }

    pub fn is_visible(&self, id: NodeId) -> bool {
        self.element(id).is_ok_and(|el| el.visible)
    }

    pub fn set_visible(&mut self, id: NodeId, visible: bool) -> Result<()> {
        self.element_mut(id)?.visible = visible;
        Ok(())
    }

    pub fn markup(&self, id: NodeId) -> Option<&str> {
        self.element(id).ok().and_then(|el| el.markup.as_deref())
    }

    /// Replace the content of `id` with raw markup
    pub fn set_markup(&mut self, id: NodeId, markup: &str) -> Result<()> {
        self.element_mut(id)?.markup = Some(markup.to_string());
        let detached = std::mem::take(&mut self.nodes[id.0].children);
        for child in detached {
            self.nodes[child.0].parent = None;
        }
        Ok(())
    }

    /// Heading text of a group container: its group heading, else its first `h3`
    pub fn group_label(&self, container: NodeId) -> Option<String> {
        let descendants = self.descendants(container);
        let heading = descendants
            .iter()
            .copied()
            .find(|id| self.role(*id) == Some(Role::GroupHeading))
            .or_else(|| {
                descendants
                    .iter()
                    .copied()
                    .find(|id| self.element(*id).is_ok_and(|el| el.tag == "h3"))
            })?;
        Some(self.text_content(heading))
    }

    /// Rendered redacted-term element whose original term is `term`
    pub fn find_redacted_term(&self, term: &str) -> Option<NodeId> {
        self.find_by_role(Role::RedactedTerm).into_iter().find(|id| {
            self.element(*id)
                .is_ok_and(|el| el.attr(ORIGINAL_TERM_ATTR) == Some(term))
        })
    }

    /// Set a select's value from its options: the `selected` one, else the first
    pub fn sync_select_value(&mut self, select: NodeId) -> Result<()> {
        if self.element(select)?.tag != "select" {
            return Ok(());
        }
        let options: Vec<NodeId> = self
            .descendants(select)
            .into_iter()
            .filter(|id| self.element(*id).is_ok_and(|el| el.tag == "option"))
            .collect();
        let chosen = options
            .iter()
            .copied()
            .find(|id| self.element(*id).is_ok_and(|el| el.attrs.contains_key("selected")))
            .or_else(|| options.first().copied());

        let value = match chosen {
            Some(option) => match self.element(option)?.attr("value") {
                Some(v) => v.to_string(),
                None => self.text_content(option).trim().to_string(),
            },
            None => String::new(),
        };
        self.set_value(select, &value)
    }

    /// Form data set of `form`, in document order, as a browser submits it.
    ///
    /// Only named, enabled controls contribute. Button-type and file inputs
    /// are left out, as are unchecked checkboxes and radios.
    pub fn form_data(&self, form: NodeId) -> RedactionForm {
        self.descendants(form)
            .into_iter()
            .filter_map(|id| {
                let el = self.element(id).ok()?;
                if !el.is_form_control() || el.attrs.contains_key("disabled") {
                    return None;
                }
                match el.input_type().as_deref() {
                    Some(kind) if is_button_type(kind) || kind == "file" => return None,
                    Some("checkbox" | "radio") if !el.checked => return None,
                    _ => {}
                }
                let name = el.name()?.to_string();
                Some((name, el.value.clone().unwrap_or_default()))
            })
            .collect()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}
