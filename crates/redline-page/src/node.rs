use std::collections::BTreeMap;
use std::fmt;

use crate::Role;
use crate::role::Scope;

/// Handle to a node in a [`crate::Page`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone)]
pub(crate) enum NodeKind {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone)]
pub(crate) struct Slot {
    pub kind: NodeKind,
    pub parent: Option<NodeId>,
    pub children: Vec<NodeId>,
}

#[derive(Debug, Clone)]
pub struct Element {
    pub tag: String,
    pub attrs: BTreeMap<String, String>,
    pub classes: Vec<String>,
    pub role: Option<Role>,
    /// Current value of form controls (`input`, `select`, `textarea`)
    pub value: Option<String>,
    /// Checkedness of checkbox and radio inputs
    pub checked: bool,
    pub visible: bool,
    /// Markup assigned wholesale, replacing the children
    pub markup: Option<String>,
}

impl Element {
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    pub fn dom_id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn name(&self) -> Option<&str> {
        self.attr("name")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn is_form_control(&self) -> bool {
        matches!(self.tag.as_str(), "input" | "select" | "textarea")
    }

    /// Lower-cased `type` of an `input` (`text` when absent); `None` for other tags
    pub fn input_type(&self) -> Option<String> {
        input_type(&self.tag, &self.attrs)
    }
}

pub(crate) fn input_type(tag: &str, attrs: &BTreeMap<String, String>) -> Option<String> {
    (tag == "input").then(|| {
        attrs
            .get("type")
            .map(|t| t.trim().to_ascii_lowercase())
            .unwrap_or_else(|| "text".to_string())
    })
}

/// Input types that act as buttons and never carry form data
pub(crate) fn is_button_type(input_type: &str) -> bool {
    matches!(input_type, "submit" | "button" | "reset" | "image")
}

fn is_checkable(input_type: Option<&str>) -> bool {
    matches!(input_type, Some("checkbox" | "radio"))
}

/// Description of an element about to be appended to a page
#[derive(Debug, Clone)]
pub struct ElementBuilder {
    tag: String,
    attrs: BTreeMap<String, String>,
    role: Option<Role>,
    value: Option<String>,
    visible: Option<bool>,
}

impl ElementBuilder {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into().to_ascii_lowercase(),
            attrs: BTreeMap::new(),
            role: None,
            value: None,
            visible: None,
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    pub fn name(self, name: impl Into<String>) -> Self {
        self.attr("name", name)
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        let joined = match self.attrs.get("class") {
            Some(existing) if !existing.is_empty() => format!("{} {}", existing, class),
            _ => class,
        };
        self.attrs.insert("class".to_string(), joined);
        self
    }

    /// Set the role explicitly instead of inferring it
    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.visible = Some(false);
        self
    }

    pub(crate) fn build(self, scope: Scope) -> Element {
        let classes: Vec<String> = self
            .attrs
            .get("class")
            .map(|c| c.split_whitespace().map(String::from).collect())
            .unwrap_or_default();

        let role = self
            .role
            .or_else(|| Role::infer(&self.tag, &self.attrs, &classes, scope));

        let visible = self
            .visible
            .unwrap_or_else(|| !style_hides(self.attrs.get("style").map(String::as_str)));

        let kind = input_type(&self.tag, &self.attrs);
        let checkable = is_checkable(kind.as_deref());
        let value = match self.value {
            Some(v) => Some(v),
            None if matches!(self.tag.as_str(), "input" | "select" | "textarea") => {
                let default = if checkable { "on" } else { "" };
                Some(
                    self.attrs
                        .get("value")
                        .cloned()
                        .unwrap_or_else(|| default.to_string()),
                )
            }
            None => None,
        };
        let checked = checkable && self.attrs.contains_key("checked");

        Element {
            tag: self.tag,
            attrs: self.attrs,
            classes,
            role,
            value,
            checked,
            visible,
            markup: None,
        }
    }
}

/// True when an inline style declares `display: none`
fn style_hides(style: Option<&str>) -> bool {
    let Some(style) = style else {
        return false;
    };
    style.split(';').any(|decl| {
        let mut parts = decl.splitn(2, ':');
        let prop = parts.next().unwrap_or_default().trim();
        let value = parts.next().unwrap_or_default().trim();
        prop.eq_ignore_ascii_case("display") && value.eq_ignore_ascii_case("none")
    })
}
