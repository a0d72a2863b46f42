//! Named operations that page markup can reference.
//!
//! Server-rendered controls name a command with `data-command` and pass
//! arguments as further `data-*` attributes, e.g.
//! `<button data-command="apply-to-group" data-group="PERSON" data-source="group_PERSON">`.

use std::collections::BTreeMap;

use redline_page::role::COMMAND_ATTR;
use redline_page::{NodeId, Page};

use crate::group::apply_to_group;
use crate::toggle::toggle_custom_input;
use crate::{ControllerError, Result};

pub const APPLY_TO_GROUP: &str = "apply-to-group";
pub const TOGGLE_CUSTOM_INPUT: &str = "toggle-custom-input";

/// Arguments of one command invocation
#[derive(Debug, Clone, Default)]
pub struct CommandArgs {
    /// Element the command was invoked from
    pub target: Option<NodeId>,
    pub params: BTreeMap<String, String>,
}

impl CommandArgs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn target(mut self, target: NodeId) -> Self {
        self.target = Some(target);
        self
    }

    pub fn param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    /// Collect `data-*` attributes (except `data-command`) of a control
    pub fn from_element(page: &Page, id: NodeId) -> Result<Self> {
        let element = page.element(id)?;
        let params = element
            .attrs
            .iter()
            .filter(|(name, _)| name.as_str() != COMMAND_ATTR)
            .filter_map(|(name, value)| {
                name.strip_prefix("data-")
                    .map(|key| (key.to_string(), value.clone()))
            })
            .collect();
        Ok(Self {
            target: Some(id),
            params,
        })
    }

    fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Element named by the `source` param (a DOM id), else the target
    fn source_element(&self, page: &Page) -> Option<NodeId> {
        match self.get("source") {
            Some(dom_id) => page.find_by_dom_id(dom_id),
            None => self.target,
        }
    }
}

/// Handler of a registered command; returns the elements it changed
pub type CommandHandler = fn(&mut Page, &CommandArgs) -> Result<Vec<NodeId>>;

pub struct Command {
    pub name: &'static str,
    pub description: &'static str,
    handler: CommandHandler,
}

/// Commands published by the controller for page markup to invoke
pub struct CommandRegistry {
    commands: BTreeMap<&'static str, Command>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        let mut registry = Self {
            commands: BTreeMap::new(),
        };
        registry.register(
            APPLY_TO_GROUP,
            "Set every action selector under a group heading to one value",
            apply_to_group_command,
        );
        registry.register(
            TOGGLE_CUSTOM_INPUT,
            "Sync a selector's custom input with its current value",
            toggle_custom_input_command,
        );
        registry
    }

    pub fn register(
        &mut self,
        name: &'static str,
        description: &'static str,
        handler: CommandHandler,
    ) {
        self.commands.insert(
            name,
            Command {
                name,
                description,
                handler,
            },
        );
    }

    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.get(name)
    }

    pub fn list(&self) -> impl Iterator<Item = &Command> {
        self.commands.values()
    }

    pub fn invoke(&self, name: &str, page: &mut Page, args: &CommandArgs) -> Result<Vec<NodeId>> {
        let command = self
            .get(name)
            .ok_or_else(|| ControllerError::UnknownCommand(name.to_string()))?;
        tracing::debug!(command = name, params = ?args.params, "Invoking command");
        (command.handler)(page, args)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// `group` names the heading; the value comes from `value`, else from the
/// `source` element, else from the invoking control itself.
fn apply_to_group_command(page: &mut Page, args: &CommandArgs) -> Result<Vec<NodeId>> {
    let group = args.get("group").ok_or(ControllerError::MissingArgument {
        command: APPLY_TO_GROUP,
        argument: "group",
    })?;

    let value = match args.get("value") {
        Some(value) => value.to_string(),
        None => args
            .source_element(page)
            .and_then(|id| page.value(id))
            .map(String::from)
            .ok_or(ControllerError::MissingArgument {
                command: APPLY_TO_GROUP,
                argument: "value",
            })?,
    };

    Ok(apply_to_group(page, &value, group)?)
}

fn toggle_custom_input_command(page: &mut Page, args: &CommandArgs) -> Result<Vec<NodeId>> {
    let selector = args
        .source_element(page)
        .ok_or(ControllerError::MissingArgument {
            command: TOGGLE_CUSTOM_INPUT,
            argument: "source",
        })?;
    Ok(toggle_custom_input(page, selector)?.into_iter().collect())
}
