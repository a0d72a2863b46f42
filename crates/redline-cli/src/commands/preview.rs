use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result, bail};
use redline_config::Config;
use redline_controller::commands::APPLY_TO_GROUP;
use redline_controller::{CommandArgs, Controller, DispatchOutcome, PreviewOutcome};
use redline_core::form::{
    action_field_name, additional_replacement_field, additional_term_field, custom_field_name,
};
use redline_core::markup::LINE_BREAK;
use redline_core::Action;
use redline_page::Role;

use super::split_pair;
use crate::host::TerminalHost;

pub async fn handle(
    page_path: &Path,
    config: &Config,
    sets: &[String],
    groups: &[String],
    adds: &[String],
) -> Result<()> {
    let host = Rc::new(TerminalHost::new(None));
    let controller = super::ready_controller(page_path, config, host)?;

    for arg in groups {
        apply_group(&controller, arg)?;
    }
    for arg in sets {
        set_term(&controller, arg).await?;
    }
    for arg in adds {
        add_term(&controller, arg).await?;
    }

    println!("{}", render_preview(&controller).await?);
    Ok(())
}

/// Press the preview button and read back the modal text
async fn render_preview(controller: &Controller) -> Result<String> {
    let trigger = controller
        .page()
        .first_by_role(Role::PreviewTrigger)
        .context("Page has no preview button")?;

    match controller.click(trigger).await? {
        DispatchOutcome::Preview(PreviewOutcome::Shown) => {
            let page = controller.page();
            let markup = page
                .first_by_role(Role::PreviewContent)
                .and_then(|content| page.markup(content))
                .unwrap_or_default();
            Ok(markup.replace(LINE_BREAK, "\n"))
        }
        DispatchOutcome::Preview(PreviewOutcome::Rejected(message)) => {
            bail!("Server rejected the preview: {}", message)
        }
        other => bail!("Preview failed ({:?}); see the log for details", other),
    }
}

/// `LABEL=ACTION` through the published group command
fn apply_group(controller: &Controller, arg: &str) -> Result<()> {
    let (label, action) = split_pair(arg, "group")?;
    let action: Action = action.parse()?;

    let args = CommandArgs::new()
        .param("group", label)
        .param("value", action.as_str());
    let changed = controller.invoke_command(APPLY_TO_GROUP, &args)?;
    if changed.is_empty() {
        tracing::warn!("No terms under group heading '{}'", label);
    }
    Ok(())
}

/// `TERM=ACTION` or `TERM=CUSTOM:VALUE`, as a change on the term's selector
async fn set_term(controller: &Controller, arg: &str) -> Result<()> {
    let (term, value) = split_pair(arg, "set")?;
    let (action, custom) = match value.split_once(':') {
        Some((action, custom)) => (action, Some(custom)),
        None => (value, None),
    };
    let action: Action = action.parse()?;
    if custom.is_some() && action != Action::Custom {
        bail!("Custom value given for '{}' but action is {}", term, action);
    }

    let selector = controller
        .page()
        .find_by_name(&action_field_name(term))
        .with_context(|| format!("No action selector for term '{}'", term))?;
    controller.change(selector, action.as_str()).await?;

    if let Some(custom) = custom {
        let input = controller
            .page()
            .find_by_name(&custom_field_name(term))
            .with_context(|| format!("No custom input for term '{}'", term))?;
        controller.change(input, custom).await?;
    }
    Ok(())
}

/// `TERM=REPLACEMENT` into a fresh additional-term slot
async fn add_term(controller: &Controller, arg: &str) -> Result<()> {
    let (term, replacement) = split_pair(arg, "add")?;

    let trigger = controller
        .page()
        .first_by_role(Role::AddTermTrigger)
        .context("Page has no add-term button")?;
    let slot = match controller.click(trigger).await? {
        DispatchOutcome::SlotAdded(Some(slot)) => slot,
        DispatchOutcome::SlotAdded(None) => bail!(
            "At most {} additional terms per page",
            controller.term_adder().max()
        ),
        other => bail!("Unexpected outcome adding a term: {:?}", other),
    };

    for (field, value) in [
        (additional_term_field(slot.get()), term),
        (additional_replacement_field(slot.get()), replacement),
    ] {
        let input = controller
            .page()
            .find_by_name(&field)
            .with_context(|| format!("Slot {} has no field {}", slot, field))?;
        controller.change(input, value).await?;
    }
    Ok(())
}
