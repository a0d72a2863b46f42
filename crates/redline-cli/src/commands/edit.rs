use std::path::Path;
use std::rc::Rc;

use anyhow::{Context, Result, bail};
use redline_config::Config;
use redline_controller::{Controller, DispatchOutcome, InlineEditOutcome};
use redline_core::Error;

use crate::host::TerminalHost;

pub async fn handle(
    page_path: &Path,
    config: &Config,
    term: &str,
    action: Option<String>,
) -> Result<()> {
    let host = Rc::new(TerminalHost::new(action));
    let controller = super::ready_controller(page_path, config, host.clone())?;

    edit(&controller, term).await?;
    tracing::debug!(reload = host.reload_requested(), "Edit finished");
    Ok(())
}

/// Click the redacted span for `term` and map the outcome to a result
async fn edit(controller: &Controller, term: &str) -> Result<()> {
    let target = controller
        .page()
        .find_redacted_term(term)
        .with_context(|| format!("No redacted term '{}' on the page", term))?;

    match controller.click(target).await? {
        DispatchOutcome::InlineEdit(InlineEditOutcome::Applied { term, action }) => {
            tracing::debug!(%term, %action, "Update applied");
            Ok(())
        }
        DispatchOutcome::InlineEdit(InlineEditOutcome::Rejected { term }) => {
            Err(Error::UpdateRejected(term).into())
        }
        DispatchOutcome::InlineEdit(InlineEditOutcome::Failed { term }) => {
            bail!("Could not reach the server to update '{}'", term)
        }
        DispatchOutcome::InlineEdit(InlineEditOutcome::Cancelled) => {
            println!("No action given; nothing changed.");
            Ok(())
        }
        other => bail!("Unexpected outcome: {:?}", other),
    }
}
