pub mod config;
pub mod edit;
pub mod inspect;
pub mod preview;
pub mod search;

#[cfg(test)]
mod testing;

use std::path::Path;
use std::rc::Rc;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use redline_client::HttpBackend;
use redline_config::Config;
use redline_controller::Controller;
use redline_page::Page;

use crate::host::TerminalHost;

/// Load a saved review page
pub fn load_page(path: &Path) -> Result<Page> {
    let html = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read page {}", path.display()))?;
    Ok(Page::from_html(&html)?)
}

/// Controller for a saved page, talking to the configured server
pub fn ready_controller(path: &Path, config: &Config, host: Rc<TerminalHost>) -> Result<Controller> {
    let page = load_page(path)?;
    let backend = Arc::new(HttpBackend::new(config.server.clone())?);
    Ok(Controller::ready(page, backend, host, &config.editor)?)
}

/// Split a `KEY=VALUE` argument
pub fn split_pair<'a>(arg: &'a str, flag: &str) -> Result<(&'a str, &'a str)> {
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => bail!("Invalid --{} argument '{}': expected KEY=VALUE", flag, arg),
    }
}
