//! Services of the environment hosting the controller

use async_trait::async_trait;

/// What a browser window gives the page: dialogs and reload.
///
/// Everything runs on one thread, so implementations need not be `Send`.
#[async_trait(?Send)]
pub trait Host {
    /// Blocking notification to the user
    fn alert(&self, message: &str);

    /// Ask the user for a line of text; `None` when dismissed.
    ///
    /// Other event handling may run while this is pending.
    async fn prompt(&self, message: &str) -> Option<String>;

    /// Drop all page state and load the page again from the server
    fn reload(&self);
}
