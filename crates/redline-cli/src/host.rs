//! Terminal stand-in for the browser window

use std::cell::{Cell, RefCell};

use async_trait::async_trait;
use redline_controller::Host;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Prints alerts and answers prompts from a preset answer or stdin
pub struct TerminalHost {
    answer: RefCell<Option<String>>,
    reload_requested: Cell<bool>,
}

impl TerminalHost {
    pub fn new(answer: Option<String>) -> Self {
        Self {
            answer: RefCell::new(answer),
            reload_requested: Cell::new(false),
        }
    }

    pub fn reload_requested(&self) -> bool {
        self.reload_requested.get()
    }
}

#[async_trait(?Send)]
impl Host for TerminalHost {
    fn alert(&self, message: &str) {
        println!("{}", message);
    }

    async fn prompt(&self, message: &str) -> Option<String> {
        if let Some(answer) = self.answer.borrow_mut().take() {
            println!("{} {}", message, answer);
            return Some(answer);
        }

        let mut stdout = tokio::io::stdout();
        if let Err(e) = stdout.write_all(format!("{} ", message).as_bytes()).await {
            tracing::warn!("Failed to write prompt: {}", e);
        }
        let _ = stdout.flush().await;

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        match lines.next_line().await {
            Ok(Some(line)) => Some(line.trim_end_matches('\r').to_string()),
            Ok(None) => None,
            Err(e) => {
                tracing::warn!("Failed to read answer: {}", e);
                None
            }
        }
    }

    fn reload(&self) {
        self.reload_requested.set(true);
        println!("Page changed on the server; fetch it again to see the update.");
    }
}
