use std::path::Path;
use std::rc::Rc;

use anyhow::Result;
use redline_config::Config;
use redline_core::form::custom_field_name;
use redline_page::Role;

use crate::host::TerminalHost;

pub fn handle(page_path: &Path, config: &Config) -> Result<()> {
    let host = Rc::new(TerminalHost::new(None));
    let controller = super::ready_controller(page_path, config, host)?;
    let terms = controller.terms()?;

    if terms.is_empty() {
        println!("No terms found.");
    } else {
        println!("Terms ({}):", terms.len());
        for term in &terms {
            let group = term.group.as_deref().unwrap_or("-");
            let action = match term.action {
                Some(action) => action.to_string(),
                None => format!("{:?} (unknown action)", term.value),
            };
            match &term.custom_value {
                Some(value) => println!("  {} [{}] {} -> {:?}", term.key, group, action, value),
                None => println!("  {} [{}] {}", term.key, group, action),
            }

            let page = controller.page();
            if let Some(input) = page.find_by_name(&custom_field_name(&term.key)) {
                let state = if page.is_visible(input) { "shown" } else { "hidden" };
                println!("    Custom input: {}", state);
            }
        }
    }

    let page = controller.page();
    let redacted = page.find_by_role(Role::RedactedTerm);
    println!("\nRedacted spans: {}", redacted.len());

    let adder = controller.term_adder();
    println!(
        "Additional term slots: {} of {}",
        adder.count(),
        adder.max()
    );

    println!("\nCommands:");
    for command in controller.commands().list() {
        println!("  {:<20} {}", command.name, command.description);
    }

    Ok(())
}
