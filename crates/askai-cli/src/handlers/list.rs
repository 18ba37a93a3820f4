//! List command handler.
//!
//! Displays the registered services in registration order.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::{print_separator, truncate_string};

/// Execute the list command.
pub fn execute(ctx: &CliContext) -> Result<()> {
    let entries = ctx.registry().entries();

    if entries.is_empty() {
        println!("No services registered.");
        return Ok(());
    }

    println!("{} service(s) registered:\n", entries.len());
    println!("{:<14} {:<16} {:<6} Base URL", "Key", "Label", "Param");
    print_separator(80);

    for (key, definition) in entries {
        println!(
            "{:<14} {:<16} {:<6} {}",
            truncate_string(key.as_str(), 13),
            truncate_string(definition.label(), 15),
            truncate_string(definition.param_name(), 5),
            definition.base_url()
        );
    }

    Ok(())
}
