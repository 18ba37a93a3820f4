//! Config command handlers.

use anyhow::{Context, Result};

use crate::bootstrap::CliContext;

/// Print the effective configuration as pretty JSON.
///
/// Configured registry entries are shown as loaded; built-in services are
/// listed by `askai list`.
pub fn show(ctx: &CliContext) -> Result<()> {
    let json =
        serde_json::to_string_pretty(&ctx.config).context("Failed to serialize configuration")?;
    println!("{json}");
    Ok(())
}

/// Print where the configuration came from.
pub fn path(ctx: &CliContext) -> Result<()> {
    match &ctx.config_source {
        Some(path) => println!("{}", path.display()),
        None => println!("(built-in defaults; set --config or ASKAI_CONFIG)"),
    }
    Ok(())
}
