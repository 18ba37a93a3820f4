//! URL command handler.

use anyhow::Result;
use askai_core::LaunchWarning;

use crate::bootstrap::CliContext;
use crate::utils::prompt_from_args;

/// Print the launch URL for `service` without opening anything.
///
/// An empty prompt is reported and nothing is printed.
pub fn execute(ctx: &CliContext, service: &str, words: &[String], stdin: bool) -> Result<()> {
    let prompt = prompt_from_args(words, stdin)?;
    if let Some(url) = launch_url(ctx, service, &prompt)? {
        println!("{url}");
    }
    Ok(())
}

/// Build the launch URL for `prompt`, or `None` after reporting an empty
/// prompt.
pub fn launch_url(ctx: &CliContext, service: &str, prompt: &str) -> Result<Option<String>> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        ctx.launcher().report(&LaunchWarning::EmptyPrompt);
        return Ok(None);
    }
    Ok(Some(ctx.registry().build_url(service, prompt)?))
}
