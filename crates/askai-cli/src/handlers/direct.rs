//! Direct command handler.
//!
//! Opens the prompt in one service with no selection step.

use anyhow::Result;
use askai_core::PromptSource;

use crate::bootstrap::CliContext;
use crate::handlers::report_outcome;
use crate::utils::prompt_from_args;

/// Execute the direct command.
///
/// # Errors
///
/// Fails with an unknown-service error if `service` is not registered, and
/// with a navigation error if the browser cannot be launched. An empty
/// prompt is reported, not returned.
pub fn execute(ctx: &CliContext, service: &str, words: &[String], stdin: bool) -> Result<()> {
    let prompt = PromptSource::Literal(prompt_from_args(words, stdin)?);
    let outcome = ctx.launcher().open_direct(service, &prompt)?;
    report_outcome(ctx, &outcome);
    Ok(())
}
