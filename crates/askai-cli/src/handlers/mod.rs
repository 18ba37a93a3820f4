//! Command handlers.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Collect CLI-specific input (prompt words, stdin)
//!   2. Call the core launcher or registry
//!   3. Format output for the terminal
//!
//! Handlers should NOT build URLs or filter services themselves.

pub mod config;
pub mod direct;
pub mod list;
pub mod open;
pub mod url;

use askai_core::{AbortReason, DispatchOutcome};

use crate::bootstrap::CliContext;

/// Tell the user what a dispatch did.
///
/// Warnings for aborted dispatches were already reported by the launcher's
/// diagnostic sink. In dry-run mode the URL itself is the output.
pub(crate) fn report_outcome(ctx: &CliContext, outcome: &DispatchOutcome) {
    match outcome {
        DispatchOutcome::Opened { key, url } => {
            if !ctx.dry_run {
                println!("Opened {key}: {url}");
            }
        }
        DispatchOutcome::Aborted(AbortReason::Cancelled) => eprintln!("Cancelled."),
        DispatchOutcome::Aborted(_) => {}
    }
}
