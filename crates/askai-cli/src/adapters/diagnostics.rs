//! Terminal diagnostic sink.

use askai_core::{DiagnosticSink, LaunchWarning};
use tracing::debug;

/// Prints each warning as a one-line notice on stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalDiagnostics;

impl TerminalDiagnostics {
    pub const fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for TerminalDiagnostics {
    fn report(&self, warning: &LaunchWarning) {
        debug!(code = warning.code(), "Reporting warning to terminal");
        eprintln!("{warning}");
    }
}
