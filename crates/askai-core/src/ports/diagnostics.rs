//! Diagnostic channel for non-fatal launch conditions.
//!
//! Empty prompts, empty service filters and missing mount targets are normal
//! outcomes. They are reported here instead of being returned as errors so
//! the caller stays usable for the next interaction.

use tracing::warn;

use crate::errors::LaunchWarning;

/// Trait for reporting non-fatal conditions.
///
/// # Implementations
///
/// - `TracingDiagnostics` - logs each warning at `warn` level (default)
/// - `NoopDiagnostics` - discards everything
/// - Host-specific sinks (e.g. a terminal notice in the CLI)
pub trait DiagnosticSink: Send + Sync {
    /// Report one warning. Must not panic or block.
    fn report(&self, warning: &LaunchWarning);
}

/// Logs warnings through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl TracingDiagnostics {
    pub const fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for TracingDiagnostics {
    fn report(&self, warning: &LaunchWarning) {
        warn!(code = warning.code(), "{warning}");
    }
}

/// Discards all warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl NoopDiagnostics {
    pub const fn new() -> Self {
        Self
    }
}

impl DiagnosticSink for NoopDiagnostics {
    fn report(&self, _warning: &LaunchWarning) {}
}
