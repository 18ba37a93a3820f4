//! Error and warning types for registry lookups and launches.
//!
//! Fatal conditions are `Err` values. Expected, recoverable conditions
//! (`LaunchWarning`) are never returned as errors; they are reported through
//! a [`DiagnosticSink`](crate::ports::DiagnosticSink) and the call carries on.

use thiserror::Error;

use crate::config::ConfigError;
use crate::domain::ServiceKey;
use crate::ports::{NavigationError, PresenterError};

/// The requested key is not present in the registry.
///
/// Callers that build from a filtered key list never see this, so it points
/// at a programming or configuration defect and is propagated, not swallowed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown service '{key}'")]
pub struct UnknownServiceError {
    /// Normalized key that failed to resolve.
    pub key: ServiceKey,
}

impl UnknownServiceError {
    pub fn new(key: impl Into<ServiceKey>) -> Self {
        Self { key: key.into() }
    }
}

/// Non-fatal conditions reported through the diagnostic channel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LaunchWarning {
    /// The resolved prompt trimmed to nothing; the dispatch was aborted.
    #[error("Please enter a prompt.")]
    EmptyPrompt,

    /// Filtering left no usable services; nothing was mounted.
    #[error("No usable services configured (requested: {requested:?})")]
    NoServicesConfigured { requested: Vec<String> },

    /// The mount target does not resolve to anything in the host.
    #[error("Mount target '{target}' not found")]
    MountTargetNotFound { target: String },
}

impl LaunchWarning {
    /// Stable short code used in structured logs.
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyPrompt => "empty_prompt",
            Self::NoServicesConfigured { .. } => "no_services_configured",
            Self::MountTargetNotFound { .. } => "mount_target_not_found",
        }
    }
}

/// Errors returned by launcher operations.
#[derive(Debug, Error)]
pub enum LaunchError {
    /// The selected service is not registered.
    #[error(transparent)]
    UnknownService(#[from] UnknownServiceError),

    /// The host could not open a new browsing context.
    #[error(transparent)]
    Navigation(#[from] NavigationError),

    /// The presenter failed while interacting with the user.
    #[error("Presentation failed: {0}")]
    Presentation(#[from] PresenterError),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (CLI exit codes, etc.).
#[derive(Debug, Error)]
pub enum CoreError {
    /// A launch failed.
    #[error(transparent)]
    Launch(#[from] LaunchError),

    /// Configuration could not be loaded or applied.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl From<UnknownServiceError> for CoreError {
    fn from(err: UnknownServiceError) -> Self {
        Self::Launch(LaunchError::UnknownService(err))
    }
}
