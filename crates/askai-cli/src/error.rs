//! CLI-specific error types and mappings.
//!
//! Maps core errors to exit codes and user-facing messages.

use askai_core::{
    ConfigError, CoreError, LaunchError, NavigationError, PresenterError, UnknownServiceError,
};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Clone, Error)]
pub enum CliError {
    /// Core error without a more specific category.
    #[error("{0}")]
    Core(String),

    /// The requested service is not registered.
    #[error("{0}")]
    UnknownService(String),

    /// No browser could be launched.
    #[error("Browser unavailable: {0}")]
    BrowserUnavailable(String),

    /// IO error (closed stdin, broken pipe, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where a category fits:
    /// - 1: General error
    /// - 65: Unknown service (`EX_DATAERR`)
    /// - 69: Browser unavailable (`EX_UNAVAILABLE`)
    /// - 74: IO error (`EX_IOERR`)
    /// - 78: Configuration error (`EX_CONFIG`)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) => 1,
            Self::UnknownService(_) => 65,
            Self::BrowserUnavailable(_) => 69,
            Self::Io(_) => 74,
            Self::Config(_) => 78,
        }
    }

    /// Classify an `anyhow` error by the first known error in its chain.
    pub fn from_anyhow(err: &anyhow::Error) -> Self {
        for cause in err.chain() {
            if let Some(cli) = cause.downcast_ref::<Self>() {
                return cli.clone();
            }
            if let Some(core) = cause.downcast_ref::<CoreError>() {
                return Self::from_core_ref(core);
            }
            if let Some(launch) = cause.downcast_ref::<LaunchError>() {
                return Self::from_launch_ref(launch);
            }
            if let Some(config) = cause.downcast_ref::<ConfigError>() {
                return Self::Config(config.to_string());
            }
            if let Some(unknown) = cause.downcast_ref::<UnknownServiceError>() {
                return Self::UnknownService(unknown.to_string());
            }
            if let Some(io) = cause.downcast_ref::<std::io::Error>() {
                return Self::Io(io.to_string());
            }
        }
        Self::Core(format!("{err:#}"))
    }

    fn from_core_ref(err: &CoreError) -> Self {
        match err {
            CoreError::Launch(launch) => Self::from_launch_ref(launch),
            CoreError::Config(config) => Self::Config(config.to_string()),
        }
    }

    fn from_launch_ref(err: &LaunchError) -> Self {
        match err {
            LaunchError::UnknownService(e) => Self::UnknownService(e.to_string()),
            LaunchError::Navigation(NavigationError::Unavailable(reason)) => {
                Self::BrowserUnavailable(reason.clone())
            }
            LaunchError::Navigation(e @ NavigationError::Failed { .. }) => {
                Self::Core(e.to_string())
            }
            LaunchError::Presentation(PresenterError::Io(e)) => Self::Io(e.to_string()),
            LaunchError::Presentation(e @ PresenterError::InputClosed) => {
                Self::Io(e.to_string())
            }
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        Self::from_core_ref(&err)
    }
}

impl From<LaunchError> for CliError {
    fn from(err: LaunchError) -> Self {
        Self::from_launch_ref(&err)
    }
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}
