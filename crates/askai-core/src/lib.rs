//! Core of the askai launcher.
//!
//! A case-insensitive registry of AI chat services, launch URL construction,
//! and a [`Launcher`] that turns a prompt plus a chosen service into a request
//! to open a new, isolated browsing context. Host concerns (browser, UI,
//! diagnostics) sit behind the traits in [`ports`].

#![deny(unused_crate_dependencies)]

pub mod config;
pub mod domain;
pub mod errors;
pub mod ports;
pub mod registry;
pub mod services;

pub use config::{
    AppConfig, ButtonSize, ConfigError, DEFAULT_BUTTON_TEXT, PresentationMode, Theme,
    WidgetConfig, WidgetConfigUpdate, validate_config,
};
pub use domain::{PromptSource, Selection, ServiceDefinition, ServiceDefinitionError, ServiceKey};
pub use errors::{CoreError, LaunchError, LaunchWarning, UnknownServiceError};
pub use ports::{
    BrowserOpener, ChosenService, DiagnosticSink, MountHost, MountPoint, MountTarget,
    NavigationError, NavigationRequest, NoopDiagnostics, PresentationRequest, Presenter,
    PresenterError, PresenterResponse, ServiceChoice, TracingDiagnostics,
};
pub use registry::{DEFAULT_SERVICES, ServiceRegistry, build_launch_url, encode_prompt};
pub use services::{AbortReason, DispatchOutcome, LaunchOptions, Launcher, Widget, WidgetState};
