//! Port definitions (trait abstractions) for the host environment.
//!
//! Ports define the interfaces that the core expects from whatever hosts the
//! launcher: a browser, a diagnostic channel, a UI to mount into and a
//! presenter to talk to the user. They contain no implementation details and
//! use only domain types.
//!
//! # Design Rules
//!
//! - No UI toolkit or OS types in any signature
//! - Opening a URL is fire-and-forget
//! - Non-fatal conditions go to `DiagnosticSink`, never to `Err`

pub mod browser;
pub mod diagnostics;
pub mod mount_host;
pub mod presenter;

pub use browser::{BrowserOpener, NavigationError, NavigationRequest};
#[cfg(test)]
pub use browser::MockBrowserOpener;
pub use diagnostics::{DiagnosticSink, NoopDiagnostics, TracingDiagnostics};
pub use mount_host::{MountHost, MountPoint, MountTarget};
pub use presenter::{
    ChosenService, PresentationRequest, Presenter, PresenterError, PresenterResponse,
    ServiceChoice,
};
