//! Browser port - the host's "open URL in a new browsing context" primitive.
//!
//! Opening is fire-and-forget: the launcher hands over a request and never
//! waits on the destination page. Only failure to hand off is reported.

use thiserror::Error;

/// Errors raised when the host cannot hand a URL to a new browsing context.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// No browser or opener is available in this environment.
    #[error("No browser available: {0}")]
    Unavailable(String),

    /// The host tried to open the URL and failed.
    #[error("Failed to open {url}: {reason}")]
    Failed { url: String, reason: String },
}

/// A request to open `url` in a new, isolated browsing context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationRequest {
    /// Fully built launch URL.
    pub url: String,
    /// The new context must not get a reference back to the opener.
    pub no_opener: bool,
    /// The destination must not receive a referrer.
    pub no_referrer: bool,
}

impl NavigationRequest {
    /// Request a new context with opener and referrer isolation.
    pub fn new_context(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            no_opener: true,
            no_referrer: true,
        }
    }

    /// The isolation flags rendered as a `window.open` features string.
    ///
    /// Used for logging; hosts that launch a separate browser process get
    /// the isolation without passing it on.
    pub fn window_features(&self) -> String {
        let mut features = Vec::with_capacity(2);
        if self.no_opener {
            features.push("noopener");
        }
        if self.no_referrer {
            features.push("noreferrer");
        }
        features.join(",")
    }
}

/// Trait for opening a URL in a new browsing context.
///
/// # Implementations
///
/// - `SystemBrowser` (CLI) - hands the URL to the OS default browser
/// - `PrintBrowser` (CLI) - writes the URL to stdout for `--dry-run`
/// - `MockBrowserOpener` - generated by `mockall` for tests
#[cfg_attr(test, mockall::automock)]
pub trait BrowserOpener: Send + Sync {
    /// Hand `request` to the host. Must not block on the destination.
    fn open(&self, request: &NavigationRequest) -> Result<(), NavigationError>;
}
