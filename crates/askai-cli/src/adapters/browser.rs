//! Browser adapters for the CLI.

use std::io::{self, Write};
use std::sync::Mutex;

use askai_core::{BrowserOpener, NavigationError, NavigationRequest};
use tracing::debug;

/// Opens URLs with the operating system's default browser.
///
/// The browser is started as a separate process, so the new page never has
/// an opener or a referrer from this host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemBrowser;

impl SystemBrowser {
    pub const fn new() -> Self {
        Self
    }
}

impl BrowserOpener for SystemBrowser {
    fn open(&self, request: &NavigationRequest) -> Result<(), NavigationError> {
        debug!(url = %request.url, features = %request.window_features(), "Launching system browser");
        open::that(&request.url).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => NavigationError::Unavailable(e.to_string()),
            _ => NavigationError::Failed {
                url: request.url.clone(),
                reason: e.to_string(),
            },
        })
    }
}

/// Writes each URL on its own line instead of opening it (`--dry-run`).
#[derive(Debug)]
pub struct PrintBrowser<W> {
    output: Mutex<W>,
}

impl PrintBrowser<io::Stdout> {
    /// Print to stdout.
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> PrintBrowser<W> {
    pub const fn new(output: W) -> Self {
        Self {
            output: Mutex::new(output),
        }
    }

    /// Consume the browser and return what it wrote to.
    pub fn into_inner(self) -> W {
        self.output
            .into_inner()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl<W: Write + Send> BrowserOpener for PrintBrowser<W> {
    fn open(&self, request: &NavigationRequest) -> Result<(), NavigationError> {
        let mut output = self
            .output
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        writeln!(output, "{}", request.url)
            .and_then(|()| output.flush())
            .map_err(|e| NavigationError::Failed {
                url: request.url.clone(),
                reason: e.to_string(),
            })
    }
}
