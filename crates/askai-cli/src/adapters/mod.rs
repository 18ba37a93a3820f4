//! Host adapters implementing the core ports for a terminal session.

pub mod browser;
pub mod diagnostics;
pub mod terminal;

pub use browser::{PrintBrowser, SystemBrowser};
pub use diagnostics::TerminalDiagnostics;
pub use terminal::{TERMINAL_TARGET, TerminalHost, TerminalPresenter, match_choice};
