//! Application services that orchestrate domain types and ports.

mod launcher;
mod widget;

pub use launcher::{AbortReason, DispatchOutcome, LaunchOptions, Launcher};
pub use widget::{Widget, WidgetState};
