//! Shared CLI presentation utilities.
//!
//! Format-only helpers for consistent terminal output across commands.

pub mod tables;

pub use tables::{print_separator, truncate_string};
