//! Utility functions for CLI operations.

pub mod input;

pub use input::{collect_prompt, prompt_from_args, prompt_line, read_line};
