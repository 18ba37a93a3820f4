//! Top-level command definitions.

use askai_core::PresentationMode;
use clap::Subcommand;

use crate::config_commands::ConfigCommand;

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Commands {
    /// List registered services in registration order
    List,

    /// Print the launch URL for a service without opening it
    Url {
        /// Service key (case-insensitive), e.g. `claude`
        service: String,
        /// Read the prompt from stdin instead of arguments
        #[arg(long)]
        stdin: bool,
        /// Prompt text; words are joined with single spaces
        prompt: Vec<String>,
    },

    /// Pick a service interactively and open the prompt in the browser
    Open {
        /// Only offer these services (repeatable, order is kept)
        #[arg(short = 's', long = "service")]
        services: Vec<String>,
        /// How services are offered: button, dropdown, button-row or modal
        #[arg(short = 'm', long)]
        mode: Option<PresentationMode>,
        /// Prompt text; words are joined with single spaces
        prompt: Vec<String>,
    },

    /// Open the prompt in one service without any selection step
    Direct {
        /// Service key (case-insensitive), e.g. `chatgpt`
        service: String,
        /// Read the prompt from stdin instead of arguments
        #[arg(long)]
        stdin: bool,
        /// Prompt text; words are joined with single spaces
        prompt: Vec<String>,
    },

    /// Inspect the effective configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}
