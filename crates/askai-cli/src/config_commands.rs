//! Configuration inspection subcommands.

use clap::Subcommand;

/// Configuration commands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as JSON
    Show,
    /// Print where the configuration was loaded from
    Path,
}
