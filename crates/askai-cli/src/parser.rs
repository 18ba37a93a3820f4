//! Main CLI parser and top-level argument handling.

use std::path::PathBuf;

use clap::Parser;

use crate::commands::Commands;

/// Send a prompt to an AI chat service in your browser.
///
/// Global options apply to every subcommand.
#[derive(Parser)]
#[command(name = "askai")]
#[command(about = "Send a prompt to an AI chat service in your browser")]
#[command(version)]
pub struct Cli {
    /// JSON config file with widget settings and extra services
    #[arg(long = "config", global = true, env = "ASKAI_CONFIG")]
    pub config: Option<PathBuf>,

    /// Print launch URLs instead of opening a browser
    #[arg(long = "dry-run", global = true)]
    pub dry_run: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config_commands::ConfigCommand;
    use askai_core::PresentationMode;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_args() {
        let cli = Cli::parse_from([
            "askai",
            "list",
            "--dry-run",
            "--verbose",
            "--config",
            "/tmp/askai.json",
        ]);
        assert!(cli.dry_run);
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/askai.json")));
        assert!(matches!(cli.command, Some(Commands::List)));
    }

    #[test]
    fn test_url_collects_prompt_words() {
        let cli = Cli::parse_from(["askai", "url", "Claude", "hello", "world"]);
        match cli.command {
            Some(Commands::Url {
                service,
                stdin,
                prompt,
            }) => {
                assert_eq!(service, "Claude");
                assert!(!stdin);
                assert_eq!(prompt, vec!["hello", "world"]);
            }
            _ => panic!("expected url command"),
        }
    }

    #[test]
    fn test_open_repeated_services_and_mode() {
        let cli = Cli::parse_from([
            "askai", "open", "-s", "claude", "--service", "gemini", "--mode", "button_row",
            "why", "rust",
        ]);
        match cli.command {
            Some(Commands::Open {
                services,
                mode,
                prompt,
            }) => {
                assert_eq!(services, vec!["claude", "gemini"]);
                assert_eq!(mode, Some(PresentationMode::ButtonRow));
                assert_eq!(prompt, vec!["why", "rust"]);
            }
            _ => panic!("expected open command"),
        }
    }

    #[test]
    fn test_open_rejects_unknown_mode() {
        let result = Cli::try_parse_from(["askai", "open", "--mode", "carousel", "hi"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_direct_reads_stdin_flag() {
        let cli = Cli::parse_from(["askai", "direct", "perplexity", "--stdin"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Direct { ref service, stdin: true, ref prompt })
                if service == "perplexity" && prompt.is_empty()
        ));
    }

    #[test]
    fn test_config_subcommands() {
        let cli = Cli::parse_from(["askai", "config", "path"]);
        assert!(matches!(
            cli.command,
            Some(Commands::Config {
                command: ConfigCommand::Path
            })
        ));
    }
}
