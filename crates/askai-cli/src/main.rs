//! CLI entry point - the composition root.
//!
//! Parses arguments, bootstraps the `CliContext` and routes each command to
//! its handler. Errors are mapped to exit codes through `CliError`.

use std::process;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use askai_cli::handlers::open::OpenArgs;
use askai_cli::{Cli, CliConfig, CliError, Commands, ConfigCommand, bootstrap, handlers};

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = CliConfig::from_cli(&cli);
    let Some(command) = cli.command else {
        // No command provided - show help
        Cli::command().print_help()?;
        return Ok(());
    };

    let ctx = bootstrap(config)?;

    match command {
        Commands::List => handlers::list::execute(&ctx),
        Commands::Url {
            service,
            stdin,
            prompt,
        } => handlers::url::execute(&ctx, &service, &prompt, stdin),
        Commands::Open {
            services,
            mode,
            prompt,
        } => handlers::open::execute(
            &ctx,
            &OpenArgs {
                services,
                mode,
                prompt,
            },
        ),
        Commands::Direct {
            service,
            stdin,
            prompt,
        } => handlers::direct::execute(&ctx, &service, &prompt, stdin),
        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(&ctx),
            ConfigCommand::Path => handlers::config::path(&ctx),
        },
    }
}

fn main() {
    // Load .env first so ASKAI_CONFIG can come from it
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(cli) {
        eprintln!("Error: {err:#}");
        process::exit(CliError::from_anyhow(&err).exit_code());
    }
}
