//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where the CLI wires concrete adapters into
//! the core:
//! - Service registry (built-in services plus configured overrides)
//! - Browser opener (system browser, or stdout for `--dry-run`)
//! - Diagnostic sink (terminal notices, or tracing with `--verbose`)
//!
//! Command handlers receive the composed `CliContext`.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use askai_core::{
    AppConfig, BrowserOpener, DiagnosticSink, Launcher, ServiceRegistry, TracingDiagnostics,
};
use tracing::debug;

use crate::adapters::{PrintBrowser, SystemBrowser, TerminalDiagnostics};
use crate::parser::Cli;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Config file to load. `None` uses built-in defaults.
    pub config_path: Option<PathBuf>,
    /// Print URLs instead of opening a browser.
    pub dry_run: bool,
    /// Log warnings through tracing instead of terminal notices.
    pub verbose: bool,
}

impl CliConfig {
    /// Build the bootstrap config from parsed global flags.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            config_path: cli.config.clone(),
            dry_run: cli.dry_run,
            verbose: cli.verbose,
        }
    }
}

/// Fully composed application context for CLI commands.
pub struct CliContext {
    /// Effective configuration (file values or defaults).
    pub config: AppConfig,
    /// Where `config` came from. `None` means built-in defaults.
    pub config_source: Option<PathBuf>,
    /// Launcher over the shared registry.
    pub launcher: Launcher,
    /// True when URLs are printed instead of opened.
    pub dry_run: bool,
}

impl CliContext {
    /// Compose a context from already-built parts.
    ///
    /// The registry starts with the built-in services and then applies
    /// `config.registry` in file order.
    pub fn compose(
        config: AppConfig,
        config_source: Option<PathBuf>,
        browser: Arc<dyn BrowserOpener>,
        diagnostics: Arc<dyn DiagnosticSink>,
        dry_run: bool,
    ) -> Self {
        let registry = Arc::new(ServiceRegistry::with_defaults());
        config.apply_registry(&registry);
        debug!(services = registry.len(), "Registry ready");

        Self {
            launcher: Launcher::new(registry, browser, diagnostics),
            config,
            config_source,
            dry_run,
        }
    }

    /// Access the launcher.
    pub const fn launcher(&self) -> &Launcher {
        &self.launcher
    }

    /// Access the shared service registry.
    pub fn registry(&self) -> &ServiceRegistry {
        self.launcher.registry()
    }
}

/// Load the config file, or defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display())),
        None => Ok(AppConfig::default()),
    }
}

/// Bootstrap the CLI application.
///
/// Loads configuration, then picks the browser and diagnostic adapters
/// from the global flags.
pub fn bootstrap(config: CliConfig) -> Result<CliContext> {
    let app_config = load_config(config.config_path.as_deref())?;

    let browser: Arc<dyn BrowserOpener> = if config.dry_run {
        Arc::new(PrintBrowser::stdout())
    } else {
        Arc::new(SystemBrowser::new())
    };
    let diagnostics: Arc<dyn DiagnosticSink> = if config.verbose {
        Arc::new(TracingDiagnostics::new())
    } else {
        Arc::new(TerminalDiagnostics::new())
    };

    Ok(CliContext::compose(
        app_config,
        config.config_path,
        browser,
        diagnostics,
        config.dry_run,
    ))
}
