//! Widget and application configuration.
//!
//! The JSON shape mirrors what a host page would hand the widget: camelCase
//! keys, every field optional. Only `services` and `mode` change behavior;
//! the rest is cosmetic and passed through to presenters.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

use crate::domain::ServiceDefinition;
use crate::registry::ServiceRegistry;
use crate::services::LaunchOptions;

/// Caption of the trigger control when none is configured.
pub const DEFAULT_BUTTON_TEXT: &str = "Ask AI";

// ─────────────────────────────────────────────────────────────────────────────
// Option Enums
// ─────────────────────────────────────────────────────────────────────────────

/// How a widget offers its services.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PresentationMode {
    /// One action bound to the first offered service.
    Button,
    /// Pick one service from a list.
    Dropdown,
    /// One action per offered service.
    ButtonRow,
    /// Dialog with an editable prompt, a service selector, Send and Cancel.
    #[default]
    Modal,
}

impl PresentationMode {
    /// Every mode, in documentation order.
    pub const ALL: [Self; 4] = [Self::Button, Self::Dropdown, Self::ButtonRow, Self::Modal];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Dropdown => "dropdown",
            Self::ButtonRow => "button-row",
            Self::Modal => "modal",
        }
    }
}

impl fmt::Display for PresentationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PresentationMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == normalized)
            .ok_or_else(|| ConfigError::UnknownMode(s.to_string()))
    }
}

/// Color scheme hint for presenters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Size hint for the trigger control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonSize {
    Small,
    #[default]
    Medium,
    Large,
}

// ─────────────────────────────────────────────────────────────────────────────
// Widget Config
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration for one mounted widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WidgetConfig {
    /// Caption of the trigger control.
    pub button_text: String,
    /// Color scheme hint.
    pub theme: Theme,
    /// Size hint for the trigger control.
    pub size: ButtonSize,
    /// Presentation strategy.
    pub mode: PresentationMode,
    /// Keys to offer. `None` offers every registered service.
    pub services: Option<Vec<String>>,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            button_text: DEFAULT_BUTTON_TEXT.to_string(),
            theme: Theme::default(),
            size: ButtonSize::default(),
            mode: PresentationMode::default(),
            services: None,
        }
    }
}

impl WidgetConfig {
    /// The launch options this configuration implies.
    pub fn launch_options(&self) -> LaunchOptions {
        LaunchOptions {
            services: self.services.clone(),
            mode: self.mode,
            button_text: self.button_text.clone(),
        }
    }

    /// Merge an update into this config, only touching fields that are Some.
    pub fn merge(&mut self, update: &WidgetConfigUpdate) {
        if let Some(ref text) = update.button_text {
            self.button_text.clone_from(text);
        }
        if let Some(theme) = update.theme {
            self.theme = theme;
        }
        if let Some(size) = update.size {
            self.size = size;
        }
        if let Some(mode) = update.mode {
            self.mode = mode;
        }
        if let Some(ref services) = update.services {
            self.services.clone_from(services);
        }
    }
}

/// Partial widget config update (e.g. from command-line flags).
///
/// `services` is `Option<Option<_>>`:
/// - `None` = don't change
/// - `Some(None)` = offer every registered service
/// - `Some(Some(keys))` = offer only `keys`
#[derive(Debug, Clone, Default)]
pub struct WidgetConfigUpdate {
    pub button_text: Option<String>,
    pub theme: Option<Theme>,
    pub size: Option<ButtonSize>,
    pub mode: Option<PresentationMode>,
    pub services: Option<Option<Vec<String>>>,
}

// ─────────────────────────────────────────────────────────────────────────────
// App Config
// ─────────────────────────────────────────────────────────────────────────────

/// Full host configuration: the widget settings plus registry overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(flatten)]
    pub widget: WidgetConfig,

    /// Services to add or override, keyed case-insensitively, applied in
    /// file order after the built-in services.
    pub registry: IndexMap<String, ServiceDefinition>,
}

impl AppConfig {
    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        let config = Self::from_json(&content).map_err(|e| match e {
            ConfigError::Parse { reason, .. } => ConfigError::Parse {
                origin: path.display().to_string(),
                reason,
            },
            other => other,
        })?;
        debug!(path = %path.display(), services = config.registry.len(), "Loaded config");
        Ok(config)
    }

    /// Parse and validate a JSON config document.
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(content).map_err(|e| ConfigError::Parse {
            origin: "inline document".to_string(),
            reason: e.to_string(),
        })?;
        validate_config(&config)?;
        Ok(config)
    }

    /// Register every configured service, overriding built-ins on key clash.
    pub fn apply_registry(&self, registry: &ServiceRegistry) {
        for (key, definition) in &self.registry {
            registry.register(key, definition.clone());
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    #[error("Invalid config in {origin}: {reason}")]
    Parse { origin: String, reason: String },

    #[error("Button text cannot be empty")]
    EmptyButtonText,

    #[error("Unknown presentation mode '{0}' (expected button, dropdown, button-row or modal)")]
    UnknownMode(String),
}

/// Validate config values that serde cannot express.
pub fn validate_config(config: &AppConfig) -> Result<(), ConfigError> {
    if config.widget.button_text.trim().is_empty() {
        return Err(ConfigError::EmptyButtonText);
    }
    Ok(())
}
