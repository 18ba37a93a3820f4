//! Prompt sources and the selection they resolve into.

use std::fmt;

use super::service::ServiceKey;

/// Where a widget's prompt text comes from.
///
/// `Computed` sources are evaluated at dispatch time, not when the widget is
/// built, so the prompt can reflect host state at the moment of the click.
pub enum PromptSource {
    /// Fixed prompt text.
    Literal(String),
    /// Zero-argument producer called synchronously on each dispatch.
    Computed(Box<dyn Fn() -> String + Send + Sync>),
}

impl PromptSource {
    /// Wrap a closure as a computed source.
    pub fn computed<F>(producer: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        Self::Computed(Box::new(producer))
    }

    /// Produce the raw prompt text for this dispatch.
    pub fn resolve(&self) -> String {
        match self {
            Self::Literal(text) => text.clone(),
            Self::Computed(producer) => producer(),
        }
    }

    /// Resolve and trim, returning `None` when nothing is left.
    pub fn resolve_trimmed(&self) -> Option<String> {
        let raw = self.resolve();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

impl fmt::Debug for PromptSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(text) => f.debug_tuple("Literal").field(text).finish(),
            Self::Computed(_) => f.write_str("Computed(..)"),
        }
    }
}

impl Default for PromptSource {
    fn default() -> Self {
        Self::Literal(String::new())
    }
}

impl From<String> for PromptSource {
    fn from(text: String) -> Self {
        Self::Literal(text)
    }
}

impl From<&str> for PromptSource {
    fn from(text: &str) -> Self {
        Self::Literal(text.to_string())
    }
}

/// One resolved prompt paired with one service key.
///
/// Consumed by value when the launch URL is built, so it is used once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    /// Chosen service.
    pub key: ServiceKey,
    /// Trimmed, non-empty prompt text.
    pub prompt: String,
}

impl Selection {
    /// Pair a service with a prompt source, resolving the prompt now.
    ///
    /// Returns `None` if the prompt trims to empty.
    pub fn resolve(key: ServiceKey, source: &PromptSource) -> Option<Self> {
        source
            .resolve_trimmed()
            .map(|prompt| Self { key, prompt })
    }
}
