//! Service domain types.
//!
//! A service is one destination AI assistant that can receive a prompt
//! through a query parameter on its web entry point.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use url::Url;

// ─────────────────────────────────────────────────────────────────────────────
// Service Key
// ─────────────────────────────────────────────────────────────────────────────

/// Case-insensitive registry key for a service.
///
/// Keys are normalized to lower case on construction, so `"ChatGPT"`,
/// `"chatgpt"` and `"CHATGPT"` all address the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct ServiceKey(String);

impl ServiceKey {
    /// Normalize a raw key.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().to_lowercase())
    }

    /// The normalized key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ServiceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ServiceKey {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for ServiceKey {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<ServiceKey> for String {
    fn from(key: ServiceKey) -> Self {
        key.0
    }
}

impl AsRef<str> for ServiceKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Service Definition
// ─────────────────────────────────────────────────────────────────────────────

/// Errors raised when a service definition is constructed from raw parts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceDefinitionError {
    #[error("Service label cannot be empty")]
    EmptyLabel,

    #[error("Query parameter name cannot be empty")]
    EmptyParamName,

    #[error("Base URL '{url}' is not a valid absolute URL: {reason}")]
    InvalidBaseUrl { url: String, reason: String },
}

/// Launch definition of one destination service.
///
/// The base URL is kept exactly as supplied so launch URLs always begin
/// with it; it is only parsed to check that it is absolute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawServiceDefinition")]
pub struct ServiceDefinition {
    label: String,
    base_url: String,
    param_name: String,
}

impl ServiceDefinition {
    /// Create a validated definition.
    pub fn new(
        label: impl Into<String>,
        base_url: impl Into<String>,
        param_name: impl Into<String>,
    ) -> Result<Self, ServiceDefinitionError> {
        let label = label.into();
        let base_url = base_url.into();
        let param_name = param_name.into();

        if label.trim().is_empty() {
            return Err(ServiceDefinitionError::EmptyLabel);
        }
        if param_name.is_empty() {
            return Err(ServiceDefinitionError::EmptyParamName);
        }
        validate_base_url(&base_url)?;

        Ok(Self {
            label,
            base_url,
            param_name,
        })
    }

    /// Human-readable display name.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Absolute URL the browser navigates to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Name of the query parameter that receives the prompt.
    pub fn param_name(&self) -> &str {
        &self.param_name
    }
}

fn validate_base_url(base_url: &str) -> Result<(), ServiceDefinitionError> {
    let invalid = |reason: String| ServiceDefinitionError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason,
    };

    let parsed = Url::parse(base_url).map_err(|e| invalid(e.to_string()))?;
    if parsed.cannot_be_a_base() {
        return Err(invalid("URL cannot carry a path or query".to_string()));
    }
    Ok(())
}

/// Wire shape of a definition before validation.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawServiceDefinition {
    label: String,
    base_url: String,
    param_name: String,
}

impl TryFrom<RawServiceDefinition> for ServiceDefinition {
    type Error = ServiceDefinitionError;

    fn try_from(raw: RawServiceDefinition) -> Result<Self, Self::Error> {
        Self::new(raw.label, raw.base_url, raw.param_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_lowercased() {
        assert_eq!(ServiceKey::new("ChatGPT").as_str(), "chatgpt");
        assert_eq!(ServiceKey::new("CHATGPT"), ServiceKey::from("chatgpt"));
    }

    #[test]
    fn test_key_accepts_any_string() {
        assert_eq!(ServiceKey::new("").as_str(), "");
        assert_eq!(ServiceKey::new("  Mixed Case ").as_str(), "  mixed case ");
    }

    #[test]
    fn test_definition_valid() {
        let def = ServiceDefinition::new("Claude", "https://claude.ai/new", "q").unwrap();
        assert_eq!(def.label(), "Claude");
        assert_eq!(def.base_url(), "https://claude.ai/new");
        assert_eq!(def.param_name(), "q");
    }

    #[test]
    fn test_definition_keeps_base_url_verbatim() {
        let def = ServiceDefinition::new("Example", "https://EXAMPLE.com/App", "q").unwrap();
        assert_eq!(def.base_url(), "https://EXAMPLE.com/App");
    }

    #[test]
    fn test_definition_rejects_relative_url() {
        let result = ServiceDefinition::new("Example", "/new", "q");
        assert!(matches!(
            result,
            Err(ServiceDefinitionError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_definition_rejects_cannot_be_a_base() {
        let result = ServiceDefinition::new("Mail", "mailto:someone@example.com", "q");
        assert!(matches!(
            result,
            Err(ServiceDefinitionError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn test_definition_rejects_empty_label() {
        assert_eq!(
            ServiceDefinition::new("   ", "https://example.com", "q"),
            Err(ServiceDefinitionError::EmptyLabel)
        );
    }

    #[test]
    fn test_definition_rejects_empty_param() {
        assert_eq!(
            ServiceDefinition::new("Example", "https://example.com", ""),
            Err(ServiceDefinitionError::EmptyParamName)
        );
    }

    #[test]
    fn test_definition_deserialize_validates() {
        let ok: ServiceDefinition = serde_json::from_str(
            r#"{"label":"Mistral","baseUrl":"https://chat.mistral.ai/chat","paramName":"q"}"#,
        )
        .unwrap();
        assert_eq!(ok.base_url(), "https://chat.mistral.ai/chat");

        let bad = serde_json::from_str::<ServiceDefinition>(
            r#"{"label":"Broken","baseUrl":"not a url","paramName":"q"}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_definition_serializes_camel_case() {
        let def = ServiceDefinition::new("Claude", "https://claude.ai/new", "q").unwrap();
        let json = serde_json::to_value(&def).unwrap();
        assert_eq!(json["baseUrl"], "https://claude.ai/new");
        assert_eq!(json["paramName"], "q");
    }
}
