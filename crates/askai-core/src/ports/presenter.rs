//! Presenter port - one interface for every presentation mode.
//!
//! A presenter offers the available services, obtains the user's selection
//! (or a cancellation) and, in modes that allow it, an edited prompt. The
//! launcher then dispatches, so every mode shares identical dispatch
//! semantics regardless of how the user chose.

use thiserror::Error;

use crate::config::PresentationMode;
use crate::domain::{PromptSource, ServiceKey};

/// One service offered to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceChoice {
    pub key: ServiceKey,
    pub label: String,
}

/// Everything a presenter needs to draw one interaction.
#[derive(Debug)]
pub struct PresentationRequest<'a> {
    /// How the choices should be presented.
    pub mode: PresentationMode,
    /// Offered services, in offer order. Never empty.
    pub choices: &'a [ServiceChoice],
    /// Caption for the trigger control. Cosmetic.
    pub button_text: &'a str,
    /// The widget's prompt source. Presenters may resolve it to pre-fill an
    /// editable field; the launcher resolves it again at dispatch time.
    pub prompt: &'a PromptSource,
}

/// A service picked by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChosenService {
    pub key: ServiceKey,
    /// Prompt text typed or edited in the presenter. `None` means "use the
    /// widget's prompt source".
    pub edited_prompt: Option<String>,
}

impl ChosenService {
    pub const fn new(key: ServiceKey) -> Self {
        Self {
            key,
            edited_prompt: None,
        }
    }

    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.edited_prompt = Some(prompt.into());
        self
    }
}

/// Outcome of one presentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PresenterResponse {
    Chosen(ChosenService),
    Cancelled,
}

/// Errors raised while interacting with the user.
#[derive(Debug, Error)]
pub enum PresenterError {
    #[error("Input/output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Input closed before a selection was made")]
    InputClosed,
}

/// Presentation strategy shared by button, dropdown, button-row and modal.
pub trait Presenter {
    /// Offer `request.choices` and return the user's decision.
    fn present(
        &mut self,
        request: &PresentationRequest<'_>,
    ) -> Result<PresenterResponse, PresenterError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chosen_service_builder() {
        let chosen = ChosenService::new(ServiceKey::new("Claude")).with_prompt("hi");
        assert_eq!(chosen.key.as_str(), "claude");
        assert_eq!(chosen.edited_prompt.as_deref(), Some("hi"));
    }

    #[test]
    fn test_presenter_error_from_io() {
        let err: PresenterError =
            std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed").into();
        assert!(err.to_string().contains("pipe closed"));
    }
}
