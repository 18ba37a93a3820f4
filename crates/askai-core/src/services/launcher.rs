//! Launcher - resolves a prompt, builds the launch URL and asks the host to
//! open it.
//!
//! Every dispatch runs start to finish without yielding:
//! resolve prompt → reject empty → build URL → request navigation.

use std::sync::Arc;

use tracing::{debug, info};

use crate::config::{DEFAULT_BUTTON_TEXT, PresentationMode};
use crate::domain::{PromptSource, Selection, ServiceKey};
use crate::errors::{LaunchError, LaunchWarning, UnknownServiceError};
use crate::ports::{
    BrowserOpener, ChosenService, DiagnosticSink, NavigationRequest, PresentationRequest,
    Presenter, PresenterResponse, ServiceChoice,
};
use crate::registry::ServiceRegistry;

/// Options for [`Launcher::open`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchOptions {
    /// Keys to offer. `None` offers every registered service.
    pub services: Option<Vec<String>>,
    /// Presentation strategy.
    pub mode: PresentationMode,
    /// Caption handed to the presenter.
    pub button_text: String,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            services: None,
            mode: PresentationMode::default(),
            button_text: DEFAULT_BUTTON_TEXT.to_string(),
        }
    }
}

/// Why a dispatch ended without navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    /// The prompt trimmed to nothing.
    EmptyPrompt,
    /// No usable services were left after filtering.
    NoServicesConfigured,
    /// The user dismissed the presenter.
    Cancelled,
}

/// Result of one dispatch attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Navigation was requested.
    Opened { key: ServiceKey, url: String },
    /// Nothing was opened.
    Aborted(AbortReason),
}

impl DispatchOutcome {
    pub const fn is_opened(&self) -> bool {
        matches!(self, Self::Opened { .. })
    }
}

/// Orchestrates registry lookups, diagnostics and the browser port.
pub struct Launcher {
    registry: Arc<ServiceRegistry>,
    browser: Arc<dyn BrowserOpener>,
    diagnostics: Arc<dyn DiagnosticSink>,
}

impl Launcher {
    /// Create a launcher over an explicit registry.
    pub fn new(
        registry: Arc<ServiceRegistry>,
        browser: Arc<dyn BrowserOpener>,
        diagnostics: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self {
            registry,
            browser,
            diagnostics,
        }
    }

    /// The registry this launcher dispatches against.
    pub fn registry(&self) -> &Arc<ServiceRegistry> {
        &self.registry
    }

    /// Report a non-fatal condition.
    pub fn report(&self, warning: &LaunchWarning) {
        self.diagnostics.report(warning);
    }

    /// Services to offer for an optional key filter.
    ///
    /// Unknown keys are dropped silently. If nothing usable is left, a
    /// `NoServicesConfigured` warning is reported and `None` is returned.
    pub fn offered_services(&self, filter: Option<&[String]>) -> Option<Vec<ServiceChoice>> {
        let choices: Vec<ServiceChoice> = self
            .registry
            .filter_keys(filter)
            .into_iter()
            .filter_map(|key| {
                // A concurrent registry change can only add or replace keys,
                // but stay tolerant of a missing one anyway.
                let definition = self.registry.resolve(&key).ok()?;
                Some(ServiceChoice {
                    label: definition.label().to_string(),
                    key,
                })
            })
            .collect();

        if choices.is_empty() {
            self.report(&LaunchWarning::NoServicesConfigured {
                requested: filter.map(<[String]>::to_vec).unwrap_or_default(),
            });
            return None;
        }
        Some(choices)
    }

    /// Resolve `prompt` now and dispatch it to `key`.
    ///
    /// An empty prompt is reported and aborts without touching the registry
    /// or the browser.
    pub fn dispatch(
        &self,
        key: &ServiceKey,
        prompt: &PromptSource,
    ) -> Result<DispatchOutcome, LaunchError> {
        let Some(selection) = Selection::resolve(key.clone(), prompt) else {
            self.report(&LaunchWarning::EmptyPrompt);
            return Ok(DispatchOutcome::Aborted(AbortReason::EmptyPrompt));
        };
        self.launch(selection)
    }

    /// Dispatch a presenter's choice, preferring its edited prompt.
    pub fn dispatch_choice(
        &self,
        choice: ChosenService,
        prompt: &PromptSource,
    ) -> Result<DispatchOutcome, LaunchError> {
        match choice.edited_prompt {
            Some(text) => self.dispatch(&choice.key, &PromptSource::Literal(text)),
            None => self.dispatch(&choice.key, prompt),
        }
    }

    /// Build the URL for a resolved selection and request navigation.
    fn launch(&self, selection: Selection) -> Result<DispatchOutcome, LaunchError> {
        let Selection { key, prompt } = selection;
        let url = self.registry.build_url(&key, &prompt)?;
        let request = NavigationRequest::new_context(url);
        self.browser.open(&request)?;
        info!(service = %key, url = %request.url, "Opened service");
        Ok(DispatchOutcome::Opened {
            key,
            url: request.url,
        })
    }

    /// Offer the services through `presenter` and dispatch the choice.
    ///
    /// Empty prompts and empty service lists are reported, not returned as
    /// errors. A pick outside the offered services fails with
    /// `UnknownService` and navigates nowhere.
    pub fn open(
        &self,
        prompt: &PromptSource,
        options: &LaunchOptions,
        presenter: &mut dyn Presenter,
    ) -> Result<DispatchOutcome, LaunchError> {
        let Some(choices) = self.offered_services(options.services.as_deref()) else {
            return Ok(DispatchOutcome::Aborted(AbortReason::NoServicesConfigured));
        };

        let request = PresentationRequest {
            mode: options.mode,
            choices: &choices,
            button_text: &options.button_text,
            prompt,
        };
        match presenter.present(&request)? {
            PresenterResponse::Cancelled => {
                debug!("Presenter cancelled");
                Ok(DispatchOutcome::Aborted(AbortReason::Cancelled))
            }
            PresenterResponse::Chosen(choice) => {
                ensure_offered(&choices, &choice.key)?;
                self.dispatch_choice(choice, prompt)
            }
        }
    }

    /// Dispatch straight to `key`, bypassing any selection UI.
    ///
    /// Same contract as [`open`](Self::open): an empty prompt is reported and
    /// aborts; an unknown key fails with `UnknownService` and navigates
    /// nowhere.
    pub fn open_direct(
        &self,
        key: impl AsRef<str>,
        prompt: &PromptSource,
    ) -> Result<DispatchOutcome, LaunchError> {
        self.dispatch(&ServiceKey::new(key), prompt)
    }
}

/// Reject a key that is not among the offered `choices`.
pub(crate) fn ensure_offered(
    choices: &[ServiceChoice],
    key: &ServiceKey,
) -> Result<(), UnknownServiceError> {
    if choices.iter().any(|choice| &choice.key == key) {
        Ok(())
    } else {
        Err(UnknownServiceError::new(key.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ServiceDefinition;
    use crate::ports::{MockBrowserOpener, NavigationError, PresenterError};
    use std::sync::Mutex;

    #[derive(Default)]
    struct RecordingDiagnostics {
        warnings: Mutex<Vec<LaunchWarning>>,
    }

    impl RecordingDiagnostics {
        fn warnings(&self) -> Vec<LaunchWarning> {
            self.warnings.lock().unwrap().clone()
        }
    }

    impl DiagnosticSink for RecordingDiagnostics {
        fn report(&self, warning: &LaunchWarning) {
            self.warnings.lock().unwrap().push(warning.clone());
        }
    }

    struct ScriptedPresenter {
        response: Option<PresenterResponse>,
        seen: Vec<ServiceKey>,
    }

    impl ScriptedPresenter {
        fn answering(response: PresenterResponse) -> Self {
            Self {
                response: Some(response),
                seen: Vec::new(),
            }
        }
    }

    impl Presenter for ScriptedPresenter {
        fn present(
            &mut self,
            request: &PresentationRequest<'_>,
        ) -> Result<PresenterResponse, PresenterError> {
            self.seen = request.choices.iter().map(|c| c.key.clone()).collect();
            self.response.take().ok_or(PresenterError::InputClosed)
        }
    }

    fn launcher_with(
        browser: MockBrowserOpener,
    ) -> (Launcher, Arc<RecordingDiagnostics>) {
        let diagnostics = Arc::new(RecordingDiagnostics::default());
        let launcher = Launcher::new(
            Arc::new(ServiceRegistry::with_defaults()),
            Arc::new(browser),
            diagnostics.clone(),
        );
        (launcher, diagnostics)
    }

    fn never_opens() -> MockBrowserOpener {
        let mut browser = MockBrowserOpener::new();
        browser.expect_open().never();
        browser
    }

    #[test]
    fn test_open_direct_opens_isolated_context() {
        let mut browser = MockBrowserOpener::new();
        browser
            .expect_open()
            .withf(|req| {
                req.url == "https://claude.ai/new?q=hello%20world" && req.no_opener && req.no_referrer
            })
            .times(1)
            .returning(|_| Ok(()));
        let (launcher, diagnostics) = launcher_with(browser);

        let outcome = launcher
            .open_direct("Claude", &"  hello world  ".into())
            .unwrap();

        assert_eq!(
            outcome,
            DispatchOutcome::Opened {
                key: ServiceKey::new("claude"),
                url: "https://claude.ai/new?q=hello%20world".to_string(),
            }
        );
        assert!(diagnostics.warnings().is_empty());
    }

    #[test]
    fn test_open_direct_unknown_service_never_navigates() {
        let (launcher, _) = launcher_with(never_opens());

        let err = launcher.open_direct("unknown", &"hi".into()).unwrap_err();
        assert!(matches!(err, LaunchError::UnknownService(e) if e.key.as_str() == "unknown"));
    }

    #[test]
    fn test_empty_prompt_aborts_and_warns() {
        let (launcher, diagnostics) = launcher_with(never_opens());

        let outcome = launcher.open_direct("claude", &"   \n".into()).unwrap();
        assert_eq!(outcome, DispatchOutcome::Aborted(AbortReason::EmptyPrompt));
        assert_eq!(diagnostics.warnings(), vec![LaunchWarning::EmptyPrompt]);
    }

    #[test]
    fn test_computed_prompt_resolved_at_dispatch() {
        let mut browser = MockBrowserOpener::new();
        browser
            .expect_open()
            .withf(|req| req.url.ends_with("?q=page%202"))
            .times(1)
            .returning(|_| Ok(()));
        let (launcher, _) = launcher_with(browser);

        let page = Arc::new(Mutex::new("page 1".to_string()));
        let state = Arc::clone(&page);
        let prompt = PromptSource::computed(move || state.lock().unwrap().clone());
        *page.lock().unwrap() = "page 2".to_string();

        assert!(launcher.open_direct("gemini", &prompt).unwrap().is_opened());
    }

    #[test]
    fn test_navigation_failure_propagates() {
        let mut browser = MockBrowserOpener::new();
        browser
            .expect_open()
            .returning(|_| Err(NavigationError::Unavailable("headless".to_string())));
        let (launcher, _) = launcher_with(browser);

        let err = launcher.open_direct("claude", &"hi".into()).unwrap_err();
        assert!(matches!(err, LaunchError::Navigation(_)));
    }

    #[test]
    fn test_open_offers_filtered_services_in_request_order() {
        let mut browser = MockBrowserOpener::new();
        browser.expect_open().times(1).returning(|_| Ok(()));
        let (launcher, _) = launcher_with(browser);
        let mut presenter = ScriptedPresenter::answering(PresenterResponse::Chosen(
            ChosenService::new(ServiceKey::new("perplexity")),
        ));
        let options = LaunchOptions {
            services: Some(vec!["Perplexity".into(), "bogus".into(), "chatgpt".into()]),
            ..Default::default()
        };

        let outcome = launcher
            .open(&"why is the sky blue".into(), &options, &mut presenter)
            .unwrap();

        assert_eq!(
            presenter.seen,
            vec![ServiceKey::new("perplexity"), ServiceKey::new("chatgpt")]
        );
        assert_eq!(
            outcome,
            DispatchOutcome::Opened {
                key: ServiceKey::new("perplexity"),
                url: "https://www.perplexity.ai/search?q=why%20is%20the%20sky%20blue"
                    .to_string(),
            }
        );
    }

    #[test]
    fn test_open_with_only_unknown_services_presents_nothing() {
        let (launcher, diagnostics) = launcher_with(never_opens());
        let mut presenter = ScriptedPresenter::answering(PresenterResponse::Cancelled);
        let options = LaunchOptions {
            services: Some(vec!["foo".into(), "bar".into()]),
            ..Default::default()
        };

        let outcome = launcher.open(&"hi".into(), &options, &mut presenter).unwrap();

        assert_eq!(
            outcome,
            DispatchOutcome::Aborted(AbortReason::NoServicesConfigured)
        );
        assert!(presenter.seen.is_empty());
        assert!(presenter.response.is_some());
        assert_eq!(
            diagnostics.warnings(),
            vec![LaunchWarning::NoServicesConfigured {
                requested: vec!["foo".to_string(), "bar".to_string()]
            }]
        );
    }

    #[test]
    fn test_open_rejects_choice_outside_filter() {
        let (launcher, _) = launcher_with(never_opens());
        let mut presenter = ScriptedPresenter::answering(PresenterResponse::Chosen(
            ChosenService::new(ServiceKey::new("gemini")),
        ));
        let options = LaunchOptions {
            services: Some(vec!["claude".into()]),
            ..Default::default()
        };

        let err = launcher
            .open(&"hi".into(), &options, &mut presenter)
            .unwrap_err();

        assert_eq!(presenter.seen, vec![ServiceKey::new("claude")]);
        assert!(matches!(err, LaunchError::UnknownService(e) if e.key.as_str() == "gemini"));
    }

    #[test]
    fn test_open_cancelled() {
        let (launcher, diagnostics) = launcher_with(never_opens());
        let mut presenter = ScriptedPresenter::answering(PresenterResponse::Cancelled);

        let outcome = launcher
            .open(&"hi".into(), &LaunchOptions::default(), &mut presenter)
            .unwrap();

        assert_eq!(outcome, DispatchOutcome::Aborted(AbortReason::Cancelled));
        assert!(diagnostics.warnings().is_empty());
    }

    #[test]
    fn test_edited_prompt_overrides_source() {
        let mut browser = MockBrowserOpener::new();
        browser
            .expect_open()
            .withf(|req| req.url == "https://gemini.google.com/app?q=edited")
            .times(1)
            .returning(|_| Ok(()));
        let (launcher, _) = launcher_with(browser);
        let mut presenter = ScriptedPresenter::answering(PresenterResponse::Chosen(
            ChosenService::new(ServiceKey::new("gemini")).with_prompt(" edited "),
        ));

        let outcome = launcher
            .open(&"original".into(), &LaunchOptions::default(), &mut presenter)
            .unwrap();
        assert!(outcome.is_opened());
    }

    #[test]
    fn test_edited_empty_prompt_aborts() {
        let (launcher, diagnostics) = launcher_with(never_opens());
        let mut presenter = ScriptedPresenter::answering(PresenterResponse::Chosen(
            ChosenService::new(ServiceKey::new("gemini")).with_prompt(""),
        ));

        let outcome = launcher
            .open(&"original".into(), &LaunchOptions::default(), &mut presenter)
            .unwrap();
        assert_eq!(outcome, DispatchOutcome::Aborted(AbortReason::EmptyPrompt));
        assert_eq!(diagnostics.warnings(), vec![LaunchWarning::EmptyPrompt]);
    }

    #[test]
    fn test_presenter_error_propagates() {
        let (launcher, _) = launcher_with(never_opens());
        let mut presenter = ScriptedPresenter {
            response: None,
            seen: Vec::new(),
        };

        let err = launcher
            .open(&"hi".into(), &LaunchOptions::default(), &mut presenter)
            .unwrap_err();
        assert!(matches!(err, LaunchError::Presentation(PresenterError::InputClosed)));
    }

    #[test]
    fn test_launcher_usable_after_failed_dispatch() {
        let mut browser = MockBrowserOpener::new();
        browser.expect_open().times(1).returning(|_| Ok(()));
        let (launcher, _) = launcher_with(browser);

        assert!(launcher.open_direct("nope", &"hi".into()).is_err());
        assert!(launcher.open_direct("claude", &"".into()).is_ok());
        assert!(launcher.open_direct("claude", &"hi".into()).unwrap().is_opened());
    }

    #[test]
    fn test_registry_changes_visible_to_next_dispatch() {
        let mut browser = MockBrowserOpener::new();
        browser
            .expect_open()
            .withf(|req| req.url == "https://chat.mistral.ai/chat?q=bonjour")
            .times(1)
            .returning(|_| Ok(()));
        let (launcher, _) = launcher_with(browser);

        launcher.registry().register(
            "Mistral",
            ServiceDefinition::new("Le Chat", "https://chat.mistral.ai/chat", "q").unwrap(),
        );
        assert!(launcher.open_direct("mistral", &"bonjour".into()).unwrap().is_opened());
    }
}
