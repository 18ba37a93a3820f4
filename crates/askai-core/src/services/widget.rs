//! Mounted launcher widget and its `Idle` / `Dispatching` state machine.

use tracing::debug;

use crate::config::WidgetConfig;
use crate::domain::{PromptSource, ServiceKey};
use crate::errors::{LaunchError, LaunchWarning};
use crate::ports::{
    ChosenService, MountHost, MountPoint, MountTarget, PresentationRequest, Presenter,
    PresenterResponse, ServiceChoice,
};
use crate::services::launcher::{AbortReason, DispatchOutcome, Launcher, ensure_offered};

/// Lifecycle of a mounted widget.
///
/// `Dispatching` only lasts for the duration of one synchronous dispatch, so
/// observers outside the widget always see `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WidgetState {
    #[default]
    Idle,
    Dispatching,
}

/// A launcher control mounted into the host UI.
#[derive(Debug)]
pub struct Widget {
    mount_point: MountPoint,
    choices: Vec<ServiceChoice>,
    prompt: PromptSource,
    config: WidgetConfig,
    state: WidgetState,
}

impl Widget {
    /// Mount a widget at `target`.
    ///
    /// Returns `None` after reporting a warning if the target cannot be
    /// located or no configured service is usable.
    pub fn mount(
        host: &dyn MountHost,
        target: &MountTarget,
        prompt: PromptSource,
        config: WidgetConfig,
        launcher: &Launcher,
    ) -> Option<Self> {
        let Some(mount_point) = host.locate(target) else {
            launcher.report(&LaunchWarning::MountTargetNotFound {
                target: target.to_string(),
            });
            return None;
        };

        let choices = launcher.offered_services(config.services.as_deref())?;
        debug!(
            mount = mount_point.id(),
            mode = %config.mode,
            services = choices.len(),
            "Mounted widget"
        );
        Some(Self {
            mount_point,
            choices,
            prompt,
            config,
            state: WidgetState::Idle,
        })
    }

    pub fn mount_point(&self) -> &MountPoint {
        &self.mount_point
    }

    /// Services offered by this widget, fixed at mount time.
    pub fn choices(&self) -> &[ServiceChoice] {
        &self.choices
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub const fn state(&self) -> WidgetState {
        self.state
    }

    /// Open the widget's presenter and dispatch whatever the user picks.
    ///
    /// Cancelling leaves the widget `Idle` without dispatching. A pick outside
    /// the offered services fails with `UnknownService`.
    pub fn activate(
        &mut self,
        launcher: &Launcher,
        presenter: &mut dyn Presenter,
    ) -> Result<DispatchOutcome, LaunchError> {
        let request = PresentationRequest {
            mode: self.config.mode,
            choices: &self.choices,
            button_text: &self.config.button_text,
            prompt: &self.prompt,
        };
        match presenter.present(&request)? {
            PresenterResponse::Cancelled => Ok(DispatchOutcome::Aborted(AbortReason::Cancelled)),
            PresenterResponse::Chosen(choice) => {
                ensure_offered(&self.choices, &choice.key)?;
                self.run_dispatch(launcher, choice)
            }
        }
    }

    /// Dispatch straight to one of the offered services, as a button-row
    /// click does.
    pub fn select(
        &mut self,
        launcher: &Launcher,
        key: impl AsRef<str>,
    ) -> Result<DispatchOutcome, LaunchError> {
        let key = ServiceKey::new(key);
        ensure_offered(&self.choices, &key)?;
        self.run_dispatch(launcher, ChosenService::new(key))
    }

    fn run_dispatch(
        &mut self,
        launcher: &Launcher,
        choice: ChosenService,
    ) -> Result<DispatchOutcome, LaunchError> {
        self.state = WidgetState::Dispatching;
        let outcome = launcher.dispatch_choice(choice, &self.prompt);
        self.state = WidgetState::Idle;
        outcome
    }
}
