//! Open command handler.
//!
//! Mounts a widget in the terminal and lets the user pick a service using the
//! configured presentation mode.

use anyhow::Result;
use askai_core::{
    DispatchOutcome, MountTarget, PresentationMode, Presenter, PromptSource, Widget,
    WidgetConfigUpdate,
};
use tracing::debug;

use crate::adapters::{TERMINAL_TARGET, TerminalHost, TerminalPresenter};
use crate::bootstrap::CliContext;
use crate::handlers::report_outcome;

/// Arguments for the open command.
#[derive(Debug, Clone, Default)]
pub struct OpenArgs {
    /// Service filter from `--service`; empty keeps the configured filter.
    pub services: Vec<String>,
    /// Mode override from `--mode`.
    pub mode: Option<PresentationMode>,
    /// Prompt words.
    pub prompt: Vec<String>,
}

impl OpenArgs {
    /// Command-line overrides as a config update.
    pub fn config_update(&self) -> WidgetConfigUpdate {
        WidgetConfigUpdate {
            mode: self.mode,
            services: (!self.services.is_empty()).then(|| Some(self.services.clone())),
            ..Default::default()
        }
    }
}

/// Execute the open command against the process terminal.
pub fn execute(ctx: &CliContext, args: &OpenArgs) -> Result<()> {
    let mut presenter = TerminalPresenter::stdio();
    if let Some(outcome) = run_with(ctx, args, &mut presenter)? {
        report_outcome(ctx, &outcome);
    }
    Ok(())
}

/// Mount and activate a widget with an explicit presenter.
///
/// Returns `None` when nothing could be mounted; the reason has already been
/// reported through the launcher's diagnostic sink.
pub fn run_with(
    ctx: &CliContext,
    args: &OpenArgs,
    presenter: &mut dyn Presenter,
) -> Result<Option<DispatchOutcome>> {
    let mut widget_config = ctx.config.widget.clone();
    widget_config.merge(&args.config_update());
    debug!(mode = %widget_config.mode, services = ?widget_config.services, "Opening widget");

    let prompt = PromptSource::Literal(args.prompt.join(" "));
    let Some(mut widget) = Widget::mount(
        &TerminalHost,
        &MountTarget::id(TERMINAL_TARGET),
        prompt,
        widget_config,
        ctx.launcher(),
    ) else {
        return Ok(None);
    };

    Ok(Some(widget.activate(ctx.launcher(), presenter)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_update_without_flags_changes_nothing() {
        let update = OpenArgs::default().config_update();
        assert!(update.mode.is_none());
        assert!(update.services.is_none());
    }

    #[test]
    fn test_config_update_with_flags() {
        let args = OpenArgs {
            services: vec!["claude".to_string()],
            mode: Some(PresentationMode::Dropdown),
            prompt: vec![],
        };
        let update = args.config_update();
        assert_eq!(update.mode, Some(PresentationMode::Dropdown));
        assert_eq!(update.services, Some(Some(vec!["claude".to_string()])));
    }
}
