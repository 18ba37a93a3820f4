//! Terminal presenter and mount host.
//!
//! All four presentation modes are rendered as line-based prompts. Prompts
//! and menus go to `output` (stderr for the real terminal) so stdout stays
//! free for URLs and command output.

use std::io::{self, BufRead, StdinLock, Stderr, Write};

use askai_core::{
    ChosenService, MountHost, MountPoint, MountTarget, PresentationMode, PresentationRequest,
    Presenter, PresenterError, PresenterResponse, ServiceChoice, ServiceKey,
};

use crate::presentation::truncate_string;
use crate::utils::prompt_line;

/// Mount target id for the interactive terminal.
pub const TERMINAL_TARGET: &str = "terminal";

/// Resolves the `terminal` mount target.
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalHost;

impl MountHost for TerminalHost {
    fn locate(&self, target: &MountTarget) -> Option<MountPoint> {
        match target {
            MountTarget::Id(id) if id.eq_ignore_ascii_case(TERMINAL_TARGET) => {
                Some(MountPoint::new(TERMINAL_TARGET))
            }
            MountTarget::Id(_) => None,
            MountTarget::Handle(point) => Some(point.clone()),
        }
    }
}

/// Find the offered service matching `answer`.
///
/// Accepts a 1-based position, a service key or a label, case-insensitively.
pub fn match_choice<'a>(choices: &'a [ServiceChoice], answer: &str) -> Option<&'a ServiceChoice> {
    let answer = answer.trim();
    if let Ok(position) = answer.parse::<usize>() {
        return position.checked_sub(1).and_then(|i| choices.get(i));
    }
    let key = ServiceKey::new(answer);
    choices
        .iter()
        .find(|choice| choice.key == key || choice.label.eq_ignore_ascii_case(answer))
}

fn is_cancel(answer: &str) -> bool {
    matches!(answer.to_lowercase().as_str(), "q" | "quit" | "cancel")
}

/// Line-based presenter for an interactive terminal.
pub struct TerminalPresenter<R, W> {
    input: R,
    output: W,
}

impl TerminalPresenter<StdinLock<'static>, Stderr> {
    /// Read answers from stdin and draw on stderr.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stderr())
    }
}

impl<R: BufRead, W: Write> TerminalPresenter<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the presenter and return its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn ask(&mut self, prompt: &str) -> Result<String, PresenterError> {
        prompt_line(&mut self.input, &mut self.output, prompt)?.ok_or(PresenterError::InputClosed)
    }

    /// Ask until the answer names an offered service.
    ///
    /// An empty answer yields `default`; a cancel word yields `None`.
    fn pick<'a>(
        &mut self,
        choices: &'a [ServiceChoice],
        prompt: &str,
        default: Option<&'a ServiceChoice>,
    ) -> Result<Option<&'a ServiceChoice>, PresenterError> {
        loop {
            let answer = self.ask(prompt)?;
            if answer.is_empty() {
                return Ok(default);
            }
            if is_cancel(&answer) {
                return Ok(None);
            }
            if let Some(choice) = match_choice(choices, &answer) {
                return Ok(Some(choice));
            }
            writeln!(
                self.output,
                "Please choose 1-{} or a service name.",
                choices.len()
            )?;
        }
    }

    fn present_button(
        &mut self,
        request: &PresentationRequest<'_>,
    ) -> Result<PresenterResponse, PresenterError> {
        let Some(first) = request.choices.first() else {
            return Ok(PresenterResponse::Cancelled);
        };
        writeln!(self.output, "[{}] -> {}", request.button_text, first.label)?;
        let answer = self.ask(&format!("Press Enter to ask {} (q to cancel)", first.label))?;
        if is_cancel(&answer) {
            return Ok(PresenterResponse::Cancelled);
        }
        Ok(PresenterResponse::Chosen(ChosenService::new(first.key.clone())))
    }

    fn present_dropdown(
        &mut self,
        request: &PresentationRequest<'_>,
    ) -> Result<PresenterResponse, PresenterError> {
        writeln!(self.output, "{}", request.button_text)?;
        self.write_menu(request.choices)?;
        let prompt = format!("Select a service [1-{}] (Enter to cancel)", request.choices.len());
        Ok(self
            .pick(request.choices, &prompt, None)?
            .map_or(PresenterResponse::Cancelled, |choice| {
                PresenterResponse::Chosen(ChosenService::new(choice.key.clone()))
            }))
    }

    fn present_button_row(
        &mut self,
        request: &PresentationRequest<'_>,
    ) -> Result<PresenterResponse, PresenterError> {
        let row: Vec<String> = request
            .choices
            .iter()
            .enumerate()
            .map(|(i, choice)| format!("[{} {}]", i + 1, choice.label))
            .collect();
        writeln!(self.output, "{}: {}", request.button_text, row.join(" "))?;
        Ok(self
            .pick(request.choices, "Press a service (Enter to cancel)", None)?
            .map_or(PresenterResponse::Cancelled, |choice| {
                PresenterResponse::Chosen(ChosenService::new(choice.key.clone()))
            }))
    }

    fn present_modal(
        &mut self,
        request: &PresentationRequest<'_>,
    ) -> Result<PresenterResponse, PresenterError> {
        writeln!(self.output, "== {} ==", request.button_text)?;

        let prefill = request.prompt.resolve();
        let prompt_label = if prefill.trim().is_empty() {
            "Prompt".to_string()
        } else {
            format!("Prompt [{}]", truncate_string(prefill.trim(), 60))
        };
        let typed = self.ask(&prompt_label)?;
        if is_cancel(&typed) {
            return Ok(PresenterResponse::Cancelled);
        }
        let edited = if typed.is_empty() { prefill } else { typed };

        self.write_menu(request.choices)?;
        let Some(first) = request.choices.first() else {
            return Ok(PresenterResponse::Cancelled);
        };
        let service_prompt = format!("Service [1-{}] (Enter for {})", request.choices.len(), first.label);
        let Some(choice) = self.pick(request.choices, &service_prompt, Some(first))? else {
            return Ok(PresenterResponse::Cancelled);
        };

        let confirm = self.ask(&format!("Send to {}? (Y/n)", choice.label))?;
        if matches!(confirm.to_lowercase().as_str(), "n" | "no") || is_cancel(&confirm) {
            return Ok(PresenterResponse::Cancelled);
        }
        Ok(PresenterResponse::Chosen(
            ChosenService::new(choice.key.clone()).with_prompt(edited),
        ))
    }

    fn write_menu(&mut self, choices: &[ServiceChoice]) -> io::Result<()> {
        for (i, choice) in choices.iter().enumerate() {
            writeln!(self.output, "  {}) {} ({})", i + 1, choice.label, choice.key)?;
        }
        Ok(())
    }
}

impl<R: BufRead, W: Write> Presenter for TerminalPresenter<R, W> {
    fn present(
        &mut self,
        request: &PresentationRequest<'_>,
    ) -> Result<PresenterResponse, PresenterError> {
        match request.mode {
            PresentationMode::Button => self.present_button(request),
            PresentationMode::Dropdown => self.present_dropdown(request),
            PresentationMode::ButtonRow => self.present_button_row(request),
            PresentationMode::Modal => self.present_modal(request),
        }
    }
}
