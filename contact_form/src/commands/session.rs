use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Args;
use contact_form_config::Config;
use contact_form_core_contracts::{
    renderer::ContactFormRenderer, ContactFormService, ContactFormSubmitError,
};
use tracing::{info, warn};

use crate::{
    environment::{self, ContactForm},
    events::{FormEvent, HELP},
    render::{OutputFormat, TerminalRenderer},
};

#[derive(Debug, Args)]
pub struct SessionCommand {
    /// Print every state change as a JSON object instead of text
    #[arg(long)]
    json: bool,
}

impl SessionCommand {
    pub fn invoke(self, config: Config) -> anyhow::Result<()> {
        let mut form = environment::mount(
            &config,
            TerminalRenderer::new(io::stdout(), self.format()),
        );
        let summary = run(&mut form, io::stdin().lock(), &mut io::stderr())?;
        info!(
            events = summary.events,
            submissions = summary.submissions,
            "Session ended"
        );
        Ok(())
    }

    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionSummary {
    pub events: usize,
    pub submissions: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Changed,
    Submitted,
    Rejected,
    Ignored,
    Quit,
}

/// Feeds events read from `input` into `form` until the input ends or a `quit` event
/// is read. Malformed lines are reported on `feedback` and skipped.
pub fn run<Renderer: ContactFormRenderer>(
    form: &mut ContactForm<Renderer>,
    input: impl BufRead,
    feedback: &mut impl Write,
) -> anyhow::Result<SessionSummary> {
    let mut summary = SessionSummary::default();

    for line in input.lines() {
        let line = line.context("Failed to read event")?;
        let event = match FormEvent::parse_line(&line) {
            None => continue,
            Some(Ok(event)) => event,
            Some(Err(err)) => {
                warn!("Skipping malformed event: {err}");
                writeln!(feedback, "{err}")?;
                continue;
            }
        };
        summary.events += 1;

        match event {
            FormEvent::ShowRequested => {
                let state = form.state().clone();
                form.renderer_mut().render(&state);
            }
            FormEvent::HelpRequested => writeln!(feedback, "{HELP}")?,
            event => match apply(form, event) {
                Outcome::Submitted => summary.submissions += 1,
                Outcome::Quit => break,
                Outcome::Changed | Outcome::Rejected | Outcome::Ignored => {}
            },
        }
    }

    Ok(summary)
}

/// Applies an event that acts on the form itself.
pub fn apply(form: &mut impl ContactFormService, event: FormEvent) -> Outcome {
    match event {
        FormEvent::InputChanged { field, value } => {
            form.set_field(field, value);
            Outcome::Changed
        }
        FormEvent::InputCleared { field } => {
            form.set_field(field, String::new());
            Outcome::Changed
        }
        FormEvent::SubmitRequested => match form.submit() {
            Ok(_) => Outcome::Submitted,
            Err(ContactFormSubmitError::Invalid(errors)) => {
                info!(invalid_fields = errors.len(), "Submission rejected");
                Outcome::Rejected
            }
        },
        FormEvent::ShowRequested | FormEvent::HelpRequested => Outcome::Ignored,
        FormEvent::Quit => Outcome::Quit,
    }
}
