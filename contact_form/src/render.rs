use std::{fmt, io};

use contact_form_core_contracts::renderer::ContactFormRenderer;
use contact_form_models::{field::FormField, state::ContactFormState, submission::Submission};
use tracing::warn;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human readable form
    #[default]
    Text,
    /// One JSON object per state change
    Json,
}

/// Writes every published state to `W`, typically stdout.
#[derive(Debug)]
pub struct TerminalRenderer<W> {
    writer: W,
    format: OutputFormat,
}

impl<W: io::Write> TerminalRenderer<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn write_state(&mut self, state: &ContactFormState) -> anyhow::Result<()> {
        match self.format {
            OutputFormat::Text => {
                let mut out = String::new();
                write_text(&mut out, state)?;
                self.writer.write_all(out.as_bytes())?;
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.writer, state)?;
                self.writer.write_all(b"\n")?;
            }
        }
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: io::Write + 'static> ContactFormRenderer for TerminalRenderer<W> {
    fn render(&mut self, state: &ContactFormState) {
        if let Err(err) = self.write_state(state) {
            warn!("Failed to render contact form: {err:#}");
        }
    }
}

/// Formats the form as text: the inputs with their errors, followed by the last
/// submission if there is one.
pub fn write_text(out: &mut impl fmt::Write, state: &ContactFormState) -> fmt::Result {
    writeln!(out, "Contact Form")?;
    for (field, value) in state.values.iter() {
        let required = if field.is_validated() { "*" } else { "" };
        match (value.is_empty(), field.placeholder()) {
            (true, Some(placeholder)) => {
                writeln!(out, "  {}{required}: ({placeholder})", field.label())?
            }
            _ => writeln!(out, "  {}{required}: [{value}]", field.label())?,
        }
        if let Some(error) = state.errors.get(field) {
            writeln!(out, "    Error: {error}")?;
        }
    }

    if let Some(submission) = &state.submission {
        write_submission(out, submission)?;
    }

    Ok(())
}

fn write_submission(out: &mut impl fmt::Write, submission: &Submission) -> fmt::Result {
    writeln!(out, "You Submitted:")?;
    writeln!(
        out,
        "  {}: {}",
        FormField::FirstName.label(),
        submission.first_name()
    )?;
    writeln!(
        out,
        "  {}: {}",
        FormField::LastName.label(),
        submission.last_name()
    )?;
    writeln!(out, "  {}: {}", FormField::Email.label(), submission.email())?;
    if let Some(message) = submission.message() {
        writeln!(out, "  {}: {message}", FormField::Message.label())?;
    }
    Ok(())
}
