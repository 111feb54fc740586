use clap::Args;
use contact_form_config::Config;
use contact_form_core_contracts::{
    renderer::ContactFormRenderer, ContactFormService, ContactFormSubmitError,
};
use contact_form_models::{field::FormField, submission::Submission, values::FieldValues};

use crate::{
    environment,
    render::{OutputFormat, TerminalRenderer},
};

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[arg(long, default_value = "")]
    first_name: String,
    #[arg(long, default_value = "")]
    last_name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    message: String,
    /// Print every state change as a JSON object instead of text
    #[arg(long)]
    json: bool,
}

impl CheckCommand {
    pub fn invoke(self, config: Config) -> anyhow::Result<()> {
        let renderer = TerminalRenderer::new(std::io::stdout(), self.format());
        let values = FieldValues {
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            message: self.message,
        };

        check(&config, values, renderer).map(|_| ())
    }

    pub fn format(&self) -> OutputFormat {
        if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        }
    }
}

/// Mounts a form publishing to `renderer`, fills in `values` and submits it once.
pub fn check<Renderer: ContactFormRenderer>(
    config: &Config,
    values: FieldValues,
    renderer: Renderer,
) -> anyhow::Result<Submission> {
    let mut form = environment::mount(config, renderer);

    match fill_and_submit(&mut form, values) {
        Ok(submission) => Ok(submission),
        Err(ContactFormSubmitError::Invalid(errors)) => {
            anyhow::bail!("Validation failed for {} field(s)", errors.len())
        }
    }
}

/// Types every non-empty value into `form` and submits it.
pub fn fill_and_submit(
    form: &mut impl ContactFormService,
    values: FieldValues,
) -> Result<Submission, ContactFormSubmitError> {
    for field in FormField::ALL {
        let value = values.get(field);
        if !value.is_empty() {
            form.set_field(field, value.into());
        }
    }
    form.submit()
}
