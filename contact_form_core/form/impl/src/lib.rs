use std::collections::BTreeSet;

use contact_form_core_contracts::{
    renderer::ContactFormRenderer, validator::ContactFormValidator, ContactFormService,
    ContactFormSubmitError,
};
use contact_form_models::{
    field::FormField,
    state::{ContactFormState, LiveValidation},
    submission::Submission,
};
use tracing::{debug, info};

pub mod validator;

#[cfg(test)]
mod tests;

#[derive(Debug, Clone)]
pub struct ContactFormServiceImpl<Validator, Renderer> {
    validator: Validator,
    renderer: Renderer,
    config: ContactFormServiceConfig,
    state: ContactFormState,
    /// Fields edited since mount or the last successful submit.
    edited: BTreeSet<FormField>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactFormServiceConfig {
    pub live_validation: LiveValidation,
    pub clear_message_on_submit: bool,
}

impl Default for ContactFormServiceConfig {
    fn default() -> Self {
        Self {
            live_validation: LiveValidation::AllFields,
            clear_message_on_submit: true,
        }
    }
}

impl<Validator, Renderer> ContactFormServiceImpl<Validator, Renderer>
where
    Validator: ContactFormValidator,
    Renderer: ContactFormRenderer,
{
    /// Mounts an empty form and renders it once.
    pub fn new(validator: Validator, renderer: Renderer, config: ContactFormServiceConfig) -> Self {
        let mut form = Self {
            validator,
            renderer,
            config,
            state: ContactFormState::default(),
            edited: BTreeSet::new(),
        };
        form.refresh_errors();
        form.publish();
        form
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut Renderer {
        &mut self.renderer
    }

    fn refresh_errors(&mut self) {
        let mut errors = self.validator.validate(&self.state.values);
        if self.config.live_validation == LiveValidation::EditedFields {
            errors.retain(|field| self.edited.contains(&field));
        }
        self.state.errors = errors;
    }

    fn reset_values(&mut self) {
        let message = std::mem::take(&mut self.state.values.message);
        self.state.values = Default::default();
        if !self.config.clear_message_on_submit {
            self.state.values.message = message;
        }
        self.edited.clear();
    }

    fn publish(&mut self) {
        self.renderer.render(&self.state);
    }
}

impl<Validator, Renderer> ContactFormService for ContactFormServiceImpl<Validator, Renderer>
where
    Validator: ContactFormValidator,
    Renderer: ContactFormRenderer,
{
    fn set_field(&mut self, field: FormField, value: String) {
        debug!(%field, length = value.chars().count(), "contact form field changed");

        self.state.values.set(field, value);
        self.edited.insert(field);
        self.refresh_errors();
        self.publish();
    }

    fn submit(&mut self) -> Result<Submission, ContactFormSubmitError> {
        let result = match self.validator.validate(&self.state.values).into_result() {
            Ok(()) => {
                let submission = Submission::capture(self.state.values.clone());
                self.state.submission = Some(submission.clone());
                self.reset_values();
                self.refresh_errors();
                info!(
                    has_message = submission.message().is_some(),
                    "contact form submitted"
                );
                Ok(submission)
            }
            Err(errors) => {
                debug!(invalid_fields = errors.len(), "contact form submission rejected");
                self.edited.extend(FormField::ALL);
                self.state.errors = errors.clone();
                Err(ContactFormSubmitError::Invalid(errors))
            }
        };

        self.publish();
        result
    }

    fn state(&self) -> &ContactFormState {
        &self.state
    }
}
