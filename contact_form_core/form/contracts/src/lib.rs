use contact_form_models::{
    field::FormField, state::ContactFormState, submission::Submission,
    validation::ValidationResult,
};
use thiserror::Error;

pub mod renderer;
pub mod validator;

/// Holds the live values of a contact form, keeps their validation errors current and
/// captures a [`Submission`] whenever a submit passes validation.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFormService: 'static {
    /// Replaces the value of `field` and re-validates.
    fn set_field(&mut self, field: FormField, value: String);

    /// Validates all fields. On success the values are captured as the new
    /// submission and the form is reset.
    fn submit(&mut self) -> Result<Submission, ContactFormSubmitError>;

    fn state(&self) -> &ContactFormState;
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ContactFormSubmitError {
    #[error("The form contains {} invalid field(s).", .0.len())]
    Invalid(ValidationResult),
}

#[cfg(feature = "mock")]
impl MockContactFormService {
    pub fn with_set_field(mut self, field: FormField, value: impl Into<String>) -> Self {
        self.expect_set_field()
            .once()
            .with(
                mockall::predicate::eq(field),
                mockall::predicate::eq(value.into()),
            )
            .return_const(());
        self
    }

    pub fn with_submit(mut self, result: Result<Submission, ContactFormSubmitError>) -> Self {
        self.expect_submit().once().return_once(move || result);
        self
    }
}

