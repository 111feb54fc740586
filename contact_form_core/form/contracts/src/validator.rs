use contact_form_models::{validation::ValidationResult, values::FieldValues};

/// Maps field values to the set of violated rules. Implementations must be pure.
#[cfg_attr(feature = "mock", mockall::automock)]
pub trait ContactFormValidator: Send + Sync + 'static {
    fn validate(&self, values: &FieldValues) -> ValidationResult;
}
