use serde::{Deserialize, Serialize};

use crate::{submission::Submission, validation::ValidationResult, values::FieldValues};

/// Everything a renderer needs to draw the contact form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactFormState {
    pub values: FieldValues,
    pub errors: ValidationResult,
    pub submission: Option<Submission>,
}

/// Which fields report errors between submits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LiveValidation {
    /// Every field is validated after every change, edited or not.
    #[default]
    AllFields,
    /// Only fields edited since mount or the last successful submit report errors.
    EditedFields,
}
