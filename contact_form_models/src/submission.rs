use serde::{Serialize, Serializer};

use crate::values::FieldValues;

/// Snapshot of the form values accepted by the last successful submit.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Submission(FieldValues);

impl Submission {
    /// Captures `values`. Only a submit that passed validation should call this.
    pub fn capture(values: FieldValues) -> Self {
        Self(values)
    }

    pub fn first_name(&self) -> &str {
        &self.0.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.0.last_name
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }

    /// The submitted message, or `None` if it was left empty.
    pub fn message(&self) -> Option<&str> {
        Some(self.0.message.as_str()).filter(|message| !message.is_empty())
    }

    pub fn into_values(self) -> FieldValues {
        self.0
    }
}

impl Serialize for Submission {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct Repr<'a> {
            first_name: &'a str,
            last_name: &'a str,
            email: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            message: Option<&'a str>,
        }

        Repr {
            first_name: self.first_name(),
            last_name: self.last_name(),
            email: self.email(),
            message: self.message(),
        }
        .serialize(serializer)
    }
}
