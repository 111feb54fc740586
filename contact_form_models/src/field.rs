use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One of the four inputs of the contact form.
///
/// The declaration order is the display order, so ordered collections keyed by
/// `FormField` iterate firstName, lastName, email, message.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "camelCase")]
pub enum FormField {
    FirstName,
    LastName,
    Email,
    Message,
}

impl FormField {
    pub const ALL: [Self; 4] = [Self::FirstName, Self::LastName, Self::Email, Self::Message];

    /// The name used by events and in error messages (e.g. `firstName`).
    pub fn name(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Message => "message",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email",
            Self::Message => "Message",
        }
    }

    pub fn placeholder(self) -> Option<&'static str> {
        match self {
            Self::FirstName => Some("Edd"),
            Self::LastName => Some("Burke"),
            Self::Email => Some("bluebill1049@hotmail.com"),
            Self::Message => None,
        }
    }

    /// Whether the validator has any rule for this field.
    pub fn is_validated(self) -> bool {
        !matches!(self, Self::Message)
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown form field `{0}`, expected one of firstName, lastName, email, message.")]
pub struct FormFieldParseError(pub String);

impl FromStr for FormField {
    type Err = FormFieldParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "firstName" | "first-name" | "first_name" => Ok(Self::FirstName),
            "lastName" | "last-name" | "last_name" => Ok(Self::LastName),
            "email" => Ok(Self::Email),
            "message" => Ok(Self::Message),
            _ => Err(FormFieldParseError(s.into())),
        }
    }
}
