use std::{
    collections::{btree_map, BTreeMap},
    sync::LazyLock,
};

use regex::Regex;
use serde::{ser::SerializeMap, Serialize, Serializer};
use thiserror::Error;

use crate::field::FormField;

/// `local@domain.tld` with a single `@`, at least one `.` after it and no whitespace.
pub static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@.][^\s@]*$").unwrap());

pub const DEFAULT_FIRST_NAME_MIN_LENGTH: usize = 5;

/// A violated validation rule. The `Display` output is the user-facing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum FieldError {
    #[error("firstName must have at least {min_length} characters")]
    FirstNameTooShort { min_length: usize },
    #[error("lastName is a required field")]
    LastNameRequired,
    #[error("email is required")]
    EmailRequired,
    #[error("email must be a valid email address")]
    EmailInvalid,
}

impl FieldError {
    pub fn field(self) -> FormField {
        match self {
            Self::FirstNameTooShort { .. } => FormField::FirstName,
            Self::LastNameRequired => FormField::LastName,
            Self::EmailRequired | Self::EmailInvalid => FormField::Email,
        }
    }
}

/// Errors keyed by field, at most one per field, iterated in display order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult(BTreeMap<FormField, FieldError>);

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `error` for the field it belongs to, replacing any previous error of
    /// that field.
    pub fn insert(&mut self, error: FieldError) -> Option<FieldError> {
        self.0.insert(error.field(), error)
    }

    pub fn get(&self, field: FormField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn contains(&self, field: FormField) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, FieldError)> + '_ {
        self.0.iter().map(|(&field, &error)| (field, error))
    }

    /// Keeps only the errors of fields for which `f` returns `true`.
    pub fn retain(&mut self, mut f: impl FnMut(FormField) -> bool) {
        self.0.retain(|&field, _| f(field));
    }

    pub fn into_result(self) -> Result<(), Self> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

impl FromIterator<FieldError> for ValidationResult {
    fn from_iter<T: IntoIterator<Item = FieldError>>(iter: T) -> Self {
        let mut result = Self::new();
        iter.into_iter().for_each(|error| {
            result.insert(error);
        });
        result
    }
}

impl IntoIterator for ValidationResult {
    type Item = (FormField, FieldError);
    type IntoIter = btree_map::IntoIter<FormField, FieldError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl Serialize for ValidationResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (field, error) in self.iter() {
            map.serialize_entry(field.name(), &error.to_string())?;
        }
        map.end()
    }
}
