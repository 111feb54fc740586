use contact_form_core_contracts::validator::ContactFormValidator;
use contact_form_models::{
    validation::{FieldError, ValidationResult, DEFAULT_FIRST_NAME_MIN_LENGTH, EMAIL_REGEX},
    values::FieldValues,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ContactFormValidatorImpl {
    config: ContactFormValidatorConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactFormValidatorConfig {
    pub first_name_min_length: usize,
}

impl Default for ContactFormValidatorConfig {
    fn default() -> Self {
        Self {
            first_name_min_length: DEFAULT_FIRST_NAME_MIN_LENGTH,
        }
    }
}

impl ContactFormValidatorImpl {
    pub fn new(config: ContactFormValidatorConfig) -> Self {
        Self { config }
    }

    fn validate_first_name(&self, first_name: &str) -> Option<FieldError> {
        let min_length = self.config.first_name_min_length;
        (first_name.chars().count() < min_length)
            .then_some(FieldError::FirstNameTooShort { min_length })
    }

    fn validate_last_name(&self, last_name: &str) -> Option<FieldError> {
        last_name.is_empty().then_some(FieldError::LastNameRequired)
    }

    fn validate_email(&self, email: &str) -> Option<FieldError> {
        if email.is_empty() {
            Some(FieldError::EmailRequired)
        } else if !EMAIL_REGEX.is_match(email) {
            Some(FieldError::EmailInvalid)
        } else {
            None
        }
    }
}

impl ContactFormValidator for ContactFormValidatorImpl {
    fn validate(&self, values: &FieldValues) -> ValidationResult {
        [
            self.validate_first_name(&values.first_name),
            self.validate_last_name(&values.last_name),
            self.validate_email(&values.email),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use contact_form_demo::{
        EMPTY, GEORGE, GEORGE_WITH_MESSAGE, INVALID_EMAIL, MISSING_EMAIL, MISSING_LAST_NAME,
        SHORT_FIRST_NAME,
    };
    use contact_form_models::field::FormField;
    use contact_form_utils::Apply;
    use pretty_assertions::assert_eq;

    use super::*;

    fn errors(errors: impl IntoIterator<Item = FieldError>) -> ValidationResult {
        errors.into_iter().collect()
    }

    #[test]
    fn valid() {
        // Arrange
        let sut = ContactFormValidatorImpl::default();

        // Act
        let without_message = sut.validate(&GEORGE);
        let with_message = sut.validate(&GEORGE_WITH_MESSAGE);

        // Assert
        assert_eq!(without_message, ValidationResult::new());
        assert_eq!(with_message, ValidationResult::new());
    }

    #[test]
    fn empty() {
        // Arrange
        let sut = ContactFormValidatorImpl::default();

        // Act
        let result = sut.validate(&EMPTY);

        // Assert
        assert_eq!(
            result,
            errors([
                FieldError::FirstNameTooShort { min_length: 5 },
                FieldError::LastNameRequired,
                FieldError::EmailRequired,
            ])
        );
        assert!(!result.contains(FormField::Message));
    }

    #[test]
    fn short_first_name() {
        // Arrange
        let sut = ContactFormValidatorImpl::default();

        // Act
        let result = sut.validate(&SHORT_FIRST_NAME);

        // Assert
        assert_eq!(result.len(), 1);
        assert_eq!(
            result.get(FormField::FirstName).unwrap().to_string(),
            "firstName must have at least 5 characters"
        );
    }

    #[test]
    fn first_name_length_boundary() {
        let sut = ContactFormValidatorImpl::default();

        let four = GEORGE.clone().with(|v| v.first_name = "Abcd".into());
        let five = GEORGE.clone().with(|v| v.first_name = "Namee".into());
        // 5 characters, 7 bytes
        let multibyte = GEORGE.clone().with(|v| v.first_name = "Zoë Ø".into());

        assert!(sut.validate(&four).contains(FormField::FirstName));
        assert!(sut.validate(&five).is_empty());
        assert!(sut.validate(&multibyte).is_empty());
    }

    #[test]
    fn configured_min_length() {
        // Arrange
        let sut = ContactFormValidatorImpl::new(ContactFormValidatorConfig {
            first_name_min_length: 2,
        });
        let values = GEORGE.clone().with(|v| v.first_name = "G".into());

        // Act
        let result = sut.validate(&values);

        // Assert
        assert_eq!(
            result.get(FormField::FirstName).unwrap().to_string(),
            "firstName must have at least 2 characters"
        );
        assert!(sut
            .validate(&GEORGE.clone().with(|v| v.first_name = "Ge".into()))
            .is_empty());
    }

    #[test]
    fn missing_email() {
        // Arrange
        let sut = ContactFormValidatorImpl::default();

        // Act
        let result = sut.validate(&MISSING_EMAIL);

        // Assert
        assert_eq!(result, errors([FieldError::EmailRequired]));
    }

    #[test]
    fn invalid_email() {
        // Arrange
        let sut = ContactFormValidatorImpl::default();

        // Act
        let result = sut.validate(&INVALID_EMAIL);

        // Assert
        assert_eq!(
            result.get(FormField::Email).unwrap().to_string(),
            "email must be a valid email address"
        );
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn missing_last_name() {
        // Arrange
        let sut = ContactFormValidatorImpl::default();

        // Act
        let result = sut.validate(&MISSING_LAST_NAME);

        // Assert
        assert_eq!(
            result.get(FormField::LastName).unwrap().to_string(),
            "lastName is a required field"
        );
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn names_are_independent() {
        let sut = ContactFormValidatorImpl::default();

        let values = FieldValues {
            first_name: "ab".into(),
            last_name: "Washington".into(),
            email: "a@b.co".into(),
            message: String::new(),
        };
        assert_eq!(
            sut.validate(&values),
            errors([FieldError::FirstNameTooShort { min_length: 5 }])
        );

        let values = values.with(|v| {
            v.first_name = "George".into();
            v.last_name = String::new();
        });
        assert_eq!(sut.validate(&values), errors([FieldError::LastNameRequired]));
    }

    #[test]
    fn message_is_never_validated() {
        let sut = ContactFormValidatorImpl::default();
        let values = GEORGE.clone().with(|v| v.message = " ".repeat(10_000));
        assert!(sut.validate(&values).is_empty());
    }

    #[test]
    fn idempotent() {
        let sut = ContactFormValidatorImpl::default();
        for values in [&*EMPTY, &*GEORGE, &*MISSING_EMAIL, &*INVALID_EMAIL] {
            assert_eq!(sut.validate(values), sut.validate(values));
        }
    }
}
