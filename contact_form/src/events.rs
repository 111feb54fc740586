use std::str::FromStr;

use contact_form_models::field::{FormField, FormFieldParseError};
use thiserror::Error;

/// A single line of input to an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// `set <field> <value...>`
    InputChanged { field: FormField, value: String },
    /// `clear <field>`
    InputCleared { field: FormField },
    SubmitRequested,
    ShowRequested,
    HelpRequested,
    Quit,
}

pub const HELP: &str = "\
Commands:
  set <field> <value...>  change the value of a field
  clear <field>           clear a field
  submit                  submit the form
  show                    render the form again
  help                    show this help
  quit                    end the session
Fields: firstName, lastName, email, message";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormEventParseError {
    #[error("Unknown command `{0}`. Type `help` for a list of commands.")]
    UnknownCommand(String),
    #[error("Missing field name. Usage: {0} <field>")]
    MissingField(&'static str),
    #[error("`{0}` does not take any arguments.")]
    UnexpectedArguments(&'static str),
    #[error(transparent)]
    Field(#[from] FormFieldParseError),
}

impl FormEvent {
    /// Parses a line of input, returning `None` for blank lines and `#` comments.
    pub fn parse_line(line: &str) -> Option<Result<Self, FormEventParseError>> {
        let line = line.trim_end_matches(['\r', '\n']);
        let trimmed = line.trim_start();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return None;
        }
        Some(trimmed.parse())
    }
}

impl FromStr for FormEvent {
    type Err = FormEventParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (command, rest) = split_token(s);

        let no_args = |event: Self, name: &'static str| {
            if rest.trim().is_empty() {
                Ok(event)
            } else {
                Err(FormEventParseError::UnexpectedArguments(name))
            }
        };

        match command {
            "set" => {
                let (field, value) = split_token(rest);
                if field.is_empty() {
                    return Err(FormEventParseError::MissingField("set"));
                }
                Ok(Self::InputChanged {
                    field: field.parse()?,
                    value: value.into(),
                })
            }
            "clear" => match rest.trim() {
                "" => Err(FormEventParseError::MissingField("clear")),
                field => Ok(Self::InputCleared {
                    field: field.parse()?,
                }),
            },
            "submit" => no_args(Self::SubmitRequested, "submit"),
            "show" => no_args(Self::ShowRequested, "show"),
            "help" | "?" => no_args(Self::HelpRequested, "help"),
            "quit" | "exit" => no_args(Self::Quit, "quit"),
            _ => Err(FormEventParseError::UnknownCommand(command.into())),
        }
    }
}

/// Splits off the first whitespace-delimited token. Whitespace before the token is
/// skipped; the remainder starts right after the single separator that ends it.
fn split_token(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.char_indices().find(|(_, c)| c.is_whitespace()) {
        Some((i, separator)) => (&s[..i], &s[i + separator.len_utf8()..]),
        None => (s, ""),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn set_keeps_value_verbatim() {
        assert_eq!(
            "set message Hello World!".parse::<FormEvent>().unwrap(),
            FormEvent::InputChanged {
                field: FormField::Message,
                value: "Hello World!".into()
            }
        );
        assert_eq!(
            "set lastName  two spaces ".parse::<FormEvent>().unwrap(),
            FormEvent::InputChanged {
                field: FormField::LastName,
                value: " two spaces ".into()
            }
        );
    }

    #[test]
    fn tokens_split_on_any_whitespace() {
        assert_eq!(
            "set  firstName George".parse::<FormEvent>().unwrap(),
            FormEvent::InputChanged {
                field: FormField::FirstName,
                value: "George".into()
            }
        );
        assert_eq!(
            "set\tlastName\tWashington".parse::<FormEvent>().unwrap(),
            FormEvent::InputChanged {
                field: FormField::LastName,
                value: "Washington".into()
            }
        );
        assert_eq!(
            "clear\t\temail".parse::<FormEvent>().unwrap(),
            FormEvent::InputCleared {
                field: FormField::Email
            }
        );
        assert_eq!(
            "submit\t".parse::<FormEvent>().unwrap(),
            FormEvent::SubmitRequested
        );
    }

    #[test]
    fn set_without_value_empties_field() {
        assert_eq!(
            "set email".parse::<FormEvent>().unwrap(),
            FormEvent::InputChanged {
                field: FormField::Email,
                value: String::new()
            }
        );
    }

    #[test]
    fn simple_commands() {
        assert_eq!(
            "submit".parse::<FormEvent>().unwrap(),
            FormEvent::SubmitRequested
        );
        assert_eq!("show".parse::<FormEvent>().unwrap(), FormEvent::ShowRequested);
        assert_eq!("?".parse::<FormEvent>().unwrap(), FormEvent::HelpRequested);
        assert_eq!("exit".parse::<FormEvent>().unwrap(), FormEvent::Quit);
        assert_eq!(
            "clear first-name".parse::<FormEvent>().unwrap(),
            FormEvent::InputCleared {
                field: FormField::FirstName
            }
        );
    }

    #[test]
    fn errors() {
        assert_eq!(
            "send".parse::<FormEvent>().unwrap_err(),
            FormEventParseError::UnknownCommand("send".into())
        );
        assert_eq!(
            "set".parse::<FormEvent>().unwrap_err(),
            FormEventParseError::MissingField("set")
        );
        assert_eq!(
            "clear ".parse::<FormEvent>().unwrap_err(),
            FormEventParseError::MissingField("clear")
        );
        assert_eq!(
            "submit now".parse::<FormEvent>().unwrap_err(),
            FormEventParseError::UnexpectedArguments("submit")
        );
        assert_eq!(
            "set phone 123".parse::<FormEvent>().unwrap_err(),
            FormEventParseError::Field(FormFieldParseError("phone".into()))
        );
    }

    #[test]
    fn skips_blank_lines_and_comments() {
        assert_eq!(FormEvent::parse_line("\n"), None);
        assert_eq!(FormEvent::parse_line("   "), None);
        assert_eq!(FormEvent::parse_line("# set email x"), None);
        assert_eq!(
            FormEvent::parse_line("  submit\r\n"),
            Some(Ok(FormEvent::SubmitRequested))
        );
    }
}
