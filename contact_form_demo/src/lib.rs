use std::sync::LazyLock;

use contact_form_models::{submission::Submission, values::FieldValues};
use contact_form_utils::Apply;

pub const FIRST_NAME: &str = "George";
pub const LAST_NAME: &str = "Washington";
pub const EMAIL: &str = "foundingFather@gmail.com";
pub const MESSAGE: &str = "Hello World!";

pub static EMPTY: LazyLock<FieldValues> = LazyLock::new(FieldValues::new);

/// All required fields filled in, no message.
pub static GEORGE: LazyLock<FieldValues> = LazyLock::new(|| FieldValues {
    first_name: FIRST_NAME.into(),
    last_name: LAST_NAME.into(),
    email: EMAIL.into(),
    message: String::new(),
});

/// All four fields filled in.
pub static GEORGE_WITH_MESSAGE: LazyLock<FieldValues> =
    LazyLock::new(|| GEORGE.clone().with(|v| v.message = MESSAGE.into()));

pub static GEORGE_SUBMISSION: LazyLock<Submission> =
    LazyLock::new(|| Submission::capture(GEORGE.clone()));

pub static GEORGE_WITH_MESSAGE_SUBMISSION: LazyLock<Submission> =
    LazyLock::new(|| Submission::capture(GEORGE_WITH_MESSAGE.clone()));

/// Valid first and last name, email left empty.
pub static MISSING_EMAIL: LazyLock<FieldValues> = LazyLock::new(|| FieldValues {
    first_name: "Namee".into(),
    last_name: "LastName".into(),
    ..Default::default()
});

/// Valid first name and email, last name left empty.
pub static MISSING_LAST_NAME: LazyLock<FieldValues> = LazyLock::new(|| FieldValues {
    first_name: FIRST_NAME.into(),
    email: "bloomtech@gmail.com".into(),
    ..Default::default()
});

/// A first name below the minimum length, everything else valid.
pub static SHORT_FIRST_NAME: LazyLock<FieldValues> =
    LazyLock::new(|| GEORGE.clone().with(|v| v.first_name = "abc".into()));

/// Everything valid except for the shape of the email address.
pub static INVALID_EMAIL: LazyLock<FieldValues> =
    LazyLock::new(|| GEORGE.clone().with(|v| v.email = "invalidEmail".into()));
