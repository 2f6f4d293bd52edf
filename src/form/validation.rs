//! Constraint validation as the browser applies it to `required` and
//! `type="email"` inputs on submit.

use std::sync::OnceLock;

use regex::Regex;

use crate::common::ValidationError;
use crate::form::{Field, LoginFormState};

/// WHATWG "valid email address" production.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$";

static EMAIL: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("Invalid email pattern"))
}

fn strip_newlines(value: &str) -> String {
    value.chars().filter(|c| !matches!(c, '\r' | '\n')).collect()
}

/// Value an `type="email"` input validates against.
pub fn sanitize_email(value: &str) -> String {
    strip_newlines(value)
        .trim_matches(|c: char| c.is_ascii_whitespace())
        .to_string()
}

/// Value an `type="password"` input validates against.
pub fn sanitize_password(value: &str) -> String {
    strip_newlines(value)
}

pub fn is_valid_email(value: &str) -> bool {
    email_regex().is_match(value)
}

/// Checks the form in document order and reports the first invalid control.
///
/// The state itself is left untouched; sanitization only affects what is
/// checked.
pub fn validate(state: &LoginFormState) -> Result<(), ValidationError> {
    let email = sanitize_email(state.email());
    if email.is_empty() {
        return Err(ValidationError::ValueMissing(Field::Email));
    }
    if !is_valid_email(&email) {
        return Err(ValidationError::TypeMismatch(Field::Email));
    }

    if sanitize_password(state.password()).is_empty() {
        return Err(ValidationError::ValueMissing(Field::Password));
    }

    Ok(())
}
