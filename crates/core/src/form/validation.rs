use std::sync::LazyLock;

use formdesk_types::{ContactMethod, NewCustomer, ParseContactMethodError};
use regex::Regex;

use super::fields::{Field, RawCustomerForm};

static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").expect("valid email pattern")
});

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("The {} field is required.", .0.label())]
    MissingRequiredField(Field),
    #[error("Please enter a valid email address or leave it blank.")]
    InvalidEmail(String),
    #[error(transparent)]
    InvalidContactMethod(#[from] ParseContactMethodError),
}

/// Basic syntactic email check. An empty address is always accepted.
pub fn validate_email(email: &str) -> bool {
    email.is_empty() || EMAIL_REGEX.is_match(email)
}

/// Normalize raw form input and check it, first failure wins.
pub fn validate(raw: &RawCustomerForm) -> Result<NewCustomer, ValidationError> {
    let name = raw.normalized(Field::Name);
    if name.is_empty() {
        return Err(ValidationError::MissingRequiredField(Field::Name));
    }

    let email = raw.normalized(Field::Email);
    if !validate_email(&email) {
        return Err(ValidationError::InvalidEmail(email));
    }

    let contact_method = match raw.contact_method.trim() {
        "" => ContactMethod::default(),
        value => value.parse::<ContactMethod>()?,
    };

    Ok(NewCustomer {
        name,
        birthday: raw.normalized(Field::Birthday),
        email,
        phone: raw.normalized(Field::Phone),
        address: raw.normalized(Field::Address),
        contact_method,
    })
}
