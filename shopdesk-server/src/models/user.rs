//! User schema

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;

use super::validation::{bounded_text, ValidationError};

/// Maximum length for user names
const MAX_NAME_LEN: usize = 128;

/// Maximum length for emails (RFC 5321 path limit)
const MAX_EMAIL_LEN: usize = 254;

/// Accepted age range, inclusive
const MIN_AGE: i32 = 0;
const MAX_AGE: i32 = 150;

/// `local@domain.tld`, no whitespace, one `@`
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("invalid email regex")
});

/// Incoming user body
#[derive(Debug, Clone, Deserialize)]
pub struct UserPayload {
    pub name: String,
    pub email: String,
    pub age: i32,
}

/// Validated user fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    name: String,
    email: String,
    age: i32,
}

impl NewUser {
    /// Validate a user.
    ///
    /// # Example
    /// ```
    /// use shopdesk_server::models::NewUser;
    ///
    /// assert!(NewUser::new("Ada", "ada@example.com", 36).is_ok());
    /// assert!(NewUser::new("Ada", "not-an-email", 36).is_err());
    /// assert!(NewUser::new("Ada", "ada@example.com", -1).is_err());
    /// ```
    pub fn new(name: &str, email: &str, age: i32) -> Result<Self, ValidationError> {
        let name = bounded_text("name", name, MAX_NAME_LEN)?;
        let email = bounded_text("email", email, MAX_EMAIL_LEN)?;

        if !EMAIL_RE.is_match(&email) {
            return Err(ValidationError::InvalidFormat {
                field: "email",
                reason: "must look like local@domain",
            });
        }

        if !(MIN_AGE..=MAX_AGE).contains(&age) {
            return Err(ValidationError::OutOfRange {
                field: "age",
                min: MIN_AGE.into(),
                max: MAX_AGE.into(),
            });
        }

        Ok(Self { name, email, age })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn age(&self) -> i32 {
        self.age
    }
}

impl TryFrom<UserPayload> for NewUser {
    type Error = ValidationError;

    fn try_from(p: UserPayload) -> Result<Self, Self::Error> {
        Self::new(&p.name, &p.email, p.age)
    }
}
