// src/core/platform/container/email.rs
/*
Email value object shared by vendors and users. Email addresses are optional on
every entity kind, so an empty string is treated as "not provided" rather than as
an invalid address.
*/

use crate::error::{AppError, AppResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

static EMAIL_REGEX: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_REGEX.get_or_init(|| {
        Regex::new(
            r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
        )
        .expect("email regex is valid")
    })
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Email {
    value: String,
}

impl Email {
    /// Creates a new Email value object with validation
    pub fn new(email: &str) -> AppResult<Self> {
        if Self::is_valid(email) {
            Ok(Self {
                value: email.to_lowercase(),
            })
        } else {
            Err(AppError::Validation(format!("Invalid email address: {}", email)))
        }
    }

    pub fn is_valid(email: &str) -> bool {
        email.len() <= 254 && email_regex().is_match(email)
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Validates an optional email field, ignoring blank values
pub fn validate_optional_email(email: Option<&str>) -> AppResult<()> {
    match email.map(str::trim) {
        Some(value) if !value.is_empty() => Email::new(value).map(|_| ()),
        _ => Ok(()),
    }
}
