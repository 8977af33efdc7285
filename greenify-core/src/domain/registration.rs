//! Registration payloads and the registration form rules

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::preferences::Language;
use super::result::{Error, Result};
use crate::locale::t;

/// Minimum accepted password length on the registration form
pub const MIN_PASSWORD_LEN: usize = 6;

pub const MSG_MISSING_FIELDS: &str = "Missing fields";
pub const MSG_DB_ERROR: &str = "DB error";
pub const MSG_REGISTERED: &str = "User registered!";

/// Body of `POST /api/register`
///
/// Every field is optional on the wire so that a missing field can be
/// answered with the gateway's own 400 response instead of a decode error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

impl RegistrationRequest {
    pub fn new(name: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }

    /// All three fields present and non-empty, borrowed as (name, email, password)
    pub fn required_fields(&self) -> Option<(&str, &str, &str)> {
        fn present(v: &Option<String>) -> Option<&str> {
            v.as_deref().filter(|s| !s.is_empty())
        }
        Some((present(&self.name)?, present(&self.email)?, present(&self.password)?))
    }
}

/// Gateway answer: `{ "success": bool, "message": string }`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl RegistrationResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// What the visitor typed into the registration form
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl RegistrationForm {
    /// Client-side checks run before anything is sent to the gateway.
    /// Messages are localized because they are shown directly on the form.
    pub fn validate(&self, lang: Language) -> Result<()> {
        if self.password != self.confirm_password {
            return Err(Error::validation(t("passwordsMismatch", lang)));
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(Error::validation(t("passwordTooShort", lang)));
        }
        Ok(())
    }
}

/// A row of the users table
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegisteredUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Argon2id PHC string, never the plain password
    #[serde(skip)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl RegisteredUser {
    pub fn new(name: impl Into<String>, email: impl Into<String>, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            password_hash,
            created_at: Utc::now(),
        }
    }
}
