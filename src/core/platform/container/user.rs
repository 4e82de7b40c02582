// src/core/platform/container/user.rs
/*
User Container

A user account managed through the generic CRUD endpoints and the auth flow.
The `password` field holds the plain-text secret only while a request payload is
being processed; it is replaced by an Argon2 PHC hash before the record is stored.
Stored records and recycle-bin snapshots keep the hash so a restored account can
still log in, while the web layer redacts it from every response.
*/

use crate::core::base::entity::record::Record;
use crate::core::platform::container::email::validate_optional_email;
use crate::core::platform::container::entity::{require_text, Entity, EntityKind};
use crate::error::{AppError, AppResult};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

pub const DEFAULT_ROLE: &str = "user";
const MAX_USERNAME_LENGTH: usize = 50;

fn default_role() -> String {
    DEFAULT_ROLE.to_string()
}

/// Usernames are stored trimmed, whichever endpoint wrote them
fn trimmed_username<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(|name| name.trim().to_string())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "trimmed_username")]
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default = "default_role")]
    pub role: String,
    pub password: String,
}

pub type UserRecord = Record<User>;

impl User {
    pub fn new(username: String, email: Option<String>, password: String) -> Self {
        Self {
            username: username.trim().to_string(),
            email,
            role: default_role(),
            password,
        }
    }
}

impl Entity for User {
    const KIND: EntityKind = EntityKind::User;
    const SECRET_FIELD: Option<&'static str> = Some("password");

    fn validate(&self) -> AppResult<()> {
        require_text(Self::KIND, "username", &self.username)?;
        if self.username.len() > MAX_USERNAME_LENGTH {
            return Err(AppError::Validation(format!(
                "Username cannot exceed {} characters",
                MAX_USERNAME_LENGTH
            )));
        }
        require_text(Self::KIND, "password", &self.password)?;
        require_text(Self::KIND, "role", &self.role)?;
        validate_optional_email(self.email.as_deref())
    }

    fn unique_fields(&self) -> Vec<(&'static str, String)> {
        vec![("username", self.username.clone())]
    }

    fn secret_mut(&mut self) -> Option<&mut String> {
        Some(&mut self.password)
    }
}

/// Public projection of a user; never carries the password hash
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: Uuid,
    pub username: String,
    pub email: Option<String>,
    pub role: String,
}

impl From<&UserRecord> for UserProfile {
    fn from(record: &UserRecord) -> Self {
        Self {
            id: record.id,
            username: record.data.username.clone(),
            email: record.data.email.clone(),
            role: record.data.role.clone(),
        }
    }
}
