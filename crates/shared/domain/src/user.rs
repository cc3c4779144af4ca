//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{DomainError, DomainResult};

/// User domain entity.
///
/// The password field holds the plaintext until a password is assigned,
/// and the hash afterwards. `None` means no password was ever supplied;
/// an empty string is a valid value.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    password: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Don't expose the password in debug output
impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}

impl User {
    /// Create a new user carrying a plaintext password
    pub fn new(username: impl Into<String>, email: impl Into<String>, password: impl Into<String>) -> Self {
        let mut user = Self::without_password(username, email);
        user.password = Some(password.into());
        user
    }

    /// Create a new user with no password set
    pub fn without_password(username: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            username: username.into(),
            email: email.into(),
            password: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Read the current password value.
    ///
    /// # Errors
    /// Returns a password error if no password was ever set on the record.
    pub fn password(&self) -> DomainResult<&str> {
        self.password
            .as_deref()
            .ok_or_else(|| DomainError::password("User has no password set"))
    }

    /// Replace the password value and touch `updated_at`.
    ///
    /// # Errors
    /// Returns a password error if `password` equals the value already stored,
    /// since nothing would be replaced; the record is left unchanged.
    pub fn set_password(&mut self, password: impl Into<String>) -> DomainResult<()> {
        let password = password.into();
        if self.password.as_deref() == Some(password.as_str()) {
            return Err(DomainError::password("Password value unchanged"));
        }
        self.password = Some(password);
        self.updated_at = Utc::now();
        Ok(())
    }
}

/// User response (safe to print or return to a client)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// Unique user identifier
    pub id: Uuid,
    /// Login name
    pub username: String,
    /// User email address
    pub email: String,
    /// Account creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
            email: user.email.clone(),
            created_at: user.created_at,
        }
    }
}
