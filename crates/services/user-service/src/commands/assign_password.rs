//! `assign-password` command: store a user, hash its password and report
//! the stored record.

use std::sync::Arc;

use serde::Serialize;

use common::{AppError, AppResult};
use domain::{User, UserResponse};

use crate::config::UserServiceConfig;
use crate::repository::{InMemoryUserStore, UserRepository};
use crate::service::UserService;

/// Result of the command, printed as JSON
#[derive(Debug, Serialize)]
pub struct AssignPasswordReport {
    pub user: UserResponse,
    pub password_hash: String,
    pub email_lookup: Option<String>,
}

impl AssignPasswordReport {
    /// Render as pretty-printed JSON
    pub fn to_json(&self) -> AppResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| AppError::internal(format!("Failed to render output: {}", e)))
    }
}

/// Execute the command against a fresh in-memory store.
pub async fn execute(config: &UserServiceConfig, mut user: User) -> AppResult<AssignPasswordReport> {
    let store = Arc::new(InMemoryUserStore::new());
    store.create(user.clone()).await?;

    let service = crate::build_user_service(config, store)?;
    let persisted = service.assign_password(Some(&mut user)).await?;
    let email_lookup = service.find_user_email(&persisted.username).await?;

    Ok(AssignPasswordReport {
        user: UserResponse::from(&persisted),
        password_hash: persisted.password()?.to_string(),
        email_lookup,
    })
}
