//! User repository trait and in-memory implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use common::{AppError, AppResult, OptionExt};
use domain::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Records are identified by username.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by username
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;

    /// Store a new user
    async fn create(&self, user: User) -> AppResult<User>;

    /// Persist the current state of an existing user and return the stored record
    async fn update_user(&self, user: &User) -> AppResult<User>;
}

/// Username-keyed in-memory implementation of UserRepository
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserStore {
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        Ok(self.users.read().await.get(username).cloned())
    }

    async fn create(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().await;
        if users.contains_key(&user.username) {
            return Err(AppError::conflict("Username"));
        }

        tracing::debug!(username = %user.username, "User created");
        users.insert(user.username.clone(), user.clone());
        Ok(user)
    }

    async fn update_user(&self, user: &User) -> AppResult<User> {
        let mut users = self.users.write().await;
        let stored = users.get_mut(&user.username).ok_or_not_found()?;

        *stored = user.clone();
        tracing::debug!(username = %user.username, "User updated");
        Ok(stored.clone())
    }
}
