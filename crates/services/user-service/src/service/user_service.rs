//! User service - Handles user-related business logic.
//!
//! SOLID (SRP): Orchestrates the hashing and persistence collaborators;
//! holds no state of its own beyond them.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppResult, OptionExt};
use domain::User;

use crate::repository::UserRepository;
use crate::security::HashingService;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Replace the user's plaintext password with its hash and persist the user.
    ///
    /// The supplied user is mutated in place; the stored record is returned.
    /// Any failure aborts at the step that raised it and is returned as-is.
    async fn assign_password(&self, user: Option<&mut User>) -> AppResult<User>;

    /// Email of the user with the given username, `None` if there is no such user
    async fn find_user_email(&self, username: &str) -> AppResult<Option<String>>;

    /// User with the given username, exactly as the repository returns it
    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>>;
}

/// Concrete implementation of UserService using a repository and a hasher.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    hasher: Arc<dyn HashingService>,
}

impl UserManager {
    /// Create new user service instance with its collaborators
    pub fn new(repo: Arc<dyn UserRepository>, hasher: Arc<dyn HashingService>) -> Self {
        Self { repo, hasher }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn assign_password(&self, user: Option<&mut User>) -> AppResult<User> {
        let user = user.ok_or_invalid_argument("user must be provided")?;

        let hashed = self.hasher.hash(user.password()?).await?;
        user.set_password(hashed)?;

        let persisted = self.repo.update_user(user).await?;
        tracing::info!(username = %persisted.username, "Password assigned");
        Ok(persisted)
    }

    async fn find_user_email(&self, username: &str) -> AppResult<Option<String>> {
        let user = self.repo.find_by_username(username).await?;
        Ok(user.map(|user| user.email))
    }

    async fn find_by_username(&self, username: &str) -> AppResult<Option<User>> {
        self.repo.find_by_username(username).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::AppError;
    use domain::DomainError;
    use mockall::predicate::eq;

    use crate::repository::MockUserRepository;
    use crate::security::MockHashingService;

    const PLAINTEXT: &str = "Password1234";
    const HASHED: &str = "Hashed Password1234";

    fn create_test_user(password: &str) -> User {
        User::new("existingUser", "existing@example.com", password)
    }

    fn service(repo: MockUserRepository, hasher: MockHashingService) -> UserManager {
        UserManager::new(Arc::new(repo), Arc::new(hasher))
    }

    #[tokio::test]
    async fn test_user_gets_new_password() {
        let mut hasher = MockHashingService::new();
        hasher
            .expect_hash()
            .withf(|plaintext| plaintext == PLAINTEXT)
            .times(1)
            .returning(|_| Ok(HASHED.to_string()));

        let mut user = create_test_user(PLAINTEXT);
        let expected_id = user.id;

        let mut repo = MockUserRepository::new();
        repo.expect_update_user()
            .withf(move |u| u.id == expected_id && u.password().ok() == Some(HASHED))
            .times(1)
            .returning(|u| Ok(u.clone()));

        let result = service(repo, hasher)
            .assign_password(Some(&mut user))
            .await
            .unwrap();

        assert_eq!(user.password().unwrap(), HASHED);
        assert_eq!(result, user);
    }

    #[tokio::test]
    async fn test_returns_repository_result() {
        let mut hasher = MockHashingService::new();
        hasher.expect_hash().returning(|_| Ok(HASHED.to_string()));

        let stored = create_test_user(HASHED);
        let returned = stored.clone();

        let mut repo = MockUserRepository::new();
        repo.expect_update_user()
            .times(1)
            .returning(move |_| Ok(returned.clone()));

        let mut user = create_test_user(PLAINTEXT);
        let result = service(repo, hasher)
            .assign_password(Some(&mut user))
            .await
            .unwrap();

        assert_eq!(result, stored);
        assert_ne!(result.id, user.id);
    }

    #[tokio::test]
    async fn test_missing_user_is_invalid_argument() {
        let mut hasher = MockHashingService::new();
        hasher.expect_hash().never();
        let mut repo = MockUserRepository::new();
        repo.expect_update_user().never();

        let err = service(repo, hasher)
            .assign_password(None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidArgument(_)));
    }

    #[tokio::test]
    async fn test_password_read_failure_stops_workflow() {
        let mut hasher = MockHashingService::new();
        hasher.expect_hash().never();
        let mut repo = MockUserRepository::new();
        repo.expect_update_user().never();

        let mut user = User::without_password("existingUser", "existing@example.com");
        let err = service(repo, hasher)
            .assign_password(Some(&mut user))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Domain(DomainError::Password(_))));
    }

    #[tokio::test]
    async fn test_empty_plaintext_is_hashed_and_stored() {
        let mut hasher = MockHashingService::new();
        hasher
            .expect_hash()
            .withf(|plaintext| plaintext.is_empty())
            .times(1)
            .returning(|_| Ok(HASHED.to_string()));
        let mut repo = MockUserRepository::new();
        repo.expect_update_user()
            .withf(|u| u.password().ok() == Some(HASHED))
            .times(1)
            .returning(|u| Ok(u.clone()));

        let mut user = User::new("blank", "blank@example.com", "");
        let result = service(repo, hasher)
            .assign_password(Some(&mut user))
            .await
            .unwrap();

        assert_eq!(result.password().unwrap(), HASHED);
        assert_eq!(user.password().unwrap(), HASHED);
    }

    #[tokio::test]
    async fn test_hasher_failure_stops_workflow() {
        let mut hasher = MockHashingService::new();
        hasher
            .expect_hash()
            .times(1)
            .returning(|_| Err(AppError::hashing("boom")));
        let mut repo = MockUserRepository::new();
        repo.expect_update_user().never();

        let mut user = create_test_user(PLAINTEXT);
        let snapshot = user.clone();
        let err = service(repo, hasher)
            .assign_password(Some(&mut user))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Hashing(msg) if msg == "boom"));
        assert_eq!(user, snapshot);
    }

    #[tokio::test]
    async fn test_password_set_failure_stops_workflow() {
        let mut hasher = MockHashingService::new();
        hasher
            .expect_hash()
            .withf(|plaintext| plaintext == "password")
            .times(1)
            .returning(|plaintext| Ok(plaintext.to_string()));
        let mut repo = MockUserRepository::new();
        repo.expect_update_user().never();

        let mut user = create_test_user("password");
        let err = service(repo, hasher)
            .assign_password(Some(&mut user))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Domain(DomainError::Password(_))));
        assert_eq!(user.password().unwrap(), "password");
    }

    #[tokio::test]
    async fn test_repository_failure_propagates() {
        let mut hasher = MockHashingService::new();
        hasher.expect_hash().returning(|_| Ok(HASHED.to_string()));
        let mut repo = MockUserRepository::new();
        repo.expect_update_user()
            .times(1)
            .returning(|_| Err(AppError::internal("storage fault")));

        let mut user = create_test_user(PLAINTEXT);
        let err = service(repo, hasher)
            .assign_password(Some(&mut user))
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal(msg) if msg == "storage fault"));
    }

    #[tokio::test]
    async fn test_find_user_email_existing() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .with(eq("existingUser"))
            .times(1)
            .returning(|_| Ok(Some(create_test_user(PLAINTEXT))));

        let email = service(repo, MockHashingService::new())
            .find_user_email("existingUser")
            .await
            .unwrap();

        assert_eq!(email.as_deref(), Some("existing@example.com"));
    }

    #[tokio::test]
    async fn test_find_user_email_missing() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .with(eq("nonexistentUser"))
            .times(1)
            .returning(|_| Ok(None));

        let email = service(repo, MockHashingService::new())
            .find_user_email("nonexistentUser")
            .await
            .unwrap();

        assert!(email.is_none());
    }

    #[tokio::test]
    async fn test_find_by_username_existing() {
        let user = create_test_user(PLAINTEXT);
        let returned = user.clone();

        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .with(eq("existingUser"))
            .times(1)
            .returning(move |_| Ok(Some(returned.clone())));

        let found = service(repo, MockHashingService::new())
            .find_by_username("existingUser")
            .await
            .unwrap();

        assert_eq!(found, Some(user));
    }

    #[tokio::test]
    async fn test_find_by_username_missing() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .with(eq("nonexistentUser"))
            .times(1)
            .returning(|_| Ok(None));

        let found = service(repo, MockHashingService::new())
            .find_by_username("nonexistentUser")
            .await
            .unwrap();

        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_find_by_username_propagates_failure() {
        let mut repo = MockUserRepository::new();
        repo.expect_find_by_username()
            .returning(|_| Err(AppError::internal("storage fault")));

        let err = service(repo, MockHashingService::new())
            .find_by_username("existingUser")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Internal(_)));
    }
}
