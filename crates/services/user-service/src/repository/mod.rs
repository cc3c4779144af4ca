//! Repository layer for user persistence.

mod user_repository;

pub use user_repository::{InMemoryUserStore, UserRepository};

#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
