//! Password hashing collaborators.

mod hashing_service;

pub use hashing_service::{Argon2Hasher, HashingService};

#[cfg(any(test, feature = "test-utils"))]
pub use hashing_service::MockHashingService;
