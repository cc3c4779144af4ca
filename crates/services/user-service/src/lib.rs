//! User Service Library
//!
//! This crate provides user management use cases: assigning a hashed
//! password to a user and looking users up by username. Hashing and
//! persistence are collaborators behind traits, with Argon2 and in-memory
//! implementations supplied.

pub mod commands;
pub mod config;
pub mod repository;
pub mod security;
pub mod service;

use std::sync::Arc;

use common::AppResult;

use crate::config::UserServiceConfig;
use crate::repository::UserRepository;
use crate::security::Argon2Hasher;
use crate::service::UserManager;

/// Build a user service backed by the given repository and an Argon2 hasher
/// configured from `config`.
pub fn build_user_service(
    config: &UserServiceConfig,
    repo: Arc<dyn UserRepository>,
) -> AppResult<UserManager> {
    let hasher = Arc::new(Argon2Hasher::new(&config.hasher)?);
    tracing::debug!(
        memory_kib = config.hasher.memory_kib,
        iterations = config.hasher.iterations,
        parallelism = config.hasher.parallelism,
        "Argon2 hasher configured"
    );
    Ok(UserManager::new(repo, hasher))
}
