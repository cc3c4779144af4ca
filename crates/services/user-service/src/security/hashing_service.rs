//! Hashing service - one-way password transformation.
//!
//! The Argon2 implementation produces PHC strings with a random salt per
//! call, so hashing the same plaintext twice yields different outputs.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Algorithm, Argon2, Params, Version,
};
use async_trait::async_trait;

use common::{AppError, AppResult, HasherConfig};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Hashing service trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait HashingService: Send + Sync {
    /// Hash a plaintext password
    async fn hash(&self, plaintext: &str) -> AppResult<String>;

    /// Check a plaintext password against a stored hash
    async fn verify(&self, plaintext: &str, hash: &str) -> AppResult<bool>;
}

/// Argon2id implementation of HashingService.
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    /// Create a hasher from cost parameters.
    ///
    /// # Errors
    /// Returns a hashing error if the parameters are outside Argon2's limits.
    pub fn new(config: &HasherConfig) -> AppResult<Self> {
        let params = Params::new(config.memory_kib, config.iterations, config.parallelism, None)
            .map_err(|e| AppError::hashing(format!("Invalid Argon2 parameters: {}", e)))?;
        Ok(Self { params })
    }

    fn argon2(params: Params) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
    }
}

#[async_trait]
impl HashingService for Argon2Hasher {
    async fn hash(&self, plaintext: &str) -> AppResult<String> {
        let plaintext = plaintext.to_owned();
        let params = self.params.clone();

        tokio::task::spawn_blocking(move || {
            let salt = SaltString::generate(&mut OsRng);
            Argon2Hasher::argon2(params)
                .hash_password(plaintext.as_bytes(), &salt)
                .map(|hash| hash.to_string())
                .map_err(|e| AppError::hashing(format!("Password hash failed: {}", e)))
        })
        .await
        .map_err(|e| AppError::internal(format!("Hashing task failed: {}", e)))?
    }

    async fn verify(&self, plaintext: &str, hash: &str) -> AppResult<bool> {
        let plaintext = plaintext.to_owned();
        let hash = hash.to_owned();
        let params = self.params.clone();

        tokio::task::spawn_blocking(move || -> AppResult<bool> {
            let parsed = PasswordHash::new(&hash)
                .map_err(|e| AppError::hashing(format!("Invalid hash format: {}", e)))?;
            // Cost parameters are read from the PHC string itself
            Ok(Argon2Hasher::argon2(params)
                .verify_password(plaintext.as_bytes(), &parsed)
                .is_ok())
        })
        .await
        .map_err(|e| AppError::internal(format!("Hashing task failed: {}", e)))?
    }
}
