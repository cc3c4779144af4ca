//! User service configuration.

use std::env;

use common::{HasherConfig, ServiceConfig};

/// User service configuration.
#[derive(Debug, Clone, Default)]
pub struct UserServiceConfig {
    /// Service name and log level
    pub service: ServiceConfig,
    /// Argon2 cost parameters
    pub hasher: HasherConfig,
}

impl UserServiceConfig {
    /// Load configuration from environment variables (and `.env`).
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from a variable lookup.
    ///
    /// Unset or unparsable values fall back to their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let service_defaults = ServiceConfig::default();
        let hasher_defaults = HasherConfig::default();
        let parse_var = |key: &str| lookup(key).and_then(|v| v.parse::<u32>().ok());

        Self {
            service: ServiceConfig {
                service_name: lookup("USER_SERVICE_NAME")
                    .unwrap_or_else(|| "user-service".to_string()),
                log_level: lookup("USER_SERVICE_LOG_LEVEL")
                    .or_else(|| lookup("RUST_LOG"))
                    .unwrap_or(service_defaults.log_level),
            },
            hasher: HasherConfig {
                memory_kib: parse_var("HASHER_MEMORY_KIB").unwrap_or(hasher_defaults.memory_kib),
                iterations: parse_var("HASHER_ITERATIONS").unwrap_or(hasher_defaults.iterations),
                parallelism: parse_var("HASHER_PARALLELISM")
                    .unwrap_or(hasher_defaults.parallelism),
            },
        }
    }
}
