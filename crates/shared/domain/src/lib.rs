//! Domain layer - Core business entities.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Types here are shared by the service crates and their collaborators.

pub mod error;
pub mod user;

pub use error::{DomainError, DomainResult};
pub use user::{User, UserResponse};
