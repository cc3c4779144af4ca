//! Commands module - CLI command implementations.

pub mod assign_password;
