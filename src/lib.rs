//! In-memory user registry
//!
//! A thread-safe credential store with registration, authentication and
//! snapshot operations, plus the configuration, error and logging plumbing
//! used by the demo driver.

pub mod auth;
pub mod config;
pub mod error;
pub mod utils;

pub use crate::auth::CredentialStore;
pub use crate::config::RegistryConfig;
pub use crate::error::{AppError, RegistryError};
