//! Error types
//!
//! Defines the registry error taxonomy and the aggregate error used by the driver.

use std::fmt;

/// Credential store errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// Register was called for a username that is already present.
    DuplicateUser(String),
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateUser(u) => write!(f, "User already exists: {}", u),
        }
    }
}

impl std::error::Error for RegistryError {}

/// Application-level error that encompasses all error types
#[derive(Debug)]
pub enum AppError {
    Config(config::ConfigError),
    Registry(RegistryError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::Registry(e) => write!(f, "Registry error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(e) => Some(e),
            AppError::Registry(e) => Some(e),
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(error: config::ConfigError) -> Self {
        AppError::Config(error)
    }
}

impl From<RegistryError> for AppError {
    fn from(error: RegistryError) -> Self {
        AppError::Registry(error)
    }
}
