//! Error handlers
//!
//! Reports errors through the logger without terminating the process.

use crate::error::types::{AppError, RegistryError};
use log::{error, warn};

/// Handle an application error
pub fn handle_error(err: &AppError) {
    error!("User registry error: {}", err);
}

/// Report a failed registration. Duplicate users are expected, so this is only a warning.
pub fn report_registry_error(err: &RegistryError) {
    match err {
        RegistryError::DuplicateUser(u) => warn!("Registration rejected for '{}': {}", u, err),
    }
}
