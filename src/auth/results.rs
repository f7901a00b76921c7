//! Credential store result types
//!
//! Defines result structures returned by registration.

/// Result of a successful registration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationResult {
    pub registered: bool,
    pub username: String,
}

impl RegistrationResult {
    pub(crate) fn registered(username: &str) -> Self {
        Self {
            registered: true,
            username: username.to_string(),
        }
    }
}
