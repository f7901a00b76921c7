//! Credential management
//!
//! Handles credential derivation, storage, registration and authentication.

pub mod credentials;
pub mod results;
pub mod store;

pub use credentials::{CredentialTransform, DEFAULT_CREDENTIAL_SUFFIX, SuffixTransform};
pub use results::RegistrationResult;
pub use store::CredentialStore;
