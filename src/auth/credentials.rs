//! Credential derivation
//!
//! Turns a plaintext secret into the value kept by the credential store.
//! The default transform only appends a marker suffix and is not a password hash.

/// Suffix appended by [`SuffixTransform`] unless configured otherwise.
pub const DEFAULT_CREDENTIAL_SUFFIX: &str = "_hashed";

/// Derives a stored credential from a secret.
///
/// Implementations must be deterministic: the store recomputes the credential
/// at authentication time and compares it with the value saved at registration.
pub trait CredentialTransform: Send + Sync {
    fn derive(&self, secret: &str) -> String;
}

/// Placeholder transform: `secret + suffix`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuffixTransform {
    suffix: String,
}

impl SuffixTransform {
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl Default for SuffixTransform {
    fn default() -> Self {
        Self::new(DEFAULT_CREDENTIAL_SUFFIX)
    }
}

impl CredentialTransform for SuffixTransform {
    fn derive(&self, secret: &str) -> String {
        let mut credential = String::with_capacity(secret.len() + self.suffix.len());
        credential.push_str(secret);
        credential.push_str(&self.suffix);
        credential
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_suffix() {
        let transform = SuffixTransform::default();
        assert_eq!(transform.derive("password123"), "password123_hashed");
    }

    #[test]
    fn test_custom_suffix_is_deterministic() {
        let transform = SuffixTransform::new("#v1");
        assert_eq!(transform.derive("secret"), "secret#v1");
        assert_eq!(transform.derive("secret"), transform.derive("secret"));
    }

    #[test]
    fn test_empty_secret() {
        assert_eq!(SuffixTransform::default().derive(""), "_hashed");
    }
}
