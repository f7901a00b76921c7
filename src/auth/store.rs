//! Credential store
//!
//! In-memory mapping from username to derived credential, guarded by a
//! reader/writer lock. Registration takes the write side; every other
//! operation takes the read side and may run alongside other readers.

use log::{debug, warn};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::credentials::{CredentialTransform, SuffixTransform};
use super::results::RegistrationResult;
use crate::config::RegistryConfig;
use crate::error::RegistryError;

/// Thread-safe registry of usernames and their credentials.
///
/// Share it between threads or tasks with `Arc<CredentialStore>`.
pub struct CredentialStore {
    users: RwLock<HashMap<String, String>>,
    transform: Box<dyn CredentialTransform>,
}

impl CredentialStore {
    /// Creates an empty store using the default suffix transform.
    pub fn new() -> Self {
        Self::with_transform(SuffixTransform::default())
    }

    /// Creates an empty store that derives credentials with `transform`.
    pub fn with_transform<T>(transform: T) -> Self
    where
        T: CredentialTransform + 'static,
    {
        Self {
            users: RwLock::new(HashMap::new()),
            transform: Box::new(transform),
        }
    }

    /// Creates an empty store whose suffix comes from the loaded configuration.
    pub fn from_config(config: &RegistryConfig) -> Self {
        Self::with_transform(SuffixTransform::new(config.credential_suffix.as_str()))
    }

    /// Registers `username` with a credential derived from `secret`.
    ///
    /// The existence check and the insert happen under one write guard, so of
    /// several concurrent registrations for the same name exactly one wins.
    /// Empty usernames and secrets are accepted.
    pub fn register(
        &self,
        username: &str,
        secret: &str,
    ) -> Result<RegistrationResult, RegistryError> {
        let mut users = self.write();

        match users.entry(username.to_string()) {
            Entry::Occupied(_) => {
                debug!("Registration rejected, user already exists: {}", username);
                Err(RegistryError::DuplicateUser(username.to_string()))
            }
            Entry::Vacant(slot) => {
                slot.insert(self.transform.derive(secret));
                debug!("Registered user: {}", username);
                Ok(RegistrationResult::registered(username))
            }
        }
    }

    /// Returns whether `secret` matches the credential stored for `username`.
    /// Unknown users never authenticate.
    pub fn authenticate(&self, username: &str, secret: &str) -> bool {
        let users = self.read();

        let authenticated = match users.get(username) {
            Some(stored) => *stored == self.transform.derive(secret),
            None => false,
        };

        debug!(
            "Authentication for {}: {}",
            username,
            if authenticated { "accepted" } else { "rejected" }
        );
        authenticated
    }

    /// Returns an owned copy of the whole username to credential mapping.
    ///
    /// This exposes stored credentials and exists for debugging; prefer
    /// [`CredentialStore::usernames`] when only the names are needed.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.read().clone()
    }

    pub fn is_registered(&self, username: &str) -> bool {
        self.read().contains_key(username)
    }

    /// Registered usernames in ascending order, without their credentials.
    pub fn usernames(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // Every critical section is a single read or a single insert, so a
    // poisoned lock still guards a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, String>> {
        self.users.read().unwrap_or_else(|poisoned| {
            warn!("Credential store lock was poisoned, recovering for read");
            PoisonError::into_inner(poisoned)
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, String>> {
        self.users.write().unwrap_or_else(|poisoned| {
            warn!("Credential store lock was poisoned, recovering for write");
            PoisonError::into_inner(poisoned)
        })
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CredentialStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CredentialStore")
            .field("users", &self.len())
            .finish_non_exhaustive()
    }
}
