//! In-memory keychain backend.
//!
//! Backs tests and platforms without an OS keychain. Implements the same
//! status vocabulary as the real backends, including the duplicate refusal
//! on `add` that the store's replace path depends on.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::backend::{BackendResult, Keychain, StoreStatus};
use crate::secret::SecretString;
use crate::types::CredentialKey;

/// A [`Keychain`] holding records in a process-local table.
///
/// Nothing is persisted or protected at rest; do not use it for real
/// credentials.
#[derive(Default)]
pub struct MemoryKeychain {
    items: RwLock<HashMap<CredentialKey, SecretString>>,
}

impl MemoryKeychain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl Keychain for MemoryKeychain {
    fn add(&self, key: &CredentialKey, value: &SecretString) -> BackendResult<()> {
        let mut items = self.items.write();
        if items.contains_key(key) {
            return Err(StoreStatus::DuplicateItem);
        }
        items.insert(key.clone(), value.clone());
        Ok(())
    }

    fn query(&self, key: &CredentialKey) -> BackendResult<SecretString> {
        self.items
            .read()
            .get(key)
            .cloned()
            .ok_or(StoreStatus::ItemNotFound)
    }

    fn remove(&self, key: &CredentialKey) -> BackendResult<()> {
        match self.items.write().remove(key) {
            Some(_) => Ok(()),
            None => Err(StoreStatus::ItemNotFound),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(account: &str) -> CredentialKey {
        CredentialKey::new("svc", "lbl", account)
    }

    #[test]
    fn add_then_query_returns_value() {
        let kc = MemoryKeychain::new();
        kc.add(&key("alice"), &SecretString::new("pw")).unwrap();
        assert_eq!(kc.query(&key("alice")).unwrap().expose_secret(), "pw");
    }

    #[test]
    fn add_refuses_duplicates() {
        let kc = MemoryKeychain::new();
        kc.add(&key("alice"), &SecretString::new("pw")).unwrap();
        let err = kc.add(&key("alice"), &SecretString::new("pw2")).unwrap_err();
        assert_eq!(err, StoreStatus::DuplicateItem);
        // The original value is untouched.
        assert_eq!(kc.query(&key("alice")).unwrap().expose_secret(), "pw");
    }

    #[test]
    fn query_missing_is_not_found() {
        let kc = MemoryKeychain::new();
        assert_eq!(kc.query(&key("ghost")).unwrap_err(), StoreStatus::ItemNotFound);
    }

    #[test]
    fn remove_missing_is_not_found() {
        let kc = MemoryKeychain::new();
        assert_eq!(kc.remove(&key("ghost")).unwrap_err(), StoreStatus::ItemNotFound);
    }

    #[test]
    fn remove_deletes_only_the_addressed_key() {
        let kc = MemoryKeychain::new();
        kc.add(&key("alice"), &SecretString::new("a")).unwrap();
        kc.add(&key("bob"), &SecretString::new("b")).unwrap();

        kc.remove(&key("alice")).unwrap();
        assert_eq!(kc.len(), 1);
        assert_eq!(kc.query(&key("bob")).unwrap().expose_secret(), "b");
    }
}
