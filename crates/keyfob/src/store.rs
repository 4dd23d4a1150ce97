//! The credential store.
//!
//! [`PasswordStore`] layers the user-facing contract over a [`Keychain`]
//! backend: service/label defaults with per-call overrides, absence as a
//! normal outcome, idempotent delete, and create-or-replace writes.
//!
//! The OS keychain has no atomic upsert; its primitives are add (which
//! refuses duplicates), query, and remove. A write therefore first tries a
//! plain add and, on a duplicate, removes the existing record and adds
//! again. There is no locking above the backend, so a concurrent `get` can
//! observe the record absent between those two steps.

use tracing::debug;

use crate::backend::{Keychain, StoreStatus};
use crate::config::{Scope, StoreConfig};
use crate::error::{CredentialError, Result};
use crate::secret::SecretString;
use crate::types::CredentialKey;

/// Keyed get/set/delete of one secret string per
/// `(service, label, account)` triple.
///
/// Every call round-trips to the backend; nothing is cached and nothing is
/// retried. Failures come back as [`CredentialError`] untouched - logging
/// them is the caller's concern.
pub struct PasswordStore<B: Keychain> {
    config: StoreConfig,
    backend: B,
}

impl<B: Keychain> PasswordStore<B> {
    /// Create a store with the given defaults and backend.
    pub fn new(config: StoreConfig, backend: B) -> Self {
        Self { config, backend }
    }

    /// The configured defaults.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Retrieve the secret for `account` under the configured service and
    /// label. Returns `Ok(None)` if no record exists.
    pub fn get(&self, account: &str) -> Result<Option<SecretString>> {
        self.get_scoped(account, Scope::default())
    }

    /// [`get`](Self::get) with per-call service/label overrides.
    pub fn get_scoped(&self, account: &str, scope: Scope<'_>) -> Result<Option<SecretString>> {
        let key = self.resolve(account, scope)?;
        debug!(%key, "get");

        match self.backend.query(&key) {
            Ok(value) => Ok(Some(value)),
            Err(StoreStatus::ItemNotFound) => Ok(None),
            Err(status) => Err(CredentialError::store("query", account, status)),
        }
    }

    /// Store `value` for `account`, replacing any existing record; `None`
    /// deletes the record instead (and succeeds if there is none).
    pub fn set(&self, account: &str, value: Option<&str>) -> Result<()> {
        self.set_scoped(account, value, Scope::default())
    }

    /// [`set`](Self::set) with per-call service/label overrides.
    pub fn set_scoped(&self, account: &str, value: Option<&str>, scope: Scope<'_>) -> Result<()> {
        let key = self.resolve(account, scope)?;

        let Some(value) = value else {
            debug!(%key, "delete");
            return match self.backend.remove(&key) {
                // Deleting a record that was never there is fine.
                Ok(()) | Err(StoreStatus::ItemNotFound) => Ok(()),
                Err(status) => Err(CredentialError::store("remove", account, status)),
            };
        };

        debug!(%key, "set");
        let secret = SecretString::new(value);
        match self.backend.add(&key, &secret) {
            Ok(()) => Ok(()),
            Err(StoreStatus::DuplicateItem) => {
                // A record already exists for this exact triple: remove it
                // and add the replacement. Not-found on the removal means
                // the record vanished mid-operation, which is a real error
                // here, unlike in the delete path above.
                debug!(%key, "replacing existing record");
                self.backend
                    .remove(&key)
                    .map_err(|status| CredentialError::store("remove", account, status))?;
                self.backend
                    .add(&key, &secret)
                    .map_err(|status| CredentialError::store("add", account, status))
            }
            Err(status) => Err(CredentialError::store("add", account, status)),
        }
    }

    /// Delete the record for `account`. Equivalent to
    /// [`set(account, None)`](Self::set).
    pub fn delete(&self, account: &str) -> Result<()> {
        self.set(account, None)
    }

    /// Whether a record exists for `account` under the configured defaults.
    pub fn exists(&self, account: &str) -> Result<bool> {
        Ok(self.get(account)?.is_some())
    }

    /// Resolve the full key for a call, falling back to the configured
    /// defaults for fields the scope leaves unset.
    fn resolve(&self, account: &str, scope: Scope<'_>) -> Result<CredentialKey> {
        let service = scope.service.unwrap_or(&self.config.service);
        let label = scope.label.unwrap_or(&self.config.label);

        if service.is_empty() {
            return Err(CredentialError::Configuration { field: "service" });
        }
        if label.is_empty() {
            return Err(CredentialError::Configuration { field: "label" });
        }

        Ok(CredentialKey::new(service, label, account))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memory::MemoryKeychain;

    fn test_store() -> PasswordStore<MemoryKeychain> {
        PasswordStore::new(
            StoreConfig::new("MyService", "MyLabel"),
            MemoryKeychain::new(),
        )
    }

    fn value_of(secret: Option<SecretString>) -> String {
        secret.expect("record should exist").expose_secret().to_string()
    }

    #[test]
    fn get_after_set_returns_the_value() {
        let store = test_store();
        store.set("user1", Some("secret-a")).unwrap();
        assert_eq!(value_of(store.get("user1").unwrap()), "secret-a");
    }

    #[test]
    fn set_none_deletes_the_record() {
        let store = test_store();
        store.set("user1", Some("secret-a")).unwrap();
        store.set("user1", None).unwrap();
        assert!(store.get("user1").unwrap().is_none());
    }

    #[test]
    fn deleting_a_missing_record_succeeds() {
        let store = test_store();
        store.set("never-written", None).unwrap();
        store.delete("never-written").unwrap();
    }

    #[test]
    fn get_on_a_fresh_store_returns_none() {
        let store = test_store();
        assert!(store.get("nonexistent-account").unwrap().is_none());
    }

    #[test]
    fn overwrite_returns_the_latest_value() {
        let store = test_store();
        store.set("user1", Some("first")).unwrap();
        store.set("user1", Some("second")).unwrap();
        assert_eq!(value_of(store.get("user1").unwrap()), "second");
    }

    #[test]
    fn set_does_not_clobber_sibling_accounts() {
        // The replace path removes by the full (service, label, account)
        // triple, so writing one account never deletes another account's
        // record under the same service and label.
        let store = test_store();
        store.set("alice", Some("pw-a")).unwrap();
        store.set("bob", Some("pw-b")).unwrap();
        store.set("bob", Some("pw-b2")).unwrap();

        assert_eq!(value_of(store.get("alice").unwrap()), "pw-a");
        assert_eq!(value_of(store.get("bob").unwrap()), "pw-b2");
    }

    #[test]
    fn empty_service_is_a_configuration_error() {
        let store = PasswordStore::new(StoreConfig::new("", "MyLabel"), MemoryKeychain::new());

        let err = store.get("user1").unwrap_err();
        assert!(matches!(
            err,
            CredentialError::Configuration { field: "service" }
        ));

        let err = store.set("user1", Some("v")).unwrap_err();
        assert!(matches!(
            err,
            CredentialError::Configuration { field: "service" }
        ));
    }

    #[test]
    fn empty_label_is_a_configuration_error() {
        let store = PasswordStore::new(StoreConfig::new("MyService", ""), MemoryKeychain::new());

        let err = store.set("user1", Some("v")).unwrap_err();
        assert!(matches!(
            err,
            CredentialError::Configuration { field: "label" }
        ));
    }

    #[test]
    fn scope_override_unblocks_an_empty_default() {
        let store = PasswordStore::new(StoreConfig::new("", ""), MemoryKeychain::new());
        let scope = Scope {
            service: Some("svc"),
            label: Some("lbl"),
        };
        store.set_scoped("user1", Some("v"), scope).unwrap();
        assert_eq!(value_of(store.get_scoped("user1", scope).unwrap()), "v");
    }

    #[test]
    fn scoped_records_do_not_alias_default_records() {
        let store = test_store();
        store.set("user1", Some("default-scope")).unwrap();
        store
            .set_scoped("user1", Some("other-scope"), Scope::service("other"))
            .unwrap();

        assert_eq!(value_of(store.get("user1").unwrap()), "default-scope");
        assert_eq!(
            value_of(store.get_scoped("user1", Scope::service("other")).unwrap()),
            "other-scope"
        );

        // Deleting in one scope leaves the other intact.
        store
            .set_scoped("user1", None, Scope::service("other"))
            .unwrap();
        assert_eq!(value_of(store.get("user1").unwrap()), "default-scope");
    }

    #[test]
    fn exists_tracks_the_record_lifecycle() {
        let store = test_store();
        assert!(!store.exists("user1").unwrap());

        store.set("user1", Some("v")).unwrap();
        assert!(store.exists("user1").unwrap());

        store.delete("user1").unwrap();
        assert!(!store.exists("user1").unwrap());
    }

    #[test]
    fn placeholder_defaults_round_trip() {
        // Documented scenario: placeholder defaults, set, get, delete, get.
        let store = PasswordStore::new(StoreConfig::default(), MemoryKeychain::new());
        store.set("user1", Some("secret-a")).unwrap();
        assert_eq!(value_of(store.get("user1").unwrap()), "secret-a");

        store.set("user1", None).unwrap();
        assert!(store.get("user1").unwrap().is_none());
    }

    #[test]
    fn backend_failures_carry_account_and_status() {
        use crate::backend::BackendResult;

        struct FailingKeychain;

        impl Keychain for FailingKeychain {
            fn add(&self, _: &CredentialKey, _: &SecretString) -> BackendResult<()> {
                Err(StoreStatus::AccessDenied)
            }
            fn query(&self, _: &CredentialKey) -> BackendResult<SecretString> {
                Err(StoreStatus::AccessDenied)
            }
            fn remove(&self, _: &CredentialKey) -> BackendResult<()> {
                Err(StoreStatus::Other("keychain locked".to_string()))
            }
        }

        let store = PasswordStore::new(StoreConfig::new("svc", "lbl"), FailingKeychain);

        match store.get("user1").unwrap_err() {
            CredentialError::Store {
                operation,
                account,
                status,
            } => {
                assert_eq!(operation, "query");
                assert_eq!(account, "user1");
                assert_eq!(status, StoreStatus::AccessDenied);
            }
            other => panic!("unexpected error: {other}"),
        }

        match store.set("user1", None).unwrap_err() {
            CredentialError::Store {
                operation, status, ..
            } => {
                assert_eq!(operation, "remove");
                assert_eq!(status, StoreStatus::Other("keychain locked".to_string()));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
