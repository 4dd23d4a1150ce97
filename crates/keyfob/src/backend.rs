//! The seam to the OS secure store.
//!
//! The keychain API surface this crate depends on is three primitives with a
//! small status vocabulary: add (which refuses duplicates), query, and
//! remove. Everything else - default resolution, idempotent delete, the
//! delete-then-recreate replace - is layered on top in [`crate::store`].

use thiserror::Error;

use crate::secret::SecretString;
use crate::types::CredentialKey;

/// Raw status codes a backend can fail with.
///
/// Carried verbatim into [`crate::CredentialError::Store`] for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreStatus {
    /// No record matches the key.
    #[error("item not found")]
    ItemNotFound,

    /// A record already exists for the key (add only).
    #[error("duplicate item")]
    DuplicateItem,

    /// The OS store refused access to the item.
    #[error("access denied")]
    AccessDenied,

    /// Any other platform failure, with the platform's own description.
    #[error("{0}")]
    Other(String),
}

/// Result of a single backend primitive.
pub type BackendResult<T> = std::result::Result<T, StoreStatus>;

/// A secure credential store holding at most one record per
/// [`CredentialKey`].
///
/// Implementations map these primitives onto the platform keychain (see
/// [`crate::keychain`] on macOS) or an in-memory table
/// ([`crate::MemoryKeychain`]). The store assumes the backend serializes
/// concurrent access itself; no locking is added above this trait.
pub trait Keychain: Send + Sync {
    /// Create a new record. Fails with [`StoreStatus::DuplicateItem`] if one
    /// already exists for the key.
    fn add(&self, key: &CredentialKey, value: &SecretString) -> BackendResult<()>;

    /// Fetch the record's payload. Fails with [`StoreStatus::ItemNotFound`]
    /// if no record matches.
    fn query(&self, key: &CredentialKey) -> BackendResult<SecretString>;

    /// Delete the record. Fails with [`StoreStatus::ItemNotFound`] if no
    /// record matches.
    fn remove(&self, key: &CredentialKey) -> BackendResult<()>;
}
