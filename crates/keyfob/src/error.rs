//! Error types for credential operations.

use thiserror::Error;

use crate::backend::StoreStatus;

/// Errors a [`crate::PasswordStore`] operation can fail with.
///
/// A missing record is not represented here: `get` returns `Ok(None)` for
/// absence, and deleting a record that does not exist succeeds. Errors are
/// returned to the caller untouched - nothing is retried or swallowed - so
/// the embedding application decides how to log and surface them.
#[derive(Debug, Error)]
pub enum CredentialError {
    /// The resolved service or label was empty. Pass one explicitly in the
    /// call's [`crate::Scope`] or set it in [`crate::StoreConfig`].
    #[error("no {field} configured: pass one in the call or set it in StoreConfig")]
    Configuration { field: &'static str },

    /// The OS store returned a status the operation could not handle.
    #[error("keychain {operation} failed for account `{account}`: {status}")]
    Store {
        /// Which primitive failed ("query", "add", "remove", ...).
        operation: &'static str,
        /// The account the operation was addressing.
        account: String,
        /// The raw backend status, for diagnostics.
        status: StoreStatus,
    },
}

impl CredentialError {
    pub(crate) fn store(operation: &'static str, account: &str, status: StoreStatus) -> Self {
        Self::Store {
            operation,
            account: account.to_string(),
            status,
        }
    }
}

/// Convenience result alias for credential operations.
pub type Result<T> = std::result::Result<T, CredentialError>;
