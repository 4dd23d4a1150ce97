//! Core addressing types.

use std::fmt;

/// The unique address of one stored credential.
///
/// The OS store holds at most one record per `(service, label, account)`
/// triple. The key carries no secret material, so it is safe to log, clone,
/// and compare freely.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CredentialKey {
    /// Logical namespace for the application's credentials.
    pub service: String,

    /// Human-readable descriptor for the entry.
    pub label: String,

    /// Lookup key within the `(service, label)` partition.
    pub account: String,
}

impl CredentialKey {
    pub fn new(
        service: impl Into<String>,
        label: impl Into<String>,
        account: impl Into<String>,
    ) -> Self {
        Self {
            service: service.into(),
            label: label.into(),
            account: account.into(),
        }
    }
}

impl fmt::Display for CredentialKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.service, self.label, self.account)
    }
}
