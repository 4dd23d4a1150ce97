//! Store configuration and per-call overrides.

use serde::{Deserialize, Serialize};

/// Placeholder service used when no configuration is supplied.
pub const PLACEHOLDER_SERVICE: &str = "MyService";

/// Placeholder label used when no configuration is supplied.
pub const PLACEHOLDER_LABEL: &str = "MyLabel";

/// Default service and label for a [`crate::PasswordStore`].
///
/// These are consulted whenever a call does not override the corresponding
/// field through a [`Scope`]. The `Default` impl fills in placeholder values;
/// applications should construct their own:
///
/// ```
/// use keyfob::StoreConfig;
///
/// let config = StoreConfig::new("com.example.mailer", "Mailer account");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Service recorded on every credential written through the store.
    pub service: String,

    /// Label recorded on every credential written through the store.
    pub label: String,
}

impl StoreConfig {
    pub fn new(service: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            service: service.into(),
            label: label.into(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            service: PLACEHOLDER_SERVICE.to_string(),
            label: PLACEHOLDER_LABEL.to_string(),
        }
    }
}

/// Per-call overrides for the store's configured service and label.
///
/// `None` fields fall back to the [`StoreConfig`] defaults.
#[derive(Debug, Clone, Copy, Default)]
pub struct Scope<'a> {
    pub service: Option<&'a str>,
    pub label: Option<&'a str>,
}

impl<'a> Scope<'a> {
    pub fn service(service: &'a str) -> Self {
        Self {
            service: Some(service),
            label: None,
        }
    }

    pub fn label(label: &'a str) -> Self {
        Self {
            service: None,
            label: Some(label),
        }
    }
}
