//! Typed access to the OS keychain for password-like secrets.
//!
//! Each credential is one secret string addressed by a
//! `(service, label, account)` triple. A [`PasswordStore`] holds the
//! service/label defaults and a [`Keychain`] backend; individual calls may
//! override the defaults through a [`Scope`].
//!
//! Absence is a normal outcome: `get` on a missing record returns `Ok(None)`,
//! and writing `None` deletes the record (idempotently).

pub mod backend;
pub mod config;
pub mod error;
#[cfg(target_os = "macos")]
pub mod keychain;
pub mod memory;
pub mod secret;
pub mod store;
pub mod types;

pub use backend::{Keychain, StoreStatus};
pub use config::{Scope, StoreConfig};
pub use error::{CredentialError, Result};
#[cfg(target_os = "macos")]
pub use keychain::MacKeychain;
pub use memory::MemoryKeychain;
pub use secret::SecretString;
pub use store::PasswordStore;
pub use types::CredentialKey;
