//! macOS keychain backend.
//!
//! Stores each credential as a generic-password item via Security.framework,
//! with the key's service, label, and account recorded as the item's
//! attributes. OSStatus codes are translated into the crate's
//! [`StoreStatus`] vocabulary; `errSecItemNotFound` and `errSecDuplicateItem`
//! are the two the store layer reacts to.

use core_foundation::data::CFData;
use security_framework::base::Error as SecError;
use security_framework::item::{
    ItemAddOptions, ItemAddValue, ItemClass, ItemSearchOptions, Limit, Reference, SearchResult,
};
use tracing::debug;

use crate::backend::{BackendResult, Keychain, StoreStatus};
use crate::secret::SecretString;
use crate::types::CredentialKey;

const ERR_SEC_ITEM_NOT_FOUND: i32 = -25300;
const ERR_SEC_DUPLICATE_ITEM: i32 = -25299;
const ERR_SEC_AUTH_FAILED: i32 = -25293;
const ERR_SEC_INTERACTION_NOT_ALLOWED: i32 = -25308;

/// A [`Keychain`] backed by the user's default macOS keychain.
#[derive(Debug, Default)]
pub struct MacKeychain;

impl MacKeychain {
    pub fn new() -> Self {
        Self
    }

    fn search(key: &CredentialKey) -> ItemSearchOptions {
        let mut options = ItemSearchOptions::new();
        options
            .class(ItemClass::generic_password())
            .service(&key.service)
            .label(&key.label)
            .account(&key.account)
            .limit(Limit::Max(1));
        options
    }
}

fn map_err(err: SecError) -> StoreStatus {
    match err.code() {
        ERR_SEC_ITEM_NOT_FOUND => StoreStatus::ItemNotFound,
        ERR_SEC_DUPLICATE_ITEM => StoreStatus::DuplicateItem,
        ERR_SEC_AUTH_FAILED | ERR_SEC_INTERACTION_NOT_ALLOWED => StoreStatus::AccessDenied,
        code => StoreStatus::Other(format!("OSStatus {code}: {err}")),
    }
}

impl Keychain for MacKeychain {
    fn add(&self, key: &CredentialKey, value: &SecretString) -> BackendResult<()> {
        debug!(%key, "adding keychain item");
        let data = CFData::from_buffer(value.expose_secret().as_bytes());
        ItemAddOptions::new(ItemAddValue::Data {
            class: ItemClass::generic_password(),
            data,
        })
        .set_service(&key.service)
        .set_label(&key.label)
        .set_account_name(&key.account)
        .add()
        .map_err(map_err)
    }

    fn query(&self, key: &CredentialKey) -> BackendResult<SecretString> {
        debug!(%key, "querying keychain item");
        let results = Self::search(key).load_data(true).search().map_err(map_err)?;

        for result in results {
            if let SearchResult::Data(data) = result {
                let value = String::from_utf8(data).map_err(|e| {
                    StoreStatus::Other(format!("keychain data is not valid UTF-8: {e}"))
                })?;
                return Ok(SecretString::new(value));
            }
        }
        Err(StoreStatus::ItemNotFound)
    }

    fn remove(&self, key: &CredentialKey) -> BackendResult<()> {
        debug!(%key, "removing keychain item");
        let results = Self::search(key).load_refs(true).search().map_err(map_err)?;

        for result in results {
            if let SearchResult::Ref(Reference::KeychainItem(item)) = result {
                item.delete();
                return Ok(());
            }
        }
        Err(StoreStatus::ItemNotFound)
    }
}
