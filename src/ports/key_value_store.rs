//! Key-Value Store Port - string values under string keys.
//!
//! The local persistence primitive the form storage sits on. Mirrors the
//! get/set/remove surface of a device key-value store.

use async_trait::async_trait;

use super::form_storage::StorageError;

/// Port for a flat, string-keyed store of string values.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// Returns the stored value, or `None` when the key was never set.
    async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Stores `value` under `key`, replacing any previous value.
    async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removes `key`. Removing a missing key is not an error.
    async fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}
