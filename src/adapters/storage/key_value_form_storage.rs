//! Form storage on top of any `KeyValueStore`.
//!
//! The snapshot is the JSON of the entity under one fixed key.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::form::FormDataEntity;
use crate::ports::{FormStorage, KeyValueStore, StorageError};

/// Key holding the last submitted form.
pub const FORM_DATA_KEY: &str = "@form-pdf/form-data";

/// `FormStorage` that serializes the entity into a key-value store.
#[derive(Clone)]
pub struct KeyValueFormStorage {
    store: Arc<dyn KeyValueStore>,
}

impl KeyValueFormStorage {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl FormStorage for KeyValueFormStorage {
    async fn save_form_data(&self, data: &FormDataEntity) -> Result<(), StorageError> {
        let json = serde_json::to_string(data)
            .map_err(|e| StorageError::SerializationFailed(e.to_string()))?;

        self.store.set_item(FORM_DATA_KEY, &json).await
    }

    async fn load_form_data(&self) -> Result<Option<FormDataEntity>, StorageError> {
        let Some(raw) = self.store.get_item(FORM_DATA_KEY).await? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }

        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| StorageError::DeserializationFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::{FileKeyValueStore, InMemoryKeyValueStore};
    use proptest::prelude::*;
    use tempfile::TempDir;

    fn memory_storage() -> (KeyValueFormStorage, InMemoryKeyValueStore) {
        let store = InMemoryKeyValueStore::new();
        (KeyValueFormStorage::new(Arc::new(store.clone())), store)
    }

    #[tokio::test]
    async fn load_returns_none_before_any_save() {
        let (storage, _) = memory_storage();
        assert_eq!(storage.load_form_data().await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_then_load_returns_equal_entity() {
        let (storage, _) = memory_storage();
        let entity = FormDataEntity::new("abc", 42, "opcion1");

        storage.save_form_data(&entity).await.unwrap();

        assert_eq!(storage.load_form_data().await.unwrap(), Some(entity));
    }

    #[tokio::test]
    async fn last_write_wins() {
        let (storage, store) = memory_storage();

        storage
            .save_form_data(&FormDataEntity::new("first", 1, "Opción 1"))
            .await
            .unwrap();
        storage
            .save_form_data(&FormDataEntity::new("second", 2, "Opción 2"))
            .await
            .unwrap();

        assert_eq!(store.len().await, 1);
        assert_eq!(
            storage.load_form_data().await.unwrap(),
            Some(FormDataEntity::new("second", 2, "Opción 2"))
        );
    }

    #[tokio::test]
    async fn stored_value_is_camel_case_json() {
        let (storage, store) = memory_storage();
        storage
            .save_form_data(&FormDataEntity::new("abc", 42, "Opción 1"))
            .await
            .unwrap();

        let raw = store.get_item(FORM_DATA_KEY).await.unwrap().unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(json["textValue"], "abc");
        assert_eq!(json["numericValue"], 42);
    }

    #[tokio::test]
    async fn corrupted_snapshot_propagates_deserialization_error() {
        let (storage, store) = memory_storage();
        store.set_item(FORM_DATA_KEY, "{not json").await.unwrap();

        let result = storage.load_form_data().await;

        assert!(matches!(result, Err(StorageError::DeserializationFailed(_))));
    }

    #[tokio::test]
    async fn file_backed_storage_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let entity = FormDataEntity::new("persisted", 7, "Opción 3");

        KeyValueFormStorage::new(Arc::new(FileKeyValueStore::new(temp_dir.path())))
            .save_form_data(&entity)
            .await
            .unwrap();

        let reopened = KeyValueFormStorage::new(Arc::new(FileKeyValueStore::new(temp_dir.path())));
        assert_eq!(reopened.load_form_data().await.unwrap(), Some(entity));
    }

    proptest! {
        #[test]
        fn round_trip_preserves_any_entity(text in ".*", numeric in any::<u64>(), option in ".+") {
            let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
            let (storage, _) = memory_storage();
            let entity = FormDataEntity::new(text, numeric, option);

            let loaded = rt.block_on(async {
                storage.save_form_data(&entity).await.unwrap();
                storage.load_form_data().await.unwrap()
            });

            prop_assert_eq!(loaded, Some(entity));
        }
    }
}
