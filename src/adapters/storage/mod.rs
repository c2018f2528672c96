//! Storage Adapters
//!
//! Implementations of the `KeyValueStore` and `FormStorage` ports.
//!
//! ## Available Adapters
//!
//! - **FileKeyValueStore** - one file per key on disk
//! - **InMemoryKeyValueStore** - items in memory (testing/development)
//! - **KeyValueFormStorage** - form snapshot as JSON in either store
//!
//! ## Usage
//!
//! ```ignore
//! use adapters::storage::{FileKeyValueStore, KeyValueFormStorage};
//!
//! let store = Arc::new(FileKeyValueStore::new("./data/kv"));
//! let storage = KeyValueFormStorage::new(store);
//! ```

mod file_key_value_store;
mod in_memory_key_value_store;
mod key_value_form_storage;

pub use file_key_value_store::FileKeyValueStore;
pub use in_memory_key_value_store::InMemoryKeyValueStore;
pub use key_value_form_storage::{KeyValueFormStorage, FORM_DATA_KEY};
