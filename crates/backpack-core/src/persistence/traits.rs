//! Persistence Layer - Core Traits
//!
//! Defines the string key-value interface the adapter writes through.
//! Implementations can use browser localStorage, in-memory maps, etc.

use crate::error::StorageResult;

/// Minimal synchronous key-value store, shaped after the Web Storage API
pub trait KeyValueStorage {
    /// Read a slot. `Ok(None)` means the key is absent.
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    /// Write a slot, replacing any previous value
    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Delete a slot. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> StorageResult<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for &S {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        (**self).remove_item(key)
    }
}
