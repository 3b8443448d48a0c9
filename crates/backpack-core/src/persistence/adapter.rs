//! Collection Persistence Adapter
//!
//! Stores the whole collection as one JSON array under a single key.
//! `load` and `save` never fail: loading falls back to the seed and
//! failed writes are logged and dropped.

use log::{debug, warn};

use super::traits::KeyValueStorage;
use crate::config::BackpackConfig;
use crate::domain::Collection;
use crate::error::{StorageError, StorageResult};

pub struct Persistence<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> Persistence<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn from_config(storage: S, config: &BackpackConfig) -> Self {
        Self::new(storage, config.storage_key.clone())
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read and decode the slot. `Ok(None)` when the slot is empty.
    pub fn try_load(&self) -> StorageResult<Option<Collection>> {
        let Some(raw) = self.storage.get_item(&self.key)? else {
            return Ok(None);
        };
        Self::decode(&raw).map(Some)
    }

    /// Restore the saved collection, or the seed if there is nothing usable
    pub fn load(&self) -> Collection {
        match self.try_load() {
            Ok(Some(collection)) => {
                debug!("[STORAGE] loaded {} items from `{}`", collection.len(), self.key);
                collection
            }
            Ok(None) => {
                debug!("[STORAGE] slot `{}` empty, using seed", self.key);
                Collection::seed()
            }
            Err(e) => {
                warn!("[STORAGE] {}; using seed", e);
                Collection::seed()
            }
        }
    }

    /// Serialize a collection into the slot format
    pub fn encode(collection: &Collection) -> StorageResult<String> {
        serde_json::to_string(collection).map_err(StorageError::Encode)
    }

    /// Parse a slot payload. Anything the store could not have written is rejected.
    pub fn decode(raw: &str) -> StorageResult<Collection> {
        let collection: Collection = serde_json::from_str(raw).map_err(StorageError::Decode)?;
        if let Some(id) = collection.duplicate_id() {
            return Err(StorageError::DuplicateId(id));
        }
        if let Some((id, reason)) = collection.iter().find_map(|item| item.defect().map(|reason| (item.id, reason))) {
            return Err(StorageError::InvalidItem { id, reason });
        }
        Ok(collection)
    }

    /// Overwrite the slot with an already encoded payload
    pub fn write_raw(&self, payload: &str) -> StorageResult<()> {
        self.storage.set_item(&self.key, payload)
    }

    pub fn try_save(&self, collection: &Collection) -> StorageResult<()> {
        let payload = Self::encode(collection)?;
        self.write_raw(&payload)
    }

    /// Best-effort save. The in-memory collection stays authoritative.
    pub fn save(&self, collection: &Collection) {
        match self.try_save(collection) {
            Ok(()) => debug!("[STORAGE] saved {} items to `{}`", collection.len(), self.key),
            Err(e) => warn!("[STORAGE] save dropped: {}", e),
        }
    }

    /// Save unless `previous` is already the exact payload in the slot.
    ///
    /// Returns the payload the slot now holds as far as we know, to be passed
    /// back in on the next call. A failed write keeps `previous` so the next
    /// change retries.
    pub fn save_changed(&self, collection: &Collection, previous: Option<String>) -> Option<String> {
        let payload = match Self::encode(collection) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("[STORAGE] save dropped: {}", e);
                return previous;
            }
        };
        if previous.as_deref() == Some(payload.as_str()) {
            return previous;
        }
        match self.write_raw(&payload) {
            Ok(()) => {
                debug!("[STORAGE] saved {} items to `{}`", collection.len(), self.key);
                Some(payload)
            }
            Err(e) => {
                warn!("[STORAGE] save dropped: {}", e);
                previous
            }
        }
    }

    pub fn clear(&self) -> StorageResult<()> {
        self.storage.remove_item(&self.key)
    }
}
