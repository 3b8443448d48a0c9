//! Browser Storage Backend
//!
//! `KeyValueStorage` over `window.localStorage`.

use backpack_core::{KeyValueStorage, StorageError, StorageResult};
use wasm_bindgen::JsValue;

pub struct BrowserStorage {
    inner: Option<web_sys::Storage>,
}

impl BrowserStorage {
    /// Bind to `window.localStorage`. Missing storage (sandboxed iframe,
    /// disabled cookies) is tolerated; every call then reports `Unavailable`.
    pub fn local() -> Self {
        let inner = web_sys::window().and_then(|window| window.local_storage().ok().flatten());
        if inner.is_none() {
            log::warn!("[STORAGE] localStorage unavailable, changes will not persist");
        }
        Self { inner }
    }

    fn storage(&self) -> StorageResult<&web_sys::Storage> {
        self.inner
            .as_ref()
            .ok_or_else(|| StorageError::Unavailable("window.localStorage".to_string()))
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        self.storage()?.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: js_reason(&e),
        })
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.storage()?.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: js_reason(&e),
        })
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        self.storage()?.remove_item(key).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: js_reason(&e),
        })
    }
}

fn js_reason(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
