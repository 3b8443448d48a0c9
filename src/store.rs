//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;
use backpack_core::{BackpackConfig, Collection, ItemDraft, ItemId, ItemStore};

/// Application state, provided once via context
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// The item collection and its id counter
    pub backpack: ItemStore,
    /// Storage key and form defaults
    pub config: BackpackConfig,
}

impl AppState {
    pub fn new(collection: Collection, config: BackpackConfig) -> Self {
        Self {
            backpack: ItemStore::new(collection),
            config,
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Add an item from the form draft. `None` if the name was blank.
pub fn store_add_item(store: &AppStore, draft: &ItemDraft) -> Option<ItemId> {
    store.backpack().write().add(draft)
}

/// Flip the packed flag of an item by ID
pub fn store_toggle_packed(store: &AppStore, item_id: ItemId) {
    store.backpack().write().toggle_packed(item_id);
}

/// Remove an item from the store by ID
pub fn store_remove_item(store: &AppStore, item_id: ItemId) {
    store.backpack().write().remove(item_id);
}

/// Remove every packed item
pub fn store_clear_packed(store: &AppStore) {
    let removed = store.backpack().write().clear_packed();
    log::info!("[APP] cleared {} packed items", removed);
}

/// Replace everything with the sample items
pub fn store_reset(store: &AppStore) {
    store.backpack().write().reset();
    log::info!("[APP] reset to sample items");
}
