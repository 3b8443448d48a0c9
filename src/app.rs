//! Backpack Frontend App
//!
//! Loads the saved collection, provides the store, and keeps localStorage in
//! step with every change.

use leptos::prelude::*;
use reactive_stores::Store;
use backpack_core::{BackpackConfig, Persistence};

use crate::components::{ItemList, NewItemForm, SummaryBar};
use crate::storage::BrowserStorage;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let config = BackpackConfig::default();
    let persistence = Persistence::from_config(BrowserStorage::local(), &config);

    let initial = persistence.load();
    log::info!("[APP] Loaded {} items", initial.len());

    let store = Store::new(AppState::new(initial, config));
    provide_context(store);

    // Save after every change; the effect's previous value is the last payload written
    Effect::new(move |last: Option<Option<String>>| {
        let backpack = store.backpack().read();
        persistence.save_changed(backpack.collection(), last.flatten())
    });

    view! {
        <div class="app">
            <SummaryBar />

            <NewItemForm />

            <ItemList />

            <footer class="app-footer">
                "Tip: check the items you've packed and clear them before leaving."
            </footer>
        </div>
    }
}
