//! Summary Bar Component
//!
//! Title, live totals, and the reset / clear-packed actions.

use leptos::prelude::*;
use backpack_core::format_kg;

use crate::store::{store_clear_packed, store_reset, use_app_store, AppStateStoreFields};

#[component]
pub fn SummaryBar() -> impl IntoView {
    let store = use_app_store();

    // Recomputed from the collection on every change
    let item_count = move || store.backpack().read().collection().len();
    let total_qty = move || store.backpack().read().collection().total_qty();
    let total_weight = move || format_kg(store.backpack().read().collection().total_weight());

    view! {
        <header class="summary-bar">
            <div>
                <h1 class="title">"🎒 Backpack"</h1>
                <div class="summary">
                    "Items: " <strong>{item_count}</strong>
                    " • Total qty: " <strong>{total_qty}</strong>
                    " • Total weight: " <strong>{total_weight} " kg"</strong>
                </div>
            </div>
            <div class="summary-actions">
                <button
                    class="small-btn"
                    title="Reset to sample items"
                    on:click=move |_| store_reset(&store)
                >
                    "Reset"
                </button>
                <button
                    class="small-btn"
                    title="Remove all packed items"
                    on:click=move |_| store_clear_packed(&store)
                >
                    "Clear packed"
                </button>
            </div>
        </header>
    }
}
