//! New Item Form Component
//!
//! Name, quantity and per-unit weight inputs for adding an item.

use leptos::prelude::*;
use backpack_core::ItemDraft;

use crate::store::{store_add_item, use_app_store, AppStateStoreFields};

/// Form for adding a new item to the top of the list
#[component]
pub fn NewItemForm() -> impl IntoView {
    let store = use_app_store();

    // Raw field text; coercion happens in ItemDraft::normalize
    let (name, set_name) = signal(String::new());
    let (qty, set_qty) = signal(String::new());
    let (weight, set_weight) = signal(String::new());

    let reset_fields = move || {
        let config = store.config().read_untracked();
        set_name.set(String::new());
        set_qty.set(config.draft_qty.to_string());
        set_weight.set(config.draft_weight.to_string());
    };
    reset_fields();

    let add_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = ItemDraft::new(name.get(), qty.get(), weight.get());
        if let Some(id) = store_add_item(&store, &draft) {
            log::debug!("[FORM] added #{}", id);
            reset_fields();
        }
    };

    view! {
        <form class="new-item-form" aria-label="Add item form" on:submit=add_item>
            <input
                class="name-input"
                type="text"
                placeholder="Item name (e.g. Phone Charger)"
                aria-label="Item name"
                prop:value=move || name.get()
                on:input=move |ev| set_name.set(event_target_value(&ev))
            />
            <input
                class="qty-input"
                type="number"
                min="1"
                aria-label="Quantity"
                prop:value=move || qty.get()
                on:input=move |ev| set_qty.set(event_target_value(&ev))
            />
            <input
                class="weight-input"
                type="number"
                min="0"
                step="0.1"
                aria-label="Weight per item (kg)"
                prop:value=move || weight.get()
                on:input=move |ev| set_weight.set(event_target_value(&ev))
            />
            <button type="submit">"Add"</button>
        </form>
    }
}
