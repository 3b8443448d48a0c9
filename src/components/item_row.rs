//! Item Row Component
//!
//! One item in the list: packed checkbox, details, remove button.

use leptos::prelude::*;
use backpack_core::{format_kg, Item};

use crate::store::{store_remove_item, store_toggle_packed, use_app_store};

/// A single item row
#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let store = use_app_store();

    let id = item.id;
    let packed = item.packed;
    let meta = item_meta(&item);
    let name = item.name;
    let row_class = if packed { "item-row packed" } else { "item-row" };

    view! {
        <div class=row_class>
            <div class="item-left">
                <input
                    type="checkbox"
                    aria-label=format!("Packed {}", name)
                    prop:checked=packed
                    on:change=move |_| store_toggle_packed(&store, id)
                />
                <div>
                    <div class="item-name">{name.clone()}</div>
                    <div class="item-meta">{meta}</div>
                </div>
            </div>

            <button
                class="remove-btn"
                title="Remove"
                aria-label=format!("Remove {}", name)
                on:click=move |_| store_remove_item(&store, id)
            >
                "Remove"
            </button>
        </div>
    }
}

/// Secondary line under the item name
fn item_meta(item: &Item) -> String {
    format!(
        "qty: {} • {} kg each • subtotal: {} kg",
        item.qty,
        item.weight,
        format_kg(item.subtotal())
    )
}
