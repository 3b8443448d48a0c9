//! Item List Component
//!
//! Renders the collection newest first, or a hint when it is empty.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_store();

    let items = move || store.backpack().read().collection().items().to_vec();
    let is_empty = move || store.backpack().read().collection().is_empty();

    view! {
        <div class="item-list">
            <Show when=is_empty>
                <div class="empty-hint">"No items yet — add something to your backpack."</div>
            </Show>

            <For
                each=items
                // packed is the only field that changes after creation
                key=|item| (item.id, item.packed)
                children=move |item| view! { <ItemRow item=item /> }
            />
        </div>
    }
}
