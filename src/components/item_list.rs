//! Item List Component

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::store::{use_app_store, AppStateStoreFields};

/// All local items, or a placeholder when there are none
#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_store();
    let is_empty = move || store.items().read().is_empty();

    view! {
        <Show
            when=move || !is_empty()
            fallback=|| view! { <p class="empty-list">"No items found."</p> }
        >
            <ul class="item-list">
                <For
                    each=move || store.items().get()
                    key=|item| item.id
                    children=move |item| view! { <ItemRow item=item /> }
                />
            </ul>
        </Show>
    }
}
