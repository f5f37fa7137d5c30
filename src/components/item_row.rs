//! Item Row Component

use leptos::prelude::*;

use item_sync::Item;

use crate::context::use_app_context;

/// A single item with its delete button
#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let ctx = use_app_context();
    let id = item.id;
    let price = item.price_label();

    view! {
        <li class="item-row">
            <div class="item-text">
                <span class="item-name">{item.name}</span>
                <span class="item-price">{price}</span>
            </div>
            <button
                class="delete-btn"
                aria-label="delete"
                on:click=move |_| ctx.remove(id)
            >
                "×"
            </button>
        </li>
    }
}
