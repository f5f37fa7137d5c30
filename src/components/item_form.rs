//! Item Form Component
//!
//! Card with name and price inputs for creating new items.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

/// Form for adding a new item
#[component]
pub fn ItemForm() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // Inputs are cleared by the controller once the item is created
        ctx.add(store.name().get(), store.price().get());
    };

    view! {
        <section class="card">
            <h2>"Add a new item"</h2>
            <form class="item-form" on:submit=on_submit novalidate>
                <label>
                    "Name"
                    <input
                        type="text"
                        required
                        prop:value=move || store.name().get()
                        on:input=move |ev| store.name().set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Price"
                    <input
                        type="text"
                        inputmode="decimal"
                        required
                        prop:value=move || store.price().get()
                        on:input=move |ev| store.price().set(event_target_value(&ev))
                    />
                </label>
                <button type="submit">"Add"</button>
            </form>
        </section>
    }
}
