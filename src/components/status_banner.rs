//! Status Banner Component
//!
//! Shows the last failed request until dismissed.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn StatusBanner() -> impl IntoView {
    let store = use_app_store();

    view! {
        {move || store.status().get().map(|message| view! {
            <div class="status-banner" role="alert">
                <span>{message}</span>
                <button class="cancel-btn" on:click=move |_| store.status().set(None)>"×"</button>
            </div>
        })}
    }
}
