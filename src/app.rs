//! Items Manager App
//!
//! Main application component: add form above the item list.

use leptos::prelude::*;
use reactive_stores::Store;

use item_sync::ApiConfig;

use crate::components::{ItemForm, ItemList, StatusBanner};
use crate::context::AppContext;
use crate::store::AppState;

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    let ctx = AppContext::new(ApiConfig::default(), store);

    // Provide state and controller to all children
    provide_context(store);
    provide_context(ctx);

    // Load items on mount
    Effect::new(move |_| {
        ctx.load();
    });

    view! {
        <main class="container">
            <h1>"Items Manager"</h1>

            <ItemForm />

            <StatusBanner />

            <ItemList />
        </main>
    }
}
