//! Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use item_sync::{remove_matching, Item, ItemId, ItemState};

/// UI state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Local copy of the service's items, in service order
    pub items: Vec<Item>,
    /// Name input of the add form
    pub name: String,
    /// Price input of the add form, unparsed
    pub price: String,
    /// Last backend failure, shown until dismissed or the next success
    pub status: Option<String>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

/// `ItemState` handle over the reactive store
#[derive(Clone, Copy)]
pub struct StoreState {
    store: AppStore,
}

impl StoreState {
    pub fn new(store: AppStore) -> Self {
        Self { store }
    }
}

impl ItemState for StoreState {
    fn replace_items(&self, items: Vec<Item>) {
        self.store.items().set(items);
    }

    fn push_item(&self, item: Item) {
        self.store.items().write().push(item);
    }

    fn remove_item(&self, id: ItemId) -> bool {
        remove_matching(&mut self.store.items().write(), id).is_some()
    }

    fn clear_draft(&self) {
        self.store.name().set(String::new());
        self.store.price().set(String::new());
    }

    fn alert(&self, message: &str) {
        // alert() blocks until dismissed
        let _ = window().alert_with_message(message);
    }

    fn set_status(&self, status: Option<String>) {
        self.store.status().set(status);
    }
}
