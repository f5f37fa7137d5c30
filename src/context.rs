//! Application Context
//!
//! Shared item controller provided via Leptos Context API.

use leptos::prelude::*;
use leptos::task::spawn_local;

use item_sync::{ApiConfig, HttpBackend, ItemController, ItemId};

use crate::store::{AppStore, StoreState};

pub type Controller = ItemController<HttpBackend, StoreState>;

/// App-wide handle to the item controller
#[derive(Clone, Copy)]
pub struct AppContext {
    controller: StoredValue<Controller, LocalStorage>,
}

impl AppContext {
    pub fn new(config: ApiConfig, store: AppStore) -> Self {
        let controller = ItemController::new(HttpBackend::new(config), StoreState::new(store));
        Self {
            controller: StoredValue::new_local(controller),
        }
    }

    /// Reload the full list from the service
    pub fn load(&self) {
        let controller = self.controller.get_value();
        spawn_local(async move {
            let _ = controller.load().await;
        });
    }

    /// Validate and submit the add form
    pub fn add(&self, name: String, price: String) {
        let controller = self.controller.get_value();
        spawn_local(async move {
            let _ = controller.add(&name, &price).await;
        });
    }

    /// Delete an item
    pub fn remove(&self, id: ItemId) {
        let controller = self.controller.get_value();
        spawn_local(async move {
            let _ = controller.remove(id).await;
        });
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
