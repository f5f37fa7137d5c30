//! Item Controller
//!
//! Owns the backend handle and a handle onto local state, and runs the
//! three user-triggered operations: load, add, remove.
//!
//! Failures never touch the list. They are logged and reported through
//! `ItemState::set_status`; the next successful operation clears the notice.

use crate::backend::ItemBackend;
use crate::draft::ItemDraft;
use crate::error::{AddError, SyncResult};
use crate::model::{Item, ItemId};
use crate::state::ItemState;

#[derive(Debug, Clone)]
pub struct ItemController<B, S> {
    backend: B,
    state: S,
}

impl<B: ItemBackend, S: ItemState> ItemController<B, S> {
    pub fn new(backend: B, state: S) -> Self {
        Self { backend, state }
    }

    /// Replace local state with the service's full collection.
    ///
    /// Returns the number of items loaded.
    pub async fn load(&self) -> SyncResult<usize> {
        match self.backend.list_items().await {
            Ok(items) => {
                let count = items.len();
                log::info!("Loaded {} items", count);
                self.state.replace_items(items);
                self.state.set_status(None);
                Ok(count)
            }
            Err(e) => {
                log::error!("Failed to fetch items: {}", e);
                self.state.set_status(Some("Failed to fetch items".to_string()));
                Err(e)
            }
        }
    }

    /// Validate the form input, create the item and append it.
    ///
    /// Invalid input raises an alert and sends nothing. The form is only
    /// cleared once the service has accepted the item.
    pub async fn add(&self, name: &str, price: &str) -> Result<Item, AddError> {
        let new_item = match ItemDraft::new(name, price).validate() {
            Ok(new_item) => new_item,
            Err(e) => {
                log::warn!("Rejected item draft: {}", e);
                self.state.alert(&e.to_string());
                return Err(e.into());
            }
        };

        match self.backend.create_item(&new_item).await {
            Ok(created) => {
                log::info!("Added item #{} ({})", created.id, created.name);
                self.state.push_item(created.clone());
                self.state.clear_draft();
                self.state.set_status(None);
                Ok(created)
            }
            Err(e) => {
                log::error!("Failed to add item: {}", e);
                self.state.set_status(Some("Failed to add item".to_string()));
                Err(e.into())
            }
        }
    }

    /// Delete an item and drop it from local state.
    ///
    /// Returns whether a local entry was removed; an id that is not in the
    /// local list still gets the request but leaves the list as is.
    pub async fn remove(&self, id: ItemId) -> SyncResult<bool> {
        match self.backend.delete_item(id).await {
            Ok(()) => {
                let removed = self.state.remove_item(id);
                log::info!("Deleted item #{} (local entry removed: {})", id, removed);
                self.state.set_status(None);
                Ok(removed)
            }
            Err(e) => {
                log::error!("Failed to delete item #{}: {}", id, e);
                self.state.set_status(Some("Failed to delete item".to_string()));
                Err(e)
            }
        }
    }
}
