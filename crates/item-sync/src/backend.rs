//! Backend Trait
//!
//! Abstract interface to the item service.
//! `?Send` because browser futures cannot cross threads.

use async_trait::async_trait;

use crate::error::SyncResult;
use crate::model::{Item, ItemId, NewItem};

/// Remote owner of the item collection
#[async_trait(?Send)]
pub trait ItemBackend {
    /// Fetch the full, ordered collection
    async fn list_items(&self) -> SyncResult<Vec<Item>>;

    /// Create an item; the returned item carries the assigned id
    async fn create_item(&self, item: &NewItem) -> SyncResult<Item>;

    /// Delete an item by id
    async fn delete_item(&self, id: ItemId) -> SyncResult<()>;
}
