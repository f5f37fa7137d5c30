//! Local Item State
//!
//! The owned, mutable view of the collection that the controller updates.

use std::cell::RefCell;
use std::rc::Rc;

use crate::draft::ItemDraft;
use crate::model::{Item, ItemId};

/// Local state the controller reconciles after each response.
///
/// Methods take `&self`: implementations are handles onto state that lives
/// elsewhere (a reactive store, a shared cell).
pub trait ItemState {
    /// Overwrite the whole list
    fn replace_items(&self, items: Vec<Item>);

    /// Append one item at the end
    fn push_item(&self, item: Item);

    /// Drop the entry with this id. Returns false if none matched.
    fn remove_item(&self, id: ItemId) -> bool;

    /// Reset the add-item form inputs
    fn clear_draft(&self);

    /// Blocking, user-facing message
    fn alert(&self, message: &str);

    /// Non-blocking failure notice; `None` clears it
    fn set_status(&self, status: Option<String>);
}

/// Remove the first entry with `id`, leaving the rest in order
pub fn remove_matching(items: &mut Vec<Item>, id: ItemId) -> Option<Item> {
    items
        .iter()
        .position(|item| item.id == id)
        .map(|pos| items.remove(pos))
}

#[derive(Debug, Default)]
struct MemoryInner {
    items: Vec<Item>,
    draft: ItemDraft,
    alerts: Vec<String>,
    status: Option<String>,
}

/// Single-threaded in-memory state
#[derive(Debug, Clone, Default)]
pub struct MemoryState {
    inner: Rc<RefCell<MemoryInner>>,
}

impl MemoryState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_items(items: Vec<Item>) -> Self {
        let state = Self::new();
        state.inner.borrow_mut().items = items;
        state
    }

    pub fn items(&self) -> Vec<Item> {
        self.inner.borrow().items.clone()
    }

    pub fn draft(&self) -> ItemDraft {
        self.inner.borrow().draft.clone()
    }

    pub fn set_draft(&self, draft: ItemDraft) {
        self.inner.borrow_mut().draft = draft;
    }

    /// Every alert raised so far, oldest first
    pub fn alerts(&self) -> Vec<String> {
        self.inner.borrow().alerts.clone()
    }

    pub fn status(&self) -> Option<String> {
        self.inner.borrow().status.clone()
    }
}

impl ItemState for MemoryState {
    fn replace_items(&self, items: Vec<Item>) {
        self.inner.borrow_mut().items = items;
    }

    fn push_item(&self, item: Item) {
        self.inner.borrow_mut().items.push(item);
    }

    fn remove_item(&self, id: ItemId) -> bool {
        remove_matching(&mut self.inner.borrow_mut().items, id).is_some()
    }

    fn clear_draft(&self) {
        self.inner.borrow_mut().draft = ItemDraft::default();
    }

    fn alert(&self, message: &str) {
        self.inner.borrow_mut().alerts.push(message.to_string());
    }

    fn set_status(&self, status: Option<String>) {
        self.inner.borrow_mut().status = status;
    }
}
