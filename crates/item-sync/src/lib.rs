//! Item Sync
//!
//! Keeps a local, non-authoritative list of items in step with a remote
//! REST item service. The UI owns the state; this crate owns the rules.

mod backend;
mod config;
mod controller;
mod draft;
mod error;
mod http;
mod model;
mod state;

pub use backend::ItemBackend;
pub use config::{ApiConfig, DEFAULT_BASE_URL};
pub use controller::ItemController;
pub use draft::ItemDraft;
pub use error::{AddError, SyncError, SyncResult, ValidationError};
pub use http::HttpBackend;
pub use model::{Item, ItemId, NewItem};
pub use state::{remove_matching, ItemState, MemoryState};
