//! UI Components
//!
//! Leptos components for the items page.

mod item_form;
mod item_list;
mod item_row;
mod status_banner;

pub use item_form::ItemForm;
pub use item_list::ItemList;
pub use item_row::ItemRow;
pub use status_banner::StatusBanner;
