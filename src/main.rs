//! Items Manager Frontend Entry Point

mod app;
mod components;
mod context;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init_logger("ItemsManager", log::LevelFilter::Info) {
        web_sys::console::error_1(&format!("Failed to init logger: {}", e).into());
    }
    let _ = rolling_logger::info("Items Manager starting");
    mount_to_body(App);
}
