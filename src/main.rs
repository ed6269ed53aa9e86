//! ShoppingListApp Frontend Entry Point

mod actions;
mod app;
mod components;
mod context;
mod data;
mod format;
mod models;
mod query;
mod stats;
mod store;
mod view_state;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
