//! My Closet Frontend Entry Point

mod add_item;
mod app;
mod category;
mod components;
mod context;
mod models;
mod pages;
mod providers;
mod repository;
mod selection;
mod session;
mod store;

#[cfg(test)]
mod test_support;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    wasm_tracing::set_as_global_default();
    mount_to_body(App);
}
