//! Food Court Frontend Entry Point

mod app;
mod catalog;
mod components;
mod data;
mod debounce;
mod models;
mod scroll;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
