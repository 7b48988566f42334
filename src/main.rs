//! Infinite Feed Frontend Entry Point

mod api;
mod app;
mod components;
mod error;
mod models;
mod store;

use app::App;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Container element the host page provides
const MOUNT_ID: &str = "root";

fn main() {
    console_error_panic_hook::set_once();

    let container = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(MOUNT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    match container {
        Some(container) => leptos::mount::mount_to(container, App).forget(),
        None => {
            web_sys::console::warn_1(&format!("[APP] #{} not found, mounting to body", MOUNT_ID).into());
            mount_to_body(App);
        }
    }
}
