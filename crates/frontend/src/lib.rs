pub mod app;
pub mod config;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

use crate::app::{App, ConfigErrorScreen};
use crate::config::AppConfig;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    match AppConfig::from_env() {
        Ok(config) => {
            log::info!("Starting storefront against {}", config.supabase_url);
            leptos::mount::mount_to_body(move || view! { <App config=config /> });
        }
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            leptos::mount::mount_to_body(move || view! { <ConfigErrorScreen error=e /> });
        }
    }
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
