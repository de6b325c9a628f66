#![allow(warnings)]
//! Company Todo List Frontend Entry Point

mod models;
mod config;
mod logging;
mod api;
mod state;
mod store;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::default();
    logging::init(config.log_level);

    mount_to_body(move || {
        provide_context(config);
        view! { <App /> }
    });
}
