#![allow(warnings)]
//! Bookmark Board Entry Point

mod models;
mod url_utils;
mod defaults;
mod collection;
mod migration;
mod storage;
mod config;
mod drag;
mod bookmark_store;
mod store;
mod context;
mod components;
mod app;

use app::App;
use config::BoardConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let config = BoardConfig::default();
    let _ = console_log::init_with_level(config.log_level);
    mount_to_body(move || view! { <App config=config.clone() /> });
}
