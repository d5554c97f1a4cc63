#![allow(warnings)]
//! Folio Frontend Entry Point

mod app;
mod carousel;
mod components;
mod content;
mod markdown;
mod models;
mod store;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    let _ = console_logger::init(log::LevelFilter::Debug);
    mount_to_body(App);
}
