#![allow(warnings)]
//! Movies Frontend Entry Point

mod api;
mod app;
mod card;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod models;
mod overlay;
mod view;

#[cfg(test)]
mod testing;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::new(log::Level::Info));
    mount_to_body(App);
}
