mod components;
mod config;
mod hooks;
mod models;
mod services;
mod utils;

use components::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("🏢 SitePlus frontend starting...");

    yew::Renderer::<App>::new().render();
}
