mod app;
mod components;
mod config;
mod hooks;
mod models;
mod services;
mod stores;
mod utils;
mod viewmodels;
mod views;

use app::App;

fn main() {
    console_error_panic_hook::set_once();
    if config::CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::default());
    }
    log::info!("🚀 RepoTrack iniciando (entorno: {})", config::CONFIG.environment);

    yew::Renderer::<App>::new().render();
}
