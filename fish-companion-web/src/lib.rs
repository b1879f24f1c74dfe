#![forbid(unsafe_code)]
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

pub mod actions;
pub mod app;
pub mod components;
pub mod dom;
pub mod logger;
pub mod pages;
pub mod paths;
pub mod scheduler;
pub mod storage;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
    if let Err(err) = storage::probe() {
        log::warn!("Progress will not be saved: {err:#}");
    }
    yew::Renderer::<app::App>::new().render();
}
