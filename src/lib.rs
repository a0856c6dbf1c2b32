//! Banner Visual WASM Module
//!
//! A two-line banner (value over label) rendered as scaled SVG text for a
//! BI host. The host constructs `BannerVisual`, feeds it update events and
//! reads its property-pane objects.

pub mod api;
pub mod banner;
pub mod errors;
pub mod models;
pub mod renderers;
pub mod utils;

// Re-export commonly used types
pub use api::BannerVisual;
pub use banner::Banner;
pub use errors::BannerError;
pub use models::{Settings, SettingsPatch, UpdateInput, Viewport, VisualUpdateOptions};
pub use renderers::{BannerLayout, BannerScene, SvgRenderer};

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    init_logger();
    log::info!("Banner visual WASM module initialized");
}

#[cfg(feature = "console_log")]
fn init_logger() {
    if console_log::init_with_level(log::Level::Debug).is_err() {
        crate::wasm_warn!("Logger already initialized");
    }
}

#[cfg(not(feature = "console_log"))]
fn init_logger() {}
