//! Banner visual WASM API
//!
//! # Module Structure
//!
//! - `helpers`: console logging macros, serialization and error conversion
//! - `surface`: the retained SVG nodes the scene is applied to
//! - `visual`: the `BannerVisual` class exported to the host

pub mod helpers;
pub mod surface;
pub mod visual;

pub use surface::SvgSurface;
pub use visual::BannerVisual;
