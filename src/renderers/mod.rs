//! Renderers module for the banner visual
//!
//! Layout arithmetic, the scene graph built from it, and the SVG markup
//! renderer. The live DOM surface lives in `api::surface`.

pub mod layout;
pub mod display_list;
pub mod svg;

// Re-export commonly used types
pub use layout::{BannerLayout, LineMetrics};
pub use display_list::{BannerScene, TextNode, TextPlacement};
pub use svg::SvgRenderer;
