//! Data models for the banner visual
//!
//! Settings, the host update payload and the property-pane descriptors.

pub mod settings;
pub mod data_view;
pub mod enumeration;

// Re-export commonly used types
pub use settings::*;
pub use data_view::*;
pub use enumeration::*;
