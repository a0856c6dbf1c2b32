//! Utility modules for the banner visual

pub mod number_format;

pub use number_format::*;
