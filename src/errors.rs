//! Error types for the banner visual
//!
//! The host owns the data contract, so everything here is a precondition
//! violation reported back across the WASM boundary rather than recovered.

use thiserror::Error;

/// Top-level error type for banner operations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BannerError {
    /// The update payload is missing something the layout needs
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The payload could not be decoded into the expected shape
    #[error("Deserialization error: {0}")]
    Deserialization(String),

    /// A result could not be encoded for the host
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl BannerError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        BannerError::InvalidInput(msg.into())
    }
}
