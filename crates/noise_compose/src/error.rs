//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias. Variants cover
//! rejected operator configuration and incomplete module graphs.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid bounds: minimum {min} must be less than maximum {max}")]
    InvalidBounds { min: f64, max: f64 },

    #[error("{module} has no source module in slot {index}")]
    MissingSource { module: &'static str, index: usize },

    #[error("source index {index} out of range for a module with {count} sources")]
    SourceIndex { index: usize, count: usize },
}
