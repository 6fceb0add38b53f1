//! Slide error types

use thiserror::Error;

/// Errors raised while configuring Slide widgets
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SlideError {
    /// Lower bound sits above the upper bound
    #[error("Inverted bounds: lower {lower} is greater than upper {upper}")]
    InvertedBounds { lower: f32, upper: f32 },

    /// A bound is NaN or infinite
    #[error("Bound must be finite, got {0}")]
    NonFiniteBound(f32),

    /// A listener was registered for a hook the widget does not expose
    #[error("Unknown hook: {0}")]
    UnknownHook(String),
}

/// Result type for Slide operations
pub type Result<T> = std::result::Result<T, SlideError>;
