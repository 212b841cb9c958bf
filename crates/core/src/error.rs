//! Error types for the abyss core.

use thiserror::Error;

/// Errors produced around engine construction, configuration and output.
///
/// The per-frame tick path never fails; these only surface at the edges
/// (registry lookup, recipe validation, snapshot writing).
#[derive(Debug, Error)]
pub enum EngineError {
    /// Width or height was zero when a fixed-size buffer was requested.
    #[error("invalid dimensions: width and height must be non-zero")]
    InvalidDimensions,

    /// The registry has no engine with this name.
    #[error("unknown engine: {0}")]
    UnknownEngine(String),

    /// A parameter existed but had the wrong JSON type.
    #[error("parameter type mismatch for '{name}': expected {expected}, got {got}")]
    ParamTypeMismatch {
        name: String,
        expected: String,
        got: String,
    },

    /// A recipe failed validation.
    #[error("invalid recipe: {0}")]
    InvalidRecipe(String),

    /// Writing output failed.
    #[error("i/o error: {0}")]
    Io(String),
}
