//! Error types for engine setup.
//!
//! Everything here is a startup failure: the app cannot run with a
//! half-built scene or a control panel that has nowhere to live.

use thiserror::Error;

/// Result type for fallible engine and app setup.
pub type EngineResult<T> = Result<T, EngineError>;

/// Errors raised while building the scene or binding the UI surface.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("no texture registered for body '{name}'")]
    UnknownTexture { name: String },

    #[error("texture manifest is malformed: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("required UI element not found: {0}")]
    MissingUiElement(String),

    #[error("DOM operation failed: {0}")]
    Dom(String),
}
