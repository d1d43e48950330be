//! Error types for retropix-render

use thiserror::Error;

/// Errors that can occur while configuring or running the render pass
#[derive(Debug, Error)]
pub enum RenderError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] retropix_core::Error),

    /// Color library error
    #[error("color error: {0}")]
    Color(#[from] retropix_color::ColorError),
}

/// Result type for render operations
pub type RenderResult<T> = Result<T, RenderError>;
