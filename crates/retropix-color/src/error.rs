//! Error types for retropix-color

use thiserror::Error;

/// Errors that can occur during palette and quantization operations
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] retropix_core::Error),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
