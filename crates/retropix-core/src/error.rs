//! Error types for retropix-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.
//!
//! Validation failures are always reported synchronously at the point of
//! mutation; callers can rely on prior state being left unchanged.

use thiserror::Error;

/// Retropix error type
#[derive(Error, Debug)]
pub enum Error {
    /// Color count or palette length outside the supported range
    #[error("invalid color count: {count} (must be between {min} and {max})", min = crate::palette::MIN_COLORS, max = crate::palette::MAX_COLORS)]
    InvalidColorCount { count: usize },

    /// Palette with no entries
    #[error("empty palette: no colors to quantize against")]
    EmptyPalette,

    /// Configuration that would silently produce wrong output
    #[error("unsupported configuration: {0}")]
    UnsupportedConfiguration(String),

    /// Invalid raster or resolution dimensions
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    /// Index out of bounds
    #[error("index out of bounds: {index} >= {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Result type alias for retropix operations
pub type Result<T> = std::result::Result<T, Error>;
