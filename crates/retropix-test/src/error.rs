//! Error types for the test framework

use thiserror::Error;

/// Errors that can occur during regression testing
///
/// Comparison failures are accumulated inside `RegParams` rather than
/// raised as errors, so the only failure here is raster construction.
#[derive(Debug, Error)]
pub enum TestError {
    /// Failed to build a synthetic test raster
    #[error("failed to build test raster: {0}")]
    RasterBuild(#[from] retropix_core::Error),
}

/// Result type for test operations
pub type TestResult<T> = Result<T, TestError>;
