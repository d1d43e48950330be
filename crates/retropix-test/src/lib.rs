//! retropix-test - Regression test framework for the retropix workspace
//!
//! Provides a small regression harness shared by the workspace's
//! integration tests, plus builders for synthetic source frames:
//!
//! - **Compare**: check computed values against expectations (default)
//! - **Display**: run tests and report without failing comparisons
//!
//! # Usage
//!
//! ```ignore
//! use retropix_test::RegParams;
//!
//! let mut rp = RegParams::new("palette");
//! rp.compare_values(16.0, palette.len() as f64, 0.0);
//! assert!(rp.cleanup());
//! ```
//!
//! # Environment Variables
//!
//! - `REGTEST_MODE`: Set to "compare" or "display"

mod error;
mod params;

pub use error::{TestError, TestResult};
pub use params::{RegParams, RegTestMode};

use retropix_core::{Color, Raster};

/// Build a synthetic color gradient raster
///
/// Red ramps horizontally, green vertically, and blue diagonally, so every
/// region of RGB space is exercised without external image data.
pub fn color_gradient(width: u32, height: u32) -> TestResult<Raster> {
    let raster = Raster::from_fn(width, height, |x, y| {
        let r = x as f32 / (width - 1).max(1) as f32;
        let g = y as f32 / (height - 1).max(1) as f32;
        let b = (x + y) as f32 / (width + height - 2).max(1) as f32;
        Color::new(r, g, b)
    })?;
    Ok(raster)
}

/// Build a two-color checkerboard raster with `cell`-pixel squares
pub fn checkerboard(width: u32, height: u32, cell: u32, a: Color, b: Color) -> TestResult<Raster> {
    let cell = cell.max(1);
    let raster = Raster::from_fn(width, height, |x, y| {
        if ((x / cell) + (y / cell)) % 2 == 0 {
            a
        } else {
            b
        }
    })?;
    Ok(raster)
}
