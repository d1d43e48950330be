//! Palette quantization
//!
//! Maps a continuous color to a palette entry, choosing between two
//! strategies:
//!
//! - **Exact nearest-color search**: scan every lookup-table entry and
//!   keep the minimum Euclidean RGB distance. Correct for any palette,
//!   O(n) per pixel.
//! - **Analytic cube quantization**: round each channel independently to
//!   the nearest cube level. O(1) per pixel, but only correct for
//!   palettes enumerated as the uniform RGB cube from
//!   [`generate`](crate::generate) — with an arbitrary palette it produces
//!   colors that are not in the palette at all.
//!
//! [`quantize`] selects the strategy from [`QuantizeOptions`]: exact below
//! the table-size threshold, analytic at or above it unless disabled.
//! Callers installing a custom large palette must disable the analytic
//! path explicitly (the controller in retropix-render enforces this).

use crate::generate::cube_side;
use retropix_core::{Color, LookupTable};

/// Strategy selection for per-pixel quantization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantizeOptions {
    /// Allow the analytic cube shortcut for large palettes
    pub enabled: bool,
    /// Table size at which the analytic path takes over
    pub threshold: usize,
}

impl Default for QuantizeOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold: 64,
        }
    }
}

/// Find the index of the nearest lookup-table entry.
///
/// Distances are compared with strict less-than, so ties resolve to the
/// lowest index. Comparison is against the byte-encoded entries (what a
/// renderer sampling the table would see), not the pre-encoding floats.
pub fn nearest_index(lut: &LookupTable, color: Color) -> usize {
    let mut best = 0;
    let mut best_dist = f32::INFINITY;
    for i in 0..lut.len() {
        let dist = color.distance_squared(lut.color(i));
        if dist < best_dist {
            best_dist = dist;
            best = i;
        }
    }
    best
}

/// Find the nearest lookup-table entry by exact search.
///
/// # Examples
///
/// ```
/// use retropix_color::{generate, quantize};
/// use retropix_core::{Color, LookupTable};
///
/// let lut = LookupTable::encode(&generate(16).unwrap());
/// let c = quantize::nearest_color(&lut, Color::new(0.7, 0.05, 0.05));
/// assert_eq!(c.to_bytes(), (0xAA, 0x00, 0x00)); // red
/// ```
pub fn nearest_color(lut: &LookupTable, color: Color) -> Color {
    lut.color(nearest_index(lut, color))
}

/// Quantize analytically against a uniform RGB cube of `color_count`
/// entries.
///
/// Each channel is rounded to the nearest of `cube_side(color_count)`
/// evenly spaced levels in [0, 1].
///
/// # Precondition
///
/// Only meaningful when the palette was generated as the uniform cube;
/// greyscale pad entries are ignored by this path.
pub fn cube_color(color: Color, color_count: usize) -> Color {
    let steps = cube_side(color_count);
    if steps < 2 {
        return Color::BLACK;
    }
    let divisor = (steps - 1) as f32;
    Color {
        r: (color.r * divisor).round() / divisor,
        g: (color.g * divisor).round() / divisor,
        b: (color.b * divisor).round() / divisor,
    }
}

/// Quantize a color against a lookup table.
///
/// Uses the exact search when the analytic path is disabled or the table
/// is under `options.threshold` entries, the analytic cube otherwise.
pub fn quantize(lut: &LookupTable, color: Color, options: &QuantizeOptions) -> Color {
    if !options.enabled || lut.len() < options.threshold {
        nearest_color(lut, color)
    } else {
        cube_color(color, lut.len())
    }
}
