//! Ordered (Bayer) dithering
//!
//! Perturbs colors with a fixed 4x4 spatial threshold pattern before
//! quantization, trading solid banding for textured noise. The matrix is
//! a process-wide constant shared by every invocation; dithering is a pure
//! function of the color, the block coordinate, and the offset amount.
//!
//! Exact-black pixels are never dithered, so clean backgrounds stay
//! clean regardless of the offset.

use retropix_core::Color;

/// 4x4 Bayer matrix, indexed `[y % 4][x % 4]`.
///
/// The 16 entries are a fixed ordered permutation of 0..16; dividing by 16
/// yields 16 distinct thresholds evenly spaced over [0, 1).
pub const BAYER_4X4: [[u8; 4]; 4] = [
    [0, 8, 2, 10],
    [12, 4, 14, 6],
    [3, 11, 1, 9],
    [15, 7, 13, 5],
];

/// Get the dither threshold for a block coordinate, in [0, 1).
#[inline]
pub fn threshold(x: u32, y: u32) -> f32 {
    BAYER_4X4[(y % 4) as usize][(x % 4) as usize] as f32 / 16.0
}

/// Dither a color at a block coordinate.
///
/// The threshold is recentered around zero and scaled by `amount`, then
/// added to all three channels with clamping. Exact black is returned
/// untouched.
///
/// # Examples
///
/// ```
/// use retropix_color::dither;
/// use retropix_core::Color;
///
/// assert_eq!(dither::dither(Color::BLACK, 3, 1, 1.0), Color::BLACK);
/// let grey = dither::dither(Color::splat(0.5), 0, 0, 0.2);
/// assert!(grey.r < 0.5); // threshold 0/16 pushes down
/// ```
#[inline]
pub fn dither(color: Color, x: u32, y: u32, amount: f32) -> Color {
    if color.is_black() {
        return color;
    }
    color.offset((threshold(x, y) - 0.5) * amount)
}

/// Canonical automatic dithering offset for a palette size.
///
/// `0.1 + 0.9 / (count - 1)`: strong for tiny palettes where quantization
/// steps are coarse, settling toward 0.1 as the palette grows.
#[inline]
pub fn auto_offset(color_count: usize) -> f32 {
    0.1 + 0.9 / (color_count.max(2) - 1) as f32
}
