//! Palette generation
//!
//! Builds a palette of any size in [2, 4096], balancing historical
//! fidelity and coverage:
//! - Exact curated tiers for 2 (monochrome), 4 (CGA mode 1
//!   high-intensity), and 16 (standard VGA) colors
//! - A procedurally enumerated uniform RGB cube, padded with a greyscale
//!   ramp, for every other size
//!
//! Generation is deterministic: the same count always produces the same
//! palette in the same order, and `generate(n)` either returns exactly
//! `n` colors or fails — there is no nearest-size substitution.

use crate::error::{ColorError, ColorResult};
use retropix_core::{Color, Error, Palette, is_valid_color_count};

/// Monochrome tier: black and white.
const MONOCHROME: [u32; 2] = [0x000000, 0xFFFFFF];

/// CGA mode 1 (palette 0, high intensity): black, cyan, magenta, white.
const CGA_MODE1: [u32; 4] = [0x000000, 0x55FFFF, 0xFF55FF, 0xFFFFFF];

/// Microsoft Windows standard VGA palette, black first, white last.
const VGA_STANDARD: [u32; 16] = [
    0x000000, // Black
    0x0000AA, // Blue
    0x00AA00, // Green
    0x00AAAA, // Cyan
    0xAA0000, // Red
    0xAA00AA, // Magenta
    0xAA5500, // Brown
    0xAAAAAA, // Light Gray
    0x555555, // Dark Gray
    0x5555FF, // Light Blue
    0x55FF55, // Light Green
    0x55FFFF, // Light Cyan
    0xFF5555, // Light Red
    0xFF55FF, // Light Magenta
    0xFFFF55, // Yellow
    0xFFFFFF, // White
];

/// Compute the side length of the largest RGB cube fitting in `count`
/// entries, capped at 16 (a 16x16x16 cube fills the 4096-color ceiling).
///
/// # Examples
///
/// ```
/// use retropix_color::generate::cube_side;
///
/// assert_eq!(cube_side(63), 3);
/// assert_eq!(cube_side(64), 4);
/// assert_eq!(cube_side(100), 4);
/// assert_eq!(cube_side(4096), 16);
/// ```
pub fn cube_side(count: usize) -> usize {
    let mut side = (count as f64).cbrt() as usize;
    // cbrt of a perfect cube can land a hair under the integer root
    while (side + 1).pow(3) <= count {
        side += 1;
    }
    while side > 1 && side.pow(3) > count {
        side -= 1;
    }
    side.clamp(1, 16)
}

/// Generate a palette for the requested color count.
///
/// # Errors
///
/// Returns [`retropix_core::Error::InvalidColorCount`] (wrapped) when
/// `count` is outside [2, 4096].
///
/// # Examples
///
/// ```
/// use retropix_color::generate;
/// use retropix_core::Color;
///
/// let mono = generate(2).unwrap();
/// assert_eq!(mono.colors(), &[Color::BLACK, Color::WHITE]);
///
/// // 100 entries: a 4x4x4 cube plus 36 greyscale pad slots
/// assert_eq!(generate(100).unwrap().len(), 100);
///
/// assert!(generate(1).is_err());
/// assert!(generate(5000).is_err());
/// ```
pub fn generate(count: usize) -> ColorResult<Palette> {
    if !is_valid_color_count(count) {
        return Err(ColorError::Core(Error::InvalidColorCount { count }));
    }

    let colors = match count {
        2 => MONOCHROME.iter().map(|&h| Color::from_hex(h)).collect(),
        4 => CGA_MODE1.iter().map(|&h| Color::from_hex(h)).collect(),
        16 => VGA_STANDARD.iter().map(|&h| Color::from_hex(h)).collect(),
        _ => cube_colors(count),
    };

    Ok(Palette::new(colors)?)
}

/// Enumerate a uniform RGB cube padded with greyscale up to `count`.
///
/// The cube steps each channel linearly over `cube_side(count)` levels
/// spanning [0, 1], red outermost and blue innermost, so indexing is
/// deterministic. Remaining slots are filled with a greyscale ramp.
fn cube_colors(count: usize) -> Vec<Color> {
    let side = cube_side(count);
    let mut colors = Vec::with_capacity(count);

    if side == 1 {
        colors.push(Color::BLACK);
    } else {
        let divisor = (side - 1) as f32;
        for r in 0..side {
            for g in 0..side {
                for b in 0..side {
                    colors.push(Color::new(
                        r as f32 / divisor,
                        g as f32 / divisor,
                        b as f32 / divisor,
                    ));
                }
            }
        }
    }

    let cube_size = colors.len();
    // With exactly one pad slot the ramp divisor degenerates to zero;
    // clamp so the slot fills with black.
    let divisor = count.saturating_sub(cube_size + 1).max(1) as f32;
    while colors.len() < count {
        let v = (colors.len() - cube_size) as f32 / divisor;
        colors.push(Color::splat(v));
    }

    colors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_length_for_all_tiers() {
        for count in [2, 3, 4, 5, 8, 9, 15, 16, 17, 63, 64, 100, 1000, 4095, 4096] {
            let p = generate(count).unwrap();
            assert_eq!(p.len(), count, "generate({count})");
        }
    }

    #[test]
    fn test_out_of_range_fails() {
        assert!(generate(0).is_err());
        assert!(generate(1).is_err());
        assert!(generate(4097).is_err());
    }

    #[test]
    fn test_monochrome_tier() {
        let p = generate(2).unwrap();
        assert_eq!(p.colors(), &[Color::BLACK, Color::WHITE]);
    }

    #[test]
    fn test_cga_tier() {
        let p = generate(4).unwrap();
        assert_eq!(p.get(0), Some(Color::BLACK));
        assert_eq!(p.get(1), Some(Color::from_hex(0x55FFFF)));
        assert_eq!(p.get(2), Some(Color::from_hex(0xFF55FF)));
        assert_eq!(p.get(3), Some(Color::WHITE));
    }

    #[test]
    fn test_vga_tier() {
        let p = generate(16).unwrap();
        assert_eq!(p.get(0), Some(Color::BLACK));
        assert_eq!(p.get(6), Some(Color::from_hex(0xAA5500)));
        assert_eq!(p.get(15), Some(Color::WHITE));
    }

    #[test]
    fn test_cube_side() {
        assert_eq!(cube_side(2), 1);
        assert_eq!(cube_side(7), 1);
        assert_eq!(cube_side(8), 2);
        assert_eq!(cube_side(26), 2);
        assert_eq!(cube_side(27), 3);
        assert_eq!(cube_side(64), 4);
        assert_eq!(cube_side(124), 4);
        assert_eq!(cube_side(125), 5);
        assert_eq!(cube_side(4096), 16);
    }

    #[test]
    fn test_cube_enumeration_order() {
        // 8 entries: full 2x2x2 cube, blue varies fastest
        let p = generate(8).unwrap();
        assert_eq!(p.get(0), Some(Color::BLACK));
        assert_eq!(p.get(1), Some(Color::new(0.0, 0.0, 1.0)));
        assert_eq!(p.get(2), Some(Color::new(0.0, 1.0, 0.0)));
        assert_eq!(p.get(4), Some(Color::new(1.0, 0.0, 0.0)));
        assert_eq!(p.get(7), Some(Color::WHITE));
    }

    #[test]
    fn test_greyscale_padding() {
        // 100 entries: 64-color cube then a 36-step grey ramp ending white
        let p = generate(100).unwrap();
        assert_eq!(p.get(64), Some(Color::BLACK));
        assert_eq!(p.get(99), Some(Color::WHITE));
        let mid = p.get(82).unwrap();
        assert_eq!(mid.r, mid.g);
        assert_eq!(mid.g, mid.b);
    }

    #[test]
    fn test_single_pad_slot_clamps() {
        // 9 entries: 2x2x2 cube plus one pad slot (degenerate ramp)
        let p = generate(9).unwrap();
        assert_eq!(p.len(), 9);
        assert_eq!(p.get(8), Some(Color::BLACK));
    }

    #[test]
    fn test_small_procedural_counts_ramp() {
        // levels = 1 for counts under 8: single black entry plus grey ramp
        let p = generate(3).unwrap();
        assert_eq!(p.get(0), Some(Color::BLACK));
        assert_eq!(p.get(2), Some(Color::WHITE));
    }
}
