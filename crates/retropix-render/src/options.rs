//! Configuration surface for the retro render pass
//!
//! `RetroOptions` is the full set of recognized options. Every field has
//! a default matching the classic 320x200 / 16-color look, so callers
//! only override what they care about:
//!
//! ```
//! use retropix_render::RetroOptions;
//!
//! let options = RetroOptions {
//!     color_count: 4,
//!     dithering: false,
//!     ..Default::default()
//! };
//! assert_eq!(options.resolution.width, 320);
//! ```

use retropix_core::{Color, Resolution};

/// Constructor parameters for [`RetroPass`](crate::RetroPass)
#[derive(Debug, Clone)]
pub struct RetroOptions {
    /// Target output resolution (the pixelation grid)
    pub resolution: Resolution,
    /// Recompute the resolution from viewport size and pixel ratio on
    /// every viewport change
    pub auto_resolution: bool,
    /// Scale factor applied to the viewport size in auto-resolution mode,
    /// typically 0.0 to 1.0
    pub pixel_ratio: f32,
    /// Number of palette colors to generate when no explicit palette is
    /// given
    pub color_count: usize,
    /// Explicit palette; takes precedence over `color_count`
    pub color_palette: Option<Vec<Color>>,
    /// Whether to apply ordered dithering before quantization
    pub dithering: bool,
    /// Dithering strength, typically 0.0 to 1.0
    pub dithering_offset: f32,
    /// Recompute the dithering offset from the color count on every
    /// palette change
    pub auto_dithering_offset: bool,
    /// Allow the analytic cube shortcut for large generated palettes.
    ///
    /// Must be `false` to use a custom palette of
    /// `quantization_threshold` or more colors.
    pub quantization_enabled: bool,
    /// Palette size at which the analytic shortcut takes over
    pub quantization_threshold: usize,
    /// Convert the final color from linear light to sRGB
    pub srgb_output: bool,
}

impl Default for RetroOptions {
    fn default() -> Self {
        Self {
            resolution: Resolution::default(),
            auto_resolution: false,
            pixel_ratio: 0.25,
            color_count: 16,
            color_palette: None,
            dithering: true,
            dithering_offset: 0.2,
            auto_dithering_offset: false,
            quantization_enabled: true,
            quantization_threshold: 64,
            srgb_output: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let o = RetroOptions::default();
        assert_eq!((o.resolution.width, o.resolution.height), (320, 200));
        assert_eq!(o.color_count, 16);
        assert!(o.color_palette.is_none());
        assert!(o.dithering);
        assert_eq!(o.dithering_offset, 0.2);
        assert!(o.quantization_enabled);
        assert_eq!(o.quantization_threshold, 64);
    }
}
