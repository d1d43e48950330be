//! Color - Continuous-tone RGB color
//!
//! `Color` is the unit of data flowing through the pipeline: three `f32`
//! channels in [0, 1], no alpha. Values are clamped on construction and
//! immutable afterwards.
//!
//! # Examples
//!
//! ```
//! use retropix_core::Color;
//!
//! let c = Color::from_hex(0xAA5500);
//! assert_eq!(c.to_bytes(), (170, 85, 0));
//! assert_eq!(Color::BLACK.distance_squared(Color::BLACK), 0.0);
//! ```

/// An RGB color with `f32` channels in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    /// Red channel
    pub r: f32,
    /// Green channel
    pub g: f32,
    /// Blue channel
    pub b: f32,
}

impl Color {
    /// Pure black (0, 0, 0)
    pub const BLACK: Color = Color {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    /// Pure white (1, 1, 1)
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };

    /// Create a color, clamping each channel to [0, 1].
    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self {
            r: r.clamp(0.0, 1.0),
            g: g.clamp(0.0, 1.0),
            b: b.clamp(0.0, 1.0),
        }
    }

    /// Create a greyscale color with all channels set to `v`.
    pub fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Create a color from a packed `0xRRGGBB` value.
    ///
    /// # Examples
    ///
    /// ```
    /// use retropix_core::Color;
    ///
    /// assert_eq!(Color::from_hex(0xFFFFFF), Color::WHITE);
    /// ```
    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xff) as f32 / 255.0,
            g: ((hex >> 8) & 0xff) as f32 / 255.0,
            b: (hex & 0xff) as f32 / 255.0,
        }
    }

    /// Create a color from byte channels.
    pub fn from_bytes(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Convert to byte channels, truncating `channel * 255`.
    pub fn to_bytes(self) -> (u8, u8, u8) {
        (
            (self.r * 255.0) as u8,
            (self.g * 255.0) as u8,
            (self.b * 255.0) as u8,
        )
    }

    /// Check for exact black on all three channels.
    ///
    /// Dithering skips exact-black pixels so clean backgrounds stay clean.
    #[inline]
    pub fn is_black(self) -> bool {
        self.r == 0.0 && self.g == 0.0 && self.b == 0.0
    }

    /// Squared Euclidean distance to another color in RGB space.
    ///
    /// Squared distance preserves ordering, so nearest-color searches can
    /// skip the square root.
    #[inline]
    pub fn distance_squared(self, other: Color) -> f32 {
        let dr = self.r - other.r;
        let dg = self.g - other.g;
        let db = self.b - other.b;
        dr * dr + dg * dg + db * db
    }

    /// Add a scalar offset to all three channels, clamping to [0, 1].
    #[inline]
    pub fn offset(self, amount: f32) -> Self {
        Self {
            r: (self.r + amount).clamp(0.0, 1.0),
            g: (self.g + amount).clamp(0.0, 1.0),
            b: (self.b + amount).clamp(0.0, 1.0),
        }
    }

    /// Convert a linear-light color to sRGB with a gamma of 1/2.2.
    ///
    /// Applied as an optional final step so output brightness matches
    /// displays expecting gamma-encoded values.
    pub fn linear_to_srgb(self) -> Self {
        const INV_GAMMA: f32 = 1.0 / 2.2;
        Self {
            r: self.r.powf(INV_GAMMA),
            g: self.g.powf(INV_GAMMA),
            b: self.b.powf(INV_GAMMA),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_clamps() {
        let c = Color::new(-0.5, 0.5, 1.5);
        assert_eq!(c, Color::new(0.0, 0.5, 1.0));
    }

    #[test]
    fn test_from_hex() {
        let c = Color::from_hex(0x55FFAA);
        assert_eq!(c.to_bytes(), (0x55, 0xFF, 0xAA));
    }

    #[test]
    fn test_to_bytes_truncates() {
        // 0.5 * 255 = 127.5, truncated to 127
        assert_eq!(Color::splat(0.5).to_bytes(), (127, 127, 127));
        assert_eq!(Color::WHITE.to_bytes(), (255, 255, 255));
    }

    #[test]
    fn test_is_black() {
        assert!(Color::BLACK.is_black());
        assert!(!Color::new(0.0, 0.0, f32::EPSILON).is_black());
    }

    #[test]
    fn test_offset_clamps() {
        let c = Color::new(0.9, 0.5, 0.1);
        let up = c.offset(0.5);
        assert_eq!(up.r, 1.0);
        assert_eq!(up.g, 1.0);
        assert!((up.b - 0.6).abs() < 1e-6);
        let down = c.offset(-0.5);
        assert!((down.r - 0.4).abs() < 1e-6);
        assert_eq!(down.g, 0.0);
        assert_eq!(down.b, 0.0);
    }

    #[test]
    fn test_distance_squared() {
        assert_eq!(Color::BLACK.distance_squared(Color::WHITE), 3.0);
        let c = Color::new(0.25, 0.5, 0.75);
        assert_eq!(c.distance_squared(c), 0.0);
    }

    #[test]
    fn test_linear_to_srgb_monotonic() {
        let dark = Color::splat(0.1).linear_to_srgb();
        let light = Color::splat(0.9).linear_to_srgb();
        assert!(dark.r > 0.1); // gamma brightens mid/low tones
        assert!(light.r > dark.r);
        assert_eq!(Color::BLACK.linear_to_srgb(), Color::BLACK);
        assert_eq!(Color::WHITE.linear_to_srgb(), Color::WHITE);
    }
}
