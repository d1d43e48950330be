//! LookupTable - Byte-encoded palette for per-pixel sampling
//!
//! The lookup table is the one bit-exact artifact exchanged with an
//! external renderer: an N x 1 strip of RGBA byte quads in palette order,
//! alpha fixed at 255, byte value `floor(channel * 255)`. Any consumer
//! sampling the strip by index sees exactly this layout.
//!
//! A table is a derived artifact. It is regenerated whenever the palette
//! changes, and the caller replacing one must install the new table before
//! releasing the old (see the controller in retropix-render).

use crate::color::Color;
use crate::palette::Palette;

/// Byte-encoded, index-addressable representation of a palette
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupTable {
    data: Vec<u8>,
    len: usize,
}

impl LookupTable {
    /// Encode a palette into an N x 1 RGBA byte strip.
    ///
    /// Index-preserving: entry `i` of the table is palette entry `i`.
    ///
    /// # Examples
    ///
    /// ```
    /// use retropix_core::{Color, LookupTable, Palette};
    ///
    /// let p = Palette::new(vec![Color::BLACK, Color::WHITE]).unwrap();
    /// let lut = LookupTable::encode(&p);
    /// assert_eq!(lut.entry(0), [0, 0, 0, 255]);
    /// assert_eq!(lut.entry(1), [255, 255, 255, 255]);
    /// ```
    pub fn encode(palette: &Palette) -> Self {
        let len = palette.len();
        let mut data = Vec::with_capacity(len * 4);
        for color in palette.iter() {
            let (r, g, b) = color.to_bytes();
            data.extend_from_slice(&[r, g, b, 255]);
        }
        Self { data, len }
    }

    /// Get the number of entries (the strip width).
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Check if the table has no entries.
    ///
    /// Never true for a table encoded from a valid palette.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Get the RGBA bytes of entry `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= len`.
    #[inline]
    pub fn entry(&self, i: usize) -> [u8; 4] {
        let o = i * 4;
        [
            self.data[o],
            self.data[o + 1],
            self.data[o + 2],
            self.data[o + 3],
        ]
    }

    /// Get entry `i` as a float color (byte / 255).
    ///
    /// This is the value a renderer sampling the strip would see, so
    /// nearest-color searches compare against it rather than against the
    /// pre-encoding palette floats.
    #[inline]
    pub fn color(&self, i: usize) -> Color {
        let o = i * 4;
        Color::from_bytes(self.data[o], self.data[o + 1], self.data[o + 2])
    }

    /// Get the raw RGBA byte strip, 4 bytes per entry in palette order.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}
