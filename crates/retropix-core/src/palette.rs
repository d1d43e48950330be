//! Palette - Ordered quantization targets
//!
//! A `Palette` is an ordered, fixed-length list of [`Color`] entries. The
//! index is the quantization target: per-pixel mapping resolves to the
//! nearest entry, and the entry order defines the byte layout of the
//! derived [`LookupTable`](crate::LookupTable).
//!
//! # Invariant
//!
//! The length is always between [`MIN_COLORS`] and [`MAX_COLORS`]
//! inclusive, enforced at construction. The color count of the pipeline is
//! always `palette.len()` — it is never stored independently, so the two
//! can never disagree.

use crate::color::Color;
use crate::error::{Error, Result};

/// Minimum number of palette entries
pub const MIN_COLORS: usize = 2;

/// Maximum number of palette entries (a full 16x16x16 RGB cube)
pub const MAX_COLORS: usize = 4096;

/// Check whether `count` is a usable palette length.
#[inline]
pub fn is_valid_color_count(count: usize) -> bool {
    (MIN_COLORS..=MAX_COLORS).contains(&count)
}

/// Ordered, fixed-length list of colors used as quantization targets
#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    /// Create a palette from a list of colors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptyPalette`] for an empty list and
    /// [`Error::InvalidColorCount`] when the length is outside
    /// [[`MIN_COLORS`], [`MAX_COLORS`]].
    ///
    /// # Examples
    ///
    /// ```
    /// use retropix_core::{Color, Palette};
    ///
    /// let p = Palette::new(vec![Color::BLACK, Color::WHITE]).unwrap();
    /// assert_eq!(p.len(), 2);
    /// assert!(Palette::new(vec![Color::BLACK]).is_err());
    /// ```
    pub fn new(colors: Vec<Color>) -> Result<Self> {
        if colors.is_empty() {
            return Err(Error::EmptyPalette);
        }
        if !is_valid_color_count(colors.len()) {
            return Err(Error::InvalidColorCount {
                count: colors.len(),
            });
        }
        Ok(Self { colors })
    }

    /// Get the number of entries.
    ///
    /// This is the pipeline's color count; it is derived here and nowhere
    /// else.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// A palette can never be empty, but clippy expects the pair.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Get an entry by index.
    pub fn get(&self, index: usize) -> Option<Color> {
        self.colors.get(index).copied()
    }

    /// Get all entries in order.
    pub fn colors(&self) -> &[Color] {
        &self.colors
    }

    /// Iterate over entries in order.
    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.colors.iter().copied()
    }
}
