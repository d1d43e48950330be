//! Resolution - Output pixel grid size
//!
//! The target resolution controls pixelation: source frames are sampled on
//! a `width x height` block grid regardless of the native framebuffer
//! size. In auto mode the resolution is derived from the viewport size and
//! a pixel ratio.

use crate::error::{Error, Result};

/// Output resolution in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Resolution {
    /// Width in output pixels
    pub width: u32,
    /// Height in output pixels
    pub height: u32,
}

impl Resolution {
    /// Create a resolution.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if either side is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        Ok(Self { width, height })
    }

    /// Derive a resolution from a viewport size and a pixel ratio.
    ///
    /// Each side is `viewport * pixel_ratio`, truncated, with a floor of
    /// one pixel so a tiny ratio can never collapse the grid.
    ///
    /// # Examples
    ///
    /// ```
    /// use retropix_core::Resolution;
    ///
    /// let r = Resolution::derive((800, 600), 0.25);
    /// assert_eq!((r.width, r.height), (200, 150));
    /// ```
    pub fn derive(viewport: (u32, u32), pixel_ratio: f32) -> Self {
        let width = ((viewport.0 as f32 * pixel_ratio) as u32).max(1);
        let height = ((viewport.1 as f32 * pixel_ratio) as u32).max(1);
        Self { width, height }
    }
}

impl Default for Resolution {
    /// 320 x 200, the classic low-resolution mode shared by CGA and many
    /// 8/16-bit machines.
    fn default() -> Self {
        Self {
            width: 320,
            height: 200,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_rejects_zero() {
        assert!(Resolution::new(0, 200).is_err());
        assert!(Resolution::new(320, 0).is_err());
        assert!(Resolution::new(320, 200).is_ok());
    }

    #[test]
    fn test_derive() {
        let r = Resolution::derive((800, 600), 0.25);
        assert_eq!((r.width, r.height), (200, 150));
        let r = Resolution::derive((1920, 1080), 1.0);
        assert_eq!((r.width, r.height), (1920, 1080));
    }

    #[test]
    fn test_derive_floors_at_one_pixel() {
        let r = Resolution::derive((100, 100), 0.001);
        assert_eq!((r.width, r.height), (1, 1));
        let r = Resolution::derive((100, 100), 0.0);
        assert_eq!((r.width, r.height), (1, 1));
    }
}
