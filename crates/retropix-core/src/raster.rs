//! Raster - Continuous-tone RGB frame container
//!
//! `Raster` is a 2D array of [`Color`] values, the carrier for source
//! frames entering the pipeline and quantized frames leaving it. Data is
//! stored in row-major order with no padding; the pixel at (x, y) is at
//! index `y * width + x`.
//!
//! The pipeline itself only needs the [`ImageSource`] trait: anything that
//! can be sampled by normalized UV coordinates can feed the mapping pass,
//! so a host renderer can plug in its own framebuffer type.
//!
//! # Examples
//!
//! ```
//! use retropix_core::{Color, Raster};
//!
//! let mut raster = Raster::new(100, 100).unwrap();
//! raster.set(10, 20, Color::WHITE).unwrap();
//! assert_eq!(raster.get(10, 20), Some(Color::WHITE));
//! ```

use crate::color::Color;
use crate::error::{Error, Result};

/// Abstract source of continuous-tone pixels, sampled by UV coordinates
///
/// `u` and `v` are in [0, 1] with (0, 0) at the top-left corner.
/// Implementations clamp out-of-range coordinates to the edge.
pub trait ImageSource {
    /// Sample the source at normalized coordinates.
    fn sample(&self, u: f32, v: f32) -> Color;
}

/// Row-major frame of float RGB pixels
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    /// Width in pixels
    width: u32,
    /// Height in pixels
    height: u32,
    /// Pixel data (row-major, no padding)
    data: Vec<Color>,
}

impl Raster {
    /// Create a new raster with all pixels set to black.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let size = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            data: vec![Color::BLACK; size],
        })
    }

    /// Create a raster by evaluating `f(x, y)` for every pixel.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidDimension` if width or height is 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use retropix_core::{Color, Raster};
    ///
    /// let ramp = Raster::from_fn(256, 1, |x, _| Color::splat(x as f32 / 255.0)).unwrap();
    /// assert_eq!(ramp.get(255, 0), Some(Color::WHITE));
    /// ```
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> Color) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let mut data = Vec::with_capacity((width as usize) * (height as usize));
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Get the width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the pixel at (x, y), or `None` if out of bounds.
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[(y * self.width + x) as usize])
    }

    /// Set the pixel at (x, y).
    ///
    /// # Errors
    ///
    /// Returns `Error::IndexOutOfBounds` if the coordinates are outside
    /// the raster.
    pub fn set(&mut self, x: u32, y: u32, color: Color) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::IndexOutOfBounds {
                index: (y as usize) * (self.width as usize) + x as usize,
                len: self.data.len(),
            });
        }
        self.data[(y * self.width + x) as usize] = color;
        Ok(())
    }

    /// Get all pixels in row-major order.
    pub fn pixels(&self) -> &[Color] {
        &self.data
    }
}

impl ImageSource for Raster {
    /// Nearest-texel sampling with clamp-to-edge addressing.
    fn sample(&self, u: f32, v: f32) -> Color {
        let x = ((u * self.width as f32) as i64).clamp(0, self.width as i64 - 1) as u32;
        let y = ((v * self.height as f32) as i64).clamp(0, self.height as i64 - 1) as u32;
        self.data[(y * self.width + x) as usize]
    }
}
