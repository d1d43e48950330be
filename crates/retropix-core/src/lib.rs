//! Retropix Core - Basic data structures for the retro-look image pipeline
//!
//! This crate provides the fundamental data structures used throughout the
//! retropix workspace:
//!
//! - [`Color`] - Continuous-tone RGB color (three `f32` channels in [0, 1])
//! - [`Palette`] - Ordered, fixed-length list of quantization targets
//! - [`LookupTable`] - Byte-encoded palette (N x 1 RGBA strip, alpha 255)
//! - [`Raster`] / [`ImageSource`] - Frame container and sampling trait
//! - [`Resolution`] - Output pixel grid, with viewport derivation
//!
//! Palette generation, dithering, and quantization live in
//! `retropix-color`; the parameter controller and frame pass live in
//! `retropix-render`.

pub mod color;
pub mod error;
pub mod lut;
pub mod palette;
pub mod raster;
pub mod resolution;

pub use color::Color;
pub use error::{Error, Result};
pub use lut::LookupTable;
pub use palette::{MAX_COLORS, MIN_COLORS, Palette, is_valid_color_count};
pub use raster::{ImageSource, Raster};
pub use resolution::Resolution;
