//! Retropix - Retro-look image quantization for Rust
//!
//! Renders continuous-tone frames through a "retro" look: pixelation to a
//! low target resolution, optional ordered (Bayer) dithering, and
//! remapping of every pixel to the nearest entry of a small fixed
//! palette.
//!
//! # Overview
//!
//! - Deterministic palette construction for any size in [2, 4096]:
//!   curated historical tiers (monochrome, CGA, VGA) and procedural
//!   uniform RGB cubes
//! - Per-pixel mapping with an exact nearest-color search for small
//!   palettes and an analytic cube shortcut for large generated ones
//! - A parameter controller that keeps palette, color count, dithering
//!   offset, and output resolution mutually consistent
//! - Platform presets for historical machines (Commodore 64, Game Boy,
//!   ZX Spectrum, ...)
//!
//! # Example
//!
//! ```
//! use retropix::{Color, Raster};
//! use retropix::render::{RetroOptions, RetroPass};
//!
//! let pass = RetroPass::new(RetroOptions {
//!     color_count: 4,
//!     ..Default::default()
//! })
//! .unwrap();
//!
//! let source = Raster::from_fn(320, 200, |x, y| {
//!     Color::new(x as f32 / 319.0, y as f32 / 199.0, 0.5)
//! })
//! .unwrap();
//!
//! let frame = pass.apply(&source, 320, 200).unwrap();
//! assert_eq!((frame.width(), frame.height()), (320, 200));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use retropix_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use retropix_color as color;
pub use retropix_render as render;
