//! Retropix Render - Parameter controller and frame pass
//!
//! This crate ties the pipeline together:
//!
//! - [`RetroOptions`] - the recognized configuration surface with
//!   classic-look defaults
//! - [`RetroPass`] - owns the settled parameter snapshot, reconciles
//!   dependent fields (palette <-> color count, viewport -> resolution,
//!   color count -> dithering offset), and maps frames pixel by pixel
//!
//! # Example
//!
//! ```
//! use retropix_core::{Color, Raster};
//! use retropix_render::{RetroOptions, RetroPass};
//!
//! let pass = RetroPass::new(RetroOptions::default()).unwrap();
//! let source = Raster::from_fn(64, 64, |x, _| Color::splat(x as f32 / 63.0)).unwrap();
//! let frame = pass.apply(&source, 64, 64).unwrap();
//! assert_eq!(frame.width(), 64);
//! ```

pub mod error;
pub mod options;
pub mod pass;

pub use error::{RenderError, RenderResult};
pub use options::RetroOptions;
pub use pass::RetroPass;
