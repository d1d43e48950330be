//! Retropix Color - Palette construction and per-pixel color mapping
//!
//! This crate provides the color half of the retro-look pipeline:
//!
//! - **Palette generation** ([`generate`]): curated historical tiers and
//!   procedural uniform RGB cubes for any size in [2, 4096]
//! - **Ordered dithering** ([`dither`]): fixed 4x4 Bayer threshold matrix
//! - **Quantization** ([`quantize`]): exact nearest-color search and the
//!   analytic cube shortcut for large generated palettes
//! - **Platform presets** ([`platforms`]): named resolution/palette pairs
//!   for historical machines

pub mod dither;
pub mod error;
pub mod generate;
pub mod platforms;
pub mod quantize;

// Re-export core types
pub use retropix_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export palette generation
pub use generate::{cube_side, generate};

// Re-export dithering
pub use dither::{BAYER_4X4, auto_offset, dither as dither_color};

// Re-export quantization
pub use quantize::{QuantizeOptions, cube_color, nearest_color, nearest_index, quantize};

// Re-export presets
pub use platforms::{PLATFORMS, Platform};
