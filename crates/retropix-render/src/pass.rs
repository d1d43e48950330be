//! RetroPass - Parameter controller and per-pixel mapping pass
//!
//! `RetroPass` owns the current configuration (resolution, palette,
//! dithering, quantization policy) and keeps the dependent pieces
//! mutually consistent:
//!
//! - The color count is always `palette.len()`; it is never stored
//!   separately.
//! - The lookup table is regenerated whenever the palette changes, and a
//!   new table is installed before the previous one is dropped.
//! - In auto modes, resolution follows `viewport * pixel_ratio` and the
//!   dithering offset follows the color count.
//!
//! Every mutator validates first and commits second: on error the
//! controller is observably unchanged.
//!
//! The mapping itself ([`RetroPass::shade`]) is a pure function of a
//! settled `&self` snapshot, one output pixel at a time, with no shared
//! mutable state — pixels can be computed in any order or in parallel.
//! Rust's borrow rules make mid-frame mutation impossible: a running
//! [`RetroPass::apply`] holds `&self`, so no `&mut self` mutator can
//! interleave.

use crate::error::RenderResult;
use crate::options::RetroOptions;
use retropix_color::quantize::QuantizeOptions;
use retropix_color::{auto_offset, dither_color, generate, quantize};
use retropix_core::{Color, Error, ImageSource, LookupTable, Palette, Raster, Resolution};

/// Retro-look post-processing pass: pixelation, ordered dithering, and
/// palette quantization
#[derive(Debug, Clone)]
pub struct RetroPass {
    palette: Palette,
    lut: LookupTable,
    /// Whether the palette came from the tiered generator (and is thus a
    /// uniform cube at analytic sizes)
    generated: bool,
    resolution: Resolution,
    auto_resolution: bool,
    pixel_ratio: f32,
    /// Last viewport size seen via `set_size`
    viewport: Option<(u32, u32)>,
    dithering: bool,
    dithering_offset: f32,
    auto_dithering_offset: bool,
    quantize_options: QuantizeOptions,
    srgb_output: bool,
}

impl RetroPass {
    /// Create a pass from options.
    ///
    /// An explicit `color_palette` takes precedence over `color_count`.
    ///
    /// # Errors
    ///
    /// Fails on an out-of-range color count or palette length, a
    /// zero-sized resolution, a negative or non-finite pixel ratio, or a
    /// custom palette at or over the quantization threshold while
    /// quantization is enabled.
    ///
    /// # Examples
    ///
    /// ```
    /// use retropix_render::{RetroOptions, RetroPass};
    ///
    /// let pass = RetroPass::new(RetroOptions::default()).unwrap();
    /// assert_eq!(pass.color_count(), 16);
    /// ```
    pub fn new(options: RetroOptions) -> RenderResult<Self> {
        check_resolution(options.resolution)?;
        if !options.pixel_ratio.is_finite() || options.pixel_ratio < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "pixel_ratio must be finite and non-negative, got {}",
                options.pixel_ratio
            ))
            .into());
        }
        if options.quantization_threshold < 2 {
            return Err(Error::InvalidParameter(format!(
                "quantization_threshold must be at least 2, got {}",
                options.quantization_threshold
            ))
            .into());
        }

        let quantize_options = QuantizeOptions {
            enabled: options.quantization_enabled,
            threshold: options.quantization_threshold,
        };

        let (palette, generated) = match options.color_palette {
            Some(colors) => {
                let palette = Palette::new(colors)?;
                check_custom_palette(palette.len(), &quantize_options)?;
                (palette, false)
            }
            None => (generate(options.color_count)?, true),
        };

        let lut = LookupTable::encode(&palette);
        let dithering_offset = if options.auto_dithering_offset {
            auto_offset(palette.len())
        } else {
            options.dithering_offset
        };

        Ok(Self {
            palette,
            lut,
            generated,
            resolution: options.resolution,
            auto_resolution: options.auto_resolution,
            pixel_ratio: options.pixel_ratio,
            viewport: None,
            dithering: options.dithering,
            dithering_offset,
            auto_dithering_offset: options.auto_dithering_offset,
            quantize_options,
            srgb_output: options.srgb_output,
        })
    }

    /// Get the current color count (always the palette length).
    #[inline]
    pub fn color_count(&self) -> usize {
        self.palette.len()
    }

    /// Get the current palette.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Get the current lookup table (the artifact an external renderer
    /// binds).
    pub fn lookup_table(&self) -> &LookupTable {
        &self.lut
    }

    /// Regenerate the palette for a new color count.
    ///
    /// No-op when `count` already matches a generated palette of that
    /// size.
    ///
    /// # Errors
    ///
    /// Fails on a count outside [2, 4096]; the current palette and table
    /// are unchanged on failure.
    pub fn set_color_count(&mut self, count: usize) -> RenderResult<()> {
        if self.generated && count == self.palette.len() {
            return Ok(());
        }
        let palette = generate(count)?;
        self.install_palette(palette, true);
        Ok(())
    }

    /// Replace the palette with explicit colors.
    ///
    /// The color count becomes `colors.len()`; the lookup table is
    /// regenerated and the previous one dropped after the new one is in
    /// place.
    ///
    /// # Errors
    ///
    /// Fails on an invalid length, or on a palette at or over the
    /// quantization threshold while quantization is enabled (the analytic
    /// shortcut would silently mis-quantize a custom palette; disable
    /// quantization first). State is unchanged on failure.
    pub fn set_palette(&mut self, colors: Vec<Color>) -> RenderResult<()> {
        let palette = Palette::new(colors)?;
        check_custom_palette(palette.len(), &self.quantize_options)?;
        self.install_palette(palette, false);
        Ok(())
    }

    /// Get the current output resolution.
    #[inline]
    pub fn resolution(&self) -> Resolution {
        self.resolution
    }

    /// Set the output resolution explicitly.
    ///
    /// In auto mode the value holds until the next viewport or pixel
    /// ratio change recomputes it.
    ///
    /// # Errors
    ///
    /// Fails on a zero-sized resolution; `Resolution`'s public fields
    /// allow building one without going through `Resolution::new`.
    pub fn set_resolution(&mut self, resolution: Resolution) -> RenderResult<()> {
        check_resolution(resolution)?;
        self.resolution = resolution;
        Ok(())
    }

    /// Check whether auto-resolution mode is on.
    pub fn auto_resolution(&self) -> bool {
        self.auto_resolution
    }

    /// Toggle auto-resolution mode, recomputing immediately when enabled.
    pub fn set_auto_resolution(&mut self, enabled: bool) {
        if self.auto_resolution != enabled {
            self.auto_resolution = enabled;
            self.update_resolution();
        }
    }

    /// Get the pixel ratio used in auto-resolution mode.
    pub fn pixel_ratio(&self) -> f32 {
        self.pixel_ratio
    }

    /// Set the pixel ratio, recomputing the resolution in auto mode.
    ///
    /// # Errors
    ///
    /// Fails on a negative or non-finite value.
    pub fn set_pixel_ratio(&mut self, ratio: f32) -> RenderResult<()> {
        if !ratio.is_finite() || ratio < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "pixel_ratio must be finite and non-negative, got {ratio}"
            ))
            .into());
        }
        if self.pixel_ratio != ratio {
            self.pixel_ratio = ratio;
            self.update_resolution();
        }
        Ok(())
    }

    /// Notify the pass of a viewport size change.
    ///
    /// In auto-resolution mode the output resolution is recomputed as
    /// `viewport * pixel_ratio`.
    pub fn set_size(&mut self, viewport: (u32, u32)) {
        self.viewport = Some(viewport);
        self.update_resolution();
    }

    /// Check whether dithering is applied.
    pub fn dithering(&self) -> bool {
        self.dithering
    }

    /// Toggle dithering.
    pub fn set_dithering(&mut self, enabled: bool) {
        self.dithering = enabled;
    }

    /// Get the current dithering offset.
    pub fn dithering_offset(&self) -> f32 {
        self.dithering_offset
    }

    /// Set the dithering offset explicitly.
    pub fn set_dithering_offset(&mut self, offset: f32) {
        self.dithering_offset = offset;
    }

    /// Check whether the offset follows the color count.
    pub fn auto_dithering_offset(&self) -> bool {
        self.auto_dithering_offset
    }

    /// Toggle automatic dithering offset, recomputing immediately when
    /// enabled.
    pub fn set_auto_dithering_offset(&mut self, enabled: bool) {
        if self.auto_dithering_offset != enabled {
            self.auto_dithering_offset = enabled;
            if enabled {
                self.dithering_offset = auto_offset(self.palette.len());
            }
        }
    }

    /// Check whether the analytic cube shortcut is allowed.
    pub fn quantization_enabled(&self) -> bool {
        self.quantize_options.enabled
    }

    /// Toggle the analytic cube shortcut.
    ///
    /// # Errors
    ///
    /// Enabling fails while a custom palette at or over the threshold is
    /// installed.
    pub fn set_quantization_enabled(&mut self, enabled: bool) -> RenderResult<()> {
        if enabled && !self.generated {
            check_custom_palette(
                self.palette.len(),
                &QuantizeOptions {
                    enabled,
                    threshold: self.quantize_options.threshold,
                },
            )?;
        }
        self.quantize_options.enabled = enabled;
        Ok(())
    }

    /// Get the palette size at which the analytic shortcut takes over.
    pub fn quantization_threshold(&self) -> usize {
        self.quantize_options.threshold
    }

    /// Set the analytic-shortcut threshold.
    ///
    /// # Errors
    ///
    /// Fails on a threshold under 2, or when lowering it to or below the
    /// size of an installed custom palette while quantization is enabled.
    pub fn set_quantization_threshold(&mut self, threshold: usize) -> RenderResult<()> {
        if threshold < 2 {
            return Err(Error::InvalidParameter(format!(
                "quantization_threshold must be at least 2, got {threshold}"
            ))
            .into());
        }
        if !self.generated {
            check_custom_palette(
                self.palette.len(),
                &QuantizeOptions {
                    enabled: self.quantize_options.enabled,
                    threshold,
                },
            )?;
        }
        self.quantize_options.threshold = threshold;
        Ok(())
    }

    /// Check whether the final color is converted to sRGB.
    pub fn srgb_output(&self) -> bool {
        self.srgb_output
    }

    /// Toggle linear-to-sRGB conversion of the final color.
    pub fn set_srgb_output(&mut self, enabled: bool) {
        self.srgb_output = enabled;
    }

    /// Map one output position through the full retro pipeline.
    ///
    /// `u` and `v` are normalized coordinates in the output framebuffer.
    /// The source is sampled at the center of the pixelation block
    /// containing (u, v), dithered by the block coordinate, and quantized
    /// against the current palette.
    ///
    /// Pure with respect to `&self`: every pixel of a frame sees the same
    /// parameter snapshot, and no call depends on any other.
    pub fn shade(&self, source: &impl ImageSource, u: f32, v: f32) -> Color {
        let (w, h) = (self.resolution.width as f32, self.resolution.height as f32);
        let block_x = (u * w).floor().clamp(0.0, w - 1.0);
        let block_y = (v * h).floor().clamp(0.0, h - 1.0);

        // Sample at the block center: a true nearest-neighbor downsample
        // regardless of the native framebuffer size
        let mut color = source.sample((block_x + 0.5) / w, (block_y + 0.5) / h);

        if self.dithering {
            color = dither_color(
                color,
                block_x as u32,
                block_y as u32,
                self.dithering_offset,
            );
        }

        let quantized = quantize(&self.lut, color, &self.quantize_options);

        if self.srgb_output {
            quantized.linear_to_srgb()
        } else {
            quantized
        }
    }

    /// Run the full pass over a source, producing a `width x height`
    /// output frame.
    ///
    /// # Errors
    ///
    /// Fails on zero output dimensions.
    pub fn apply(
        &self,
        source: &impl ImageSource,
        width: u32,
        height: u32,
    ) -> RenderResult<Raster> {
        let raster = Raster::from_fn(width, height, |x, y| {
            let u = (x as f32 + 0.5) / width as f32;
            let v = (y as f32 + 0.5) / height as f32;
            self.shade(source, u, v)
        })?;
        Ok(raster)
    }

    /// Install a new palette: encode the replacement table, swap it in,
    /// then let the previous one drop. Keeps the auto dithering offset in
    /// step with the new color count.
    fn install_palette(&mut self, palette: Palette, generated: bool) {
        let lut = LookupTable::encode(&palette);
        let previous = std::mem::replace(&mut self.lut, lut);
        self.palette = palette;
        self.generated = generated;
        if self.auto_dithering_offset {
            self.dithering_offset = auto_offset(self.palette.len());
        }
        drop(previous);
    }

    fn update_resolution(&mut self) {
        if self.auto_resolution {
            if let Some(viewport) = self.viewport {
                self.resolution = Resolution::derive(viewport, self.pixel_ratio);
            }
        }
    }
}

/// Reject a zero-sized resolution before the mapping pass can divide by
/// it. Struct literals bypass `Resolution::new`, so the controller checks
/// again at its own boundary.
fn check_resolution(resolution: Resolution) -> Result<(), retropix_core::Error> {
    if resolution.width == 0 || resolution.height == 0 {
        return Err(Error::InvalidDimension {
            width: resolution.width,
            height: resolution.height,
        });
    }
    Ok(())
}

/// Reject a custom palette that the analytic shortcut would mis-quantize.
fn check_custom_palette(len: usize, options: &QuantizeOptions) -> Result<(), retropix_core::Error> {
    if options.enabled && len >= options.threshold {
        return Err(Error::UnsupportedConfiguration(format!(
            "custom palette of {len} colors reaches the quantization threshold \
             ({}); disable quantization to use it",
            options.threshold
        )));
    }
    Ok(())
}
