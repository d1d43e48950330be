//! Retro platform presets
//!
//! Named resolution/palette pairs for historical machines, usable as
//! one-call configurations for the render pass. Palettes are stored as
//! packed hex values and materialized on demand; every preset satisfies
//! the palette length invariant.

use crate::error::ColorResult;
use retropix_core::{Color, Palette, Resolution};

/// A historical display mode: name, pixel grid, and color set
#[derive(Debug, Clone, Copy)]
pub struct Platform {
    /// Display name, e.g. "Commodore 64"
    pub name: &'static str,
    /// Native pixel resolution of the mode
    pub resolution: Resolution,
    /// Palette entries as packed 0xRRGGBB values
    colors: &'static [u32],
}

impl Platform {
    /// Materialize the preset palette.
    pub fn palette(&self) -> ColorResult<Palette> {
        let colors = self.colors.iter().map(|&h| Color::from_hex(h)).collect();
        Ok(Palette::new(colors)?)
    }

    /// Get the number of colors in the preset.
    pub fn color_count(&self) -> usize {
        self.colors.len()
    }
}

const fn res(width: u32, height: u32) -> Resolution {
    Resolution { width, height }
}

/// All built-in platform presets.
pub const PLATFORMS: &[Platform] = &[
    Platform {
        name: "Atari ST (Low Resolution)",
        resolution: res(320, 200),
        colors: &[
            0xBFE4DD, 0x52473E, 0x1F1D1D, 0x312D2B, 0x3B3E3E, 0x734F42, 0xAF7D73, 0xF1DDCE,
            0x6F6F62, 0x9B5D51, 0xB9AFA4, 0xEC8985, 0x789E90, 0x9A6E33, 0xF6C37A, 0xFFFFFF,
        ],
    },
    Platform {
        name: "Atari ST (Medium Resolution)",
        resolution: res(640, 200),
        colors: &[0x514C4A, 0xFFFFFF, 0xCF3734, 0xC2E3DB],
    },
    Platform {
        name: "Atari ST (High Resolution)",
        resolution: res(640, 400),
        colors: &[0x000000, 0xFFFFFF],
    },
    Platform {
        name: "CGA (Low Resolution)",
        resolution: res(320, 200),
        colors: &[0x000000, 0x00CCCC, 0xCC00CC, 0xFFFFFF],
    },
    Platform {
        name: "CGA (High Resolution)",
        resolution: res(640, 200),
        colors: &[0x000000, 0xFFFFFF],
    },
    Platform {
        name: "EGA",
        resolution: res(640, 350),
        colors: &[
            0x000000, 0x0000AA, 0x00AA00, 0x00AAAA, 0xAA0000, 0xAA00AA, 0xAA5500, 0xAAAAAA,
            0x555555, 0x5555FF, 0x55FF55, 0x55FFFF, 0xFF5555, 0xFF55FF, 0xFFFF55, 0xFFFFFF,
        ],
    },
    Platform {
        name: "VGA (16-color)",
        resolution: res(640, 480),
        colors: &[
            0x000000, 0x0000AA, 0x00AA00, 0x00AAAA, 0xAA0000, 0xAA00AA, 0xAA5500, 0xAAAAAA,
            0x555555, 0x5555FF, 0x55FF55, 0x55FFFF, 0xFF5555, 0xFF55FF, 0xFFFF55, 0xFFFFFF,
        ],
    },
    Platform {
        name: "Commodore 64",
        resolution: res(320, 200),
        colors: &[
            0x000000, 0xFFFFFF, 0x880000, 0xAAFFEE, 0xCC44CC, 0x00CC55, 0x0000AA, 0xEEEE77,
            0xDD8855, 0x664400, 0xFF7777, 0x333333, 0x777777, 0xAAFF66, 0x0088FF, 0xBBBBBB,
        ],
    },
    Platform {
        name: "ZX Spectrum",
        resolution: res(256, 192),
        colors: &[
            0x000000, 0x0000FF, 0xFF0000, 0xFF00FF, 0x00FF00, 0x00FFFF, 0xFFFF00, 0xFFFFFF,
            0x000080, 0x800000, 0x800080, 0x008000, 0x008080, 0x808000, 0xC0C0C0,
        ],
    },
    Platform {
        name: "Game Boy",
        resolution: res(160, 144),
        colors: &[0x0F380F, 0x306230, 0x8BAC0F, 0x9BBC0F],
    },
    Platform {
        name: "Amstrad CPC",
        resolution: res(320, 200),
        colors: &[
            0x000000, 0x0000FF, 0xFF0000, 0xFF00FF, 0x00FF00, 0x00FFFF, 0xFFFF00, 0xFFFFFF,
            0x800000, 0x008000, 0x000080, 0x808000, 0x800080, 0x008080, 0xC0C0C0, 0x808080,
        ],
    },
    Platform {
        name: "MSX",
        resolution: res(256, 192),
        colors: &[
            0x000000, 0x0000FF, 0xFF0000, 0xFF00FF, 0x00FF00, 0x00FFFF, 0xFFFF00, 0xFFFFFF,
            0x800000, 0x008000, 0x000080, 0x808000, 0x800080, 0x008080, 0xC0C0C0, 0x808080,
        ],
    },
    Platform {
        name: "PC-88",
        resolution: res(640, 200),
        colors: &[
            0x000000, 0xFF0000, 0x00FF00, 0x0000FF, 0xFFFF00, 0xFF00FF, 0x00FFFF, 0xFFFFFF,
        ],
    },
    Platform {
        name: "Apple II",
        resolution: res(280, 192),
        colors: &[
            0x000000, 0xFF0000, 0x00FF00, 0x0000FF, 0xFFFF00, 0xFF00FF, 0x00FFFF, 0xFFFFFF,
            0x800000, 0x008000, 0x000080, 0x808000, 0x800080, 0x008080, 0xC0C0C0, 0x808080,
        ],
    },
];

/// Look up a preset by name.
pub fn find(name: &str) -> Option<&'static Platform> {
    PLATFORMS.iter().find(|p| p.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_presets_are_valid_palettes() {
        for platform in PLATFORMS {
            let palette = platform.palette().unwrap();
            assert_eq!(palette.len(), platform.color_count(), "{}", platform.name);
        }
    }

    #[test]
    fn test_find() {
        let gb = find("Game Boy").unwrap();
        assert_eq!(gb.color_count(), 4);
        assert_eq!((gb.resolution.width, gb.resolution.height), (160, 144));
        assert!(find("PDP-11").is_none());
    }

    #[test]
    fn test_monochrome_modes() {
        for name in ["Atari ST (High Resolution)", "CGA (High Resolution)"] {
            let p = find(name).unwrap().palette().unwrap();
            assert_eq!(p.len(), 2);
            assert_eq!(p.get(0), Some(retropix_core::Color::BLACK));
            assert_eq!(p.get(1), Some(retropix_core::Color::WHITE));
        }
    }
}
