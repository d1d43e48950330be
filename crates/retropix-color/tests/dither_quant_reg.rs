//! Dithering and quantization regression test
//!
//! Checks the Bayer threshold pattern, the skip-black rule, and agreement
//! between the exact search and the analytic cube shortcut on generated
//! cube palettes.

use retropix_color::quantize::QuantizeOptions;
use retropix_color::{cube_color, dither_color, generate, nearest_color, nearest_index, quantize};
use retropix_core::{Color, LookupTable};
use retropix_test::RegParams;

#[test]
fn dither_quant_reg() {
    let mut rp = RegParams::new("dither_quant");

    // The 16 thresholds cover 0..16 exactly once; their mean is 7.5/16
    let mut sum = 0.0f64;
    for y in 0..4 {
        for x in 0..4 {
            sum += retropix_color::dither::threshold(x, y) as f64;
        }
    }
    rp.compare_values(7.5 / 16.0, sum / 16.0, 1e-9);

    // Black survives any offset at any block coordinate
    for x in 0..8 {
        for y in 0..8 {
            let d = dither_color(Color::BLACK, x, y, 1.0);
            rp.compare_values(1.0, d.is_black() as u8 as f64, 0.0);
        }
    }

    // Dithered channels stay clamped
    for &c in &[Color::splat(0.02), Color::splat(0.98)] {
        for x in 0..4 {
            for y in 0..4 {
                let d = dither_color(c, x, y, 1.0);
                for ch in [d.r, d.g, d.b] {
                    rp.compare_values(1.0, (0.0..=1.0).contains(&ch) as u8 as f64, 0.0);
                }
            }
        }
    }

    // Exact search: every palette member maps to itself with distance zero
    let lut = LookupTable::encode(&generate(16).unwrap());
    for i in 0..lut.len() {
        let member = lut.color(i);
        rp.compare_values(i as f64, nearest_index(&lut, member) as f64, 0.0);
        rp.compare_values(
            0.0,
            member.distance_squared(nearest_color(&lut, member)) as f64,
            0.0,
        );
    }

    // Analytic shortcut agrees with the exact search on cube palettes
    let cube = generate(512).unwrap(); // exact 8x8x8 cube, no padding
    let cube_lut = LookupTable::encode(&cube);
    let exact_only = QuantizeOptions {
        enabled: false,
        ..Default::default()
    };
    for &c in &[
        Color::new(0.0, 0.0, 0.0),
        Color::new(0.2, 0.4, 0.6),
        Color::new(0.49, 0.51, 0.99),
        Color::new(1.0, 1.0, 1.0),
    ] {
        let analytic = cube_color(c, cube.len());
        let exact = quantize(&cube_lut, c, &exact_only);
        // Compare byte-encoded, the layout the external renderer sees
        let (ar, ag, ab) = analytic.to_bytes();
        let (er, eg, eb) = exact.to_bytes();
        rp.compare_values(er as f64, ar as f64, 1.0);
        rp.compare_values(eg as f64, ag as f64, 1.0);
        rp.compare_values(eb as f64, ab as f64, 1.0);
    }

    assert!(rp.cleanup());
}
