//! Render pass regression test
//!
//! Drives the full pipeline over synthetic and randomized sources and
//! checks the controller's reconciliation rules.

use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use retropix_core::{Color, Raster, Resolution};
use retropix_render::{RetroOptions, RetroPass};
use retropix_test::{RegParams, checkerboard, color_gradient};

fn random_raster(width: u32, height: u32, seed: u64) -> Raster {
    let mut rng = StdRng::seed_from_u64(seed);
    Raster::from_fn(width, height, |_, _| {
        Color::new(rng.random::<f32>(), rng.random::<f32>(), rng.random::<f32>())
    })
    .unwrap()
}

#[test]
fn pass_reg() {
    let mut rp = RegParams::new("pass");

    // Output pixels always land on palette entries (dithering off,
    // exact search, no gamma)
    let pass = RetroPass::new(RetroOptions {
        dithering: false,
        srgb_output: false,
        ..Default::default()
    })
    .unwrap();
    let source = color_gradient(64, 64).unwrap();
    let frame = pass.apply(&source, 64, 64).unwrap();
    for p in frame.pixels() {
        let member = (0..pass.lookup_table().len())
            .any(|i| pass.lookup_table().color(i) == *p);
        rp.compare_values(1.0, member as u8 as f64, 0.0);
    }

    // Determinism over a randomized source
    let noisy = random_raster(48, 48, 0x5EED);
    let a = pass.apply(&noisy, 48, 48).unwrap();
    let b = pass.apply(&noisy, 48, 48).unwrap();
    rp.compare_rasters(&a, &b);

    // Idempotence: re-quantizing quantized output changes nothing
    let again = pass.apply(&a, 48, 48).unwrap();
    rp.compare_rasters(&a, &again);

    // A checkerboard through a matching grid keeps its structure
    let cb = checkerboard(8, 8, 4, Color::BLACK, Color::WHITE).unwrap();
    let pass2 = RetroPass::new(RetroOptions {
        resolution: Resolution::new(8, 8).unwrap(),
        color_count: 2,
        dithering: false,
        srgb_output: false,
        ..Default::default()
    })
    .unwrap();
    let out = pass2.apply(&cb, 8, 8).unwrap();
    rp.compare_rasters(&cb, &out);

    assert!(rp.cleanup());
}

#[test]
fn controller_reg() {
    let mut rp = RegParams::new("controller");

    let mut pass = RetroPass::new(RetroOptions::default()).unwrap();

    // setColorCount then read palette length
    pass.set_color_count(100).unwrap();
    rp.compare_values(100.0, pass.palette().len() as f64, 0.0);
    rp.compare_values(100.0, pass.lookup_table().len() as f64, 0.0);

    // setPalette then read color count
    pass.set_palette(vec![Color::BLACK, Color::splat(0.25), Color::WHITE])
        .unwrap();
    rp.compare_values(3.0, pass.color_count() as f64, 0.0);

    // Failed mutations leave the controller untouched
    let before = pass.color_count();
    rp.compare_values(1.0, pass.set_color_count(4097).is_err() as u8 as f64, 0.0);
    rp.compare_values(1.0, pass.set_palette(vec![]).is_err() as u8 as f64, 0.0);
    rp.compare_values(before as f64, pass.color_count() as f64, 0.0);

    // Auto resolution: viewport 800x600 at ratio 0.25 -> 200x150
    pass.set_auto_resolution(true);
    pass.set_pixel_ratio(0.25).unwrap();
    pass.set_size((800, 600));
    let r = pass.resolution();
    rp.compare_values(200.0, r.width as f64, 0.0);
    rp.compare_values(150.0, r.height as f64, 0.0);

    // Auto dithering offset tracks the color count
    pass.set_auto_dithering_offset(true);
    pass.set_color_count(16).unwrap();
    rp.compare_values(0.1 + 0.9 / 15.0, pass.dithering_offset() as f64, 1e-6);
    pass.set_color_count(2).unwrap();
    rp.compare_values(1.0, pass.dithering_offset() as f64, 1e-6);

    // Dithering a black frame is a no-op even at maximum offset
    pass.set_dithering(true);
    pass.set_auto_dithering_offset(false);
    pass.set_dithering_offset(1.0);
    pass.set_srgb_output(false);
    let black = Raster::from_fn(16, 16, |_, _| Color::BLACK).unwrap();
    let out = pass.apply(&black, 16, 16).unwrap();
    rp.compare_rasters(&black, &out);

    assert!(rp.cleanup());
}
