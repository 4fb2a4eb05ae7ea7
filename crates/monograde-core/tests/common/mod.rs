#![allow(dead_code)]

use image::{Rgb, RgbImage};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Deterministic random source for reproducible scenarios.
pub fn seeded(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Build an RGB image from row-major pixel triples.
pub fn image_from_pixels(width: u32, height: u32, pixels: &[[u8; 3]]) -> RgbImage {
    assert_eq!(pixels.len(), (width * height) as usize);
    RgbImage::from_fn(width, height, |col, row| Rgb(pixels[(row * width + col) as usize]))
}

/// Image whose red channel ramps along x, green along y, blue along both.
pub fn gradient_image(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |col, row| {
        let r = (col * 255 / (width - 1).max(1)) as u8;
        let g = (row * 255 / (height - 1).max(1)) as u8;
        let b = ((col + row) * 255 / (width + height - 2).max(1)) as u8;
        Rgb([r, g, b])
    })
}

/// Image holding every 8-bit level once per channel, 16x16 pixels.
pub fn all_levels_image() -> RgbImage {
    RgbImage::from_fn(16, 16, |col, row| {
        let level = (row * 16 + col) as u8;
        Rgb([level, 255 - level, level.wrapping_mul(7)])
    })
}
