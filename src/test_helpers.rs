//! Shared test utilities: PNG decoding and per-cell pixel probes.
//!
//! # Usage
//!
//! ```ignore
//! use crate::test_helpers::*;
//!
//! let image = decode_png(&generate("Banana").unwrap());
//! assert_eq!(filled_cells(&image), vec![0, 4, 10, 12, 14, 16, 18, 20, 21, 22, 23, 24]);
//! ```

use image::{ImageFormat, Rgba, RgbaImage};

use crate::pipeline::BACKGROUND;
use crate::types::{CELL_COUNT, CELL_SIZE, GRID_SIZE};

/// Decode PNG bytes into an RGBA buffer. Panics if the bytes are not a PNG.
pub fn decode_png(bytes: &[u8]) -> RgbaImage {
    image::load_from_memory_with_format(bytes, ImageFormat::Png)
        .unwrap_or_else(|e| panic!("not a decodable PNG: {e}"))
        .to_rgba8()
}

/// The pixel at the center of grid cell `index`.
pub fn cell_center(image: &RgbaImage, index: u32) -> Rgba<u8> {
    let x = (index % GRID_SIZE) * CELL_SIZE + CELL_SIZE / 2;
    let y = (index / GRID_SIZE) * CELL_SIZE + CELL_SIZE / 2;
    *image.get_pixel(x, y)
}

/// Indices of cells whose center is not background.
pub fn filled_cells(image: &RgbaImage) -> Vec<u32> {
    (0..CELL_COUNT as u32)
        .filter(|&index| cell_center(image, index) != BACKGROUND)
        .collect()
}
