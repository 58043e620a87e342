//! The identicon transform — pure functions, no I/O.
//!
//! | Stage | Function | Reads | Produces |
//! |---|---|---|---|
//! | **Hash** | [`hash_input`] | input string | 16-byte MD5 digest |
//! | **Color** | [`pick_color`] | digest bytes 0..3 | [`Rgb`](crate::types::Rgb) |
//! | **Grid** | [`build_grid`] | digest bytes 0..15 | 25 mirrored cells |
//! | **Filter** | [`filter_odd`] | grid | even-valued cells |
//! | **Pixel map** | [`build_pixel_map`] | filtered grid | one 50×50 rect per cell |
//! | **Rasterize** | [`render`] | color + rects | PNG bytes |
//!
//! Each stage is a pure function of the previous stage's output, so every
//! stage is unit tested in isolation. [`ImageRecord`](crate::record::ImageRecord)
//! chains them in order.

mod color;
mod grid;
mod hasher;
mod pixel_map;
pub mod raster;

pub use color::pick_color;
pub use grid::{build_grid, filter_odd, mirror_row};
pub use hasher::hash_input;
pub use pixel_map::{build_pixel_map, cell_rect};
pub use raster::{BACKGROUND, RenderError, rasterize, render, render_text};
