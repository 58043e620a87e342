//! Rasterization — fill instructions to encoded pixels.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Canvas | `image::RgbaImage`, 250×250, transparent background |
//! | Fill | per-pixel `put_pixel`, inclusive of both corners |
//! | Encode → PNG | `ImageBuffer::write_to` with `ImageFormat::Png` |
//!
//! Rectangles are filled inclusively, so a block at `(0,0)-(50,50)` also
//! colors column 50 and row 50. The far edge at 250 falls off the canvas and
//! is clipped.

use crate::types::{CANVAS_SIZE, CELL_COUNT, Cell, GRID_SIZE, Rect, Rgb};
use image::{ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;
use thiserror::Error;

/// Pixel value of every canvas position no rectangle covers.
pub const BACKGROUND: Rgba<u8> = Rgba([0, 0, 0, 0]);

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Paint `rects` in `color` onto a fresh canvas.
pub fn rasterize(color: Rgb, rects: &[Rect]) -> RgbaImage {
    let mut canvas = RgbaImage::from_pixel(CANVAS_SIZE, CANVAS_SIZE, BACKGROUND);
    let fill = Rgba([color.r, color.g, color.b, u8::MAX]);
    for rect in rects {
        fill_rect(&mut canvas, rect, fill);
    }
    canvas
}

fn fill_rect(canvas: &mut RgbaImage, rect: &Rect, fill: Rgba<u8>) {
    let x_end = rect.bottom_right.x.min(canvas.width() - 1);
    let y_end = rect.bottom_right.y.min(canvas.height() - 1);
    for y in rect.top_left.y..=y_end {
        for x in rect.top_left.x..=x_end {
            canvas.put_pixel(x, y, fill);
        }
    }
}

/// Rasterize and encode as PNG.
pub fn render(color: Rgb, rects: &[Rect]) -> Result<Vec<u8>, RenderError> {
    let canvas = rasterize(color, rects);
    let mut bytes = Vec::new();
    canvas.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}

/// Terminal preview of a filtered grid: `██` per kept cell, blanks elsewhere.
pub fn render_text(grid: &[Cell]) -> String {
    let mut filled = [false; CELL_COUNT];
    for cell in grid {
        if let Some(slot) = filled.get_mut(cell.index as usize) {
            *slot = true;
        }
    }
    filled
        .chunks(GRID_SIZE as usize)
        .map(|row| {
            row.iter()
                .map(|&on| if on { "██" } else { "  " })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
