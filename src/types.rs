//! Shared types threaded through the pipeline stages.
//!
//! The geometry is fixed: a 5×5 grid of 50px cells on a 250px square canvas.
//! None of these values are configurable.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of bytes in an MD5 digest.
pub const DIGEST_LEN: usize = 16;

/// Cells per grid row (and rows per grid).
pub const GRID_SIZE: u32 = 5;

/// Total cells in an unfiltered grid.
pub const CELL_COUNT: usize = (GRID_SIZE * GRID_SIZE) as usize;

/// Edge length of one cell, in pixels.
pub const CELL_SIZE: u32 = 50;

/// Edge length of the square canvas, in pixels.
pub const CANVAS_SIZE: u32 = GRID_SIZE * CELL_SIZE;

/// Raw MD5 digest bytes, in digest order.
pub type Digest = [u8; DIGEST_LEN];

/// Foreground color of an identicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS-style hex form, e.g. `#e6f9c3`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

/// One logical grid position: the byte that produced it and its row-major
/// index (0..25). Indices are never renumbered after filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub value: u8,
    pub index: u32,
}

impl Cell {
    pub const fn new(value: u8, index: u32) -> Self {
        Self { value, index }
    }

    pub fn is_even(self) -> bool {
        self.value % 2 == 0
    }
}

/// A pixel coordinate on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: u32,
    pub y: u32,
}

/// Fill instruction for one cell. Both corners are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub top_left: Point,
    pub bottom_right: Point,
}

impl Rect {
    pub const fn new(x1: u32, y1: u32, x2: u32, y2: u32) -> Self {
        Self {
            top_left: Point { x: x1, y: y1 },
            bottom_right: Point { x: x2, y: y2 },
        }
    }
}
