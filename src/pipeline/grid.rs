//! Grid construction and the even-cell filter.
//!
//! The digest is read three bytes at a time. Each triple `[a, b, c]` becomes
//! the row `[a, b, c, b, a]`, which gives the identicon its left-right
//! symmetry. Sixteen bytes make five full triples; the sixteenth byte is not
//! part of any row.

use crate::types::{CELL_COUNT, Cell, Digest};

/// Bytes of digest consumed per grid row.
const ROW_SOURCE_LEN: usize = 3;

/// Mirror a three-byte chunk into a palindromic five-value row.
pub fn mirror_row([a, b, c]: [u8; ROW_SOURCE_LEN]) -> [u8; 5] {
    [a, b, c, b, a]
}

/// Build the full 25-cell grid, row-major, each cell tagged with its index.
pub fn build_grid(hash: &Digest) -> Vec<Cell> {
    let grid: Vec<Cell> = hash
        .chunks_exact(ROW_SOURCE_LEN)
        .flat_map(|chunk| mirror_row([chunk[0], chunk[1], chunk[2]]))
        .zip(0u32..)
        .map(|(value, index)| Cell::new(value, index))
        .collect();
    debug_assert_eq!(grid.len(), CELL_COUNT);
    grid
}

/// Keep only cells with an even value. Order and indices are preserved, so
/// the gaps left behind are exactly the blank cells of the image.
pub fn filter_odd(grid: Vec<Cell>) -> Vec<Cell> {
    grid.into_iter().filter(|cell| cell.is_even()).collect()
}
