use crate::types::{CELL_COUNT, CELL_SIZE, Cell, GRID_SIZE, Rect};

/// Canvas rectangle for a row-major grid index.
///
/// Panics if `index` is outside the 5×5 grid; indices come from
/// [`build_grid`](super::build_grid) so this only fires on a caller bug.
pub fn cell_rect(index: u32) -> Rect {
    assert!(
        (index as usize) < CELL_COUNT,
        "grid index {index} is outside the {GRID_SIZE}x{GRID_SIZE} grid"
    );
    let horizontal = (index % GRID_SIZE) * CELL_SIZE;
    let vertical = (index / GRID_SIZE) * CELL_SIZE;
    Rect::new(
        horizontal,
        vertical,
        horizontal + CELL_SIZE,
        vertical + CELL_SIZE,
    )
}

/// One rectangle per cell, in cell order.
pub fn build_pixel_map(grid: &[Cell]) -> Vec<Rect> {
    grid.iter().map(|cell| cell_rect(cell.index)).collect()
}
