//! The record threaded through the pipeline, and the [`generate`] entry point.
//!
//! [`ImageRecord::new`] runs the stages in their fixed order and fills one
//! field per stage. Fields are private: once a stage has set a field, nothing
//! downstream can revise it.

use crate::pipeline::{
    RenderError, build_grid, build_pixel_map, filter_odd, hash_input, pick_color, render,
    render_text,
};
use crate::types::{Cell, Digest, Rect, Rgb};

/// Everything derived from one input string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    hash: Digest,
    color: Rgb,
    grid: Vec<Cell>,
    pixel_map: Vec<Rect>,
}

impl ImageRecord {
    pub fn new(input: &str) -> Self {
        let hash = hash_input(input);
        let color = pick_color(&hash);
        let grid = filter_odd(build_grid(&hash));
        let pixel_map = build_pixel_map(&grid);
        Self {
            hash,
            color,
            grid,
            pixel_map,
        }
    }

    pub fn hash(&self) -> &Digest {
        &self.hash
    }

    /// Lowercase hex of the digest, as printed by `md5sum`.
    pub fn hash_hex(&self) -> String {
        self.hash.iter().map(|b| format!("{b:02x}")).collect()
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// The filtered grid: even-valued cells only, original indices.
    pub fn grid(&self) -> &[Cell] {
        &self.grid
    }

    pub fn pixel_map(&self) -> &[Rect] {
        &self.pixel_map
    }

    /// PNG bytes for this record.
    pub fn render(&self) -> Result<Vec<u8>, RenderError> {
        render(self.color, &self.pixel_map)
    }

    pub fn render_text(&self) -> String {
        render_text(&self.grid)
    }
}

/// Run the whole pipeline on `input` and return the PNG bytes.
pub fn generate(input: &str) -> Result<Vec<u8>, RenderError> {
    ImageRecord::new(input).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{decode_png, filled_cells};

    #[test]
    fn banana_record() {
        let record = ImageRecord::new("Banana");
        assert_eq!(record.hash()[15], 30);
        assert_eq!(record.color(), Rgb::new(230, 249, 195));
        assert_eq!(record.grid().len(), 12);
        assert_eq!(record.grid().last(), Some(&Cell::new(24, 24)));
        assert_eq!(record.pixel_map().len(), record.grid().len());
    }

    #[test]
    fn hash_hex_matches_md5sum() {
        let record = ImageRecord::new("");
        assert_eq!(record.hash_hex(), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn pixel_map_tracks_grid() {
        let record = ImageRecord::new("hello");
        for (cell, rect) in record.grid().iter().zip(record.pixel_map()) {
            assert_eq!(rect.top_left.x, (cell.index % 5) * 50);
            assert_eq!(rect.top_left.y, (cell.index / 5) * 50);
        }
    }

    #[test]
    fn generate_is_deterministic() {
        for input in ["Banana", "", "a", "odd-1627", "名前"] {
            assert_eq!(generate(input).unwrap(), generate(input).unwrap());
        }
    }

    #[test]
    fn rendered_blocks_match_grid() {
        let record = ImageRecord::new("Banana");
        let image = decode_png(&record.render().unwrap());
        let indices: Vec<u32> = record.grid().iter().map(|c| c.index).collect();
        assert_eq!(filled_cells(&image), indices);
    }

    #[test]
    fn different_inputs_give_different_images() {
        assert_ne!(generate("Banana").unwrap(), generate("banana").unwrap());
    }

    #[test]
    fn all_odd_record_has_nothing_to_draw() {
        let record = ImageRecord::new("odd-1627");
        assert!(record.grid().is_empty());
        assert!(record.pixel_map().is_empty());
    }

    #[test]
    fn text_preview_has_mirrored_rows() {
        let text = ImageRecord::new("Banana").render_text();
        for line in text.lines() {
            let cells: Vec<char> = line.chars().collect();
            let reversed: Vec<char> = cells.iter().rev().copied().collect();
            assert_eq!(cells, reversed);
        }
    }
}
