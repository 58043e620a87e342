//! # Identicon
//!
//! Deterministic avatar images in the style of GitHub's default avatars. Any
//! string maps to a 250×250 PNG holding a left-right symmetric 5×5 pattern of
//! solid blocks. The same string always produces byte-identical output.
//!
//! ```
//! let png = identicon::generate("Banana").unwrap();
//! assert_eq!(png, identicon::generate("Banana").unwrap());
//!
//! let record = identicon::ImageRecord::new("Banana");
//! assert_eq!(record.color(), identicon::Rgb::new(230, 249, 195));
//! ```
//!
//! # Architecture: A Linear Pipeline
//!
//! ```text
//! input ─► MD5 digest ─┬─► color (bytes 0..3) ───────────────────────┐
//!                      └─► 25 mirrored cells ─► even cells ─► rects ─┴─► PNG
//! ```
//!
//! Every stage is a pure function of the previous stage's output, collected
//! in [`pipeline`]. [`ImageRecord`] runs them in order and holds each result.
//! Nothing in the pipeline does I/O; writing files and parallel fan-out live
//! in [`storage`] and [`batch`].
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`pipeline`] | Hash, color, grid, filter, pixel map, rasterize |
//! | [`record`] | [`ImageRecord`] and the [`generate`] entry point |
//! | [`types`] | Shared value types and the fixed geometry constants |
//! | [`storage`] | File naming and writing PNGs to disk |
//! | [`batch`] | Parallel generation of many inputs, JSON manifest |
//! | [`config`] | `config.toml` loading, merging, and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Fixed Geometry
//!
//! Grid size, canvas size, and the color rule are part of the identicon
//! format. Changing any of them would change every avatar ever generated, so
//! they are constants in [`types`], not config keys.
//!
//! ## Transparent Background
//!
//! Cells that are not filled stay fully transparent (`[0, 0, 0, 0]`). The
//! image composes onto any page background, and an input whose cells are all
//! odd yields a fully transparent canvas.
//!
//! ## Inclusive Rectangles
//!
//! Each block is filled from its top-left to its bottom-right corner
//! inclusive, so a block bleeds one pixel into its right and lower neighbors.
//! This keeps output pixel-compatible with identicons drawn by filled-rectangle
//! primitives that include both corners.

pub mod batch;
pub mod config;
pub mod output;
pub mod pipeline;
pub mod record;
pub mod storage;
pub mod types;

pub use record::{ImageRecord, generate};
pub use types::{Cell, Digest, Rect, Rgb};

#[cfg(test)]
pub(crate) mod test_helpers;
