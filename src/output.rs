//! CLI output formatting.
//!
//! Each command has a `format_*` function returning `Vec<String>` for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.
//!
//! # Output Format
//!
//! ## Generate
//!
//! ```text
//! Banana → identicons/Banana.png
//!     Color: #e6f9c3
//!     Cells: 12 of 25
//! taken → FAILED: Storage failed: failed to write identicons/taken.png: Is a directory
//!
//! Generated 1 identicon, 1 failed
//! ```
//!
//! ## Preview
//!
//! ```text
//! Banana
//!     Hash:  e6f9c347672daae5a2557ae118f44a1e
//!     Color: #e6f9c3 (230, 249, 195)
//!     Cells: 12 of 25
//!
//! ██      ██
//!
//! ██  ██  ██
//!   ██  ██
//! ██████████
//! ```

use crate::batch::{BatchEvent, BatchOutcome};
use crate::record::ImageRecord;
use crate::types::CELL_COUNT;

// ============================================================================
// Shared helpers
// ============================================================================

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

fn cells_line(depth: usize, cells: usize) -> String {
    format!("{}Cells: {} of {}", indent(depth), cells, CELL_COUNT)
}

fn plural(n: usize, word: &str) -> String {
    if n == 1 {
        format!("{n} {word}")
    } else {
        format!("{n} {word}s")
    }
}

// ============================================================================
// Generate
// ============================================================================

/// Lines for one finished input, as it arrives from the batch.
pub fn format_batch_event(event: &BatchEvent) -> Vec<String> {
    match event {
        BatchEvent::Generated {
            input,
            path,
            color_hex,
            cells,
            ..
        } => vec![
            format!("{} → {}", input, path.display()),
            format!("{}Color: {}", indent(1), color_hex),
            cells_line(1, *cells),
        ],
        BatchEvent::Failed { input, error, .. } => {
            vec![format!("{} → FAILED: {}", input, error)]
        }
    }
}

/// Closing summary after all inputs have finished.
pub fn format_batch_summary(outcomes: &[BatchOutcome]) -> Vec<String> {
    let failed = outcomes.iter().filter(|o| o.is_err()).count();
    let generated = outcomes.len() - failed;
    vec![
        String::new(),
        format!("Generated {}, {} failed", plural(generated, "identicon"), failed),
    ]
}

pub fn print_batch_event(event: &BatchEvent) {
    for line in format_batch_event(event) {
        println!("{}", line);
    }
}

pub fn print_batch_summary(outcomes: &[BatchOutcome]) {
    for line in format_batch_summary(outcomes) {
        println!("{}", line);
    }
}

// ============================================================================
// Preview
// ============================================================================

/// Header with digest and color, then the 5×5 text rendering.
pub fn format_preview(input: &str, record: &ImageRecord) -> Vec<String> {
    let color = record.color();
    let mut lines = vec![
        input.to_string(),
        format!("{}Hash:  {}", indent(1), record.hash_hex()),
        format!("{}Color: {} {}", indent(1), color.to_hex(), color),
        cells_line(1, record.grid().len()),
        String::new(),
    ];
    lines.extend(record.render_text().lines().map(|l| l.trim_end().to_string()));
    lines
}

pub fn print_preview(input: &str, record: &ImageRecord) {
    for line in format_preview(input, record) {
        println!("{}", line);
    }
}
