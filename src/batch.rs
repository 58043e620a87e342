//! Generating and saving identicons for many inputs at once.
//!
//! Each input is wholly independent: it is hashed, rendered and written
//! without touching any state shared with other inputs. That makes the batch
//! embarrassingly parallel, so inputs are fanned out with
//! [rayon](https://docs.rs/rayon). Outcomes come back in input order, and one
//! failing input never stops the others.
//!
//! File names are settled before the fan-out. Distinct inputs that clean up
//! to the same name (`a/b` and `a_b` both give `a_b.png`) must not overwrite
//! each other: the first keeps the plain name, later ones get the first four
//! hex digits of their digest appended (`a_b-a7e8.png`). An input for which
//! both names are taken fails with [`GenerateError::NameClash`]. Repeats of
//! the same input share one file.
//!
//! Progress is reported as [`BatchEvent`]s over an optional channel, so the
//! CLI can print results as they complete while the library stays free of
//! stdout writes.

use crate::pipeline::{RenderError, hash_input};
use crate::record::ImageRecord;
use crate::storage::{self, StorageError};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use thiserror::Error;

/// Name of the JSON manifest written next to the images.
pub const MANIFEST_FILENAME: &str = "manifest.json";

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),
    #[error("Storage failed: {0}")]
    Storage(#[from] StorageError),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("File name {file} is already used by another input")]
    NameClash { file: String },
}

/// A rendered identicon and where it was written.
#[derive(Debug, Clone)]
pub struct GeneratedIdenticon {
    pub input: String,
    pub path: PathBuf,
    pub record: ImageRecord,
}

pub type BatchOutcome = Result<GeneratedIdenticon, GenerateError>;

/// Progress notification, sent once per input as soon as it finishes.
#[derive(Debug, Clone, PartialEq)]
pub enum BatchEvent {
    Generated {
        /// Position of the input in the batch.
        index: usize,
        input: String,
        path: PathBuf,
        color_hex: String,
        cells: usize,
    },
    Failed {
        index: usize,
        input: String,
        error: String,
    },
}

/// Render `input` and write it to `output_dir` under its derived file name.
pub fn generate_one(input: &str, output_dir: &Path) -> Result<GeneratedIdenticon, GenerateError> {
    generate_named(input, &storage::file_name_for(input), output_dir)
}

fn generate_named(
    input: &str,
    name: &str,
    output_dir: &Path,
) -> Result<GeneratedIdenticon, GenerateError> {
    let record = ImageRecord::new(input);
    let bytes = record.render()?;
    let path = storage::save(&bytes, name, output_dir)?;
    Ok(GeneratedIdenticon {
        input: input.to_string(),
        path,
        record,
    })
}

/// Generate every input in parallel. The result has one outcome per input,
/// in input order.
pub fn generate_batch(
    inputs: &[String],
    output_dir: &Path,
    events: Option<Sender<BatchEvent>>,
) -> Vec<BatchOutcome> {
    let names = assign_file_names(inputs);
    inputs
        .par_iter()
        .zip(names.par_iter())
        .enumerate()
        .map(|(index, (input, name))| {
            let outcome = match name {
                Some(name) => generate_named(input, name, output_dir),
                None => Err(GenerateError::NameClash {
                    file: storage::file_name_for(input),
                }),
            };
            if let Some(tx) = &events {
                tx.send(event_for(index, input, &outcome)).ok();
            }
            outcome
        })
        .collect()
}

/// One file name per input, never shared between distinct inputs. `None`
/// when both the plain and the digest-suffixed name are already taken.
fn assign_file_names(inputs: &[String]) -> Vec<Option<String>> {
    let mut owners: HashMap<String, &str> = HashMap::new();
    let mut names = Vec::with_capacity(inputs.len());
    for input in inputs {
        let hash = hash_input(input);
        let suffix = format!("{:02x}{:02x}", hash[0], hash[1]);
        let candidates = [
            storage::file_name_for(input),
            storage::file_name_with_suffix(input, &suffix),
        ];
        let name = candidates.into_iter().find(|name| {
            owners
                .get(name)
                .is_none_or(|owner| *owner == input.as_str())
        });
        if let Some(name) = &name {
            owners.insert(name.clone(), input);
        }
        names.push(name);
    }
    names
}

fn event_for(index: usize, input: &str, outcome: &BatchOutcome) -> BatchEvent {
    match outcome {
        Ok(generated) => BatchEvent::Generated {
            index,
            input: input.to_string(),
            path: generated.path.clone(),
            color_hex: generated.record.color().to_hex(),
            cells: generated.record.grid().len(),
        },
        Err(e) => BatchEvent::Failed {
            index,
            input: input.to_string(),
            error: e.to_string(),
        },
    }
}

/// Machine-readable summary of a batch run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchManifest {
    pub identicons: Vec<ManifestEntry>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    pub input: String,
    /// File name relative to the output directory.
    pub file: String,
    pub hash: String,
    pub color: String,
    /// Grid indices of the filled cells.
    pub cells: Vec<u32>,
}

impl BatchManifest {
    /// Collect the successful outcomes; failures are left out.
    pub fn from_outcomes(outcomes: &[BatchOutcome]) -> Self {
        let identicons = outcomes
            .iter()
            .filter_map(|outcome| outcome.as_ref().ok())
            .map(|generated| ManifestEntry {
                input: generated.input.clone(),
                file: generated
                    .path
                    .file_name()
                    .map(|f| f.to_string_lossy().into_owned())
                    .unwrap_or_default(),
                hash: generated.record.hash_hex(),
                color: generated.record.color().to_hex(),
                cells: generated.record.grid().iter().map(|c| c.index).collect(),
            })
            .collect();
        Self { identicons }
    }

    /// Write as pretty JSON to `dir/manifest.json`.
    pub fn save(&self, dir: &Path) -> Result<PathBuf, GenerateError> {
        let json = serde_json::to_string_pretty(self)?;
        Ok(storage::save(json.as_bytes(), MANIFEST_FILENAME, dir)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{decode_png, filled_cells};
    use std::sync::mpsc;
    use tempfile::TempDir;

    fn inputs(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn generate_one_writes_png_named_after_input() {
        let tmp = TempDir::new().unwrap();
        let generated = generate_one("Banana", tmp.path()).unwrap();

        assert_eq!(generated.path, tmp.path().join("Banana.png"));
        let image = decode_png(&std::fs::read(&generated.path).unwrap());
        assert_eq!(image.dimensions(), (250, 250));
        assert_eq!(generated.record, ImageRecord::new("Banana"));
    }

    #[test]
    fn batch_preserves_input_order() {
        let tmp = TempDir::new().unwrap();
        let names = inputs(&["zeta", "alpha", "Banana", "mu", "odd-1627"]);
        let outcomes = generate_batch(&names, tmp.path(), None);

        let written: Vec<String> = outcomes
            .iter()
            .map(|o| o.as_ref().unwrap().input.clone())
            .collect();
        assert_eq!(written, names);
    }

    #[test]
    fn batch_sends_one_event_per_input() {
        let tmp = TempDir::new().unwrap();
        let names = inputs(&["a", "b", "c"]);
        let (tx, rx) = mpsc::channel();

        generate_batch(&names, tmp.path(), Some(tx));

        let mut events: Vec<BatchEvent> = rx.iter().collect();
        events.sort_by_key(|e| match e {
            BatchEvent::Generated { index, .. } | BatchEvent::Failed { index, .. } => *index,
        });
        assert_eq!(events.len(), 3);
        assert!(matches!(
            &events[1],
            BatchEvent::Generated { index: 1, input, .. } if input == "b"
        ));
    }

    #[test]
    fn failing_input_does_not_stop_the_batch() {
        let tmp = TempDir::new().unwrap();
        // A directory squatting on the target file name makes that write fail.
        std::fs::create_dir(tmp.path().join("taken.png")).unwrap();
        let names = inputs(&["ok", "taken", "fine"]);
        let (tx, rx) = mpsc::channel();

        let outcomes = generate_batch(&names, tmp.path(), Some(tx));

        assert!(outcomes[0].is_ok());
        assert!(matches!(outcomes[1], Err(GenerateError::Storage(_))));
        assert!(outcomes[2].is_ok());
        let failures = rx
            .iter()
            .filter(|e| matches!(e, BatchEvent::Failed { .. }))
            .count();
        assert_eq!(failures, 1);
    }

    #[test]
    fn clashing_names_get_distinct_files() {
        let tmp = TempDir::new().unwrap();
        let outcomes = generate_batch(&inputs(&["a/b", "a_b"]), tmp.path(), None);

        let manifest = BatchManifest::from_outcomes(&outcomes);
        assert_eq!(manifest.identicons.len(), 2);
        assert_eq!(manifest.identicons[0].file, "a_b.png");
        // md5("a_b") starts with dbf0
        assert_eq!(manifest.identicons[1].file, "a_b-dbf0.png");
        for entry in &manifest.identicons {
            let image = decode_png(&std::fs::read(tmp.path().join(&entry.file)).unwrap());
            assert_eq!(filled_cells(&image), entry.cells, "{}", entry.input);
        }
    }

    #[test]
    fn repeated_input_shares_one_file() {
        let names = assign_file_names(&inputs(&["Banana", "Banana"]));
        assert_eq!(
            names,
            vec![Some("Banana.png".to_string()), Some("Banana.png".to_string())]
        );
    }

    #[test]
    fn clash_on_both_names_fails_that_input() {
        let tmp = TempDir::new().unwrap();
        // md5("a/b") starts with a7e8, so both of its names are already taken
        let names = inputs(&["a_b", "a_b-a7e8", "a/b"]);
        let outcomes = generate_batch(&names, tmp.path(), None);

        assert!(outcomes[0].is_ok());
        assert!(outcomes[1].is_ok());
        assert!(matches!(
            &outcomes[2],
            Err(GenerateError::NameClash { file }) if file == "a_b.png"
        ));
        let image = decode_png(&std::fs::read(tmp.path().join("a_b.png")).unwrap());
        let expected: Vec<u32> = ImageRecord::new("a_b").grid().iter().map(|c| c.index).collect();
        assert_eq!(filled_cells(&image), expected);
    }

    #[test]
    fn manifest_lists_successful_outcomes() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join("taken.png")).unwrap();
        let outcomes = generate_batch(&inputs(&["Banana", "taken"]), tmp.path(), None);

        let manifest = BatchManifest::from_outcomes(&outcomes);
        assert_eq!(manifest.identicons.len(), 1);
        let entry = &manifest.identicons[0];
        assert_eq!(entry.input, "Banana");
        assert_eq!(entry.file, "Banana.png");
        assert_eq!(entry.color, "#e6f9c3");
        assert_eq!(entry.cells, vec![0, 4, 10, 12, 14, 16, 18, 20, 21, 22, 23, 24]);
    }

    #[test]
    fn manifest_saves_as_json() {
        let tmp = TempDir::new().unwrap();
        let outcomes = generate_batch(&inputs(&["a", "b"]), tmp.path(), None);
        let manifest = BatchManifest::from_outcomes(&outcomes);

        let path = manifest.save(tmp.path()).unwrap();
        assert_eq!(path, tmp.path().join(MANIFEST_FILENAME));
        let loaded: BatchManifest =
            serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(loaded, manifest);
    }
}
