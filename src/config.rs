//! Tool configuration loaded from `config.toml`.
//!
//! Only where files go and how many workers run are configurable. Grid size,
//! canvas size, colors and the hash algorithm are fixed by the identicon
//! format and have no keys here.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! output_dir = "identicons"  # Where generated PNGs are written
//!
//! [processing]
//! max_processes = 4          # Max parallel workers (omit for auto = CPU cores)
//! ```
//!
//! The file is sparse: stock defaults are merged under whatever keys it sets.
//! Unknown keys are rejected to catch typos early.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Name of the config file looked up in the config directory.
pub const CONFIG_FILENAME: &str = "config.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdenticonConfig {
    /// Directory generated images are written to.
    pub output_dir: String,
    /// Parallel processing settings.
    pub processing: ProcessingConfig,
}

impl Default for IdenticonConfig {
    fn default() -> Self {
        Self {
            output_dir: "identicons".to_string(),
            processing: ProcessingConfig::default(),
        }
    }
}

impl IdenticonConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_dir.trim().is_empty() {
            return Err(ConfigError::Validation(
                "output_dir must not be empty".into(),
            ));
        }
        if self.processing.max_processes == Some(0) {
            return Err(ConfigError::Validation(
                "processing.max_processes must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel workers for batch generation.
    /// When absent, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)`
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_processes.map(|n| n.min(cores)).unwrap_or(cores)
}

/// Stock defaults as a `toml::Value::Table`, the base layer for merging.
pub fn stock_defaults_value() -> toml::Value {
    toml::Value::try_from(IdenticonConfig::default()).expect("default config must serialize")
}

/// Recursively merge `overlay` on top of `base`.
///
/// Tables merge key by key; any other overlay value replaces the base value.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load `config.toml` from `dir`, merge it over stock defaults, and
/// validate. A missing file yields the defaults.
pub fn load_config(dir: &Path) -> Result<IdenticonConfig, ConfigError> {
    let config_path = dir.join(CONFIG_FILENAME);
    let mut merged = stock_defaults_value();
    if config_path.exists() {
        let overlay: toml::Value = toml::from_str(&fs::read_to_string(&config_path)?)?;
        merged = merge_toml(merged, overlay);
    }
    let config: IdenticonConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Fully commented stock `config.toml`, printed by `identicon gen-config`.
pub fn stock_config_toml() -> &'static str {
    r##"# Identicon Configuration
# =======================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults. Unknown keys will cause an error.
#
# The image itself (5x5 grid, 250x250 canvas, MD5-derived color) is fixed
# and cannot be configured.

# Directory generated PNG files are written to.
# The `--output` flag overrides this.
output_dir = "identicons"

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel workers when generating several identicons at once.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4
"##
}
