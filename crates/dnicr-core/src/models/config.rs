//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{DnicrError, Result};

/// Main configuration for the dnicr pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DnicrConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,
}

impl DnicrConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        serde_json::from_str(&data).map_err(|e| DnicrError::Config(e.to_string()))
    }
}

/// Field extraction configuration.
///
/// The scan windows bound how far below a keyword line each rule looks for
/// its value. Defaults match the observed card layouts; raising them trades
/// precision for recall on badly fragmented OCR output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Lines inspected below each surname keyword line.
    pub surname_window: usize,

    /// Lines inspected below the given-names keyword line.
    pub given_names_window: usize,

    /// Lines inspected below the birth-date keyword line.
    pub birth_date_window: usize,

    /// Lines inspected below the marital-status keyword line.
    pub marital_window: usize,

    /// Maximum plausible age in years; dates implying more are rejected.
    pub max_age: u32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            surname_window: 5,
            given_names_window: 3,
            birth_date_window: 5,
            marital_window: 8,
            max_age: 120,
        }
    }
}
