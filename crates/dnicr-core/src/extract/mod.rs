//! DNI field extraction module.

mod parser;
pub mod rules;

pub use parser::{DniParser, ExtractionResult, LayeredDniParser};

use crate::error::ExtractionError;
use crate::models::record::DniRecord;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Trait for DNI record extractors.
pub trait DniExtractor {
    /// Extract a record from recognized lines in reading order.
    fn extract_from_lines(&self, lines: &[String]) -> Result<DniRecord>;

    /// Extract a record from a newline-joined text buffer.
    fn extract_from_text(&self, text: &str) -> Result<DniRecord>;
}
