//! Core library for Peruvian DNI OCR text processing.
//!
//! This crate provides:
//! - The extraction context boundary (ordered recognized text lines)
//! - Multi-strategy, priority-ordered field extraction (national ID,
//!   surnames, given names, birth date, sex, marital status)
//! - MRZ decoding, OCR date-token repair and given-name normalization
//! - Record models serializing to the downstream JSON contract
//!
//! Image acquisition and the OCR inference engine are external
//! collaborators; the core consumes only their recognized text.

pub mod context;
pub mod error;
pub mod extract;
pub mod models;

pub use context::ExtractionContext;
pub use error::{DnicrError, ExtractionError, OcrError, Result};
pub use extract::{DniExtractor, DniParser, ExtractionResult, LayeredDniParser};
pub use models::config::{DnicrConfig, ExtractionConfig};
pub use models::record::{DniRecord, MaritalStatus, Sex};
