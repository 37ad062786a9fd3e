//! Data models for extracted documents and pipeline configuration.

pub mod config;
pub mod record;

pub use config::{DnicrConfig, ExtractionConfig};
pub use record::{DniRecord, MaritalStatus, Sex};
