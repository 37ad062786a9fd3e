//! Error types for the dnicr-core library.

use thiserror::Error;

/// Main error type for the dnicr library.
#[derive(Error, Debug)]
pub enum DnicrError {
    /// OCR boundary error, relayed from the recognition stage.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Document extraction error.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors raised by the OCR acquisition boundary, before any text reaches
/// the extraction core. The core never produces these itself; it only
/// relays them. Retrying is a caller concern.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The recognition engine never finished its one-time setup.
    #[error("OCR not initialized")]
    NotInitialized,

    /// The source image could not be read or decoded.
    #[error("image could not be loaded")]
    ImageLoad,

    /// Recognition ran but produced no text at all.
    #[error("no text could be extracted")]
    NoText,
}

/// Errors related to DNI field extraction.
///
/// Per-field strategy misses are recovered silently by falling through to
/// the next strategy; only an unresolved national ID is fatal.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// No strategy produced the mandatory national ID.
    #[error("national ID could not be detected")]
    NationalIdNotDetected,
}

/// Result type for the dnicr library.
pub type Result<T> = std::result::Result<T, DnicrError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_error_messages() {
        assert_eq!(OcrError::NotInitialized.to_string(), "OCR not initialized");
        assert_eq!(OcrError::ImageLoad.to_string(), "image could not be loaded");
        assert_eq!(OcrError::NoText.to_string(), "no text could be extracted");
    }

    #[test]
    fn test_hard_failure_message() {
        assert_eq!(
            ExtractionError::NationalIdNotDetected.to_string(),
            "national ID could not be detected"
        );
    }
}
