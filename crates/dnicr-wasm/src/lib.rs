//! WASM bindings for Peruvian DNI text extraction.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js.
//! The extraction core is pure text-in/record-out; the browser side runs its
//! own OCR engine and feeds recognized lines in.

use wasm_bindgen::prelude::*;

use dnicr_core::extract::rules::{correct_date_token, dates, split_concatenated};
use dnicr_core::extract::{DniParser, ExtractionResult};
use dnicr_core::LayeredDniParser;

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

/// Extract a DNI record from recognized text.
///
/// Takes newline-joined OCR output and returns the structured record.
#[wasm_bindgen]
pub fn extract_record_from_text(text: &str) -> Result<JsValue, JsValue> {
    let parser = LayeredDniParser::new();

    let result = parser
        .parse(text)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_wasm_bindgen::to_value(&result.record).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Repair and validate an 8-digit DDMMYYYY date token.
///
/// Returns the DD/MM/YYYY form, or undefined when the token is beyond repair.
#[wasm_bindgen]
pub fn repair_date_token(token: &str) -> Option<String> {
    correct_date_token(token).map(dates::format_card)
}

/// Split a fused given-name token ("JUANCARLOS" -> "JUAN CARLOS").
#[wasm_bindgen]
pub fn split_given_names(token: &str) -> String {
    split_concatenated(token)
}

/// DNI record extractor class for browser use.
#[wasm_bindgen]
pub struct DniTextExtractor {
    parser: LayeredDniParser,
}

#[wasm_bindgen]
impl DniTextExtractor {
    /// Create a new extractor.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            parser: LayeredDniParser::new(),
        }
    }

    /// Extract a record from recognized text.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        let result = self
            .parser
            .parse(text)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        serde_wasm_bindgen::to_value(&result.record)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get extraction result with metadata.
    #[wasm_bindgen]
    pub fn extract_with_metadata(&self, text: &str) -> Result<JsValue, JsValue> {
        let result = self
            .parser
            .parse(text)
            .map_err(|e| JsValue::from_str(&e.to_string()))?;

        serde_wasm_bindgen::to_value(&MetadataResult::from(result))
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }
}

impl Default for DniTextExtractor {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(serde::Serialize)]
struct MetadataResult {
    record: dnicr_core::DniRecord,
    raw_text: String,
    warnings: Vec<String>,
    processing_time_ms: u64,
}

impl From<ExtractionResult> for MetadataResult {
    fn from(result: ExtractionResult) -> Self {
        Self {
            record: result.record,
            raw_text: result.raw_text,
            warnings: result.warnings,
            processing_time_ms: result.processing_time_ms,
        }
    }
}

/// Recognized lines accumulated from browser-side OCR.
#[wasm_bindgen]
pub struct OcrLines {
    lines: Vec<String>,
}

#[wasm_bindgen]
impl OcrLines {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Append one recognized fragment in reading order.
    #[wasm_bindgen]
    pub fn add_line(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    /// All fragments joined with newlines.
    #[wasm_bindgen]
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    /// Extract a record from the accumulated lines.
    #[wasm_bindgen]
    pub fn extract_record(&self) -> Result<JsValue, JsValue> {
        extract_record_from_text(&self.text())
    }
}

impl Default for OcrLines {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_repair_date_token() {
        assert_eq!(repair_date_token("35042000"), Some("05/04/2000".to_string()));
        assert_eq!(repair_date_token("notadate"), None);
    }

    #[wasm_bindgen_test]
    fn test_split_given_names() {
        assert_eq!(split_given_names("JUANCARLOS"), "JUAN CARLOS");
        assert_eq!(split_given_names("ZAMBRANO"), "ZAMBRANO");
    }

    #[wasm_bindgen_test]
    fn test_accumulated_lines_round_trip() {
        let mut lines = OcrLines::new();
        lines.add_line("DNI 12345678");
        lines.add_line("SEXO");
        lines.add_line("F");
        assert_eq!(lines.text(), "DNI 12345678\nSEXO\nF");
        assert!(lines.extract_record().is_ok());
    }
}
