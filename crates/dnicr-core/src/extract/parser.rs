//! Layered DNI parser: priority-ordered strategies per field.

use std::time::Instant;

use chrono::{Local, NaiveDate};
use tracing::{debug, info};

use crate::context::ExtractionContext;
use crate::error::ExtractionError;
use crate::models::config::ExtractionConfig;
use crate::models::record::{default_document_type, DniRecord};

use super::rules::{dates, given_names, marital, national_id, sex, surnames};
use super::{DniExtractor, Result};

/// Result of DNI extraction.
#[derive(Debug, Clone)]
pub struct ExtractionResult {
    /// Extracted record.
    pub record: DniRecord,
    /// Raw input text.
    pub raw_text: String,
    /// Extraction warnings for fields that stayed unresolved.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Trait for DNI parsing.
pub trait DniParser {
    /// Parse a record from recognized text.
    fn parse(&self, text: &str) -> Result<ExtractionResult>;
}

/// Parser running an ordered list of strategies per field.
///
/// Each invocation is a pure, synchronous pass over one context; the parser
/// holds only configuration and may be shared freely across threads.
pub struct LayeredDniParser {
    config: ExtractionConfig,
    /// "Today" for age computation; tests pin it, production leaves it unset.
    reference_date: Option<NaiveDate>,
}

impl LayeredDniParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self {
            config: ExtractionConfig::default(),
            reference_date: None,
        }
    }

    /// Replace the extraction configuration.
    pub fn with_config(mut self, config: ExtractionConfig) -> Self {
        self.config = config;
        self
    }

    /// Pin the date used for age computation.
    pub fn with_reference_date(mut self, date: NaiveDate) -> Self {
        self.reference_date = Some(date);
        self
    }

    /// Parse a record from lines in reading order.
    pub fn parse_lines<I, S>(&self, lines: I) -> Result<ExtractionResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.parse_context(&ExtractionContext::from_lines(lines))
    }

    /// Parse a record from an already-built context.
    pub fn parse_context(&self, ctx: &ExtractionContext) -> Result<ExtractionResult> {
        let start = Instant::now();
        let mut warnings = Vec::new();

        info!("parsing document from {} recognized lines", ctx.lines().len());

        // The one mandatory field. Nothing else is worth assembling without it.
        let national_id =
            national_id::resolve(ctx).ok_or(ExtractionError::NationalIdNotDetected)?;

        let mut found_surnames = surnames::extract_surnames(ctx, &self.config).into_iter();
        let paternal_surname = found_surnames.next();
        let maternal_surname = found_surnames.next();

        let claimed: Vec<&str> = paternal_surname
            .iter()
            .chain(maternal_surname.iter())
            .map(|s| s.as_str())
            .collect();
        let given_names = given_names::resolve(ctx, &self.config, &claimed);

        let today = self
            .reference_date
            .unwrap_or_else(|| Local::now().date_naive());
        let birth = dates::extract_birth_date(ctx, &self.config, today);

        let sex = sex::resolve(ctx);
        let marital_status = marital::resolve(ctx, &self.config);

        if paternal_surname.is_none() {
            warnings.push("could not extract paternal surname".to_string());
        }
        if maternal_surname.is_none() {
            warnings.push("could not extract maternal surname".to_string());
        }
        if given_names.is_none() {
            warnings.push("could not extract given names".to_string());
        }
        if birth.is_none() {
            warnings.push("could not extract birth date".to_string());
        }
        if sex.is_none() {
            warnings.push("could not extract sex".to_string());
        }
        if marital_status.is_none() {
            warnings.push("could not extract marital status".to_string());
        }

        let full_name = assemble_full_name(&given_names, &paternal_surname, &maternal_surname);

        let record = DniRecord {
            national_id,
            paternal_surname,
            maternal_surname,
            given_names,
            full_name,
            birth_date: birth.map(|b| dates::format_card(b.date)),
            birth_date_iso: birth.map(|b| dates::format_iso(b.date)),
            age: birth.map(|b| b.age),
            sex,
            sex_label: sex.map(|s| s.label().to_string()),
            marital_status,
            document_type: default_document_type(),
        };

        debug!(
            national_id = %record.national_id,
            full_name = record.full_name.as_deref().unwrap_or("-"),
            "extraction complete"
        );

        Ok(ExtractionResult {
            record,
            raw_text: ctx.text().to_string(),
            warnings,
            processing_time_ms: start.elapsed().as_millis() as u64,
        })
    }
}

impl Default for LayeredDniParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DniParser for LayeredDniParser {
    fn parse(&self, text: &str) -> Result<ExtractionResult> {
        self.parse_context(&ExtractionContext::from_text(text))
    }
}

impl DniExtractor for LayeredDniParser {
    fn extract_from_lines(&self, lines: &[String]) -> Result<DniRecord> {
        self.parse_lines(lines).map(|r| r.record)
    }

    fn extract_from_text(&self, text: &str) -> Result<DniRecord> {
        self.parse(text).map(|r| r.record)
    }
}

/// Full name from already-validated constituents, in fixed order.
fn assemble_full_name(
    given_names: &Option<String>,
    paternal: &Option<String>,
    maternal: &Option<String>,
) -> Option<String> {
    match (given_names, paternal, maternal) {
        (Some(g), Some(p), Some(m)) => Some(format!("{g} {p} {m}")),
        (Some(g), Some(p), None) => Some(format!("{g} {p}")),
        (None, Some(p), Some(m)) => Some(format!("{p} {m}")),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::{MaritalStatus, Sex};
    use pretty_assertions::assert_eq;

    fn pinned_parser() -> LayeredDniParser {
        LayeredDniParser::new()
            .with_reference_date(NaiveDate::from_ymd_opt(2026, 8, 6).unwrap())
    }

    const FRONT_FACE: [&str; 11] = [
        "DNI12345678",
        "PRIMER APELLIDO",
        "GARCIA",
        "SEGUNDO APELLIDO",
        "LOPEZ",
        "PRE NOMBRES",
        "JUANCARLOS",
        "FECHA DE NACIMIENTO",
        "01012000",
        "SEXO",
        "M",
    ];

    #[test]
    fn test_parse_front_face() {
        let result = pinned_parser().parse_lines(FRONT_FACE).unwrap();
        let record = result.record;

        assert_eq!(record.national_id, "12345678");
        assert_eq!(record.paternal_surname.as_deref(), Some("GARCIA"));
        assert_eq!(record.maternal_surname.as_deref(), Some("LOPEZ"));
        assert_eq!(record.given_names.as_deref(), Some("JUAN CARLOS"));
        assert_eq!(record.birth_date.as_deref(), Some("01/01/2000"));
        assert_eq!(record.birth_date_iso.as_deref(), Some("2000-01-01"));
        assert_eq!(record.age, Some(26));
        assert_eq!(record.sex, Some(Sex::Male));
        assert_eq!(record.sex_label.as_deref(), Some("MASCULINO"));
        assert_eq!(record.marital_status, None);
        assert_eq!(
            record.full_name.as_deref(),
            Some("JUAN CARLOS GARCIA LOPEZ")
        );
        assert_eq!(record.document_type, "DNI");
    }

    #[test]
    fn test_mrz_outranks_free_text_id() {
        let result = pinned_parser()
            .parse("DNI 99999999\nIDPER04512398<4<<<<<<<<<<<<<<<")
            .unwrap();
        assert_eq!(result.record.national_id, "04512398");
    }

    #[test]
    fn test_missing_national_id_is_fatal() {
        let err = pinned_parser()
            .parse_lines(["PRIMER APELLIDO", "GARCIA", "SEXO", "M"])
            .unwrap_err();
        assert!(matches!(err, ExtractionError::NationalIdNotDetected));
    }

    #[test]
    fn test_repeated_extraction_is_identical() {
        let parser = pinned_parser();
        let first = parser.parse_lines(FRONT_FACE).unwrap().record;
        let second = parser.parse_lines(FRONT_FACE).unwrap().record;
        assert_eq!(first, second);
    }

    #[test]
    fn test_marital_status_resolves_from_back_face() {
        let result = pinned_parser()
            .parse_lines(["DNI 12345678", "ESTADO CIVIL", "S"])
            .unwrap();
        assert_eq!(result.record.marital_status, Some(MaritalStatus::Soltero));
    }

    #[test]
    fn test_surnames_only_full_name() {
        let result = pinned_parser()
            .parse_lines(["DNI 12345678", "PRIMER APELLIDO", "GARCIA", "SEGUNDO APELLIDO", "LOPEZ"])
            .unwrap();
        assert_eq!(result.record.given_names, None);
        assert_eq!(result.record.full_name.as_deref(), Some("GARCIA LOPEZ"));
    }

    #[test]
    fn test_bad_date_leaves_field_absent() {
        let result = pinned_parser()
            .parse_lines(["DNI 12345678", "FECHA DE NACIMIENTO", "31132000"])
            .unwrap();
        assert_eq!(result.record.birth_date, None);
        assert_eq!(result.record.age, None);
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("birth date")));
    }

    #[test]
    fn test_warnings_for_unresolved_fields() {
        let result = pinned_parser().parse_lines(["DNI 12345678"]).unwrap();
        assert_eq!(result.warnings.len(), 6);
    }
}
