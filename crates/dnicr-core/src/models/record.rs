//! Extracted identity record for a Peruvian DNI.

use serde::{Deserialize, Serialize};

/// Structured identity data extracted from one document.
///
/// Only `national_id` is guaranteed; every other field is best-effort and
/// absent when no strategy resolved it. Serialized field names follow the
/// downstream JSON contract (`nationalId`, `birthDateIso`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DniRecord {
    /// National ID number, exactly 8 digits.
    pub national_id: String,

    /// First (paternal) surname.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paternal_surname: Option<String>,

    /// Second (maternal) surname.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maternal_surname: Option<String>,

    /// Given names, uppercase, space-separated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub given_names: Option<String>,

    /// Given names followed by both surnames, when enough fields resolved.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    /// Birth date as DD/MM/YYYY.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<String>,

    /// Birth date as YYYY-MM-DD.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth_date_iso: Option<String>,

    /// Age in whole years, 0..=120.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,

    /// Sex code.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,

    /// Full sex label (MASCULINO / FEMENINO).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex_label: Option<String>,

    /// Marital status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marital_status: Option<MaritalStatus>,

    /// Document type, always "DNI".
    #[serde(default = "default_document_type")]
    pub document_type: String,
}

pub(crate) fn default_document_type() -> String {
    "DNI".to_string()
}

/// Sex as encoded on the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

impl Sex {
    /// Parse a recognized value: the single-letter code or the printed label.
    pub fn from_code(value: &str) -> Option<Self> {
        match value.to_uppercase().as_str() {
            "M" | "MASCULINO" => Some(Self::Male),
            "F" | "FEMENINO" => Some(Self::Female),
            _ => None,
        }
    }

    /// Single-letter code.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
        }
    }

    /// Full label as printed on the card.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "MASCULINO",
            Self::Female => "FEMENINO",
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// Marital status as encoded by its single-letter code on the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum MaritalStatus {
    Soltero,
    Casado,
    Divorciado,
    Viudo,
}

impl MaritalStatus {
    /// Map the single-letter code printed on the card.
    pub fn from_code(code: char) -> Option<Self> {
        match code {
            'S' => Some(Self::Soltero),
            'C' => Some(Self::Casado),
            'D' => Some(Self::Divorciado),
            'V' => Some(Self::Viudo),
            _ => None,
        }
    }

    /// Full label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Soltero => "SOLTERO",
            Self::Casado => "CASADO",
            Self::Divorciado => "DIVORCIADO",
            Self::Viudo => "VIUDO",
        }
    }
}

impl std::fmt::Display for MaritalStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
