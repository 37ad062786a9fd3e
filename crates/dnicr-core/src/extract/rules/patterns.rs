//! Common regex patterns for DNI field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // National ID patterns
    pub static ref DNI_LABELED: Regex = Regex::new(
        r"(?i)DNI\s*(\d{8})"
    ).unwrap();

    // A bare 8-digit token, optionally trailed by a separated check digit.
    pub static ref DNI_STANDALONE: Regex = Regex::new(
        r"\b(\d{8})(?:\s*-\s*\d)?\b"
    ).unwrap();

    // MRZ patterns
    pub static ref MRZ_DOCUMENT_NUMBER: Regex = Regex::new(
        r"PER(\d{8})"
    ).unwrap();

    pub static ref MRZ_NAME_LINE: Regex = Regex::new(
        r"^[A-Z]{3,}<<([A-Z<]*)$"
    ).unwrap();

    pub static ref MRZ_SEX_GROUP: Regex = Regex::new(
        r"\d{6}([MF])\d{7}"
    ).unwrap();

    // Field label keywords
    pub static ref SURNAME_KEYWORD: Regex = Regex::new(
        r"(?i)PRIMER|SEGUNDO|APELLIDO"
    ).unwrap();

    pub static ref GIVEN_NAMES_KEYWORD: Regex = Regex::new(
        r"(?i)(PRE\s*)?NOMBRES"
    ).unwrap();

    pub static ref BIRTH_KEYWORD: Regex = Regex::new(
        r"(?i)NACIMIENTO"
    ).unwrap();

    pub static ref SEX_KEYWORD: Regex = Regex::new(
        r"(?i)SEXO"
    ).unwrap();

    // "Estado Civil" with the letter confusions recognition makes in "Civil".
    pub static ref MARITAL_KEYWORD: Regex = Regex::new(
        r"(?i)ESTADO\s*CI[VWU][I1L][L1I]"
    ).unwrap();

    pub static ref STATUS_NEARBY_KEYWORD: Regex = Regex::new(
        r"(?i)SEXO|ESTADO"
    ).unwrap();

    pub static ref STATUS_CONTEXT: Regex = Regex::new(
        r"(?i)ESTADO|CIVIL|SEXO"
    ).unwrap();

    // Any printed field label on either card face; label lines are never
    // field values.
    pub static ref FIELD_LABEL: Regex = Regex::new(
        r"(?i)APELLIDO|NOMBRES|NACIMIENTO|FECHA|SEXO|ESTADO|PRIMER|SEGUNDO|EMISION|CADUCIDAD|UBIGEO|DOMICILIO"
    ).unwrap();

    // Value shapes
    pub static ref UPPERCASE_TEXT: Regex = Regex::new(
        r"^[A-ZÁÉÍÓÚÑ\s]+$"
    ).unwrap();

    pub static ref DIGIT_RUN: Regex = Regex::new(
        r"^\d{6,}$"
    ).unwrap();

    pub static ref DATE_TOKEN: Regex = Regex::new(
        r"\b(\d{8})\b"
    ).unwrap();

    pub static ref SEX_VALUE: Regex = Regex::new(
        r"(?i)^(M|F|MASCULINO|FEMENINO)$"
    ).unwrap();

    // Two uppercase words of 4+ letters each on their own line.
    pub static ref STANDALONE_NAME_PAIR: Regex = Regex::new(
        r"^[A-ZÁÉÍÓÚÑ]{4,}\s+[A-ZÁÉÍÓÚÑ]{4,}$"
    ).unwrap();
}
