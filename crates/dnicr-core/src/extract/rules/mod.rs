//! Rule-based field strategies for DNI extraction.
//!
//! One module per field. Each exposes its individual strategies as named
//! functions plus a `resolve` that chains them in priority order; the first
//! strategy to produce a validated value wins and later ones never run. A
//! strategy miss is silent — there is no per-field error channel.

pub mod dates;
pub mod given_names;
pub mod marital;
pub mod mrz;
pub mod names;
pub mod national_id;
pub mod patterns;
pub mod sex;
pub mod surnames;

pub use dates::{correct_date_token, BirthDate, OCR_DATE_CORRECTIONS};
pub use names::{split_concatenated, GIVEN_NAME_VOCABULARY};
pub use surnames::SURNAME_CORRECTIONS;
