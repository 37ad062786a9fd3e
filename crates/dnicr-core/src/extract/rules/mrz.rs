//! Machine-readable zone decoding.
//!
//! The MRZ-bearing card variant prints a fixed-grammar zone on the back.
//! Its fields are far less ambiguous than the free-text face, so MRZ-derived
//! values outrank free-text values wherever both strategies exist.

use crate::context::ExtractionContext;
use crate::models::record::Sex;

use super::patterns::{MRZ_DOCUMENT_NUMBER, MRZ_NAME_LINE, MRZ_SEX_GROUP};

/// The 8 digits following the `PER` nationality marker.
pub fn document_number(text: &str) -> Option<String> {
    MRZ_DOCUMENT_NUMBER
        .captures(text)
        .map(|caps| caps[1].to_string())
}

/// Given names from the MRZ name line.
///
/// The name line carries the surname block, a double filler, then the given
/// names separated by single fillers. Fillers collapse to single spaces; a
/// result with two or fewer meaningful characters is a misread and is
/// rejected.
pub fn given_names(ctx: &ExtractionContext) -> Option<String> {
    for line in ctx.lines() {
        let Some(caps) = MRZ_NAME_LINE.captures(line) else {
            continue;
        };
        let cleaned = caps[1]
            .split('<')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ");
        if cleaned.chars().filter(|c| !c.is_whitespace()).count() > 2 {
            return Some(cleaned);
        }
    }
    None
}

/// Sex letter from the 6-digit / letter / 7-digit group.
///
/// The surrounding digits are the birth date, expiry date and their check
/// digits; only the letter is used here.
pub fn sex(text: &str) -> Option<Sex> {
    MRZ_SEX_GROUP
        .captures(text)
        .and_then(|caps| Sex::from_code(&caps[1]))
}
