//! Surname extraction: windowed multi-candidate accumulation.

use tracing::debug;

use crate::context::ExtractionContext;
use crate::models::config::ExtractionConfig;

use super::patterns::{DIGIT_RUN, FIELD_LABEL, SURNAME_KEYWORD, UPPERCASE_TEXT};

/// Literal rewrites for surnames the recognizer reliably gets wrong,
/// the same observed-signature scheme as the date table. "MUNEZ" is how a
/// leading Ñ comes out of recognition.
pub static SURNAME_CORRECTIONS: &[(&str, &str)] = &[("MUNEZ", "NUNEZ")];

/// Collect surname candidates in encounter order, first seen wins.
///
/// Every line matching a surname keyword opens a short window below it;
/// acceptable candidates inside any window accumulate into one ordered,
/// deduplicated list. The first entry is the paternal surname, the second
/// the maternal; later entries are ignored.
pub fn extract_surnames(ctx: &ExtractionContext, config: &ExtractionConfig) -> Vec<String> {
    let mut found: Vec<String> = Vec::new();

    for (i, line) in ctx.lines().iter().enumerate() {
        if !SURNAME_KEYWORD.is_match(line) {
            continue;
        }
        for candidate in ctx.window(i + 1, config.surname_window) {
            if !is_candidate(candidate) {
                continue;
            }
            let candidate = apply_corrections(candidate);
            if !found.iter().any(|seen| *seen == candidate) {
                debug!(surname = %candidate, "surname candidate accepted");
                found.push(candidate);
            }
        }
    }

    found
}

fn is_candidate(line: &str) -> bool {
    line.chars().count() >= 3
        && !DIGIT_RUN.is_match(line)
        && !FIELD_LABEL.is_match(line)
        && UPPERCASE_TEXT.is_match(line)
}

fn apply_corrections(candidate: &str) -> String {
    SURNAME_CORRECTIONS
        .iter()
        .find(|(bad, _)| *bad == candidate)
        .map(|(_, good)| good.to_string())
        .unwrap_or_else(|| candidate.to_string())
}
