//! Given-names strategies.

use tracing::debug;

use crate::context::ExtractionContext;
use crate::models::config::ExtractionConfig;

use super::patterns::{FIELD_LABEL, GIVEN_NAMES_KEYWORD, STANDALONE_NAME_PAIR, UPPERCASE_TEXT};
use super::{mrz, names};

/// Resolve the given names: MRZ name line first, then the keyword window,
/// then any standalone pair of uppercase words.
pub fn resolve(
    ctx: &ExtractionContext,
    config: &ExtractionConfig,
    claimed_surnames: &[&str],
) -> Option<String> {
    from_mrz(ctx)
        .or_else(|| from_keyword(ctx, config, claimed_surnames))
        .or_else(|| from_standalone_pair(ctx, claimed_surnames))
}

/// The MRZ name line already separates names; no normalization needed.
pub fn from_mrz(ctx: &ExtractionContext) -> Option<String> {
    let value = mrz::given_names(ctx)?;
    debug!(names = %value, "given names from MRZ");
    Some(value)
}

/// First acceptable line below the "Pre Nombres" label, run through the
/// fused-token splitter. Pure-digit lines are the birth date bleeding into
/// the window and are skipped.
pub fn from_keyword(
    ctx: &ExtractionContext,
    config: &ExtractionConfig,
    claimed_surnames: &[&str],
) -> Option<String> {
    let start = ctx
        .lines()
        .iter()
        .position(|line| GIVEN_NAMES_KEYWORD.is_match(line))?;

    for candidate in ctx.window(start + 1, config.given_names_window) {
        if candidate.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        if FIELD_LABEL.is_match(candidate) {
            continue;
        }
        if candidate.chars().count() >= 4
            && UPPERCASE_TEXT.is_match(candidate)
            && !claimed_surnames.contains(&candidate.as_str())
        {
            let value = names::split_concatenated(candidate);
            debug!(names = %value, "given names from keyword window");
            return Some(value);
        }
    }
    None
}

/// A line of exactly two uppercase words, neither a claimed surname.
pub fn from_standalone_pair(
    ctx: &ExtractionContext,
    claimed_surnames: &[&str],
) -> Option<String> {
    let value = ctx.lines().iter().find(|line| {
        STANDALONE_NAME_PAIR.is_match(line)
            && !FIELD_LABEL.is_match(line)
            && !line
                .split_whitespace()
                .any(|word| claimed_surnames.contains(&word))
    })?;
    debug!(names = %value, "given names from standalone pair");
    Some(value.clone())
}
