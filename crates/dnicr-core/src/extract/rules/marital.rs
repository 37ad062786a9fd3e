//! Marital status strategies.
//!
//! The status is a lone letter (S/C/D/V) printed near the "Estado Civil"
//! label, and recognition mangles both the label and the letter's
//! surroundings, so resolution runs three increasingly desperate scans.

use tracing::debug;

use crate::context::ExtractionContext;
use crate::models::config::ExtractionConfig;
use crate::models::record::MaritalStatus;

use super::patterns::{MARITAL_KEYWORD, STATUS_CONTEXT, STATUS_NEARBY_KEYWORD};

const CODES: [char; 4] = ['S', 'C', 'D', 'V'];

/// Resolve the marital status: the tolerant keyword window first, then any
/// status-adjacent short token, then labeled single-character lines
/// anywhere in the document.
pub fn resolve(ctx: &ExtractionContext, config: &ExtractionConfig) -> Option<MaritalStatus> {
    from_keyword_window(ctx, config)
        .or_else(|| from_nearby_keywords(ctx))
        .or_else(|| from_labeled_single_letters(ctx))
}

/// Scan the "Estado Civil" line and the window below it for the code.
pub fn from_keyword_window(
    ctx: &ExtractionContext,
    config: &ExtractionConfig,
) -> Option<MaritalStatus> {
    let start = ctx
        .lines()
        .iter()
        .position(|line| MARITAL_KEYWORD.is_match(line))?;

    for line in ctx.window(start, config.marital_window + 1) {
        if let Some(code) = code_in_line(line) {
            debug!(code = %code, "marital status from keyword window");
            return MaritalStatus::from_code(code);
        }
    }
    None
}

/// Near any "Sexo"/"Estado" line, accept a short token whose alphabetic
/// content is exactly one status letter ("S", "C.", "(V)").
pub fn from_nearby_keywords(ctx: &ExtractionContext) -> Option<MaritalStatus> {
    for (i, line) in ctx.lines().iter().enumerate() {
        if !STATUS_NEARBY_KEYWORD.is_match(line) {
            continue;
        }
        for nearby in ctx.window(i, 3) {
            for token in nearby.split_whitespace() {
                if token.chars().count() > 3 {
                    continue;
                }
                if let Some(code) = lone_letter(token) {
                    debug!(code = %code, "marital status near status keyword");
                    return MaritalStatus::from_code(code);
                }
            }
        }
    }
    None
}

/// Anywhere in the document: a single-character line holding a status
/// letter counts only when one of the three preceding lines mentions the
/// status or sex labels.
pub fn from_labeled_single_letters(ctx: &ExtractionContext) -> Option<MaritalStatus> {
    for (i, line) in ctx.lines().iter().enumerate() {
        let mut chars = line.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            continue;
        };
        if !CODES.contains(&c) {
            continue;
        }
        let preceding = &ctx.lines()[i.saturating_sub(3)..i];
        if preceding.iter().any(|p| STATUS_CONTEXT.is_match(p)) {
            debug!(code = %c, "marital status from labeled single letter");
            return MaritalStatus::from_code(c);
        }
    }
    None
}

fn code_in_line(line: &str) -> Option<char> {
    // Exact single-letter line.
    let mut chars = line.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return CODES.contains(&c).then_some(c);
    }
    // Very short line with a status letter buried in punctuation.
    if line.chars().count() <= 3 {
        if let Some(c) = line.chars().find(|c| CODES.contains(c)) {
            return Some(c);
        }
    }
    // A status letter standing alone as a token on a longer line.
    line.split_whitespace()
        .filter_map(|token| {
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) if CODES.contains(&c) => Some(c),
                _ => None,
            }
        })
        .next()
}

fn lone_letter(token: &str) -> Option<char> {
    let mut letters = token.chars().filter(|c| c.is_alphabetic());
    match (letters.next(), letters.next()) {
        (Some(c), None) if CODES.contains(&c) => Some(c),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve_lines(lines: &[&str]) -> Option<MaritalStatus> {
        resolve(
            &ExtractionContext::from_lines(lines),
            &ExtractionConfig::default(),
        )
    }

    #[test]
    fn test_single_letter_line_in_window() {
        assert_eq!(
            resolve_lines(&["ESTADO CIVIL", "S"]),
            Some(MaritalStatus::Soltero)
        );
    }

    #[test]
    fn test_misread_label_still_matches() {
        assert_eq!(
            resolve_lines(&["ESTADO CIWIL", "C"]),
            Some(MaritalStatus::Casado)
        );
    }

    #[test]
    fn test_short_line_with_punctuation() {
        assert_eq!(
            resolve_lines(&["ESTADO CIVIL", "V."]),
            Some(MaritalStatus::Viudo)
        );
    }

    #[test]
    fn test_letter_token_on_keyword_line() {
        assert_eq!(
            resolve_lines(&["ESTADO CIVIL D"]),
            Some(MaritalStatus::Divorciado)
        );
    }

    #[test]
    fn test_nearby_keyword_fallback() {
        // Label too garbled for the tolerant pattern; "ESTADO" alone plus a
        // dotted code two lines later still resolves.
        assert_eq!(
            resolve_lines(&["ESTADO CTVTL", "M", "S."]),
            Some(MaritalStatus::Soltero)
        );
    }

    #[test]
    fn test_ordinary_words_never_match_fallback() {
        assert_eq!(resolve_lines(&["ESTADO", "DE", "LIMA"]), None);
    }

    #[test]
    fn test_labeled_single_letter_far_from_keyword() {
        assert_eq!(
            resolve_lines(&["SEXO", "M", "OTRA LINEA", "C"]),
            Some(MaritalStatus::Casado)
        );
    }

    #[test]
    fn test_unlabeled_single_letter_is_ignored() {
        assert_eq!(resolve_lines(&["DOMICILIO", "AV LIMA", "C"]), None);
    }
}
