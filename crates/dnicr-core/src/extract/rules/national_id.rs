//! National ID number strategies.

use tracing::debug;

use crate::context::ExtractionContext;

use super::mrz;
use super::patterns::{DNI_LABELED, DNI_STANDALONE};

/// Resolve the national ID, highest-confidence source first: the MRZ, then
/// the labeled number on the card face, then any bare 8-digit token.
pub fn resolve(ctx: &ExtractionContext) -> Option<String> {
    from_mrz(ctx)
        .or_else(|| from_label(ctx).map(|id| prefer_mrz_when_suspect(ctx, id)))
        .or_else(|| from_standalone(ctx).map(|id| prefer_mrz_when_suspect(ctx, id)))
}

/// The MRZ copy of the number.
pub fn from_mrz(ctx: &ExtractionContext) -> Option<String> {
    let id = mrz::document_number(ctx.text())?;
    debug!(%id, "national id from MRZ");
    Some(id)
}

/// The 8 digits following the "DNI" label.
pub fn from_label(ctx: &ExtractionContext) -> Option<String> {
    let id = DNI_LABELED.captures(ctx.text()).map(|caps| caps[1].to_string())?;
    debug!(%id, "national id from label");
    Some(id)
}

/// Any bare 8-digit token, optionally trailed by a separated check digit.
pub fn from_standalone(ctx: &ExtractionContext) -> Option<String> {
    let id = DNI_STANDALONE
        .captures(ctx.text())
        .map(|caps| caps[1].to_string())?;
    debug!(%id, "national id from standalone token");
    Some(id)
}

// A leading "00" usually means the label digits were misread; the MRZ copy
// is more reliable when the zone is present.
fn prefer_mrz_when_suspect(ctx: &ExtractionContext, id: String) -> String {
    if id.starts_with("00") {
        if let Some(mrz_id) = mrz::document_number(ctx.text()) {
            debug!(suspect = %id, %mrz_id, "overriding suspect id with MRZ copy");
            return mrz_id;
        }
    }
    id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mrz_outranks_label() {
        let ctx = ExtractionContext::from_lines([
            "DNI 99999999",
            "IDPER04512398<4<<<<<<<<<<<<<<<",
        ]);
        assert_eq!(resolve(&ctx), Some("04512398".to_string()));
    }

    #[test]
    fn test_labeled_number() {
        let ctx = ExtractionContext::from_lines(["DNI12345678"]);
        assert_eq!(resolve(&ctx), Some("12345678".to_string()));
    }

    #[test]
    fn test_standalone_fallback() {
        let ctx = ExtractionContext::from_lines(["REGISTRO", "12345678-9"]);
        assert_eq!(resolve(&ctx), Some("12345678".to_string()));
    }

    #[test]
    fn test_suspect_prefix_without_mrz_is_kept() {
        let ctx = ExtractionContext::from_lines(["DNI 00123456"]);
        assert_eq!(resolve(&ctx), Some("00123456".to_string()));
    }

    #[test]
    fn test_nothing_to_find() {
        let ctx = ExtractionContext::from_lines(["PRIMER APELLIDO", "GARCIA"]);
        assert_eq!(resolve(&ctx), None);
    }
}
