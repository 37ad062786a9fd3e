//! Sex field strategies.

use tracing::debug;

use crate::context::ExtractionContext;
use crate::models::record::Sex;

use super::mrz;
use super::patterns::{SEX_KEYWORD, SEX_VALUE};

/// Resolve the sex code: the MRZ compound group first, then the printed
/// value below the "Sexo" label.
pub fn resolve(ctx: &ExtractionContext) -> Option<Sex> {
    from_mrz(ctx).or_else(|| from_keyword(ctx))
}

pub fn from_mrz(ctx: &ExtractionContext) -> Option<Sex> {
    let sex = mrz::sex(ctx.text())?;
    debug!(code = sex.code(), "sex from MRZ");
    Some(sex)
}

/// The letter or full label printed within two lines of the keyword.
pub fn from_keyword(ctx: &ExtractionContext) -> Option<Sex> {
    let start = ctx
        .lines()
        .iter()
        .position(|line| SEX_KEYWORD.is_match(line))?;

    for value in ctx.window(start + 1, 2) {
        if let Some(caps) = SEX_VALUE.captures(value) {
            let sex = Sex::from_code(&caps[1])?;
            debug!(code = sex.code(), "sex from keyword window");
            return Some(sex);
        }
    }
    None
}
