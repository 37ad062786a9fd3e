//! Birth-date extraction and OCR date-token repair.

use chrono::NaiveDate;
use tracing::debug;

use crate::context::ExtractionContext;
use crate::models::config::ExtractionConfig;

use super::patterns::{BIRTH_KEYWORD, DATE_TOKEN};

/// Literal rewrites for date components the recognizer reliably gets wrong.
///
/// These are observed misread signatures, not a digit-confusion model: a
/// token that matches none of them must already be a valid date or it is
/// rejected. New signatures get new table entries, not new control flow.
pub struct DateCorrectionTable {
    pub month: &'static [(&'static str, &'static str)],
    pub year: &'static [(&'static str, &'static str)],
}

pub static OCR_DATE_CORRECTIONS: DateCorrectionTable = DateCorrectionTable {
    month: &[("19", "10")],
    year: &[("2062", "2002"), ("2919", "2019")],
};

fn lookup(entries: &[(&'static str, &'static str)], observed: &str) -> Option<&'static str> {
    entries
        .iter()
        .find(|(bad, _)| *bad == observed)
        .map(|(_, good)| *good)
}

/// Repair and validate an 8-digit DDMMYYYY token.
///
/// The day rule is structural: a leading '3' with a numeric value over 31 is
/// a zero misread as three, so the day becomes '0' plus the second digit.
/// Month and year go through [`OCR_DATE_CORRECTIONS`]. Whatever survives
/// must be a real calendar date.
pub fn correct_date_token(token: &str) -> Option<NaiveDate> {
    if token.len() != 8 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let (day_raw, rest) = token.split_at(2);
    let (month_raw, year_raw) = rest.split_at(2);

    let mut day = day_raw.to_string();
    if day_raw.starts_with('3') && day_raw.parse::<u32>().ok()? > 31 {
        day = format!("0{}", &day_raw[1..2]);
    }
    let month = lookup(OCR_DATE_CORRECTIONS.month, month_raw).unwrap_or(month_raw);
    let year = lookup(OCR_DATE_CORRECTIONS.year, year_raw).unwrap_or(year_raw);

    NaiveDate::from_ymd_opt(
        year.parse().ok()?,
        month.parse().ok()?,
        day.parse().ok()?,
    )
}

/// DD/MM/YYYY, the format printed on the card face.
pub fn format_card(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// YYYY-MM-DD.
pub fn format_iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Whole years elapsed between `birth` and `today`.
pub fn age_at(birth: NaiveDate, today: NaiveDate) -> i64 {
    (today - birth).num_days() / 365
}

/// A birth date that passed repair, calendar validation and the age bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDate {
    pub date: NaiveDate,
    pub age: u32,
}

/// Resolve the birth date from the keyword line and the window below it.
///
/// The first 8-digit token that repairs to a real date with a plausible age
/// wins and stops the scan.
pub fn extract_birth_date(
    ctx: &ExtractionContext,
    config: &ExtractionConfig,
    today: NaiveDate,
) -> Option<BirthDate> {
    let start = ctx
        .lines()
        .iter()
        .position(|line| BIRTH_KEYWORD.is_match(line))?;

    for line in ctx.window(start, config.birth_date_window + 1) {
        for caps in DATE_TOKEN.captures_iter(line) {
            let Some(date) = correct_date_token(&caps[1]) else {
                continue;
            };
            let age = age_at(date, today);
            if (0..=config.max_age as i64).contains(&age) {
                debug!(date = %format_card(date), age, "birth date resolved");
                return Some(BirthDate {
                    date,
                    age: age as u32,
                });
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_leading_three_repair() {
        // 35 is a 05 with the zero read as three.
        assert_eq!(correct_date_token("35042000"), Some(date(2000, 4, 5)));
    }

    #[test]
    fn test_month_literal_repair() {
        assert_eq!(correct_date_token("15192000"), Some(date(2000, 10, 15)));
    }

    #[test]
    fn test_year_literal_repairs() {
        assert_eq!(correct_date_token("15062062"), Some(date(2002, 6, 15)));
        assert_eq!(correct_date_token("01012919"), Some(date(2019, 1, 1)));
    }

    #[test]
    fn test_valid_token_passes_through() {
        assert_eq!(correct_date_token("01012000"), Some(date(2000, 1, 1)));
        assert_eq!(format_card(date(2000, 1, 1)), "01/01/2000");
        assert_eq!(format_iso(date(2000, 1, 1)), "2000-01-01");
    }

    #[test]
    fn test_rejects_malformed_tokens() {
        assert_eq!(correct_date_token("0101200"), None);
        assert_eq!(correct_date_token("010120000"), None);
        assert_eq!(correct_date_token("01O12000"), None);
        // Not a calendar date and not a known misread signature.
        assert_eq!(correct_date_token("31022000"), None);
    }

    #[test]
    fn test_age_arithmetic() {
        assert_eq!(age_at(date(2000, 1, 1), date(2026, 8, 6)), 26);
        assert_eq!(age_at(date(2026, 8, 6), date(2026, 8, 6)), 0);
    }

    #[test]
    fn test_extract_birth_date_scans_window() {
        let ctx = ExtractionContext::from_lines([
            "FECHA DE NACIMIENTO",
            "UBIGEO 140133",
            "01012000",
        ]);
        let resolved =
            extract_birth_date(&ctx, &ExtractionConfig::default(), date(2026, 8, 6)).unwrap();
        assert_eq!(format_card(resolved.date), "01/01/2000");
        assert_eq!(resolved.age, 26);
    }

    #[test]
    fn test_extract_birth_date_rejects_implausible_age() {
        let ctx = ExtractionContext::from_lines(["FECHA DE NACIMIENTO", "01011800"]);
        assert_eq!(
            extract_birth_date(&ctx, &ExtractionConfig::default(), date(2026, 8, 6)),
            None
        );
    }

    #[test]
    fn test_extract_birth_date_requires_keyword() {
        let ctx = ExtractionContext::from_lines(["01012000"]);
        assert_eq!(
            extract_birth_date(&ctx, &ExtractionConfig::default(), date(2026, 8, 6)),
            None
        );
    }
}
