//! Resume date parsing. Editors store dates as free text: "Present", ISO
//! dates, "Jan 2020", "03/2019", or a bare year.

use chrono::{DateTime, Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;

static ONGOING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)present|current").expect("ongoing pattern"));
static MONTH_YEAR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(\d{1,2})/(\d{4})").expect("month/year pattern"));
static BARE_YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"(\d{4})").expect("year pattern"));
// "Sept 2018", "Jan. 2020", "January 15, 2020"
static MONTH_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z]{3,})\.?\s+(?:(\d{1,2}),?\s+)?(\d{4})$").expect("month name pattern")
});

const MONTH_PREFIXES: [&str; 12] = [
    "jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec",
];

/// Parses a resume date string. "Present"/"current" resolve to `today`.
/// Returns `None` for empty or unrecognisable input.
pub fn parse_resume_date(raw: &str, today: NaiveDate) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if ONGOING.is_match(raw) {
        return Some(today);
    }

    if let Some(date) = parse_iso_like(raw) {
        return Some(date);
    }

    if let Some(caps) = MONTH_YEAR.captures(raw) {
        let month: u32 = caps[1].parse().ok()?;
        let year: i32 = caps[2].parse().ok()?;
        if let Some(date) = NaiveDate::from_ymd_opt(year, month, 1) {
            return Some(date);
        }
    }

    BARE_YEAR
        .captures(raw)
        .and_then(|caps| caps[1].parse::<i32>().ok())
        .and_then(|year| NaiveDate::from_ymd_opt(year, 1, 1))
}

fn parse_iso_like(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(&format!("{raw}-01"), "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(raw, "%m/%d/%Y") {
        return Some(d);
    }
    parse_month_name(raw)
}

/// Month names are recognised by their first three letters.
fn parse_month_name(raw: &str) -> Option<NaiveDate> {
    let caps = MONTH_NAME.captures(raw)?;
    let prefix = caps[1].get(..3)?.to_ascii_lowercase();
    let month = MONTH_PREFIXES.iter().position(|m| *m == prefix)? as u32 + 1;
    let day = match caps.get(2) {
        Some(d) => d.as_str().parse().ok()?,
        None => 1,
    };
    let year: i32 = caps[3].parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Whole calendar months from `start` to `end`; days are ignored.
pub fn months_between(start: NaiveDate, end: NaiveDate) -> i32 {
    let years = end.year() - start.year();
    let months = end.month() as i32 - start.month() as i32;
    years * 12 + months
}
