//! Years of experience and seniority tier.
//!
//! A years figure stated in the summary is trusted over dates computed from
//! the experience section.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::analysis::dates::{months_between, parse_resume_date};
use crate::models::resume::Experience;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerLevel {
    Entry,
    Mid,
    Senior,
    Executive,
}

impl CareerLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            CareerLevel::Entry => "entry",
            CareerLevel::Mid => "mid",
            CareerLevel::Senior => "senior",
            CareerLevel::Executive => "executive",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CareerEstimate {
    pub level: CareerLevel,
    pub years_of_experience: u32,
}

/// Summary phrasings, tried in order.
static YEARS_PHRASES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)(\d+)\+?\s*years?\s*(of)?\s*(experience|exp)?",
        r"(?i)over\s*(\d+)\s*years?",
        r"(?i)more\s*than\s*(\d+)\s*years?",
        r"(?i)around\s*(\d+)\s*years?",
        r"(?i)approximately\s*(\d+)\s*years?",
        r"(?i)nearly\s*(\d+)\s*years?",
    ]
    .iter()
    .map(|p| Regex::new(p).expect("years phrase pattern"))
    .collect()
});

static EXECUTIVE_TITLE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)director|vp|chief|head of").expect("executive title pattern"));

static SENIOR_TITLE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)senior|lead|principal|staff|architect|manager|director|head|vp|chief")
        .expect("senior title pattern")
});

const EXECUTIVE_YEARS: u32 = 10;
const SENIOR_YEARS: u32 = 6;
const MID_YEARS: u32 = 2;

/// Extracts an explicit "N years" mention from summary text.
pub fn extract_years_from_summary(summary: &str) -> Option<u32> {
    if summary.trim().is_empty() {
        return None;
    }
    YEARS_PHRASES.iter().find_map(|re| {
        re.captures(summary)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<u32>().ok())
    })
}

/// Rounded years from the earliest start to the latest end across all
/// entries. Overlapping roles are not double counted. Entries marked current
/// end on `today`; unparsable dates are skipped.
pub fn years_from_date_range(experience: &[Experience], today: NaiveDate) -> u32 {
    let mut earliest_start: Option<NaiveDate> = None;
    let mut latest_end: Option<NaiveDate> = None;

    for exp in experience {
        let start = parse_resume_date(&exp.start_date, today);
        let end = if exp.current {
            Some(today)
        } else {
            parse_resume_date(&exp.end_date, today)
        };

        if let Some(start) = start {
            earliest_start = Some(earliest_start.map_or(start, |e| e.min(start)));
        }
        if let Some(end) = end {
            latest_end = Some(latest_end.map_or(end, |l| l.max(end)));
        }
    }

    match (earliest_start, latest_end) {
        (Some(start), Some(end)) => {
            let months = months_between(start, end);
            (months as f64 / 12.0).round().max(0.0) as u32
        }
        _ => 0,
    }
}

pub fn estimate_career_level(
    summary: &str,
    experience: &[Experience],
    today: NaiveDate,
) -> CareerEstimate {
    if experience.is_empty() {
        return CareerEstimate {
            level: CareerLevel::Entry,
            years_of_experience: 0,
        };
    }

    let years = extract_years_from_summary(summary)
        .unwrap_or_else(|| years_from_date_range(experience, today));

    let first_is_executive = experience
        .first()
        .map(|e| EXECUTIVE_TITLE.is_match(&e.position))
        .unwrap_or(false);
    let has_senior_title = experience.iter().any(|e| SENIOR_TITLE.is_match(&e.position));

    let level = if years >= EXECUTIVE_YEARS || first_is_executive {
        CareerLevel::Executive
    } else if years >= SENIOR_YEARS || has_senior_title {
        CareerLevel::Senior
    } else if years >= MID_YEARS {
        CareerLevel::Mid
    } else {
        CareerLevel::Entry
    };

    CareerEstimate {
        level,
        years_of_experience: years,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn role(position: &str, start: &str, end: &str, current: bool) -> Experience {
        Experience {
            position: position.to_string(),
            start_date: start.to_string(),
            end_date: end.to_string(),
            current,
            ..Default::default()
        }
    }

    #[test]
    fn test_years_phrasings() {
        assert_eq!(extract_years_from_summary("8+ years of experience in fintech"), Some(8));
        assert_eq!(extract_years_from_summary("Engineer with over 12 years building"), Some(12));
        assert_eq!(extract_years_from_summary("nearly 4 years in retail"), Some(4));
        assert_eq!(extract_years_from_summary("Seasoned engineer"), None);
        assert_eq!(extract_years_from_summary(""), None);
    }

    #[test]
    fn test_first_phrase_wins() {
        assert_eq!(
            extract_years_from_summary("5 years at Acme and more than 9 years overall"),
            Some(5)
        );
    }

    #[test]
    fn test_summary_overrides_date_range() {
        let experience = vec![role("Engineer", "2021-01", "2024-01", false)];
        let estimate =
            estimate_career_level("Engineer with 8+ years of experience", &experience, today());
        assert_eq!(estimate.years_of_experience, 8);
        assert_eq!(estimate.level, CareerLevel::Senior);
    }

    #[test]
    fn test_date_range_spans_earliest_to_latest() {
        let experience = vec![
            role("Engineer", "03/2020", "", true),
            role("Junior Engineer", "2016", "2019", false),
        ];
        // 2016-01 → 2024-06 is 101 months.
        assert_eq!(years_from_date_range(&experience, today()), 8);
    }

    #[test]
    fn test_month_day_year_end_date_counts_full_span() {
        let experience = vec![role("Analyst", "2018-01", "12/31/2019", false)];
        let estimate = estimate_career_level("", &experience, today());
        // 23 months rounds to 2 years.
        assert_eq!(estimate.years_of_experience, 2);
        assert_eq!(estimate.level, CareerLevel::Mid);
    }

    #[test]
    fn test_overlapping_roles_not_summed() {
        let experience = vec![
            role("Engineer", "2020-01", "2022-01", false),
            role("Contractor", "2020-06", "2021-06", false),
        ];
        assert_eq!(years_from_date_range(&experience, today()), 2);
    }

    #[test]
    fn test_present_end_date_uses_today() {
        let experience = vec![role("Engineer", "2021-06", "Present", false)];
        assert_eq!(years_from_date_range(&experience, today()), 3);
    }

    #[test]
    fn test_unparsable_dates_excluded() {
        let experience = vec![
            role("Engineer", "sometime", "later", false),
            role("Engineer", "2022", "2023", false),
        ];
        assert_eq!(years_from_date_range(&experience, today()), 1);
        assert_eq!(
            years_from_date_range(&[role("Engineer", "", "", false)], today()),
            0
        );
    }

    #[test]
    fn test_no_experience_is_entry() {
        let estimate = estimate_career_level("15 years of experience", &[], today());
        assert_eq!(estimate.level, CareerLevel::Entry);
        assert_eq!(estimate.years_of_experience, 0);
    }

    #[test]
    fn test_executive_by_first_title() {
        let experience = vec![role("VP Engineering", "2023-01", "", true)];
        let estimate = estimate_career_level("", &experience, today());
        assert_eq!(estimate.level, CareerLevel::Executive);
    }

    #[test]
    fn test_executive_title_only_checked_on_first_entry() {
        let experience = vec![
            role("Engineer", "2023-01", "", true),
            role("Director", "2022-01", "2022-12", false),
        ];
        // "director" still counts as a senior title.
        let estimate = estimate_career_level("", &experience, today());
        assert_eq!(estimate.level, CareerLevel::Senior);
    }

    #[test]
    fn test_level_thresholds_by_years() {
        let exp = |start: &str| vec![role("Engineer", start, "", true)];
        assert_eq!(estimate_career_level("", &exp("2013-01"), today()).level, CareerLevel::Executive);
        assert_eq!(estimate_career_level("", &exp("2017-06"), today()).level, CareerLevel::Senior);
        assert_eq!(estimate_career_level("", &exp("2021-06"), today()).level, CareerLevel::Mid);
        assert_eq!(estimate_career_level("", &exp("2024-01"), today()).level, CareerLevel::Entry);
    }
}
