//! Applicant tracking system compatibility scoring.
//!
//! Two modes: a quick structural check when no usable job description is
//! supplied, and a keyword match plus structural check when one is.

pub mod aggregator;
pub mod format;
pub mod handlers;
pub mod jd_keywords;
pub mod keyword_match;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::models::ResumeData;
use crate::text::build_searchable_text;

use aggregator::{aggregate, ScoreCategory, Tip};
use format::{analyze_format, FormatAnalysis};
use jd_keywords::extract_job_keywords;
use keyword_match::{match_keywords, KeywordMatchResult};

/// Job descriptions shorter than this (trimmed, in characters) are ignored.
pub const MIN_JOB_DESCRIPTION_CHARS: usize = 50;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AtsScoreResult {
    pub score: u32,
    pub category: ScoreCategory,
    pub format: FormatAnalysis,
    /// `None` in quick-analysis mode.
    pub keywords: Option<KeywordMatchResult>,
    pub tips: Vec<Tip>,
}

/// The job description to match against, if it is long enough to be useful.
pub fn usable_job_description(job_description: Option<&str>) -> Option<&str> {
    job_description
        .map(str::trim)
        .filter(|jd| jd.chars().count() >= MIN_JOB_DESCRIPTION_CHARS)
}

pub fn compute_ats_score(resume: &ResumeData, job_description: Option<&str>) -> AtsScoreResult {
    let format = analyze_format(resume);

    let keywords = usable_job_description(job_description).map(|jd| {
        let job = extract_job_keywords(jd);
        let resume_text = build_searchable_text(resume);
        match_keywords(&resume_text, &job)
    });

    let verdict = aggregate(&format, keywords.as_ref());

    debug!(
        score = verdict.score,
        format_score = format.score,
        match_percentage = ?keywords.as_ref().map(|k| k.match_percentage),
        "ats score computed"
    );

    AtsScoreResult {
        score: verdict.score,
        category: verdict.category,
        format,
        keywords,
        tips: verdict.tips,
    }
}
