use serde::{Deserialize, Serialize};

use crate::ats::jd_keywords::JobKeywords;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordSets {
    pub hard_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub tools: Vec<String>,
    pub requirements: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordMatchResult {
    pub match_percentage: u32,
    pub matched: KeywordSets,
    pub missing: KeywordSets,
    /// Matched hard skills, soft skills and tools.
    pub total_found: usize,
    /// Hard skills, soft skills and tools in the job description.
    pub total_in_job: usize,
}

/// Splits `keywords` into (matched, missing) by containment in `resume_text`.
fn partition(keywords: &[String], resume_text: &str) -> (Vec<String>, Vec<String>) {
    keywords
        .iter()
        .cloned()
        .partition(|k| resume_text.contains(&k.to_lowercase()))
}

/// Matches job keywords against the resume's searchable text.
///
/// Requirements are partitioned and reported like the other categories but do
/// not count toward `match_percentage`.
pub fn match_keywords(resume_text: &str, job: &JobKeywords) -> KeywordMatchResult {
    let (hard_matched, hard_missing) = partition(&job.hard_skills, resume_text);
    let (soft_matched, soft_missing) = partition(&job.soft_skills, resume_text);
    let (tools_matched, tools_missing) = partition(&job.tools, resume_text);
    let (req_matched, req_missing) = partition(&job.requirements, resume_text);

    let total_in_job = job.scored_len();
    let total_found = hard_matched.len() + soft_matched.len() + tools_matched.len();

    let match_percentage = if total_in_job == 0 {
        0
    } else {
        (total_found as f64 / total_in_job as f64 * 100.0).round() as u32
    };

    KeywordMatchResult {
        match_percentage,
        matched: KeywordSets {
            hard_skills: hard_matched,
            soft_skills: soft_matched,
            tools: tools_matched,
            requirements: req_matched,
        },
        missing: KeywordSets {
            hard_skills: hard_missing,
            soft_skills: soft_missing,
            tools: tools_missing,
            requirements: req_missing,
        },
        total_found,
        total_in_job,
    }
}
