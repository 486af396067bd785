//! Resume analysis: section extraction, role and seniority inference, scores
//! and ranked enhancement priorities.
//!
//! Everything here is synchronous and allocation-only; the only outside input
//! is the clock used to close ongoing positions.

pub mod career_level;
pub mod dates;
pub mod handlers;
pub mod priorities;
pub mod role_classifier;
pub mod scoring;
pub mod sections;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::clock::{Clock, SystemClock};
use crate::models::ResumeData;

use career_level::{estimate_career_level, CareerLevel};
use priorities::{prioritize_enhancements, EnhancementPriority};
use role_classifier::detect_role;
use scoring::score_sections;
use sections::{Issue, SectionFindings};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub completeness_score: u32,
    pub metrics_score: u32,
    pub action_verb_score: u32,
    pub ats_score: u32,
    pub detected_role: String,
    pub detected_industry: String,
    pub career_level: CareerLevel,
    pub years_of_experience: u32,
    pub issues: Vec<Issue>,
    pub enhancement_priorities: Vec<EnhancementPriority>,
    pub sections: SectionFindings,
}

pub fn analyze_resume(resume: &ResumeData) -> AnalysisResult {
    analyze_resume_with_clock(resume, &SystemClock)
}

pub fn analyze_resume_with_clock(resume: &ResumeData, clock: &dyn Clock) -> AnalysisResult {
    let mut issues = Vec::new();

    let sections = SectionFindings {
        summary: sections::analyze_summary(resume.summary(), &mut issues),
        experience: sections::analyze_experience(&resume.experience, &mut issues),
        education: sections::analyze_education(&resume.education, &mut issues),
        skills: sections::analyze_skills(&resume.skills, &mut issues),
        projects: sections::analyze_projects(&resume.projects, &mut issues),
    };

    let role = detect_role(resume);
    let career = estimate_career_level(resume.summary(), &resume.experience, clock.today());
    let scores = score_sections(&sections);
    let enhancement_priorities = prioritize_enhancements(&sections, &scores, &issues);

    debug!(
        role = %role.role,
        level = career.level.as_str(),
        completeness = scores.completeness_score,
        metrics = scores.metrics_score,
        action_verbs = scores.action_verb_score,
        ats = scores.ats_score,
        issues = issues.len(),
        "resume analyzed"
    );

    AnalysisResult {
        completeness_score: scores.completeness_score,
        metrics_score: scores.metrics_score,
        action_verb_score: scores.action_verb_score,
        ats_score: scores.ats_score,
        detected_role: role.role,
        detected_industry: role.industry,
        career_level: career.level,
        years_of_experience: career.years_of_experience,
        issues,
        enhancement_priorities,
        sections,
    }
}

/// Short human-readable digest of an analysis.
pub fn analysis_summary(analysis: &AnalysisResult) -> String {
    let mut lines = vec![
        format!(
            "Resume Analysis for {} ({} level, ~{} years)",
            analysis.detected_role,
            analysis.career_level.as_str(),
            analysis.years_of_experience
        ),
        String::new(),
        format!(
            "Scores: Completeness {}% | Metrics {}% | ATS {}%",
            analysis.completeness_score, analysis.metrics_score, analysis.ats_score
        ),
        String::new(),
    ];

    if !analysis.enhancement_priorities.is_empty() {
        lines.push("Enhancement Priorities:".to_string());
        for (i, p) in analysis.enhancement_priorities.iter().enumerate() {
            lines.push(format!(
                "{}. [{}] {}",
                i + 1,
                p.priority.as_str().to_uppercase(),
                p.message
            ));
        }
    }

    lines.join("\n")
}
