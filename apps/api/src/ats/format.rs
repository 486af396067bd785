//! Structural ATS compatibility check.
//!
//! Starts from a perfect score and deducts for each missing essential. Quality
//! observations are reported as suggestions and never cost points.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::ResumeData;

const MAX_FORMAT_SCORE: i32 = 100;
const MIN_SUMMARY_CHARS: usize = 50;
const MIN_SKILLS: usize = 5;
const METRIC_BULLET_RATIO: f64 = 0.3;
const ACTION_VERB_BULLET_RATIO: f64 = 0.5;

/// Bullets must open with one of these, compared on the lower-cased first word.
pub const ACTION_VERBS: &[&str] = &[
    "achieved", "administered", "analyzed", "built", "collaborated", "contributed",
    "coordinated", "created", "delivered", "designed", "developed", "directed",
    "drove", "enhanced", "established", "executed", "expanded", "generated",
    "grew", "implemented", "improved", "increased", "initiated", "launched",
    "led", "managed", "mentored", "negotiated", "optimized", "orchestrated",
    "organized", "oversaw", "pioneered", "produced", "reduced", "resolved",
    "spearheaded", "streamlined", "supervised", "transformed", "upgraded",
];

static METRIC: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\d+%|\$[\d,]+|\d+\+?").expect("ats metric pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatIssueKind {
    MissingSection,
    MissingInfo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatSeverity {
    Critical,
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatIssue {
    #[serde(rename = "type")]
    pub kind: FormatIssueKind,
    pub severity: FormatSeverity,
    pub message: String,
    pub suggestion: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Enhancement,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatSuggestion {
    #[serde(rename = "type")]
    pub kind: SuggestionKind,
    pub message: String,
    pub suggestion: String,
}

impl FormatSuggestion {
    fn enhancement(message: &str, suggestion: &str) -> Self {
        Self {
            kind: SuggestionKind::Enhancement,
            message: message.to_string(),
            suggestion: suggestion.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionPresence {
    pub has_summary: bool,
    pub has_experience: bool,
    pub has_education: bool,
    pub has_skills: bool,
    pub has_contact: bool,
    pub has_certifications: bool,
    pub has_projects: bool,
    pub has_achievements: bool,
}

impl SectionPresence {
    pub fn of(resume: &ResumeData) -> Self {
        let pi = &resume.personal_info;
        Self {
            has_summary: !pi.summary.trim().is_empty(),
            has_experience: !resume.experience.is_empty(),
            has_education: !resume.education.is_empty(),
            has_skills: !resume.skills.is_empty(),
            has_contact: !pi.email.trim().is_empty() && !pi.phone.trim().is_empty(),
            has_certifications: !resume.certifications.is_empty(),
            has_projects: !resume.projects.is_empty(),
            has_achievements: !resume.achievements.is_empty(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormatAnalysis {
    pub score: u32,
    pub issues: Vec<FormatIssue>,
    pub suggestions: Vec<FormatSuggestion>,
    pub sections: SectionPresence,
}

impl FormatAnalysis {
    pub fn has_missing_section(&self) -> bool {
        self.issues
            .iter()
            .any(|i| i.kind == FormatIssueKind::MissingSection)
    }
}

/// Essential sections with their deduction, in check order.
struct Essential {
    penalty: i32,
    kind: FormatIssueKind,
    severity: FormatSeverity,
    message: &'static str,
    suggestion: &'static str,
}

const ESSENTIALS: [Essential; 5] = [
    Essential {
        penalty: 10,
        kind: FormatIssueKind::MissingSection,
        severity: FormatSeverity::Medium,
        message: "Missing professional summary",
        suggestion: "Add a 2-3 sentence professional summary highlighting your key qualifications",
    },
    Essential {
        penalty: 20,
        kind: FormatIssueKind::MissingSection,
        severity: FormatSeverity::High,
        message: "Missing work experience section",
        suggestion: "Add your work experience with bullet points describing achievements",
    },
    Essential {
        penalty: 10,
        kind: FormatIssueKind::MissingSection,
        severity: FormatSeverity::Medium,
        message: "Missing education section",
        suggestion: "Add your educational background including degrees and institutions",
    },
    Essential {
        penalty: 15,
        kind: FormatIssueKind::MissingSection,
        severity: FormatSeverity::High,
        message: "Missing skills section",
        suggestion: "Add a dedicated skills section with relevant technical and soft skills",
    },
    Essential {
        penalty: 20,
        kind: FormatIssueKind::MissingInfo,
        severity: FormatSeverity::Critical,
        message: "Missing contact information",
        suggestion: "Include your email and phone number in the header",
    },
];

fn starts_with_action_verb(bullet: &str) -> bool {
    bullet
        .split_whitespace()
        .next()
        .map(|w| ACTION_VERBS.contains(&w.to_lowercase().as_str()))
        .unwrap_or(false)
}

pub fn analyze_format(resume: &ResumeData) -> FormatAnalysis {
    let sections = SectionPresence::of(resume);
    let mut issues = Vec::new();
    let mut suggestions = Vec::new();
    let mut score = MAX_FORMAT_SCORE;

    let present = [
        sections.has_summary,
        sections.has_experience,
        sections.has_education,
        sections.has_skills,
        sections.has_contact,
    ];

    for (essential, present) in ESSENTIALS.iter().zip(present) {
        if !present {
            issues.push(FormatIssue {
                kind: essential.kind,
                severity: essential.severity,
                message: essential.message.to_string(),
                suggestion: essential.suggestion.to_string(),
            });
            score -= essential.penalty;
        }
    }

    if sections.has_experience {
        if resume.experience.iter().any(|e| e.bullet_points.is_empty()) {
            suggestions.push(FormatSuggestion::enhancement(
                "Some experience entries lack bullet points",
                "Add 3-5 bullet points per role describing your achievements and responsibilities",
            ));
        }

        let bullets: Vec<&str> = resume.all_bullets().collect();
        let total = bullets.len() as f64;

        let with_metrics = bullets.iter().filter(|b| METRIC.is_match(b)).count() as f64;
        if with_metrics < total * METRIC_BULLET_RATIO {
            suggestions.push(FormatSuggestion::enhancement(
                "Add more quantifiable achievements",
                "Include metrics like percentages, dollar amounts, or numbers to demonstrate impact",
            ));
        }

        let with_verbs = bullets.iter().filter(|b| starts_with_action_verb(b)).count() as f64;
        if with_verbs < total * ACTION_VERB_BULLET_RATIO {
            suggestions.push(FormatSuggestion::enhancement(
                "Start bullet points with strong action verbs",
                "Begin each bullet with verbs like \"Led\", \"Developed\", \"Achieved\", \"Implemented\"",
            ));
        }
    }

    if sections.has_summary && resume.summary().chars().count() < MIN_SUMMARY_CHARS {
        suggestions.push(FormatSuggestion::enhancement(
            "Professional summary is too short",
            "Expand your summary to 2-3 sentences highlighting key qualifications and career goals",
        ));
    }

    if sections.has_skills && resume.skills.len() < MIN_SKILLS {
        suggestions.push(FormatSuggestion::enhancement(
            "Skills section could be stronger",
            "Add more relevant skills (aim for 8-15 skills)",
        ));
    }

    FormatAnalysis {
        score: score.max(0) as u32,
        issues,
        suggestions,
        sections,
    }
}
