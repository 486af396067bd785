//! Per-section feature extraction. Each analyzer inspects one slice of the
//! resume, returns its findings and appends issues to the shared list. None of
//! them fail: absent sections are reported, not rejected.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::resume::{Education, Experience, Project, Skill};
use crate::text::{truncate_chars, word_count};

const SUMMARY_MIN_WORDS: usize = 20;
const SUMMARY_MAX_WORDS: usize = 100;
const BULLET_MIN_WORDS: usize = 8;
const MIN_BULLETS_PER_ENTRY: usize = 3;
const METRIC_BULLET_MIN_PERCENT: f64 = 30.0;
const SPARSE_SKILLS_THRESHOLD: usize = 5;

const GENERIC_PHRASES: &[&str] = &[
    "hard worker",
    "team player",
    "detail-oriented",
    "results-driven",
    "passionate",
];

/// Phrases that signal a passive or vague bullet. Matched as a prefix or as a
/// space-delimited phrase anywhere in the bullet.
pub const WEAK_VERBS: &[&str] = &[
    "worked on",
    "helped with",
    "assisted",
    "was responsible for",
    "participated in",
    "involved in",
    "handled",
    "did",
    "made",
];

static SUMMARY_METRIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\d+[%+]?|\$[\d,]+|[\d,]+ ?(users|customers|revenue|sales)")
        .expect("summary metric pattern")
});

static BULLET_METRIC: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\d+[%+]?|\$[\d,]+|[\d,]+ ?(users|customers|projects|team|members|clients)")
        .expect("bullet metric pattern")
});

// ────────────────────────────────────────────────────────────────────────────
// Issues
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    Missing,
    Quality,
    Sparse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeSection {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    #[serde(rename = "type")]
    pub kind: IssueKind,
    pub section: ResumeSection,
    pub severity: Severity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet_index: Option<usize>,
}

impl Issue {
    fn new(
        kind: IssueKind,
        section: ResumeSection,
        severity: Severity,
        message: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            section,
            severity,
            message: message.into(),
            entry_index: None,
            bullet_index: None,
        }
    }

    fn at_entry(mut self, index: usize) -> Self {
        self.entry_index = Some(index);
        self
    }

    fn at_bullet(mut self, index: usize) -> Self {
        self.bullet_index = Some(index);
        self
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Findings
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SummaryQuality {
    Missing,
    TooShort,
    TooLong,
    GoodLength,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryFindings {
    pub exists: bool,
    pub quality: SummaryQuality,
    pub word_count: usize,
    pub issues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeakVerbBullet {
    pub entry_index: usize,
    pub bullet_index: usize,
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceFindings {
    pub exists: bool,
    pub count: usize,
    pub total_bullets: usize,
    pub bullets_with_metrics: usize,
    pub weak_verbs: Vec<WeakVerbBullet>,
}

/// Findings for sections that are only checked for presence and size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CountFindings {
    pub exists: bool,
    pub count: usize,
}

impl CountFindings {
    fn of(count: usize) -> Self {
        Self {
            exists: count > 0,
            count,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionFindings {
    pub summary: SummaryFindings,
    pub experience: ExperienceFindings,
    pub education: CountFindings,
    pub skills: CountFindings,
    pub projects: CountFindings,
}

// ────────────────────────────────────────────────────────────────────────────
// Analyzers
// ────────────────────────────────────────────────────────────────────────────

pub fn analyze_summary(summary: &str, issues: &mut Vec<Issue>) -> SummaryFindings {
    if summary.trim().is_empty() {
        issues.push(Issue::new(
            IssueKind::Missing,
            ResumeSection::Summary,
            Severity::High,
            "Resume lacks a professional summary",
        ));
        return SummaryFindings {
            exists: false,
            quality: SummaryQuality::Missing,
            word_count: 0,
            issues: vec!["No summary provided".to_string()],
        };
    }

    let mut section_issues = Vec::new();
    let words = word_count(summary);

    let quality = if words < SUMMARY_MIN_WORDS {
        section_issues.push("Summary is too brief".to_string());
        issues.push(Issue::new(
            IssueKind::Quality,
            ResumeSection::Summary,
            Severity::Medium,
            "Summary is too short (less than 20 words)",
        ));
        SummaryQuality::TooShort
    } else if words > SUMMARY_MAX_WORDS {
        section_issues.push("Summary is too lengthy".to_string());
        issues.push(Issue::new(
            IssueKind::Quality,
            ResumeSection::Summary,
            Severity::Low,
            "Summary is too long (over 100 words)",
        ));
        SummaryQuality::TooLong
    } else {
        SummaryQuality::GoodLength
    };

    let lower = summary.to_lowercase();
    if GENERIC_PHRASES.iter().any(|phrase| lower.contains(phrase)) {
        section_issues.push("Contains generic buzzwords".to_string());
        issues.push(Issue::new(
            IssueKind::Quality,
            ResumeSection::Summary,
            Severity::Medium,
            "Summary contains generic buzzwords that could be more specific",
        ));
    }

    if !SUMMARY_METRIC.is_match(summary) {
        section_issues.push("No quantifiable achievements".to_string());
    }

    SummaryFindings {
        exists: true,
        quality,
        word_count: words,
        issues: section_issues,
    }
}

pub fn bullet_has_metric(bullet: &str) -> bool {
    BULLET_METRIC.is_match(bullet)
}

pub fn bullet_has_weak_verb(bullet: &str) -> bool {
    let lower = bullet.to_lowercase();
    WEAK_VERBS
        .iter()
        .any(|verb| lower.starts_with(verb) || lower.contains(&format!(" {verb} ")))
}

pub fn analyze_experience(experience: &[Experience], issues: &mut Vec<Issue>) -> ExperienceFindings {
    if experience.is_empty() {
        issues.push(Issue::new(
            IssueKind::Missing,
            ResumeSection::Experience,
            Severity::High,
            "No work experience listed",
        ));
        return ExperienceFindings::default();
    }

    let mut findings = ExperienceFindings {
        exists: true,
        count: experience.len(),
        ..Default::default()
    };

    for (entry_index, exp) in experience.iter().enumerate() {
        let bullets = &exp.bullet_points;

        if bullets.is_empty() {
            issues.push(
                Issue::new(
                    IssueKind::Sparse,
                    ResumeSection::Experience,
                    Severity::High,
                    format!("{} at {} has no bullet points", exp.position, exp.company),
                )
                .at_entry(entry_index),
            );
        } else if bullets.len() < MIN_BULLETS_PER_ENTRY {
            issues.push(
                Issue::new(
                    IssueKind::Sparse,
                    ResumeSection::Experience,
                    Severity::Medium,
                    format!(
                        "{} at {} has only {} bullet point(s)",
                        exp.position,
                        exp.company,
                        bullets.len()
                    ),
                )
                .at_entry(entry_index),
            );
        }

        for (bullet_index, bullet) in bullets.iter().enumerate() {
            findings.total_bullets += 1;

            if bullet_has_metric(bullet) {
                findings.bullets_with_metrics += 1;
            }

            if bullet_has_weak_verb(bullet) {
                findings.weak_verbs.push(WeakVerbBullet {
                    entry_index,
                    bullet_index,
                    text: truncate_chars(bullet, 50).to_string(),
                });
            }

            if word_count(bullet) < BULLET_MIN_WORDS {
                issues.push(
                    Issue::new(
                        IssueKind::Quality,
                        ResumeSection::Experience,
                        Severity::Low,
                        format!("Bullet point is too brief: \"{}...\"", truncate_chars(bullet, 40)),
                    )
                    .at_entry(entry_index)
                    .at_bullet(bullet_index),
                );
            }
        }

        if exp.description.is_empty() && bullets.is_empty() {
            issues.push(
                Issue::new(
                    IssueKind::Missing,
                    ResumeSection::Experience,
                    Severity::Medium,
                    format!(
                        "{} at {} lacks both description and bullet points",
                        exp.position, exp.company
                    ),
                )
                .at_entry(entry_index),
            );
        }
    }

    if findings.total_bullets > 0 {
        let percent =
            findings.bullets_with_metrics as f64 / findings.total_bullets as f64 * 100.0;
        if percent < METRIC_BULLET_MIN_PERCENT {
            issues.push(Issue::new(
                IssueKind::Quality,
                ResumeSection::Experience,
                Severity::High,
                format!(
                    "Only {}% of bullet points contain metrics or numbers",
                    percent.round() as i64
                ),
            ));
        }
    }

    if !findings.weak_verbs.is_empty() {
        issues.push(Issue::new(
            IssueKind::Quality,
            ResumeSection::Experience,
            Severity::Medium,
            format!(
                "{} bullet point(s) use weak action verbs",
                findings.weak_verbs.len()
            ),
        ));
    }

    findings
}

pub fn analyze_education(education: &[Education], issues: &mut Vec<Issue>) -> CountFindings {
    let findings = CountFindings::of(education.len());
    if !findings.exists {
        issues.push(Issue::new(
            IssueKind::Missing,
            ResumeSection::Education,
            Severity::Medium,
            "No education listed",
        ));
    }
    findings
}

pub fn analyze_skills(skills: &[Skill], issues: &mut Vec<Issue>) -> CountFindings {
    let findings = CountFindings::of(skills.len());
    if !findings.exists {
        issues.push(Issue::new(
            IssueKind::Missing,
            ResumeSection::Skills,
            Severity::Medium,
            "No skills listed",
        ));
    } else if findings.count < SPARSE_SKILLS_THRESHOLD {
        issues.push(Issue::new(
            IssueKind::Sparse,
            ResumeSection::Skills,
            Severity::Low,
            "Only a few skills listed",
        ));
    }
    findings
}

pub fn analyze_projects(projects: &[Project], issues: &mut Vec<Issue>) -> CountFindings {
    for (index, project) in projects.iter().enumerate() {
        if project.description.is_empty() && project.highlights.is_empty() {
            issues.push(
                Issue::new(
                    IssueKind::Sparse,
                    ResumeSection::Projects,
                    Severity::Medium,
                    format!("Project \"{}\" lacks description", project.name),
                )
                .at_entry(index),
            );
        }
    }
    CountFindings::of(projects.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exp(position: &str, bullets: &[&str]) -> Experience {
        Experience {
            position: position.to_string(),
            company: "Acme".to_string(),
            bullet_points: bullets.iter().map(|b| b.to_string()).collect(),
            ..Default::default()
        }
    }

    const GOOD_SUMMARY: &str = "Backend engineer with 7 years of experience designing \
        payment systems that process 2 million transactions a day across three regions \
        while keeping p99 latency under 40 milliseconds for merchants.";

    #[test]
    fn test_missing_summary_is_high_severity() {
        let mut issues = Vec::new();
        let findings = analyze_summary("   ", &mut issues);
        assert!(!findings.exists);
        assert_eq!(findings.quality, SummaryQuality::Missing);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].severity, Severity::High);
        assert_eq!(issues[0].message, "Resume lacks a professional summary");
    }

    #[test]
    fn test_short_summary() {
        let mut issues = Vec::new();
        let findings = analyze_summary("Engineer who ships 3 products a year.", &mut issues);
        assert_eq!(findings.quality, SummaryQuality::TooShort);
        assert_eq!(issues[0].severity, Severity::Medium);
    }

    #[test]
    fn test_long_summary() {
        let mut issues = Vec::new();
        let long = "word ".repeat(120);
        let findings = analyze_summary(&long, &mut issues);
        assert_eq!(findings.quality, SummaryQuality::TooLong);
        assert_eq!(findings.word_count, 120);
        assert!(findings.issues.contains(&"No quantifiable achievements".to_string()));
    }

    #[test]
    fn test_good_summary_has_no_issues() {
        let mut issues = Vec::new();
        let findings = analyze_summary(GOOD_SUMMARY, &mut issues);
        assert_eq!(findings.quality, SummaryQuality::GoodLength);
        assert!(findings.issues.is_empty(), "{:?}", findings.issues);
        assert!(issues.is_empty());
    }

    #[test]
    fn test_buzzwords_flagged_case_insensitively() {
        let mut issues = Vec::new();
        let summary = format!("{GOOD_SUMMARY} Proven Team Player.");
        let findings = analyze_summary(&summary, &mut issues);
        assert!(findings.issues.contains(&"Contains generic buzzwords".to_string()));
        assert!(issues.iter().any(|i| i.message.contains("generic buzzwords")));
    }

    #[test]
    fn test_weak_verb_prefix_and_infix() {
        assert!(bullet_has_weak_verb("Worked on the billing service"));
        assert!(bullet_has_weak_verb("Team lead who was responsible for hiring"));
        assert!(!bullet_has_weak_verb("Architected the billing service"));
        // "made" only counts as a standalone phrase or prefix.
        assert!(!bullet_has_weak_verb("Automated remade dashboards"));
    }

    #[test]
    fn test_metric_detection() {
        assert!(bullet_has_metric("Cut costs by 30%"));
        assert!(bullet_has_metric("Saved $12,000 per quarter"));
        assert!(!bullet_has_metric("Improved the onboarding flow"));
    }

    #[test]
    fn test_no_experience_is_high_issue() {
        let mut issues = Vec::new();
        let findings = analyze_experience(&[], &mut issues);
        assert!(!findings.exists);
        assert_eq!(issues[0].message, "No work experience listed");
        assert_eq!(issues[0].severity, Severity::High);
    }

    #[test]
    fn test_entry_without_bullets() {
        let mut issues = Vec::new();
        analyze_experience(&[exp("Engineer", &[])], &mut issues);
        let sparse: Vec<_> = issues.iter().filter(|i| i.kind == IssueKind::Sparse).collect();
        assert_eq!(sparse.len(), 1);
        assert_eq!(sparse[0].severity, Severity::High);
        assert_eq!(sparse[0].entry_index, Some(0));
        assert!(issues
            .iter()
            .any(|i| i.message.contains("lacks both description and bullet points")));
    }

    #[test]
    fn test_whitespace_description_counts_as_present() {
        let mut issues = Vec::new();
        let mut entry = exp("Engineer", &[]);
        entry.description = "  ".to_string();
        analyze_experience(&[entry], &mut issues);
        assert!(!issues
            .iter()
            .any(|i| i.message.contains("lacks both description and bullet points")));

        let mut issues = Vec::new();
        let project = Project {
            name: "Ledger".to_string(),
            description: " ".to_string(),
            ..Default::default()
        };
        analyze_projects(&[project], &mut issues);
        assert!(issues.is_empty(), "{issues:?}");
    }

    #[test]
    fn test_long_weak_bullet_is_excerpted_by_chars() {
        let bullet = format!("Handled {}", "é".repeat(60));
        let mut issues = Vec::new();
        let findings = analyze_experience(&[exp("Engineer", &[bullet.as_str()])], &mut issues);

        let recorded = &findings.weak_verbs[0].text;
        assert_eq!(recorded.chars().count(), 50);
        assert!(bullet.starts_with(recorded.as_str()));

        let expected = format!(
            "Bullet point is too brief: \"Handled {}...\"",
            "é".repeat(32)
        );
        assert!(
            issues.iter().any(|i| i.message == expected),
            "no brevity excerpt in {issues:?}"
        );
    }

    #[test]
    fn test_entry_with_two_bullets_is_medium_sparse() {
        let mut issues = Vec::new();
        analyze_experience(
            &[exp(
                "Engineer",
                &[
                    "Reduced checkout latency by 45% across all regions worldwide",
                    "Migrated 14 services from a monolith onto managed Kubernetes",
                ],
            )],
            &mut issues,
        );
        assert_eq!(issues.len(), 1, "{issues:?}");
        assert_eq!(issues[0].kind, IssueKind::Sparse);
        assert_eq!(issues[0].severity, Severity::Medium);
        assert_eq!(issues[0].message, "Engineer at Acme has only 2 bullet point(s)");
    }

    #[test]
    fn test_bullet_counters_and_aggregate_issues() {
        let mut issues = Vec::new();
        let findings = analyze_experience(
            &[exp(
                "Engineer",
                &[
                    "Worked on internal tooling for the support organisation team",
                    "Helped with releases",
                    "Participated in code reviews for the platform group every week",
                    "Shipped 3 customer-facing features ahead of the quarterly deadline",
                ],
            )],
            &mut issues,
        );
        assert_eq!(findings.total_bullets, 4);
        assert_eq!(findings.bullets_with_metrics, 1);
        assert_eq!(findings.weak_verbs.len(), 3);
        assert_eq!(findings.weak_verbs[1].bullet_index, 1);

        assert!(issues
            .iter()
            .any(|i| i.severity == Severity::High && i.message.starts_with("Only 25%")));
        assert!(issues
            .iter()
            .any(|i| i.message == "3 bullet point(s) use weak action verbs"));
        let brief: Vec<_> = issues
            .iter()
            .filter(|i| i.severity == Severity::Low)
            .collect();
        assert_eq!(brief.len(), 1);
        assert_eq!(brief[0].bullet_index, Some(1));
    }

    #[test]
    fn test_sparse_skills_and_missing_education() {
        let mut issues = Vec::new();
        let skills = vec![Skill::default(); 3];
        let findings = analyze_skills(&skills, &mut issues);
        assert_eq!(findings.count, 3);
        assert_eq!(issues[0].severity, Severity::Low);

        let edu = analyze_education(&[], &mut issues);
        assert!(!edu.exists);
        assert_eq!(issues[1].message, "No education listed");
    }

    #[test]
    fn test_project_without_description_or_highlights() {
        let mut issues = Vec::new();
        let projects = vec![
            Project {
                name: "Ledger".to_string(),
                ..Default::default()
            },
            Project {
                name: "Relay".to_string(),
                highlights: vec!["Handles 5k msgs/s".to_string()],
                ..Default::default()
            },
        ];
        let findings = analyze_projects(&projects, &mut issues);
        assert_eq!(findings.count, 2);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].message, "Project \"Ledger\" lacks description");
        assert_eq!(issues[0].entry_index, Some(0));
    }
}
