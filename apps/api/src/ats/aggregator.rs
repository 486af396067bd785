//! Combines the format score and keyword match into the overall ATS score,
//! category band and tips.

use serde::{Deserialize, Serialize};

use crate::ats::format::FormatAnalysis;
use crate::ats::keyword_match::KeywordMatchResult;

const KEYWORD_WEIGHT: f64 = 0.4;
const ALIGNMENT_WEIGHT: f64 = 0.35;
const BASELINE_WEIGHT: f64 = 0.25;
const TIP_SCORE_THRESHOLD: u32 = 80;
const MAX_TIPS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCategory {
    Excellent,
    Good,
    Fair,
    NeedsImprovement,
    Poor,
}

impl ScoreCategory {
    pub fn from_score(score: u32) -> Self {
        match score {
            90.. => ScoreCategory::Excellent,
            80..=89 => ScoreCategory::Good,
            70..=79 => ScoreCategory::Fair,
            50..=69 => ScoreCategory::NeedsImprovement,
            _ => ScoreCategory::Poor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipPriority {
    High,
    Medium,
    Low,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tip {
    pub priority: TipPriority,
    pub title: String,
    pub description: String,
}

impl Tip {
    fn new(priority: TipPriority, title: &str, description: impl Into<String>) -> Self {
        Self {
            priority,
            title: title.to_string(),
            description: description.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AtsVerdict {
    pub score: u32,
    pub category: ScoreCategory,
    pub tips: Vec<Tip>,
}

/// Overall score. With a job description the format score fills both the
/// alignment and baseline weights; there is no separate alignment signal.
pub fn overall_score(format: &FormatAnalysis, keywords: Option<&KeywordMatchResult>) -> u32 {
    match keywords {
        Some(k) => {
            let f = format.score as f64;
            (k.match_percentage as f64 * KEYWORD_WEIGHT + f * ALIGNMENT_WEIGHT + f * BASELINE_WEIGHT)
                .round()
                .clamp(0.0, 100.0) as u32
        }
        None => format.score.min(100),
    }
}

/// Targeted tips first (only below the threshold), then the general ones.
/// Generation order is kept; the list is cut at five.
pub fn build_tips(
    score: u32,
    format: &FormatAnalysis,
    keywords: Option<&KeywordMatchResult>,
) -> Vec<Tip> {
    let mut tips = Vec::new();

    if score < TIP_SCORE_THRESHOLD {
        if let Some(k) = keywords.filter(|k| !k.missing.tools.is_empty()) {
            let top: Vec<&str> = k.missing.tools.iter().take(5).map(String::as_str).collect();
            tips.push(Tip::new(
                TipPriority::High,
                "Add missing technical skills",
                format!(
                    "Consider adding these skills if you have experience: {}",
                    top.join(", ")
                ),
            ));
        }

        if format.has_missing_section() {
            tips.push(Tip::new(
                TipPriority::High,
                "Complete missing sections",
                "ATS systems expect standard resume sections. Add any missing sections.",
            ));
        }

        if let Some(k) = keywords.filter(|k| !k.missing.soft_skills.is_empty()) {
            let top: Vec<&str> = k
                .missing
                .soft_skills
                .iter()
                .take(3)
                .map(String::as_str)
                .collect();
            tips.push(Tip::new(
                TipPriority::Medium,
                "Include soft skills from job description",
                format!("The job mentions these skills: {}", top.join(", ")),
            ));
        }
    }

    tips.push(Tip::new(
        TipPriority::Low,
        "Use standard section headers",
        "Headers like \"Work Experience\", \"Education\", and \"Skills\" are easily recognized by ATS",
    ));

    if keywords.is_none() {
        tips.push(Tip::new(
            TipPriority::Medium,
            "Paste a job description for better analysis",
            "Adding a job description enables keyword matching and improves accuracy",
        ));
    }

    tips.truncate(MAX_TIPS);
    tips
}

pub fn aggregate(format: &FormatAnalysis, keywords: Option<&KeywordMatchResult>) -> AtsVerdict {
    let score = overall_score(format, keywords);
    AtsVerdict {
        score,
        category: ScoreCategory::from_score(score),
        tips: build_tips(score, format, keywords),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ats::format::{analyze_format, SectionPresence};
    use crate::ats::keyword_match::KeywordSets;
    use crate::models::ResumeData;

    fn format_with_score(score: u32) -> FormatAnalysis {
        FormatAnalysis {
            score,
            issues: vec![],
            suggestions: vec![],
            sections: SectionPresence::default(),
        }
    }

    fn keywords(match_percentage: u32, missing_tools: &[&str], missing_soft: &[&str]) -> KeywordMatchResult {
        KeywordMatchResult {
            match_percentage,
            matched: KeywordSets::default(),
            missing: KeywordSets {
                tools: missing_tools.iter().map(|s| s.to_string()).collect(),
                soft_skills: missing_soft.iter().map(|s| s.to_string()).collect(),
                ..Default::default()
            },
            total_found: 0,
            total_in_job: 0,
        }
    }

    #[test]
    fn test_category_bands() {
        assert_eq!(ScoreCategory::from_score(100), ScoreCategory::Excellent);
        assert_eq!(ScoreCategory::from_score(90), ScoreCategory::Excellent);
        assert_eq!(ScoreCategory::from_score(89), ScoreCategory::Good);
        assert_eq!(ScoreCategory::from_score(70), ScoreCategory::Fair);
        assert_eq!(ScoreCategory::from_score(50), ScoreCategory::NeedsImprovement);
        assert_eq!(ScoreCategory::from_score(49), ScoreCategory::Poor);
    }

    #[test]
    fn test_score_without_job_description_is_format_score() {
        assert_eq!(overall_score(&format_with_score(65), None), 65);
    }

    #[test]
    fn test_score_with_job_description_double_weights_format() {
        // 50 * 0.4 + 80 * 0.35 + 80 * 0.25 = 20 + 28 + 20
        let k = keywords(50, &[], &[]);
        assert_eq!(overall_score(&format_with_score(80), Some(&k)), 68);
    }

    #[test]
    fn test_high_score_only_general_tips() {
        let verdict = aggregate(&format_with_score(100), None);
        let titles: Vec<_> = verdict.tips.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(
            titles,
            vec!["Use standard section headers", "Paste a job description for better analysis"]
        );
    }

    #[test]
    fn test_low_score_targeted_tips_in_order() {
        let format = analyze_format(&ResumeData::default());
        let k = keywords(
            10,
            &["docker", "kubernetes", "aws", "terraform", "python", "redis"],
            &["leadership", "communication", "teamwork", "negotiation"],
        );
        let verdict = aggregate(&format, Some(&k));
        assert_eq!(verdict.category, ScoreCategory::Poor);

        let titles: Vec<_> = verdict.tips.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Add missing technical skills",
                "Complete missing sections",
                "Include soft skills from job description",
                "Use standard section headers",
            ]
        );
        assert!(verdict.tips[0].description.ends_with("docker, kubernetes, aws, terraform, python"));
        assert!(verdict.tips[2].description.ends_with("leadership, communication, teamwork"));
    }

    #[test]
    fn test_tips_capped_at_five() {
        let format = analyze_format(&ResumeData::default());
        let tips = build_tips(10, &format, None);
        assert!(tips.len() <= MAX_TIPS);
        assert_eq!(tips[0].title, "Complete missing sections");
    }
}
