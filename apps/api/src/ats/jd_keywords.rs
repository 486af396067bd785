//! Job description keyword extraction.
//!
//! Vocabulary hits are plain substring containment over the lower-cased
//! description, so "node" also matches inside "nodejs" and "java" inside
//! "javascript". Matching is deliberately not token-based.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const SOFT_SKILLS: &[&str] = &[
    "leadership",
    "communication",
    "teamwork",
    "problem-solving",
    "analytical",
    "collaboration",
    "adaptability",
    "time management",
    "organization",
    "detail-oriented",
    "creative",
    "critical thinking",
    "interpersonal",
    "negotiation",
    "presentation",
];

pub const HARD_SKILLS: &[&str] = &[
    "project management",
    "data analysis",
    "budget management",
    "strategic planning",
    "process improvement",
    "stakeholder management",
    "vendor management",
    "reporting",
    "documentation",
    "training",
    "quality assurance",
    "compliance",
    "risk management",
];

/// Tools, platforms, languages and methodologies.
pub const TOOLS: &[&str] = &[
    "javascript", "typescript", "python", "java", "react", "angular", "vue",
    "node", "nodejs", "aws", "azure", "gcp", "docker", "kubernetes", "sql",
    "mongodb", "postgresql", "mysql", "redis", "git", "github", "gitlab",
    "jenkins", "terraform", "ansible", "linux", "windows", "macos",
    "figma", "sketch", "photoshop", "illustrator", "excel", "powerpoint",
    "salesforce", "hubspot", "jira", "confluence", "slack", "teams",
    "tableau", "powerbi", "looker", "snowflake", "databricks", "spark",
    "machine learning", "ml", "ai", "artificial intelligence", "deep learning",
    "nlp", "computer vision", "tensorflow", "pytorch", "scikit-learn",
    "agile", "scrum", "kanban", "waterfall", "devops", "cicd", "ci/cd",
    "rust", "golang", "kotlin", "ruby", "php", "scala", "graphql", "kafka",
    "rabbitmq", "elasticsearch", "dynamodb", "firebase", "django", "flask",
    "nextjs", "html", "css", "sass", "webpack", "jest", "cypress", "selenium",
    "bigquery", "airflow", "pandas", "numpy", "prometheus", "grafana",
];

/// Degree keywords, matched as substrings like the rest of the vocabulary.
const DEGREES: &[&str] = &[
    "bachelor", "master", "phd", "doctorate", "mba", "bs", "ms", "ba", "ma",
];

const MIN_TOKEN_CHARS: usize = 3;

static TOKEN_SPLIT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\s,;:.()\[\]{}|/\\]+").expect("token split pattern"));

static YEARS_REQUIRED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(\d+)\+?\s*(?:years?|yrs?)").expect("years requirement pattern")
});

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobKeywords {
    pub hard_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub tools: Vec<String>,
    /// Years-of-experience phrases and degree mentions.
    pub requirements: Vec<String>,
    /// Distinct description tokens in first-seen order. Kept as a fallback
    /// word list; never scored.
    #[serde(skip)]
    pub vocabulary: Vec<String>,
}

impl JobKeywords {
    /// Keywords that count toward the match percentage.
    pub fn scored_len(&self) -> usize {
        self.hard_skills.len() + self.soft_skills.len() + self.tools.len()
    }
}

/// Removes repeats, keeping the first occurrence of each value.
fn dedup_ordered(values: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .into_iter()
        .filter(|v| seen.insert(v.clone()))
        .collect()
}

fn contained(text: &str, vocabulary: &[&str]) -> Vec<String> {
    vocabulary
        .iter()
        .filter(|term| text.contains(*term))
        .map(|term| term.to_string())
        .collect()
}

pub fn tokenize(text: &str) -> Vec<String> {
    let tokens = TOKEN_SPLIT
        .split(text)
        .filter(|t| t.chars().count() >= MIN_TOKEN_CHARS)
        .map(str::to_string)
        .collect();
    dedup_ordered(tokens)
}

pub fn extract_job_keywords(job_description: &str) -> JobKeywords {
    if job_description.trim().is_empty() {
        return JobKeywords::default();
    }

    let text = job_description.to_lowercase();

    let mut requirements: Vec<String> = YEARS_REQUIRED
        .find_iter(&text)
        .map(|m| m.as_str().trim().to_string())
        .collect();
    requirements.extend(contained(&text, DEGREES));

    JobKeywords {
        hard_skills: dedup_ordered(contained(&text, HARD_SKILLS)),
        soft_skills: dedup_ordered(contained(&text, SOFT_SKILLS)),
        tools: dedup_ordered(contained(&text, TOOLS)),
        requirements: dedup_ordered(requirements),
        vocabulary: tokenize(&text),
    }
}
