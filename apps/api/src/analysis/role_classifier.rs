//! Infers the candidate's role and industry from titles, falling back to
//! skill names.
//!
//! Rule order is significant: matching stops at the first hit, so specific
//! titles ("developer advocate", "mobile developer") sit above the generic
//! ones ("developer", "manager").

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::models::ResumeData;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleDetection {
    pub role: String,
    pub industry: String,
}

impl RoleDetection {
    fn new(role: &str, industry: &str) -> Self {
        Self {
            role: role.to_string(),
            industry: industry.to_string(),
        }
    }
}

struct RoleRule {
    pattern: Regex,
    role: &'static str,
    industry: &'static str,
}

fn compile(rules: &[(&str, &'static str, &'static str)]) -> Vec<RoleRule> {
    rules
        .iter()
        .map(|&(pattern, role, industry)| RoleRule {
            pattern: Regex::new(&format!("(?i){pattern}")).expect("role rule pattern"),
            role,
            industry,
        })
        .collect()
}

static TITLE_RULES: Lazy<Vec<RoleRule>> = Lazy::new(|| {
    compile(&[
        (
            r"developer advocate|devrel|developer relations|developer evangelist|technical evangelist|community manager|developer experience",
            "Developer Advocate",
            "Technology",
        ),
        (r"technical writer|documentation|docs engineer", "Technical Writer", "Technology"),
        (r"content creator|youtuber|influencer|creator", "Content Creator", "Media"),
        // mobile before frontend: careers often mention both
        (
            r"mobile.*(engineer|developer)|ios developer|android developer|react native|flutter developer",
            "Mobile Developer",
            "Technology",
        ),
        (r"frontend|front-end|ui engineer|ui developer", "Frontend Developer", "Technology"),
        (r"backend|back-end|server engineer|api engineer", "Backend Developer", "Technology"),
        (r"full.?stack", "Full Stack Developer", "Technology"),
        (
            r"devops|sre|site reliability|platform engineer|infrastructure",
            "DevOps Engineer",
            "Technology",
        ),
        (
            r"data scientist|machine learning|ml engineer|ai engineer|deep learning",
            "Data Scientist",
            "Technology",
        ),
        (r"data analyst|business analyst|bi analyst|analytics", "Data Analyst", "Technology"),
        (r"data engineer|etl|data pipeline", "Data Engineer", "Technology"),
        (r"security engineer|cybersecurity|infosec", "Security Engineer", "Technology"),
        (r"qa|quality assurance|test engineer|sdet", "QA Engineer", "Technology"),
        (
            r"software engineer|software developer|programmer|sde|swe",
            "Software Engineer",
            "Technology",
        ),
        (r"web developer", "Web Developer", "Technology"),
        (r"product manager|product owner", "Product Manager", "Technology"),
        (r"project manager|program manager|scrum master", "Project Manager", "General"),
        (
            r"ux designer|ui designer|product designer|interaction designer",
            "Designer",
            "Design",
        ),
        (r"graphic designer|visual designer", "Graphic Designer", "Design"),
        (r"marketing|growth|seo specialist|content marketing", "Marketing", "Marketing"),
        (r"sales|account executive|business development|bdm", "Sales", "Sales"),
        (r"hr|human resources|recruiter|talent acquisition", "Human Resources", "HR"),
        (r"finance|accountant|cpa|financial analyst", "Finance", "Finance"),
        (r"consultant|advisory", "Consultant", "Consulting"),
        (r"cto|ceo|coo|vp of|head of|director of|chief", "Executive", "General"),
        (r"manager|lead|supervisor", "Manager", "General"),
    ])
});

static SKILL_RULES: Lazy<Vec<RoleRule>> = Lazy::new(|| {
    compile(&[
        (r"developer advocacy|devrel|community", "Developer Advocate", "Technology"),
        (
            r"react|vue|angular|javascript|typescript|css|html",
            "Frontend Developer",
            "Technology",
        ),
        (
            r"node|python|java|golang|ruby|php|sql|database",
            "Backend Developer",
            "Technology",
        ),
        (r"aws|azure|gcp|kubernetes|docker|terraform", "DevOps Engineer", "Technology"),
    ])
});

fn first_match(rules: &[RoleRule], text: &str) -> Option<RoleDetection> {
    rules
        .iter()
        .find(|rule| rule.pattern.is_match(text))
        .map(|rule| RoleDetection::new(rule.role, rule.industry))
}

pub fn detect_role(resume: &ResumeData) -> RoleDetection {
    let title = resume.personal_info.title.as_str();
    let recent_position = resume
        .experience
        .first()
        .map(|e| e.position.as_str())
        .unwrap_or_default();
    let all_positions = resume
        .experience
        .iter()
        .map(|e| e.position.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let role_text = format!("{title} {recent_position} {all_positions}").to_lowercase();

    if let Some(detection) = first_match(&TITLE_RULES, &role_text) {
        return detection;
    }

    if !resume.skills.is_empty() {
        let skill_names = resume
            .skills
            .iter()
            .map(|s| s.name.to_lowercase())
            .collect::<Vec<_>>()
            .join(" ");
        if let Some(detection) = first_match(&SKILL_RULES, &skill_names) {
            return detection;
        }
    }

    RoleDetection::new("Professional", "General")
}
