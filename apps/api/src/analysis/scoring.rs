use serde::{Deserialize, Serialize};

use crate::analysis::sections::SectionFindings;

/// Points awarded per section toward the completeness score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletenessWeights {
    pub summary: u32,
    pub experience: u32,
    pub bullet_depth: u32,
    pub education: u32,
    pub skills: u32,
    pub skill_breadth: u32,
    pub projects: u32,
}

impl Default for CompletenessWeights {
    fn default() -> Self {
        Self {
            summary: 20,
            experience: 30,
            bullet_depth: 10,
            education: 15,
            skills: 15,
            skill_breadth: 5,
            projects: 5,
        }
    }
}

const DEEP_BULLET_COUNT: usize = 10;
const BROAD_SKILL_COUNT: usize = 5;
const ATS_MIN_EXPERIENCE_ENTRIES: usize = 2;
const ATS_METRICS_BONUS_THRESHOLD: u32 = 30;
const NEUTRAL_ACTION_VERB_SCORE: u32 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreCard {
    pub completeness_score: u32,
    pub metrics_score: u32,
    pub action_verb_score: u32,
    pub ats_score: u32,
}

pub fn score_sections(sections: &SectionFindings) -> ScoreCard {
    let metrics_score = compute_metrics_score(sections);
    ScoreCard {
        completeness_score: compute_completeness_score(sections, &CompletenessWeights::default()),
        metrics_score,
        action_verb_score: compute_action_verb_score(sections),
        ats_score: compute_ats_readiness_score(sections, metrics_score),
    }
}

pub fn compute_completeness_score(sections: &SectionFindings, weights: &CompletenessWeights) -> u32 {
    let mut score = 0;

    if sections.summary.exists {
        score += weights.summary;
    }
    if sections.experience.exists {
        score += weights.experience;
        if sections.experience.total_bullets >= DEEP_BULLET_COUNT {
            score += weights.bullet_depth;
        }
    }
    if sections.education.exists {
        score += weights.education;
    }
    if sections.skills.exists {
        score += weights.skills;
        if sections.skills.count >= BROAD_SKILL_COUNT {
            score += weights.skill_breadth;
        }
    }
    if sections.projects.exists {
        score += weights.projects;
    }

    score.min(100)
}

/// Share of bullets carrying a figure; 0 when there are no bullets.
pub fn compute_metrics_score(sections: &SectionFindings) -> u32 {
    let total = sections.experience.total_bullets;
    if total == 0 {
        return 0;
    }
    percent(sections.experience.bullets_with_metrics as f64 / total as f64)
}

/// Inverse share of weak-verb bullets; neutral 50 when there are no bullets.
pub fn compute_action_verb_score(sections: &SectionFindings) -> u32 {
    let total = sections.experience.total_bullets;
    if total == 0 {
        return NEUTRAL_ACTION_VERB_SCORE;
    }
    let weak = sections.experience.weak_verbs.len() as f64;
    percent(1.0 - weak / total as f64)
}

/// Structural readiness for applicant tracking systems, as seen by the
/// analyzer. Independent of the ATS format score in `crate::ats`.
pub fn compute_ats_readiness_score(sections: &SectionFindings, metrics_score: u32) -> u32 {
    let mut score = 0;

    if sections.summary.exists {
        score += 20;
    }
    if sections.experience.count >= ATS_MIN_EXPERIENCE_ENTRIES {
        score += 30;
    }
    if sections.skills.count >= BROAD_SKILL_COUNT {
        score += 25;
    }
    if sections.education.exists {
        score += 15;
    }
    if metrics_score >= ATS_METRICS_BONUS_THRESHOLD {
        score += 10;
    }

    score.min(100)
}

fn percent(ratio: f64) -> u32 {
    (ratio * 100.0).round().clamp(0.0, 100.0) as u32
}
