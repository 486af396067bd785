use serde::{Deserialize, Serialize};

use crate::analysis::scoring::ScoreCard;
use crate::analysis::sections::{Issue, IssueKind, ResumeSection, SectionFindings};

const LOW_METRICS_SCORE: u32 = 40;
const SKILL_SUGGESTION_THRESHOLD: usize = 10;

/// Declaration order is the sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Critical => "critical",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnhancementArea {
    Summary,
    ExperienceMetrics,
    ExperienceVerbs,
    ExperienceContent,
    Skills,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnhancementAction {
    Create,
    Improve,
    AddMetrics,
    StrengthenVerbs,
    Expand,
    Suggest,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancementPriority {
    pub priority: Priority,
    pub area: EnhancementArea,
    pub action: EnhancementAction,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl EnhancementPriority {
    fn new(
        priority: Priority,
        area: EnhancementArea,
        action: EnhancementAction,
        message: impl Into<String>,
    ) -> Self {
        Self {
            priority,
            area,
            action,
            message: message.into(),
            count: None,
        }
    }

    fn counted(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

/// Ranks what the candidate should fix first. The sort is stable, so entries
/// of equal priority keep the order in which the rules below emit them.
pub fn prioritize_enhancements(
    sections: &SectionFindings,
    scores: &ScoreCard,
    issues: &[Issue],
) -> Vec<EnhancementPriority> {
    let mut priorities = Vec::new();

    if !sections.summary.exists {
        priorities.push(EnhancementPriority::new(
            Priority::Critical,
            EnhancementArea::Summary,
            EnhancementAction::Create,
            "Create a compelling professional summary tailored to target role",
        ));
    } else if !sections.summary.issues.is_empty() {
        priorities.push(EnhancementPriority::new(
            Priority::High,
            EnhancementArea::Summary,
            EnhancementAction::Improve,
            "Enhance summary with specific achievements and role-relevant keywords",
        ));
    }

    let experience = &sections.experience;
    if scores.metrics_score < LOW_METRICS_SCORE && experience.total_bullets > 0 {
        let missing = experience.total_bullets - experience.bullets_with_metrics;
        priorities.push(
            EnhancementPriority::new(
                Priority::High,
                EnhancementArea::ExperienceMetrics,
                EnhancementAction::AddMetrics,
                format!("Add quantifiable metrics to {missing} bullet points"),
            )
            .counted(missing),
        );
    }

    let weak = experience.weak_verbs.len();
    if weak > 0 {
        priorities.push(
            EnhancementPriority::new(
                Priority::Medium,
                EnhancementArea::ExperienceVerbs,
                EnhancementAction::StrengthenVerbs,
                format!("Replace {weak} weak action verbs with powerful alternatives"),
            )
            .counted(weak),
        );
    }

    let sparse = issues
        .iter()
        .filter(|i| i.section == ResumeSection::Experience && i.kind == IssueKind::Sparse)
        .count();
    if sparse > 0 {
        priorities.push(
            EnhancementPriority::new(
                Priority::Medium,
                EnhancementArea::ExperienceContent,
                EnhancementAction::Expand,
                format!("Expand {sparse} experience entries with more bullet points"),
            )
            .counted(sparse),
        );
    }

    if sections.skills.count < SKILL_SUGGESTION_THRESHOLD {
        priorities.push(EnhancementPriority::new(
            Priority::Low,
            EnhancementArea::Skills,
            EnhancementAction::Suggest,
            "Suggest additional relevant skills based on experience",
        ));
    }

    priorities.sort_by_key(|p| p.priority);
    priorities
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::sections::{
        analyze_experience, analyze_skills, analyze_summary, CountFindings, ExperienceFindings,
        SummaryFindings, SummaryQuality, WeakVerbBullet,
    };
    use crate::analysis::scoring::score_sections;
    use crate::models::resume::{Experience, Skill};

    fn empty_sections() -> SectionFindings {
        SectionFindings {
            summary: SummaryFindings {
                exists: false,
                quality: SummaryQuality::Missing,
                word_count: 0,
                issues: vec![],
            },
            experience: ExperienceFindings::default(),
            education: CountFindings::default(),
            skills: CountFindings::default(),
            projects: CountFindings::default(),
        }
    }

    #[test]
    fn test_empty_resume_starts_with_critical_summary() {
        let sections = empty_sections();
        let scores = score_sections(&sections);
        let priorities = prioritize_enhancements(&sections, &scores, &[]);

        assert_eq!(priorities.len(), 2);
        assert_eq!(priorities[0].priority, Priority::Critical);
        assert_eq!(priorities[0].area, EnhancementArea::Summary);
        assert_eq!(priorities[0].action, EnhancementAction::Create);
        assert_eq!(priorities[1].area, EnhancementArea::Skills);
        // no bullets, so no metrics recommendation
        assert!(priorities.iter().all(|p| p.area != EnhancementArea::ExperienceMetrics));
    }

    #[test]
    fn test_weak_experience_produces_counted_priorities() {
        let mut issues = Vec::new();
        let experience = vec![Experience {
            position: "Engineer".to_string(),
            company: "Acme".to_string(),
            bullet_points: vec![
                "Worked on the billing service with the platform team".to_string(),
                "Helped with onboarding new engineers onto the codebase".to_string(),
            ],
            ..Default::default()
        }];
        let skills: Vec<Skill> = (0..12)
            .map(|i| Skill {
                name: format!("skill-{i}"),
                category: String::new(),
            })
            .collect();

        let mut sections = empty_sections();
        sections.summary = analyze_summary(
            "Engineer focused on reliable billing systems for growing companies worldwide \
             with a strong track record of shipping on time and mentoring peers daily",
            &mut issues,
        );
        sections.experience = analyze_experience(&experience, &mut issues);
        sections.skills = analyze_skills(&skills, &mut issues);
        let scores = score_sections(&sections);

        let priorities = prioritize_enhancements(&sections, &scores, &issues);
        let areas: Vec<_> = priorities.iter().map(|p| p.area).collect();
        assert_eq!(
            areas,
            vec![
                EnhancementArea::Summary,
                EnhancementArea::ExperienceMetrics,
                EnhancementArea::ExperienceVerbs,
                EnhancementArea::ExperienceContent,
            ]
        );
        assert_eq!(priorities[0].action, EnhancementAction::Improve);
        assert_eq!(priorities[1].count, Some(2));
        assert_eq!(priorities[1].message, "Add quantifiable metrics to 2 bullet points");
        assert_eq!(priorities[2].count, Some(2));
        assert_eq!(priorities[3].count, Some(1));
    }

    #[test]
    fn test_sort_is_stable_within_priority() {
        let mut sections = empty_sections();
        sections.summary.exists = true;
        sections.summary.quality = SummaryQuality::GoodLength;
        sections.experience.exists = true;
        sections.experience.count = 1;
        sections.experience.total_bullets = 4;
        sections.experience.bullets_with_metrics = 4;
        sections.experience.weak_verbs = vec![WeakVerbBullet {
            entry_index: 0,
            bullet_index: 0,
            text: "Handled".to_string(),
        }];
        let scores = score_sections(&sections);

        // an entry with no bullets yields one sparse issue
        let mut issues = Vec::new();
        analyze_experience(&[Experience::default()], &mut issues);
        let priorities = prioritize_enhancements(&sections, &scores, &issues);

        let mediums: Vec<_> = priorities
            .iter()
            .filter(|p| p.priority == Priority::Medium)
            .map(|p| p.area)
            .collect();
        assert_eq!(
            mediums,
            vec![EnhancementArea::ExperienceVerbs, EnhancementArea::ExperienceContent]
        );
        assert_eq!(priorities.last().map(|p| p.priority), Some(Priority::Low));
    }

    #[test]
    fn test_priority_serializes_snake_case() {
        let p = EnhancementPriority::new(
            Priority::High,
            EnhancementArea::ExperienceMetrics,
            EnhancementAction::AddMetrics,
            "Add quantifiable metrics to 3 bullet points",
        )
        .counted(3);
        let json = serde_json::to_value(&p).unwrap();
        assert_eq!(json["priority"], "high");
        assert_eq!(json["area"], "experience_metrics");
        assert_eq!(json["action"], "add_metrics");
        assert_eq!(json["count"], 3);

        let no_count = serde_json::to_value(EnhancementPriority::new(
            Priority::Low,
            EnhancementArea::Skills,
            EnhancementAction::Suggest,
            "x",
        ))
        .unwrap();
        assert!(no_count.get("count").is_none());
    }
}
