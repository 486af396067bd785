use serde::{Deserialize, Deserializer, Serialize};

/// Treats an explicit JSON `null` the same as an absent field.
fn nullable<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Resume as submitted by the editor. Every section is optional on the wire;
/// absent or null sections deserialize to empty values.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeData {
    #[serde(deserialize_with = "nullable")]
    pub personal_info: PersonalInfo,
    #[serde(deserialize_with = "nullable")]
    pub experience: Vec<Experience>,
    #[serde(deserialize_with = "nullable")]
    pub education: Vec<Education>,
    #[serde(deserialize_with = "nullable")]
    pub skills: Vec<Skill>,
    #[serde(deserialize_with = "nullable")]
    pub projects: Vec<Project>,
    #[serde(deserialize_with = "nullable")]
    pub certifications: Vec<Certification>,
    #[serde(deserialize_with = "nullable")]
    pub languages: Vec<Language>,
    #[serde(deserialize_with = "nullable")]
    pub volunteer: Vec<Volunteer>,
    #[serde(deserialize_with = "nullable")]
    pub achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    #[serde(deserialize_with = "nullable")]
    pub full_name: String,
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub summary: String,
    #[serde(deserialize_with = "nullable")]
    pub email: String,
    #[serde(deserialize_with = "nullable")]
    pub phone: String,
    #[serde(deserialize_with = "nullable")]
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Experience {
    #[serde(deserialize_with = "nullable")]
    pub position: String,
    #[serde(deserialize_with = "nullable")]
    pub company: String,
    #[serde(deserialize_with = "nullable")]
    pub start_date: String,
    #[serde(deserialize_with = "nullable")]
    pub end_date: String,
    #[serde(deserialize_with = "nullable")]
    pub current: bool,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub bullet_points: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Education {
    #[serde(deserialize_with = "nullable")]
    pub school: String,
    #[serde(deserialize_with = "nullable")]
    pub degree: String,
    #[serde(deserialize_with = "nullable")]
    pub field: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Skill {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub category: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Project {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
    #[serde(deserialize_with = "nullable")]
    pub highlights: Vec<String>,
    #[serde(deserialize_with = "nullable")]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Certification {
    #[serde(deserialize_with = "nullable")]
    pub name: String,
    #[serde(deserialize_with = "nullable")]
    pub issuer: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Language {
    #[serde(deserialize_with = "nullable")]
    pub language: String,
    #[serde(deserialize_with = "nullable")]
    pub proficiency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Volunteer {
    #[serde(deserialize_with = "nullable")]
    pub organization: String,
    #[serde(deserialize_with = "nullable")]
    pub role: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Achievement {
    #[serde(deserialize_with = "nullable")]
    pub title: String,
    #[serde(deserialize_with = "nullable")]
    pub description: String,
}

impl ResumeData {
    pub fn summary(&self) -> &str {
        &self.personal_info.summary
    }

    /// Every experience bullet in document order.
    pub fn all_bullets(&self) -> impl Iterator<Item = &str> {
        self.experience
            .iter()
            .flat_map(|e| e.bullet_points.iter().map(String::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_deserializes_to_empty_resume() {
        let resume: ResumeData = serde_json::from_str("{}").unwrap();
        assert_eq!(resume, ResumeData::default());
    }

    #[test]
    fn test_null_sections_are_treated_as_empty() {
        let json = r#"{
            "personalInfo": null,
            "experience": null,
            "skills": [{"name": "Rust", "category": null}],
            "projects": [{"name": "cli", "highlights": null}]
        }"#;
        let resume: ResumeData = serde_json::from_str(json).unwrap();
        assert!(resume.experience.is_empty());
        assert!(resume.personal_info.summary.is_empty());
        assert_eq!(resume.skills[0].name, "Rust");
        assert!(resume.skills[0].category.is_empty());
        assert!(resume.projects[0].highlights.is_empty());
    }

    #[test]
    fn test_camel_case_fields_deserialize() {
        let json = r#"{
            "personalInfo": {"fullName": "Ada Lovelace", "email": "ada@example.com"},
            "experience": [{
                "position": "Engineer",
                "company": "Analytical Engines",
                "startDate": "01/2020",
                "current": true,
                "bulletPoints": ["Built the difference engine"]
            }]
        }"#;
        let resume: ResumeData = serde_json::from_str(json).unwrap();
        assert_eq!(resume.personal_info.full_name, "Ada Lovelace");
        assert_eq!(resume.experience[0].start_date, "01/2020");
        assert!(resume.experience[0].current);
        assert_eq!(resume.all_bullets().count(), 1);
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let json = r#"{"template": "modern", "experience": [{"position": "Dev", "highlights": ["x"]}]}"#;
        let resume: ResumeData = serde_json::from_str(json).unwrap();
        assert_eq!(resume.experience[0].position, "Dev");
    }
}
