//! Text helpers shared by the analysis and ATS paths.

use crate::models::ResumeData;

/// Flattens every textual field of the resume into one lower-cased string.
///
/// Keyword matching runs substring containment against this single string, so
/// every consumer must build it here rather than concatenating on its own.
pub fn build_searchable_text(resume: &ResumeData) -> String {
    let mut parts: Vec<&str> = Vec::new();

    let pi = &resume.personal_info;
    parts.extend([
        pi.full_name.as_str(),
        pi.title.as_str(),
        pi.summary.as_str(),
        pi.email.as_str(),
        pi.phone.as_str(),
        pi.location.as_str(),
    ]);

    for exp in &resume.experience {
        parts.extend([
            exp.company.as_str(),
            exp.position.as_str(),
            exp.description.as_str(),
        ]);
        parts.extend(exp.bullet_points.iter().map(String::as_str));
    }

    for edu in &resume.education {
        parts.extend([edu.school.as_str(), edu.degree.as_str(), edu.field.as_str()]);
    }

    for skill in &resume.skills {
        parts.extend([skill.name.as_str(), skill.category.as_str()]);
    }

    for cert in &resume.certifications {
        parts.extend([cert.name.as_str(), cert.issuer.as_str()]);
    }

    for project in &resume.projects {
        parts.extend([project.name.as_str(), project.description.as_str()]);
        parts.extend(project.technologies.iter().map(String::as_str));
        parts.extend(project.highlights.iter().map(String::as_str));
    }

    for achievement in &resume.achievements {
        parts.extend([achievement.title.as_str(), achievement.description.as_str()]);
    }

    for lang in &resume.languages {
        parts.push(lang.language.as_str());
    }

    for vol in &resume.volunteer {
        parts.extend([
            vol.organization.as_str(),
            vol.role.as_str(),
            vol.description.as_str(),
        ]);
    }

    parts
        .into_iter()
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// First `max_chars` characters of `text`, never splitting a code point.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
