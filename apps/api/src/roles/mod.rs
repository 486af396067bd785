//! Role knowledge base lookups for UI hints.
//!
//! `match_role_from_title` uses its own coarse rule list. It overlaps with the
//! classifier in `analysis::role_classifier` but is not the same ordering or
//! role set; the two are kept separate on purpose so each caller keeps its
//! current behaviour.

pub mod handlers;
pub mod profiles;

use once_cell::sync::Lazy;
use regex::Regex;

pub use profiles::{RoleProfile, FALLBACK_ROLE, ROLE_PROFILES};

/// Title matchers, evaluated in order; the first hit wins.
static TITLE_MATCHERS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"frontend|front-end|react|vue|angular|ui engineer", "Frontend Developer"),
        (r"backend|back-end|server|api developer", "Backend Developer"),
        (r"full.?stack", "Full Stack Developer"),
        (r"devops|sre|platform|infrastructure|cloud engineer", "DevOps Engineer"),
        (r"data scientist|machine learning|ml engineer|ai engineer", "Data Scientist"),
        (r"data analyst|business analyst|bi analyst", "Data Analyst"),
        (r"software|developer|engineer|programmer|sde|swe", "Software Engineer"),
        (r"product manager|product owner", "Product Manager"),
        (r"project manager|program manager", "Project Manager"),
        (r"designer|ux|ui designer|graphic", "Designer"),
        (r"marketing|growth|seo|content manager", "Marketing"),
        (r"sales|account executive|business development", "Sales"),
        (r"hr|human resources|recruiter|talent", "Human Resources"),
        (r"finance|accountant|financial analyst", "Finance"),
        (r"consultant", "Consultant"),
        (r"manager|director|vp|head|chief|cto|ceo|coo", "Management"),
    ]
    .into_iter()
    .map(|(pattern, role)| {
        let re = Regex::new(&format!("(?i){pattern}")).expect("title matcher pattern");
        (re, role)
    })
    .collect()
});

fn lookup(role: &str) -> Option<&'static (&'static str, RoleProfile)> {
    ROLE_PROFILES.iter().find(|(name, _)| *name == role)
}

/// Profile for `role`, or the `Professional` profile for any unknown role.
pub fn get_role_keywords(role: &str) -> &'static RoleProfile {
    lookup(role)
        .or_else(|| lookup(FALLBACK_ROLE))
        .map(|(_, profile)| profile)
        .unwrap_or(&ROLE_PROFILES[ROLE_PROFILES.len() - 1].1)
}

/// The canonical name `get_role_keywords` resolves `role` to.
pub fn canonical_role_name(role: &str) -> &'static str {
    lookup(role).map(|(name, _)| *name).unwrap_or(FALLBACK_ROLE)
}

/// Canonical role names in table order, without the fallback.
pub fn supported_roles() -> Vec<&'static str> {
    ROLE_PROFILES
        .iter()
        .map(|(name, _)| *name)
        .filter(|name| *name != FALLBACK_ROLE)
        .collect()
}

/// Maps a bare job title to a canonical role name.
pub fn match_role_from_title(title: &str) -> &'static str {
    if title.trim().is_empty() {
        return FALLBACK_ROLE;
    }
    let title = title.to_lowercase();
    TITLE_MATCHERS
        .iter()
        .find(|(re, _)| re.is_match(&title))
        .map(|(_, role)| *role)
        .unwrap_or(FALLBACK_ROLE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_role_profile() {
        let profile = get_role_keywords("Backend Developer");
        assert!(profile.keywords.contains(&"Kafka"));
        assert!(profile.action_verbs.contains(&"Secured"));
    }

    #[test]
    fn test_unknown_role_falls_back_to_professional() {
        let fallback = get_role_keywords("Astronaut");
        let professional = get_role_keywords(FALLBACK_ROLE);
        assert_eq!(fallback.keywords, professional.keywords);
        assert!(fallback.keywords.contains(&"teamwork"));
    }

    #[test]
    fn test_role_lookup_is_case_sensitive() {
        // Canonical names only; "backend developer" is not a key.
        let profile = get_role_keywords("backend developer");
        assert!(profile.keywords.contains(&"teamwork"));
    }

    #[test]
    fn test_canonical_role_name() {
        assert_eq!(canonical_role_name("Data Analyst"), "Data Analyst");
        assert_eq!(canonical_role_name("data analyst"), FALLBACK_ROLE);
    }

    #[test]
    fn test_every_profile_is_populated() {
        for (name, profile) in ROLE_PROFILES {
            assert!(!profile.keywords.is_empty(), "{name} has no keywords");
            assert!(!profile.action_verbs.is_empty(), "{name} has no verbs");
            assert!(!profile.metrics_templates.is_empty(), "{name} has no templates");
            assert!(!profile.summary_hints.is_empty(), "{name} has no hints");
        }
    }

    #[test]
    fn test_supported_roles_excludes_fallback() {
        let roles = supported_roles();
        assert_eq!(roles.len(), ROLE_PROFILES.len() - 1);
        assert!(!roles.contains(&FALLBACK_ROLE));
        assert_eq!(roles[0], "Developer Advocate");
    }

    #[test]
    fn test_match_role_from_title_specific() {
        assert_eq!(match_role_from_title("Senior React Engineer"), "Frontend Developer");
        assert_eq!(match_role_from_title("Full-Stack Developer"), "Full Stack Developer");
        assert_eq!(match_role_from_title("Site Reliability SRE"), "DevOps Engineer");
        assert_eq!(match_role_from_title("Product Owner"), "Product Manager");
    }

    #[test]
    fn test_match_role_from_title_order_matters() {
        // "backend" precedes the generic "engineer" matcher.
        assert_eq!(match_role_from_title("Backend Engineer"), "Backend Developer");
        // "developer" in a title hits Software Engineer before Designer.
        assert_eq!(match_role_from_title("Game Developer"), "Software Engineer");
    }

    #[test]
    fn test_match_role_from_title_coarser_than_classifier() {
        // The title matcher has no Developer Advocate rule.
        assert_eq!(match_role_from_title("Developer Advocate"), "Software Engineer");
    }

    #[test]
    fn test_match_role_from_title_fallback() {
        assert_eq!(match_role_from_title(""), FALLBACK_ROLE);
        assert_eq!(match_role_from_title("Barista"), FALLBACK_ROLE);
    }
}
