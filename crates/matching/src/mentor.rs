//! Mentor-candidate heuristics.
//!
//! A recommendation qualifies as a mentor candidate when it is tagged
//! "Potential mentor" or any organization title contains a leadership
//! keyword. The keyword list is a blunt heuristic with known false
//! positives ("Team Lead Generation") and no internationalization; it is
//! kept as-is.

use conneqt_people::Organization;
use serde::{Deserialize, Serialize};

/// Lowercased substrings that mark a title as a leadership role.
pub const LEADERSHIP_KEYWORDS: [&str; 5] = ["manager", "director", "lead", "senior", "principal"];

/// Reason string that explicitly tags a mentor candidate.
pub const REASON_POTENTIAL_MENTOR: &str = "Potential mentor";

/// True when any organization title contains a leadership keyword.
pub fn has_leadership_title(organizations: &[Organization]) -> bool {
    organizations.iter().any(|org| {
        let title = org.title.to_lowercase();
        !title.is_empty() && LEADERSHIP_KEYWORDS.iter().any(|kw| title.contains(kw))
    })
}

/// The base mentor predicate: explicit tag or leadership title.
pub fn is_mentor_candidate(reasons: &[String], organizations: &[Organization]) -> bool {
    reasons.iter().any(|r| r == REASON_POTENTIAL_MENTOR) || has_leadership_title(organizations)
}

/// Optional caller-supplied mentor filters; all provided sub-filters must
/// match.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MentorCriteria {
    /// At least one of these must appear (case-insensitive substring) in the
    /// candidate's skill list.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Candidate location must contain this substring.
    #[serde(default)]
    pub location: Option<String>,
    /// Any candidate organization name must contain this substring.
    #[serde(default)]
    pub industry: Option<String>,
}

impl MentorCriteria {
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty() && self.location.is_none() && self.industry.is_none()
    }

    /// Apply all provided sub-filters to a candidate's data.
    pub fn matches(
        &self,
        skills: &[String],
        location: &str,
        organizations: &[Organization],
    ) -> bool {
        if !self.skills.is_empty() {
            let hit = self.skills.iter().any(|wanted| {
                let wanted = wanted.to_lowercase();
                skills
                    .iter()
                    .any(|skill| skill.to_lowercase().contains(&wanted))
            });
            if !hit {
                return false;
            }
        }

        if let Some(wanted) = &self.location {
            if !location.to_lowercase().contains(&wanted.to_lowercase()) {
                return false;
            }
        }

        if let Some(wanted) = &self.industry {
            let wanted = wanted.to_lowercase();
            let hit = organizations
                .iter()
                .any(|org| org.name.to_lowercase().contains(&wanted));
            if !hit {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn org(name: &str, title: &str) -> Organization {
        Organization {
            name: name.to_string(),
            title: title.to_string(),
            ..Organization::default()
        }
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_senior_title_is_leadership() {
        assert!(has_leadership_title(&[org("Acme", "Senior Backend Engineer")]));
    }

    #[test]
    fn test_intern_title_is_not_leadership() {
        assert!(!has_leadership_title(&[org("Acme", "Intern")]));
    }

    #[test]
    fn test_every_keyword_recognized() {
        for title in [
            "Engineering Manager",
            "Director of Product",
            "Tech Lead",
            "Senior Analyst",
            "Principal Scientist",
        ] {
            assert!(has_leadership_title(&[org("Acme", title)]), "{title}");
        }
    }

    #[test]
    fn test_keyword_match_known_false_positive() {
        // "Lead" inside "Lead Generation" matches; accepted behavior.
        assert!(has_leadership_title(&[org("Acme", "Team Lead Generation")]));
    }

    #[test]
    fn test_empty_title_never_matches() {
        assert!(!has_leadership_title(&[org("Acme", "")]));
    }

    #[test]
    fn test_explicit_reason_tag_qualifies() {
        let reasons = strings(&["Potential mentor"]);
        assert!(is_mentor_candidate(&reasons, &[]));
    }

    #[test]
    fn test_neither_tag_nor_title_disqualifies() {
        let reasons = strings(&["Friend on platform"]);
        assert!(!is_mentor_candidate(&reasons, &[org("Acme", "Intern")]));
    }

    #[test]
    fn test_empty_criteria_matches_everything() {
        let criteria = MentorCriteria::default();
        assert!(criteria.is_empty());
        assert!(criteria.matches(&[], "", &[]));
    }

    #[test]
    fn test_skill_criterion_substring_case_insensitive() {
        let criteria = MentorCriteria {
            skills: strings(&["sql"]),
            ..MentorCriteria::default()
        };
        assert!(criteria.matches(&strings(&["PostgreSQL"]), "", &[]));
        assert!(!criteria.matches(&strings(&["Go"]), "", &[]));
    }

    #[test]
    fn test_location_criterion() {
        let criteria = MentorCriteria {
            location: Some("chennai".to_string()),
            ..MentorCriteria::default()
        };
        assert!(criteria.matches(&[], "Chennai, Tamil Nadu", &[]));
        assert!(!criteria.matches(&[], "Mumbai", &[]));
    }

    #[test]
    fn test_industry_criterion_on_org_names() {
        let criteria = MentorCriteria {
            industry: Some("fin".to_string()),
            ..MentorCriteria::default()
        };
        assert!(criteria.matches(&[], "", &[org("FinTech Labs", "CTO")]));
        assert!(!criteria.matches(&[], "", &[org("Acme", "CTO")]));
    }

    #[test]
    fn test_all_criteria_anded() {
        let criteria = MentorCriteria {
            skills: strings(&["go"]),
            location: Some("chennai".to_string()),
            industry: Some("acme".to_string()),
        };
        let orgs = [org("Acme", "Manager")];

        assert!(criteria.matches(&strings(&["Go"]), "Chennai", &orgs));
        // Any single failing sub-filter rejects the candidate.
        assert!(!criteria.matches(&strings(&["Rust"]), "Chennai", &orgs));
        assert!(!criteria.matches(&strings(&["Go"]), "Mumbai", &orgs));
        assert!(!criteria.matches(&strings(&["Go"]), "Chennai", &[org("Globex", "Manager")]));
    }
}
