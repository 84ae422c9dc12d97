//! Persisted record types.

use conneqt_matching::PlatformMatch;
use conneqt_people::{Organization, Profile};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Embedded snapshot of a recommended person's profile plus their
/// platform-membership flags at sync time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub organizations: Vec<Organization>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub occupation: String,
    #[serde(default)]
    pub is_platform_user: bool,
    #[serde(default)]
    pub platform_user_id: Option<String>,
    #[serde(default)]
    pub platform_display_name: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub joined_at: Option<OffsetDateTime>,
}

impl ProfileSnapshot {
    fn of_profile(profile: &Profile) -> Self {
        Self {
            photo: profile.photo.clone(),
            organizations: profile.organizations.clone(),
            location: profile.location.clone(),
            skills: profile.skills.clone(),
            interests: profile.interests.clone(),
            bio: profile.bio.clone(),
            occupation: profile.occupation.clone(),
            ..Self::default()
        }
    }
}

/// One persisted recommendation for a user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationRecord {
    /// Owning platform user.
    pub user_id: String,
    /// External id of the recommended person.
    pub connection_id: String,
    pub connection_name: String,
    pub connection_email: String,
    /// Similarity in [0, 1]; confirmed platform matches are stored at 1.0.
    pub similarity_score: f64,
    /// Up to three human-readable reasons.
    pub recommendation_reasons: Vec<String>,
    /// Snapshot of the recommended person at sync time.
    pub profile: ProfileSnapshot,
    /// Timestamp of the sync that produced this record.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

impl RecommendationRecord {
    /// Build the record persisted for a confirmed platform match.
    ///
    /// Confirmed matches are maximally scored.
    pub fn from_match(user_id: &str, m: &PlatformMatch, created_at: OffsetDateTime) -> Self {
        let mut profile = ProfileSnapshot::of_profile(&m.profile);
        profile.is_platform_user = true;
        profile.platform_user_id = Some(m.platform_user_id.clone());
        profile.platform_display_name = Some(m.platform_display_name.clone());
        profile.joined_at = Some(m.joined_at);

        Self {
            user_id: user_id.to_string(),
            connection_id: m.profile.id.clone(),
            connection_name: m.profile.name.clone(),
            connection_email: m.profile.email.clone(),
            similarity_score: 1.0,
            recommendation_reasons: m.reasons.clone(),
            profile,
            created_at,
        }
    }
}

/// One enhanced profile per platform user; upserted on every sync, never
/// deleted by the recommendation flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancedProfile {
    pub user_id: String,
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub organizations: Vec<Organization>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub occupation: String,
    #[serde(with = "time::serde::rfc3339")]
    pub last_updated: OffsetDateTime,
}

impl EnhancedProfile {
    pub fn from_profile(user_id: &str, profile: &Profile, last_updated: OffsetDateTime) -> Self {
        Self {
            user_id: user_id.to_string(),
            photo: profile.photo.clone(),
            organizations: profile.organizations.clone(),
            location: profile.location.clone(),
            skills: profile.skills.clone(),
            interests: profile.interests.clone(),
            bio: profile.bio.clone(),
            occupation: profile.occupation.clone(),
            last_updated,
        }
    }
}

/// Aggregate connection statistics for one user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectionStats {
    pub total_recommendations: usize,
    /// Recommendations flagged as platform users.
    pub platform_user_count: usize,
    /// Recommendations that came from the external contact graph.
    pub external_contact_count: usize,
    /// Confirmed bidirectional relations ("Friend on platform").
    pub mutual_count: usize,
    pub has_enhanced_profile: bool,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub last_synced: Option<OffsetDateTime>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use conneqt_matching::{REASON_FRIEND, REASON_IN_CONTACTS};
    use time::macros::datetime;

    fn sample_match() -> PlatformMatch {
        PlatformMatch {
            profile: Profile {
                id: "people/c9".to_string(),
                name: "Asha Iyer".to_string(),
                email: "asha@example.com".to_string(),
                skills: vec!["Go".to_string()],
                ..Profile::default()
            },
            platform_user_id: "u9".to_string(),
            platform_display_name: "Asha".to_string(),
            joined_at: datetime!(2024-11-02 08:30 UTC),
            reasons: vec![REASON_FRIEND.to_string(), REASON_IN_CONTACTS.to_string()],
        }
    }

    #[test]
    fn test_record_from_match_is_maximally_scored() {
        let record =
            RecommendationRecord::from_match("u1", &sample_match(), datetime!(2026-01-01 0:00 UTC));
        assert_eq!(record.similarity_score, 1.0);
        assert_eq!(record.user_id, "u1");
        assert_eq!(record.connection_id, "people/c9");
        assert_eq!(record.connection_email, "asha@example.com");
    }

    #[test]
    fn test_record_from_match_sets_platform_flags() {
        let record =
            RecommendationRecord::from_match("u1", &sample_match(), datetime!(2026-01-01 0:00 UTC));
        assert!(record.profile.is_platform_user);
        assert_eq!(record.profile.platform_user_id.as_deref(), Some("u9"));
        assert_eq!(record.profile.platform_display_name.as_deref(), Some("Asha"));
        assert_eq!(
            record.profile.joined_at,
            Some(datetime!(2024-11-02 08:30 UTC))
        );
    }

    #[test]
    fn test_record_round_trips_through_json() {
        let record =
            RecommendationRecord::from_match("u1", &sample_match(), datetime!(2026-01-01 0:00 UTC));
        let json = serde_json::to_string(&record).unwrap();
        let back: RecommendationRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_enhanced_profile_mirrors_profile_fields() {
        let profile = Profile {
            location: "Chennai".to_string(),
            skills: vec!["Go".to_string()],
            bio: "hello".to_string(),
            ..Profile::default()
        };
        let enhanced =
            EnhancedProfile::from_profile("u1", &profile, datetime!(2026-02-03 04:05 UTC));
        assert_eq!(enhanced.user_id, "u1");
        assert_eq!(enhanced.location, "Chennai");
        assert_eq!(enhanced.skills, vec!["Go"]);
        assert_eq!(enhanced.last_updated, datetime!(2026-02-03 04:05 UTC));
    }
}
