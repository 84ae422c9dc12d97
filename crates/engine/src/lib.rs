//! The conneqt recommendation engine.
//!
//! [`Recommender`] wires the three collaborators together: a
//! [`ContactGraphSource`], a [`UserDirectory`], and a
//! [`RecommendationStore`]. It exposes the entry points a front-end
//! calls: `sync`, `recommendations`, `stats`, `find_mentors`, and
//! `enhanced_profile`. Collaborators are injected explicitly; there are no
//! module-level singletons.

mod error;
mod report;

pub use error::EngineError;
pub use report::SyncReport;

use conneqt_directory::UserDirectory;
use conneqt_matching::{is_mentor_candidate, match_platform_users, MentorCriteria};
use conneqt_people::{normalize, ContactGraphSource, Profile};
use conneqt_store::{ConnectionStats, EnhancedProfile, RecommendationRecord, RecommendationStore};
use std::sync::Arc;

/// How many recommendations a sync returns for immediate display.
const PREVIEW_LIMIT: usize = 10;

/// How many stored recommendations the mentor search scans before filtering.
const MENTOR_SCAN_WINDOW: usize = 50;

/// Mentor results are capped at this many candidates.
const MENTOR_RESULT_LIMIT: usize = 10;

/// The connection-recommendation pipeline.
pub struct Recommender {
    source: Arc<dyn ContactGraphSource>,
    directory: Arc<dyn UserDirectory>,
    store: RecommendationStore,
    page_size: u32,
}

impl std::fmt::Debug for Recommender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Recommender")
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

impl Recommender {
    pub fn new(
        source: Arc<dyn ContactGraphSource>,
        directory: Arc<dyn UserDirectory>,
        store: RecommendationStore,
    ) -> Self {
        Self {
            source,
            directory,
            store,
            page_size: conneqt_people::google::DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the contact-list page size (default 100).
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sync the user's external contact graph into stored recommendations.
    ///
    /// Profile and contact fetches run concurrently; a transport failure in
    /// either aborts the sync before any write. After that point the sync is
    /// best-effort: a failed profile save or recommendation replace is
    /// logged and reflected in the report, not raised. A failed directory
    /// listing degrades to an empty match list.
    pub async fn sync(&self, user_id: &str) -> Result<SyncReport, EngineError> {
        validate_user_id(user_id)?;
        tracing::info!(user = user_id, "starting contact-graph sync");

        let (raw_profile, raw_contacts) = tokio::try_join!(
            self.source.self_profile(),
            self.source.contacts(self.page_size)
        )
        .map_err(EngineError::ContactGraph)?;

        let profile = normalize(&raw_profile);
        let contacts: Vec<Profile> = raw_contacts.iter().map(normalize).collect();
        tracing::debug!(user = user_id, contacts = contacts.len(), "normalized contact graph");

        let profile_saved = match self.store.save_profile(user_id, &profile).await {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(user = user_id, error = %err, "failed to save enhanced profile");
                false
            }
        };

        let users = match self.directory.list_all_users().await {
            Ok(users) => users,
            Err(err) => {
                tracing::warn!(user = user_id, error = %err, "directory unavailable, matching against empty set");
                Vec::new()
            }
        };

        let matches = match_platform_users(&contacts, &users);
        let recommendations_saved = match self.store.replace_all(user_id, &matches).await {
            Ok(saved) => saved,
            Err(err) => {
                tracing::warn!(user = user_id, error = %err, "failed to replace recommendations");
                0
            }
        };

        let preview = self
            .store
            .ranked(user_id, PREVIEW_LIMIT)
            .await
            .unwrap_or_default();

        Ok(SyncReport {
            contacts_fetched: contacts.len(),
            platform_matches: matches.len(),
            recommendations_saved,
            profile_saved,
            preview,
        })
    }

    /// Up to `limit` stored recommendations, highest similarity first.
    pub async fn recommendations(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<RecommendationRecord>, EngineError> {
        validate_user_id(user_id)?;
        self.store
            .ranked(user_id, limit)
            .await
            .map_err(EngineError::Storage)
    }

    /// Aggregate connection statistics.
    pub async fn stats(&self, user_id: &str) -> Result<ConnectionStats, EngineError> {
        validate_user_id(user_id)?;
        self.store.stats(user_id).await.map_err(EngineError::Storage)
    }

    /// Mentor-like candidates among the user's stored recommendations.
    ///
    /// Scans the top stored recommendations, keeps those matching the
    /// mentor predicate and all supplied criteria, and caps the result,
    /// preserving stored rank order.
    pub async fn find_mentors(
        &self,
        user_id: &str,
        criteria: &MentorCriteria,
    ) -> Result<Vec<RecommendationRecord>, EngineError> {
        validate_user_id(user_id)?;
        let records = self
            .store
            .ranked(user_id, MENTOR_SCAN_WINDOW)
            .await
            .map_err(EngineError::Storage)?;

        let mut mentors: Vec<RecommendationRecord> = records
            .into_iter()
            .filter(|record| {
                is_mentor_candidate(&record.recommendation_reasons, &record.profile.organizations)
                    && criteria.matches(
                        &record.profile.skills,
                        &record.profile.location,
                        &record.profile.organizations,
                    )
            })
            .collect();
        mentors.truncate(MENTOR_RESULT_LIMIT);
        Ok(mentors)
    }

    /// The user's enhanced profile, if any sync has produced one.
    pub async fn enhanced_profile(
        &self,
        user_id: &str,
    ) -> Result<Option<EnhancedProfile>, EngineError> {
        validate_user_id(user_id)?;
        self.store.profile(user_id).await.map_err(EngineError::Storage)
    }
}

fn validate_user_id(user_id: &str) -> Result<(), EngineError> {
    if user_id.trim().is_empty() {
        return Err(EngineError::InvalidUserId);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_user_id_rejected() {
        assert!(matches!(
            validate_user_id(""),
            Err(EngineError::InvalidUserId)
        ));
        assert!(matches!(
            validate_user_id("   "),
            Err(EngineError::InvalidUserId)
        ));
        assert!(validate_user_id("u1").is_ok());
    }
}
