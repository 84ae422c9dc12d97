//! The recommendation lifecycle component.

use crate::records::{ConnectionStats, EnhancedProfile, RecommendationRecord};
use crate::repo::{ProfileRepo, RecommendationQuery, RecommendationRepo, SortDir, SortKey};
use anyhow::{Context, Result};
use conneqt_matching::{PlatformMatch, REASON_FRIEND, REASON_IN_CONTACTS};
use conneqt_people::Profile;
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::task::JoinSet;

/// Owns persisted recommendations and enhanced profiles for users.
///
/// A sync replaces a user's entire recommendation set: delete-all, then
/// insert. Two concurrent `replace_all` calls for the same user are not
/// serialized; the rows race with last-write-wins. Deletions and insertions
/// are each issued concurrently per row, but the delete batch is awaited in
/// full before the first insert, so a retry cannot accumulate duplicates.
#[derive(Clone)]
pub struct RecommendationStore {
    recommendations: Arc<dyn RecommendationRepo>,
    profiles: Arc<dyn ProfileRepo>,
}

impl RecommendationStore {
    pub fn new(recommendations: Arc<dyn RecommendationRepo>, profiles: Arc<dyn ProfileRepo>) -> Self {
        Self {
            recommendations,
            profiles,
        }
    }

    /// Replace the user's stored recommendations with one record per match.
    ///
    /// Returns the number of records inserted. A failed per-row delete is
    /// logged and swallowed (stale rows are a lesser harm than a failed
    /// sync); insert failures propagate.
    pub async fn replace_all(&self, user_id: &str, matches: &[PlatformMatch]) -> Result<usize> {
        let existing = self
            .recommendations
            .query(&RecommendationQuery::for_user(user_id))
            .await
            .context("failed to list existing recommendations")?;

        let mut deletes = JoinSet::new();
        for row in existing {
            let repo = Arc::clone(&self.recommendations);
            deletes.spawn(async move { (row.id.clone(), repo.delete(&row.id).await) });
        }
        while let Some(joined) = deletes.join_next().await {
            match joined {
                Ok((id, Err(err))) => {
                    tracing::warn!(row = %id, error = %err, "failed to delete stale recommendation");
                }
                Ok((_, Ok(()))) => {}
                Err(err) => tracing::warn!(error = %err, "delete task panicked"),
            }
        }

        let now = OffsetDateTime::now_utc();
        let mut inserts = JoinSet::new();
        for m in matches {
            let record = RecommendationRecord::from_match(user_id, m, now);
            let repo = Arc::clone(&self.recommendations);
            inserts.spawn(async move { repo.insert(record).await });
        }

        let mut saved = 0usize;
        let mut first_err: Option<anyhow::Error> = None;
        while let Some(joined) = inserts.join_next().await {
            match joined {
                Ok(Ok(_)) => saved += 1,
                Ok(Err(err)) => {
                    if first_err.is_none() {
                        first_err = Some(err);
                    }
                }
                Err(err) => {
                    if first_err.is_none() {
                        first_err = Some(err.into());
                    }
                }
            }
        }
        if let Some(err) = first_err {
            return Err(err.context("failed to insert recommendations"));
        }

        tracing::info!(user = user_id, saved, "replaced recommendation set");
        Ok(saved)
    }

    /// Up to `limit` records ordered by similarity descending.
    pub async fn ranked(&self, user_id: &str, limit: usize) -> Result<Vec<RecommendationRecord>> {
        let rows = self
            .recommendations
            .query(
                &RecommendationQuery::for_user(user_id)
                    .order_by(SortKey::SimilarityScore, SortDir::Desc)
                    .limit(limit),
            )
            .await?;
        Ok(rows.into_iter().map(|row| row.record).collect())
    }

    /// Aggregate stats over the full stored set.
    pub async fn stats(&self, user_id: &str) -> Result<ConnectionStats> {
        let rows = self
            .recommendations
            .query(&RecommendationQuery::for_user(user_id))
            .await?;
        let profile = self.profiles.find(user_id).await?;

        let platform_user_count = rows
            .iter()
            .filter(|row| row.record.profile.is_platform_user)
            .count();
        let external_contact_count = rows
            .iter()
            .filter(|row| row.record.recommendation_reasons.iter().any(|r| r == REASON_IN_CONTACTS))
            .count();
        let mutual_count = rows
            .iter()
            .filter(|row| row.record.recommendation_reasons.iter().any(|r| r == REASON_FRIEND))
            .count();

        Ok(ConnectionStats {
            total_recommendations: rows.len(),
            platform_user_count,
            external_contact_count,
            mutual_count,
            has_enhanced_profile: profile.is_some(),
            last_synced: profile.map(|p| p.last_updated),
        })
    }

    /// Upsert the user's enhanced profile with a fresh timestamp.
    pub async fn save_profile(&self, user_id: &str, profile: &Profile) -> Result<()> {
        self.profiles
            .upsert(EnhancedProfile::from_profile(
                user_id,
                profile,
                OffsetDateTime::now_utc(),
            ))
            .await
    }

    /// The user's enhanced profile, if one has been synced.
    pub async fn profile(&self, user_id: &str) -> Result<Option<EnhancedProfile>> {
        self.profiles.find(user_id).await
    }
}
