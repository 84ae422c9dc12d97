//! In-memory storage backend, used by tests and as the default for
//! embedded callers.

use crate::records::{EnhancedProfile, RecommendationRecord};
use crate::repo::{ProfileRepo, RecommendationQuery, RecommendationRepo, StoredRecommendation};
use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

/// Stores everything in process memory. Cloned-out reads, short critical
/// sections.
#[derive(Debug, Default)]
pub struct MemoryStore {
    recommendations: Mutex<Vec<StoredRecommendation>>,
    profiles: Mutex<HashMap<String, EnhancedProfile>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn recommendations(&self) -> std::sync::MutexGuard<'_, Vec<StoredRecommendation>> {
        self.recommendations.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn profiles(&self) -> std::sync::MutexGuard<'_, HashMap<String, EnhancedProfile>> {
        self.profiles.lock().unwrap_or_else(|e| e.into_inner())
    }
}

#[async_trait]
impl RecommendationRepo for MemoryStore {
    async fn insert(&self, record: RecommendationRecord) -> Result<String> {
        let id = uuid::Uuid::new_v4().to_string();
        self.recommendations().push(StoredRecommendation {
            id: id.clone(),
            record,
        });
        Ok(id)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.recommendations().retain(|row| row.id != id);
        Ok(())
    }

    async fn query(&self, query: &RecommendationQuery) -> Result<Vec<StoredRecommendation>> {
        let rows = self.recommendations().clone();
        Ok(query.apply(rows))
    }
}

#[async_trait]
impl ProfileRepo for MemoryStore {
    async fn find(&self, user_id: &str) -> Result<Option<EnhancedProfile>> {
        Ok(self.profiles().get(user_id).cloned())
    }

    async fn upsert(&self, profile: EnhancedProfile) -> Result<()> {
        self.profiles().insert(profile.user_id.clone(), profile);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::ProfileSnapshot;
    use crate::repo::{SortDir, SortKey};
    use time::macros::datetime;

    fn record(user_id: &str, connection_id: &str, score: f64) -> RecommendationRecord {
        RecommendationRecord {
            user_id: user_id.to_string(),
            connection_id: connection_id.to_string(),
            connection_name: String::new(),
            connection_email: String::new(),
            similarity_score: score,
            recommendation_reasons: Vec::new(),
            profile: ProfileSnapshot::default(),
            created_at: datetime!(2026-01-01 0:00 UTC),
        }
    }

    #[tokio::test]
    async fn test_insert_and_query() {
        let store = MemoryStore::new();
        store.insert(record("u1", "c1", 0.4)).await.unwrap();
        store.insert(record("u1", "c2", 0.8)).await.unwrap();
        store.insert(record("u2", "c3", 0.9)).await.unwrap();

        let rows = store
            .query(
                &RecommendationQuery::for_user("u1")
                    .order_by(SortKey::SimilarityScore, SortDir::Desc),
            )
            .await
            .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].record.connection_id, "c2");
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = MemoryStore::new();
        let id = store.insert(record("u1", "c1", 0.4)).await.unwrap();

        store.delete(&id).await.unwrap();
        store.delete(&id).await.unwrap();

        let rows = store
            .query(&RecommendationQuery::for_user("u1"))
            .await
            .unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_profile_find_absent_is_none() {
        let store = MemoryStore::new();
        assert!(store.find("u1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_profile_upsert_overwrites() {
        let store = MemoryStore::new();
        let profile = conneqt_people::Profile {
            location: "Chennai".to_string(),
            ..conneqt_people::Profile::default()
        };
        store
            .upsert(EnhancedProfile::from_profile(
                "u1",
                &profile,
                datetime!(2026-01-01 0:00 UTC),
            ))
            .await
            .unwrap();

        let updated = conneqt_people::Profile {
            location: "Mumbai".to_string(),
            ..conneqt_people::Profile::default()
        };
        store
            .upsert(EnhancedProfile::from_profile(
                "u1",
                &updated,
                datetime!(2026-02-01 0:00 UTC),
            ))
            .await
            .unwrap();

        let found = store.find("u1").await.unwrap().unwrap();
        assert_eq!(found.location, "Mumbai");
        assert_eq!(found.last_updated, datetime!(2026-02-01 0:00 UTC));
    }
}
