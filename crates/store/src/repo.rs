//! Typed repository traits and query values.
//!
//! Queries are expressed as values, not strings: a backend receives a
//! [`RecommendationQuery`] and applies its filter, sort, and limit itself
//! (or reuses [`RecommendationQuery::apply`]).

use crate::records::{EnhancedProfile, RecommendationRecord};
use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A stored recommendation row: the record plus its document id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredRecommendation {
    /// Backend document id.
    pub id: String,
    pub record: RecommendationRecord,
}

/// Sortable columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    SimilarityScore,
    CreatedAt,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

/// Typed query over a user's recommendation rows.
#[derive(Debug, Clone)]
pub struct RecommendationQuery {
    pub user_id: String,
    pub order: Option<(SortKey, SortDir)>,
    pub limit: Option<usize>,
}

impl RecommendationQuery {
    /// All rows for a user, unsorted and unlimited.
    pub fn for_user(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            order: None,
            limit: None,
        }
    }

    pub fn order_by(mut self, key: SortKey, dir: SortDir) -> Self {
        self.order = Some((key, dir));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Apply this query's filter, sort, and limit to a full row set.
    ///
    /// Shared by the backends so filter semantics cannot drift apart.
    pub fn apply(&self, rows: impl IntoIterator<Item = StoredRecommendation>) -> Vec<StoredRecommendation> {
        let mut rows: Vec<StoredRecommendation> = rows
            .into_iter()
            .filter(|row| row.record.user_id == self.user_id)
            .collect();

        if let Some((key, dir)) = self.order {
            rows.sort_by(|a, b| {
                let ordering = match key {
                    SortKey::SimilarityScore => a
                        .record
                        .similarity_score
                        .partial_cmp(&b.record.similarity_score)
                        .unwrap_or(std::cmp::Ordering::Equal),
                    SortKey::CreatedAt => a.record.created_at.cmp(&b.record.created_at),
                };
                match dir {
                    SortDir::Asc => ordering,
                    SortDir::Desc => ordering.reverse(),
                }
            });
        }

        if let Some(limit) = self.limit {
            rows.truncate(limit);
        }
        rows
    }
}

/// Storage for recommendation rows.
#[async_trait]
pub trait RecommendationRepo: Send + Sync {
    /// Insert a record; returns the new document id.
    async fn insert(&self, record: RecommendationRecord) -> Result<String>;

    /// Delete one row by document id. Deleting an absent id is a no-op.
    async fn delete(&self, id: &str) -> Result<()>;

    /// Run a typed query.
    async fn query(&self, query: &RecommendationQuery) -> Result<Vec<StoredRecommendation>>;
}

/// Storage for enhanced profiles, keyed by user id.
#[async_trait]
pub trait ProfileRepo: Send + Sync {
    /// Absence is a value, not an error.
    async fn find(&self, user_id: &str) -> Result<Option<EnhancedProfile>>;

    /// Create-if-absent, else full overwrite.
    async fn upsert(&self, profile: EnhancedProfile) -> Result<()>;
}
