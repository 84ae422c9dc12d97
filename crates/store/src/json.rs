//! JSON-file storage backend.
//!
//! Two files under a data directory: `recommendations.json` (array of
//! stored rows) and `profiles.json` (array of enhanced profiles). Every
//! mutation rewrites the whole file through a temp file plus rename, so a
//! crash mid-write never leaves a truncated store behind. A single async
//! mutex serializes read-modify-write cycles within this process.

use crate::records::{EnhancedProfile, RecommendationRecord};
use crate::repo::{ProfileRepo, RecommendationQuery, RecommendationRepo, StoredRecommendation};
use crate::StoreError;
use anyhow::Result;
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

const RECOMMENDATIONS_FILE: &str = "recommendations.json";
const PROFILES_FILE: &str = "profiles.json";

/// File-backed store rooted at a data directory.
pub struct JsonStore {
    dir: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn recommendations_path(&self) -> PathBuf {
        self.dir.join(RECOMMENDATIONS_FILE)
    }

    fn profiles_path(&self) -> PathBuf {
        self.dir.join(PROFILES_FILE)
    }

    fn load<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = std::fs::read_to_string(path).map_err(|source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&data).map_err(|source| StoreError::Corrupt {
            path: path.to_path_buf(),
            source,
        })
    }

    fn save<T: Serialize>(&self, path: &Path, rows: &[T]) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        };
        std::fs::create_dir_all(&self.dir).map_err(io_err)?;
        let body = serde_json::to_string_pretty(rows).map_err(|source| StoreError::Corrupt {
            path: path.to_path_buf(),
            source,
        })?;

        let tmp = tempfile::NamedTempFile::new_in(&self.dir).map_err(io_err)?;
        std::fs::write(tmp.path(), body).map_err(io_err)?;
        tmp.persist(path).map_err(|e| StoreError::Io {
            path: path.to_path_buf(),
            source: e.error,
        })?;
        Ok(())
    }
}

#[async_trait]
impl RecommendationRepo for JsonStore {
    async fn insert(&self, record: RecommendationRecord) -> Result<String> {
        let _guard = self.write_lock.lock().await;
        let path = self.recommendations_path();
        let mut rows: Vec<StoredRecommendation> = Self::load(&path)?;
        let id = uuid::Uuid::new_v4().to_string();
        rows.push(StoredRecommendation {
            id: id.clone(),
            record,
        });
        self.save(&path, &rows)?;
        Ok(id)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let path = self.recommendations_path();
        let mut rows: Vec<StoredRecommendation> = Self::load(&path)?;
        let before = rows.len();
        rows.retain(|row| row.id != id);
        if rows.len() != before {
            self.save(&path, &rows)?;
        }
        Ok(())
    }

    async fn query(&self, query: &RecommendationQuery) -> Result<Vec<StoredRecommendation>> {
        let rows: Vec<StoredRecommendation> = Self::load(&self.recommendations_path())?;
        Ok(query.apply(rows))
    }
}

#[async_trait]
impl ProfileRepo for JsonStore {
    async fn find(&self, user_id: &str) -> Result<Option<EnhancedProfile>> {
        let rows: Vec<EnhancedProfile> = Self::load(&self.profiles_path())?;
        Ok(rows.into_iter().find(|p| p.user_id == user_id))
    }

    async fn upsert(&self, profile: EnhancedProfile) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let path = self.profiles_path();
        let mut rows: Vec<EnhancedProfile> = Self::load(&path)?;
        rows.retain(|p| p.user_id != profile.user_id);
        rows.push(profile);
        self.save(&path, &rows)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::ProfileSnapshot;
    use crate::repo::{SortDir, SortKey};
    use conneqt_test_utils::DataDirFixture;
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
    async fn test_missing_files_read_as_empty() {
        let fixture = DataDirFixture::new().unwrap();
        let store = JsonStore::new(&fixture.data_dir);

        let rows = store
            .query(&RecommendationQuery::for_user("u1"))
            .await
            .unwrap();
        assert!(rows.is_empty());
        assert!(store.find("u1").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_rows_survive_reopen() {
        let fixture = DataDirFixture::new().unwrap();
        {
            let store = JsonStore::new(&fixture.data_dir);
            store.insert(record("u1", "c1", 0.7)).await.unwrap();
            store.insert(record("u1", "c2", 0.9)).await.unwrap();
        }

        let reopened = JsonStore::new(&fixture.data_dir);
        let rows = reopened
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
    async fn test_delete_removes_row_on_disk() {
        let fixture = DataDirFixture::new().unwrap();
        let store = JsonStore::new(&fixture.data_dir);
        let id = store.insert(record("u1", "c1", 0.7)).await.unwrap();
        store.delete(&id).await.unwrap();

        let reopened = JsonStore::new(&fixture.data_dir);
        let rows = reopened
            .query(&RecommendationQuery::for_user("u1"))
            .await
            .unwrap();
        assert!(rows.is_empty());
    }

    #[tokio::test]
    async fn test_delete_absent_id_is_noop() {
        let fixture = DataDirFixture::new().unwrap();
        let store = JsonStore::new(&fixture.data_dir);
        store.delete("no-such-id").await.unwrap();
    }

    #[tokio::test]
    async fn test_profile_upsert_and_reload() {
        let fixture = DataDirFixture::new().unwrap();
        let store = JsonStore::new(&fixture.data_dir);

        let profile = conneqt_people::Profile {
            occupation: "Engineer".to_string(),
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

        let reopened = JsonStore::new(&fixture.data_dir);
        let found = reopened.find("u1").await.unwrap().unwrap();
        assert_eq!(found.occupation, "Engineer");
    }

    #[tokio::test]
    async fn test_corrupt_file_surfaces_store_error() {
        let fixture = DataDirFixture::new().unwrap();
        std::fs::write(fixture.file("recommendations.json"), "not json").unwrap();

        let store = JsonStore::new(&fixture.data_dir);
        let err = store
            .query(&RecommendationQuery::for_user("u1"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("corrupt"));
    }

    #[tokio::test]
    async fn test_store_creates_data_dir_on_first_write() {
        let fixture = DataDirFixture::new().unwrap();
        let nested = fixture.data_dir.join("fresh");
        let store = JsonStore::new(&nested);
        store.insert(record("u1", "c1", 1.0)).await.unwrap();
        conneqt_test_utils::assert_file_nonempty(&nested.join("recommendations.json"));
    }
}
