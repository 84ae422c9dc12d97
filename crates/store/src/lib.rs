//! Recommendation persistence for conneqt.
//!
//! Persisted record types, the typed repository traits, two backends
//! (in-memory and JSON-file), and [`RecommendationStore`], which owns the
//! recommendation lifecycle: replace-all, ranked retrieval, and stats.

pub mod json;
pub mod memory;
pub mod records;
pub mod repo;
mod store;

pub use json::JsonStore;
pub use memory::MemoryStore;
pub use records::{ConnectionStats, EnhancedProfile, ProfileSnapshot, RecommendationRecord};
pub use repo::{
    ProfileRepo, RecommendationQuery, RecommendationRepo, SortDir, SortKey, StoredRecommendation,
};
pub use store::RecommendationStore;

/// Failure reading or writing a store file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to access store file {path}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("store file {path} is corrupt")]
    Corrupt {
        path: std::path::PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
