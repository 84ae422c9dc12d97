//! Sync result reporting.

use conneqt_store::RecommendationRecord;
use serde::Serialize;

/// What a sync accomplished, including best-effort partial outcomes.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SyncReport {
    /// Contacts fetched from the external graph.
    pub contacts_fetched: usize,
    /// Contacts confirmed as platform users.
    pub platform_matches: usize,
    /// Recommendation records written.
    pub recommendations_saved: usize,
    /// Whether the enhanced profile was persisted.
    pub profile_saved: bool,
    /// Top recommendations for immediate display.
    pub preview: Vec<RecommendationRecord>,
}

impl SyncReport {
    /// One-line human-readable summary.
    pub fn summary(&self) -> String {
        format!(
            "{} contacts fetched, {} on platform, {} recommendations saved",
            self.contacts_fetched, self.platform_matches, self.recommendations_saved
        )
    }

    /// True when every write the sync attempted succeeded.
    pub fn complete(&self) -> bool {
        self.profile_saved && self.recommendations_saved == self.platform_matches
    }
}
