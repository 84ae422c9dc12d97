//! The contact-graph collaborator seam.

use crate::raw::RawPerson;
use anyhow::Result;
use async_trait::async_trait;

/// Source of raw contact-graph records.
///
/// Implementations do not retry internally; retry policy belongs to the
/// caller. Both methods may fail with a transport error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactGraphSource: Send + Sync {
    /// Fetch the authenticated user's own raw profile.
    async fn self_profile(&self) -> Result<RawPerson>;

    /// Fetch the authenticated user's contact list.
    async fn contacts(&self, page_size: u32) -> Result<Vec<RawPerson>>;
}
