//! Engine error taxonomy.

/// Failures surfaced by the [`crate::Recommender`] entry points.
///
/// Internal helper failures (single-row deletes, directory listing) are
/// logged and degraded, not surfaced; only the failures a caller can act on
/// appear here.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The caller supplied an empty or blank user id; rejected before any I/O.
    #[error("user id must not be empty")]
    InvalidUserId,

    /// The external contact graph could not be fetched; sync aborted before
    /// any write.
    #[error("failed to fetch contact graph data")]
    ContactGraph(#[source] anyhow::Error),

    /// Persistence failed on a read entry point.
    #[error("recommendation storage unavailable")]
    Storage(#[source] anyhow::Error),
}
