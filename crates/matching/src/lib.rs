//! Matching logic for conneqt.
//!
//! Three concerns live here: scoring how similar two canonical profiles are
//! ([`similarity`]), intersecting external contacts against the platform
//! user directory ([`platform`]), and the mentor-candidate heuristics
//! ([`mentor`]).

pub mod mentor;
pub mod platform;
pub mod similarity;

pub use mentor::{
    has_leadership_title, is_mentor_candidate, MentorCriteria, REASON_POTENTIAL_MENTOR,
};
pub use platform::{match_platform_users, PlatformMatch, REASON_FRIEND, REASON_IN_CONTACTS};
pub use similarity::{rank_candidates, score_pair, ScoredCandidate, SimilarityReport};
