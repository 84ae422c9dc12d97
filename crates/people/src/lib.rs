//! Contact-graph data for conneqt.
//!
//! This crate owns the boundary between the external contact graph (the
//! Google People API) and the rest of the system. Raw wire records come in
//! as [`RawPerson`]; everything past this crate sees only the canonical
//! [`Profile`], produced by [`normalize`]. Raw records never cross that
//! boundary.

pub mod google;
pub mod normalize;
pub mod profile;
pub mod raw;
pub mod source;

pub use google::PeopleApiSource;
pub use normalize::normalize;
pub use profile::{CalendarDate, Organization, Profile};
pub use raw::RawPerson;
pub use source::ContactGraphSource;
