//! Canonical profile types.
//!
//! A [`Profile`] is the normalized representation of a person's contact and
//! professional data. Every field defaults to an empty string, empty
//! sequence, or `false`; `Option` appears only on the calendar values. This
//! is deliberate: downstream scoring code never null-checks a field, it only
//! asks whether the field is empty.

use serde::{Deserialize, Serialize};

/// Canonical, normalized representation of a person.
///
/// Constructed exclusively by [`crate::normalize`]; raw wire records never
/// travel past the normalization boundary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    /// Opaque external identifier (People API resource name). May be empty.
    #[serde(default)]
    pub id: String,
    /// Display name, empty if unknown.
    #[serde(default)]
    pub name: String,
    /// Primary email address, empty if unknown. Platform-matching key.
    #[serde(default)]
    pub email: String,
    /// Photo URL, empty if unknown.
    #[serde(default)]
    pub photo: String,
    /// Work history, source order preserved.
    #[serde(default)]
    pub organizations: Vec<Organization>,
    /// Free-text location, empty if unknown.
    #[serde(default)]
    pub location: String,
    /// Free-text skills, case preserved, blanks dropped, not deduplicated.
    #[serde(default)]
    pub skills: Vec<String>,
    /// Free-text biography, empty if unknown.
    #[serde(default)]
    pub bio: String,
    /// Free-text interests, source order preserved.
    #[serde(default)]
    pub interests: Vec<String>,
    /// Free-text occupation, empty if unknown.
    #[serde(default)]
    pub occupation: String,
}

impl Profile {
    /// True when no field carries any data.
    pub fn is_empty(&self) -> bool {
        self.id.is_empty()
            && self.name.is_empty()
            && self.email.is_empty()
            && self.photo.is_empty()
            && self.organizations.is_empty()
            && self.location.is_empty()
            && self.skills.is_empty()
            && self.bio.is_empty()
            && self.interests.is_empty()
            && self.occupation.is_empty()
    }
}

/// A single organization / work-experience entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Organization name, empty if unknown.
    #[serde(default)]
    pub name: String,
    /// Role title, empty if unknown.
    #[serde(default)]
    pub title: String,
    /// Department, empty if unknown.
    #[serde(default)]
    pub department: String,
    /// Start of tenure, if the source provided one.
    #[serde(default)]
    pub start_date: Option<CalendarDate>,
    /// End of tenure, if the source provided one.
    #[serde(default)]
    pub end_date: Option<CalendarDate>,
    /// Whether the source marked this as the current position.
    #[serde(default)]
    pub current: bool,
}

/// A partial calendar date as the People API reports it.
///
/// Any component may be absent (e.g. a year with no month).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarDate {
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub month: Option<u8>,
    #[serde(default)]
    pub day: Option<u8>,
}
