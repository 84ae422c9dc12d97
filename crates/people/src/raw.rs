//! Raw wire types for People API person records.
//!
//! Every field is optional on the wire; serde defaults keep deserialization
//! total so a sparse or malformed record still produces a usable value.
//! These types exist only to feed [`crate::normalize`].

use serde::{Deserialize, Serialize};

/// A person record as the People API returns it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPerson {
    /// Resource name, e.g. `people/c123456789`.
    #[serde(default)]
    pub resource_name: String,
    #[serde(default)]
    pub names: Vec<RawName>,
    #[serde(default)]
    pub email_addresses: Vec<RawValueEntry>,
    #[serde(default)]
    pub photos: Vec<RawPhoto>,
    #[serde(default)]
    pub organizations: Vec<RawOrganization>,
    #[serde(default)]
    pub locations: Vec<RawValueEntry>,
    #[serde(default)]
    pub skills: Vec<RawValueEntry>,
    #[serde(default)]
    pub biographies: Vec<RawValueEntry>,
    #[serde(default)]
    pub interests: Vec<RawValueEntry>,
    #[serde(default)]
    pub occupations: Vec<RawValueEntry>,
}

/// Per-entry metadata; only the primary flag matters here.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMetadata {
    #[serde(default)]
    pub primary: bool,
}

/// A name entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawName {
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub given_name: String,
    #[serde(default)]
    pub family_name: String,
    #[serde(default)]
    pub metadata: RawMetadata,
}

/// A generic single-value entry (emails, locations, skills, biographies,
/// interests, occupations all share this shape).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawValueEntry {
    #[serde(default)]
    pub value: String,
    #[serde(default)]
    pub metadata: RawMetadata,
}

/// A photo entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPhoto {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub metadata: RawMetadata,
}

/// An organization entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawOrganization {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub start_date: Option<RawDate>,
    #[serde(default)]
    pub end_date: Option<RawDate>,
    #[serde(default)]
    pub current: bool,
    #[serde(default)]
    pub metadata: RawMetadata,
}

/// A partial date on the wire.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDate {
    #[serde(default)]
    pub year: Option<u16>,
    #[serde(default)]
    pub month: Option<u8>,
    #[serde(default)]
    pub day: Option<u8>,
}

/// The `people/me/connections` list response.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionsResponse {
    #[serde(default)]
    pub connections: Vec<RawPerson>,
    #[serde(default)]
    pub next_page_token: Option<String>,
    #[serde(default)]
    pub total_people: Option<u64>,
}
