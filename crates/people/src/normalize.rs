//! Profile normalization.
//!
//! Converts a raw People API record into a canonical [`Profile`]. The
//! conversion is pure and total: every field extraction independently
//! defaults to an empty value, so a sparse record never fails.
//!
//! Selection policy for multi-valued fields: prefer the entry flagged
//! `primary` by the source; if none is flagged, take the first entry in
//! source order. Applied uniformly across names, emails, photos, locations,
//! biographies, and occupations.

use crate::profile::{CalendarDate, Organization, Profile};
use crate::raw::{RawDate, RawMetadata, RawPerson};

/// Normalize a raw person record into a canonical [`Profile`].
pub fn normalize(raw: &RawPerson) -> Profile {
    Profile {
        id: raw.resource_name.clone(),
        name: extract_name(raw),
        email: primary_or_first(&raw.email_addresses, |e| &e.metadata, |e| e.value.clone()),
        photo: primary_or_first(&raw.photos, |p| &p.metadata, |p| p.url.clone()),
        organizations: raw.organizations.iter().map(extract_organization).collect(),
        location: primary_or_first(&raw.locations, |l| &l.metadata, |l| l.value.clone()),
        skills: extract_values(&raw.skills),
        bio: primary_or_first(&raw.biographies, |b| &b.metadata, |b| b.value.clone()),
        interests: extract_values(&raw.interests),
        occupation: primary_or_first(&raw.occupations, |o| &o.metadata, |o| o.value.clone()),
    }
}

/// Pick the primary entry, else the first, and project a value out of it.
/// Returns an empty string when the list is empty.
fn primary_or_first<T>(
    entries: &[T],
    metadata: impl Fn(&T) -> &RawMetadata,
    value: impl Fn(&T) -> String,
) -> String {
    entries
        .iter()
        .find(|e| metadata(e).primary)
        .or_else(|| entries.first())
        .map(value)
        .unwrap_or_default()
}

/// Display name of the primary (else first) name entry, falling back to
/// `"{given} {family}"` trimmed when no display name is present.
fn extract_name(raw: &RawPerson) -> String {
    let Some(name) = raw
        .names
        .iter()
        .find(|n| n.metadata.primary)
        .or_else(|| raw.names.first())
    else {
        return String::new();
    };
    if !name.display_name.is_empty() {
        return name.display_name.clone();
    }
    format!("{} {}", name.given_name, name.family_name)
        .trim()
        .to_string()
}

fn extract_organization(org: &crate::raw::RawOrganization) -> Organization {
    Organization {
        name: org.name.clone(),
        title: org.title.clone(),
        department: org.department.clone(),
        start_date: org.start_date.map(calendar_date),
        end_date: org.end_date.map(calendar_date),
        current: org.current,
    }
}

fn calendar_date(date: RawDate) -> CalendarDate {
    CalendarDate {
        year: date.year,
        month: date.month,
        day: date.day,
    }
}

/// Map value entries to their strings, dropping blanks.
fn extract_values(entries: &[crate::raw::RawValueEntry]) -> Vec<String> {
    entries
        .iter()
        .map(|e| e.value.clone())
        .filter(|v| !v.is_empty())
        .collect()
}
