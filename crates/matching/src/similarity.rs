//! Weighted profile similarity scoring and reason derivation.
//!
//! The score is the mean of up to five factor contributions. A factor only
//! enters the average when both profiles carry data for it, so sparse
//! profiles are scored on what is comparable rather than penalized for
//! missing fields. With zero applicable factors the score is 0.

use crate::mentor::has_leadership_title;
use conneqt_people::Profile;
use serde::Serialize;

/// Factor weights. Fixed; the final division by the applicable-factor count
/// does the normalization.
const WEIGHT_ORGANIZATIONS: f64 = 0.30;
const WEIGHT_SKILLS: f64 = 0.25;
const WEIGHT_INTERESTS: f64 = 0.20;
const WEIGHT_LOCATION: f64 = 0.15;
const WEIGHT_OCCUPATION: f64 = 0.10;

/// Candidates scoring at or below this are dropped from ranked lists.
const SCORE_FLOOR: f64 = 0.1;

/// Ranked lists are capped at this many candidates.
const MAX_RANKED: usize = 20;

/// At most this many reasons accompany a score.
pub const MAX_REASONS: usize = 3;

/// Result of scoring one profile pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityReport {
    /// Similarity in [0, 1].
    pub score: f64,
    /// Up to [`MAX_REASONS`] human-readable reasons, highest priority first.
    pub reasons: Vec<String>,
}

/// A contact annotated with its similarity to the user.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredCandidate {
    pub profile: Profile,
    pub score: f64,
    pub reasons: Vec<String>,
}

/// Score `candidate` against `user`.
///
/// The score itself is symmetric in its arguments; the "Potential mentor"
/// reason is evaluated on `candidate` only.
pub fn score_pair(user: &Profile, candidate: &Profile) -> SimilarityReport {
    SimilarityReport {
        score: similarity_score(user, candidate),
        reasons: recommendation_reasons(user, candidate),
    }
}

/// Rank `contacts` against `user`: score each, drop scores at or below the
/// floor, sort descending, cap the list.
pub fn rank_candidates(user: &Profile, contacts: &[Profile]) -> Vec<ScoredCandidate> {
    let mut ranked: Vec<ScoredCandidate> = contacts
        .iter()
        .map(|contact| {
            let report = score_pair(user, contact);
            ScoredCandidate {
                profile: contact.clone(),
                score: report.score,
                reasons: report.reasons,
            }
        })
        .filter(|candidate| candidate.score > SCORE_FLOOR)
        .collect();

    ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
    ranked.truncate(MAX_RANKED);
    ranked
}

fn similarity_score(a: &Profile, b: &Profile) -> f64 {
    let mut sum = 0.0;
    let mut factors = 0u32;

    if !a.organizations.is_empty() && !b.organizations.is_empty() {
        let names_a = org_names_lowered(a);
        let names_b = org_names_lowered(b);
        sum += WEIGHT_ORGANIZATIONS * overlap_ratio(&names_a, &names_b);
        factors += 1;
    }

    if !a.skills.is_empty() && !b.skills.is_empty() {
        let skills_a = lowered(&a.skills);
        let skills_b = lowered(&b.skills);
        sum += WEIGHT_SKILLS * overlap_ratio(&skills_a, &skills_b);
        factors += 1;
    }

    if !a.interests.is_empty() && !b.interests.is_empty() {
        let interests_a = lowered(&a.interests);
        let interests_b = lowered(&b.interests);
        sum += WEIGHT_INTERESTS * overlap_ratio(&interests_a, &interests_b);
        factors += 1;
    }

    if !a.location.is_empty() && !b.location.is_empty() {
        if contains_either(&a.location, &b.location) {
            sum += WEIGHT_LOCATION;
        }
        factors += 1;
    }

    if !a.occupation.is_empty() && !b.occupation.is_empty() {
        if contains_either(&a.occupation, &b.occupation) {
            sum += WEIGHT_OCCUPATION;
        }
        factors += 1;
    }

    if factors > 0 {
        sum / f64::from(factors)
    } else {
        0.0
    }
}

fn recommendation_reasons(user: &Profile, candidate: &Profile) -> Vec<String> {
    let mut reasons = Vec::new();

    let user_orgs = org_names_lowered(user);
    let candidate_orgs = org_names_lowered(candidate);
    if let Some(common) = user_orgs.iter().find(|name| candidate_orgs.contains(name)) {
        reasons.push(format!("Works at {common}"));
    }

    let shared_skills = common_count(&lowered(&user.skills), &lowered(&candidate.skills));
    if shared_skills > 0 {
        let plural = if shared_skills > 1 { "s" } else { "" };
        reasons.push(format!("Shares {shared_skills} skill{plural}"));
    }

    if common_count(&lowered(&user.interests), &lowered(&candidate.interests)) > 0 {
        reasons.push("Similar interests".to_string());
    }

    if !user.location.is_empty()
        && !candidate.location.is_empty()
        && contains_either(&user.location, &candidate.location)
    {
        reasons.push("Same location".to_string());
    }

    if has_leadership_title(&candidate.organizations) {
        reasons.push("Potential mentor".to_string());
    }

    reasons.truncate(MAX_REASONS);
    reasons
}

fn org_names_lowered(profile: &Profile) -> Vec<String> {
    profile
        .organizations
        .iter()
        .map(|org| org.name.to_lowercase())
        .collect()
}

fn lowered(values: &[String]) -> Vec<String> {
    values.iter().map(|v| v.to_lowercase()).collect()
}

/// |intersection| / max(|a|, |b|). Both inputs are non-empty when called.
fn overlap_ratio(a: &[String], b: &[String]) -> f64 {
    let common = common_count(a, b);
    common as f64 / a.len().max(b.len()) as f64
}

fn common_count(a: &[String], b: &[String]) -> usize {
    a.iter().filter(|value| b.contains(value)).count()
}

/// Case-insensitive mutual substring test.
fn contains_either(a: &str, b: &str) -> bool {
    let a = a.to_lowercase();
    let b = b.to_lowercase();
    a.contains(&b) || b.contains(&a)
}
