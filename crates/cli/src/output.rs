//! Output rendering for the CLI commands.
//!
//! Every renderer returns a `String` rather than printing, so the command
//! layer owns the single `println!` and the renderers stay testable.

use crate::cli::OutputFormat;
use anyhow::Result;
use conneqt_directory::DirectoryUser;
use conneqt_engine::SyncReport;
use conneqt_store::{ConnectionStats, EnhancedProfile, RecommendationRecord};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;

fn rfc3339(ts: OffsetDateTime) -> String {
    ts.format(&Rfc3339).unwrap_or_else(|_| ts.to_string())
}

pub fn render_sync(report: &SyncReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Sync finished: {}\n", report.summary()));
    if !report.profile_saved {
        out.push_str("Warning: the enhanced profile could not be saved.\n");
    }
    if !report.preview.is_empty() {
        out.push_str("\nTop recommendations:\n");
        for record in &report.preview {
            out.push_str(&format!(
                "  {} <{}>\n",
                record.connection_name, record.connection_email
            ));
        }
    }
    out
}

pub fn render_recommendations(
    records: &[RecommendationRecord],
    format: OutputFormat,
) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(records)?),
        OutputFormat::Text => {
            if records.is_empty() {
                return Ok("No recommendations stored. Run `conneqt sync` first.".to_string());
            }
            let mut out = String::new();
            for (rank, record) in records.iter().enumerate() {
                out.push_str(&format!(
                    "{:>2}. {} <{}>  score {:.2}\n",
                    rank + 1,
                    record.connection_name,
                    record.connection_email,
                    record.similarity_score
                ));
                if !record.recommendation_reasons.is_empty() {
                    out.push_str(&format!(
                        "    {}\n",
                        record.recommendation_reasons.join("; ")
                    ));
                }
            }
            Ok(out)
        }
    }
}

pub fn render_stats(stats: &ConnectionStats, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(stats)?),
        OutputFormat::Text => {
            let mut out = String::new();
            out.push_str(&format!(
                "Recommendations: {}\n",
                stats.total_recommendations
            ));
            out.push_str(&format!("  On platform:       {}\n", stats.platform_user_count));
            out.push_str(&format!(
                "  External contacts: {}\n",
                stats.external_contact_count
            ));
            out.push_str(&format!("  Mutual:            {}\n", stats.mutual_count));
            out.push_str(&format!(
                "Enhanced profile: {}\n",
                if stats.has_enhanced_profile {
                    "yes"
                } else {
                    "no"
                }
            ));
            match stats.last_synced {
                Some(ts) => out.push_str(&format!("Last synced: {}\n", rfc3339(ts))),
                None => out.push_str("Last synced: never\n"),
            }
            Ok(out)
        }
    }
}

pub fn render_profile(profile: &EnhancedProfile, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(profile)?),
        OutputFormat::Text => {
            let mut out = String::new();
            out.push_str(&format!("Profile for {}\n", profile.user_id));
            if !profile.occupation.is_empty() {
                out.push_str(&format!("  Occupation: {}\n", profile.occupation));
            }
            if !profile.location.is_empty() {
                out.push_str(&format!("  Location:   {}\n", profile.location));
            }
            if !profile.organizations.is_empty() {
                let names: Vec<&str> = profile
                    .organizations
                    .iter()
                    .map(|org| org.name.as_str())
                    .collect();
                out.push_str(&format!("  Orgs:       {}\n", names.join(", ")));
            }
            if !profile.skills.is_empty() {
                out.push_str(&format!("  Skills:     {}\n", profile.skills.join(", ")));
            }
            if !profile.interests.is_empty() {
                out.push_str(&format!("  Interests:  {}\n", profile.interests.join(", ")));
            }
            if !profile.bio.is_empty() {
                out.push_str(&format!("  Bio:        {}\n", profile.bio));
            }
            out.push_str(&format!("  Updated:    {}\n", rfc3339(profile.last_updated)));
            Ok(out)
        }
    }
}

pub fn render_users(users: &[DirectoryUser], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(users)?),
        OutputFormat::Text => {
            if users.is_empty() {
                return Ok("No platform users registered.".to_string());
            }
            let mut out = String::new();
            for user in users {
                out.push_str(&format!(
                    "{}  {} <{}>  joined {}\n",
                    user.user_id,
                    user.name,
                    user.email,
                    rfc3339(user.joined_at)
                ));
            }
            Ok(out)
        }
    }
}
