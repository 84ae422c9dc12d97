//! Platform matching: which external contacts hold platform accounts.

use conneqt_directory::DirectoryUser;
use conneqt_people::Profile;
use serde::Serialize;
use std::collections::HashMap;
use time::OffsetDateTime;

/// Reason attached to confirmed bidirectional relations.
pub const REASON_FRIEND: &str = "Friend on platform";
/// Reason attached to imported contact-graph entries.
pub const REASON_IN_CONTACTS: &str = "In your external contacts";

/// An external contact confirmed to hold a platform account.
#[derive(Debug, Clone, Serialize)]
pub struct PlatformMatch {
    /// The contact's canonical profile.
    pub profile: Profile,
    /// Platform account id of the matched user.
    pub platform_user_id: String,
    /// Display name the platform knows them by.
    pub platform_display_name: String,
    /// When they joined the platform.
    pub joined_at: OffsetDateTime,
    /// The two fixed match reasons.
    pub reasons: Vec<String>,
}

/// Intersect `contacts` against `users` by email.
///
/// Lookup is case-insensitive; on duplicate directory emails the last entry
/// wins (directory data is assumed deduplicated upstream). Contacts without
/// an email or without a directory hit are dropped: this surfaces confirmed
/// platform members only. Output order follows input contact order.
pub fn match_platform_users(contacts: &[Profile], users: &[DirectoryUser]) -> Vec<PlatformMatch> {
    let mut by_email: HashMap<String, &DirectoryUser> = HashMap::new();
    for user in users {
        if !user.email.is_empty() {
            by_email.insert(user.email.to_lowercase(), user);
        }
    }

    let mut matches = Vec::new();
    for contact in contacts {
        if contact.email.is_empty() {
            continue;
        }
        let Some(user) = by_email.get(&contact.email.to_lowercase()) else {
            continue;
        };
        tracing::debug!(
            contact = %contact.name,
            email = %contact.email,
            platform_user = %user.user_id,
            "contact matched a platform user"
        );
        matches.push(PlatformMatch {
            profile: contact.clone(),
            platform_user_id: user.user_id.clone(),
            platform_display_name: user.name.clone(),
            joined_at: user.joined_at,
            reasons: vec![REASON_FRIEND.to_string(), REASON_IN_CONTACTS.to_string()],
        });
    }
    matches
}
