//! Platform user directory.
//!
//! The directory lists every account on the platform; the matcher
//! cross-references external contacts against it by email. A listing is a
//! full snapshot per call, no pagination contract.

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use time::OffsetDateTime;

/// One platform account as the directory reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DirectoryUser {
    /// Stable platform user id.
    pub user_id: String,
    /// Account email; matching key against external contacts.
    pub email: String,
    /// Display name.
    pub name: String,
    /// When the account was created.
    #[serde(with = "time::serde::rfc3339")]
    pub joined_at: OffsetDateTime,
}

/// Read access to the platform user directory.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Full snapshot of every platform user.
    async fn list_all_users(&self) -> Result<Vec<DirectoryUser>>;
}

/// In-memory directory, mainly for tests and fixtures.
#[derive(Debug, Default)]
pub struct MemoryDirectory {
    users: Mutex<Vec<DirectoryUser>>,
}

impl MemoryDirectory {
    pub fn new(users: Vec<DirectoryUser>) -> Self {
        Self {
            users: Mutex::new(users),
        }
    }

    pub fn add_user(&self, user: DirectoryUser) {
        self.users
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(user);
    }
}

#[async_trait]
impl UserDirectory for MemoryDirectory {
    async fn list_all_users(&self) -> Result<Vec<DirectoryUser>> {
        Ok(self
            .users
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone())
    }
}

/// File-backed directory stored as a JSON array of users.
///
/// The CLI uses this to populate the platform side of matching
/// (`users add` / `users list`). An absent file reads as an empty directory.
pub struct JsonDirectory {
    path: PathBuf,
}

impl JsonDirectory {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<DirectoryUser>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let data = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&data)?)
    }

    fn save(&self, users: &[DirectoryUser]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(users)?)?;
        Ok(())
    }

    /// Add a user, replacing any existing entry with the same `user_id`.
    pub fn add_user(&self, user: DirectoryUser) -> Result<()> {
        let mut users = self.load()?;
        users.retain(|u| u.user_id != user.user_id);
        tracing::debug!(user_id = %user.user_id, email = %user.email, "adding directory user");
        users.push(user);
        self.save(&users)
    }
}

#[async_trait]
impl UserDirectory for JsonDirectory {
    async fn list_all_users(&self) -> Result<Vec<DirectoryUser>> {
        self.load()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn user(id: &str, email: &str) -> DirectoryUser {
        DirectoryUser {
            user_id: id.to_string(),
            email: email.to_string(),
            name: id.to_uppercase(),
            joined_at: datetime!(2025-01-15 10:00 UTC),
        }
    }

    #[tokio::test]
    async fn test_memory_directory_lists_added_users() {
        let directory = MemoryDirectory::default();
        directory.add_user(user("u1", "a@example.com"));
        directory.add_user(user("u2", "b@example.com"));

        let users = directory.list_all_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].user_id, "u1");
    }

    #[tokio::test]
    async fn test_json_directory_missing_file_is_empty() {
        let fixture = conneqt_test_utils::DataDirFixture::new().unwrap();
        let directory = JsonDirectory::new(fixture.file("users.json"));
        assert!(directory.list_all_users().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_json_directory_persists_users() {
        let fixture = conneqt_test_utils::DataDirFixture::new().unwrap();
        let path = fixture.file("users.json");

        let directory = JsonDirectory::new(&path);
        directory.add_user(user("u1", "a@example.com")).unwrap();
        directory.add_user(user("u2", "b@example.com")).unwrap();

        // Reopen from disk.
        let reopened = JsonDirectory::new(&path);
        let users = reopened.list_all_users().await.unwrap();
        assert_eq!(users.len(), 2);
        assert_eq!(users[1].email, "b@example.com");
    }

    #[tokio::test]
    async fn test_json_directory_add_replaces_same_user_id() {
        let fixture = conneqt_test_utils::DataDirFixture::new().unwrap();
        let directory = JsonDirectory::new(fixture.file("users.json"));

        directory.add_user(user("u1", "old@example.com")).unwrap();
        directory.add_user(user("u1", "new@example.com")).unwrap();

        let users = directory.list_all_users().await.unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].email, "new@example.com");
    }

    #[tokio::test]
    async fn test_json_directory_creates_parent_dirs() {
        let fixture = conneqt_test_utils::DataDirFixture::new().unwrap();
        let nested = fixture.data_dir.join("deep/nested/users.json");
        let directory = JsonDirectory::new(&nested);

        directory.add_user(user("u1", "a@example.com")).unwrap();
        assert!(nested.exists());
    }

    #[test]
    fn test_directory_user_serializes_rfc3339() {
        let serialized = serde_json::to_string(&user("u1", "a@example.com")).unwrap();
        assert!(serialized.contains("2025-01-15T10:00:00Z"));
    }
}
