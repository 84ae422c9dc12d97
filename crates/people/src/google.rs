//! Google People API client.
//!
//! Fetches the authenticated user's profile and connection list with the
//! nine-field projection the recommendation pipeline consumes. The base URL
//! can be overridden through `CONNEQT_PEOPLE_API_BASE_URL` for tests.

use crate::raw::{ConnectionsResponse, RawPerson};
use crate::source::ContactGraphSource;
use anyhow::Result;
use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;

const PEOPLE_API_BASE: &str = "https://people.googleapis.com/v1";

/// Projection requested from the API; matches the fields the normalizer reads.
const PERSON_FIELDS: &str =
    "names,emailAddresses,photos,organizations,locations,skills,biographies,interests,occupations";

/// Default contact-list page size.
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Get the People API base URL, allowing override for testing.
fn people_api_base() -> String {
    std::env::var("CONNEQT_PEOPLE_API_BASE_URL").unwrap_or_else(|_| PEOPLE_API_BASE.to_string())
}

/// Contact-graph source backed by the Google People API.
pub struct PeopleApiSource {
    client: reqwest::Client,
    access_token: String,
}

impl PeopleApiSource {
    /// Create a client with an OAuth access token.
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            access_token: access_token.into(),
        }
    }

    fn get(&self, url: String) -> reqwest::RequestBuilder {
        self.client
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {}", self.access_token))
            .header("Content-Type", "application/json")
    }

    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            return Ok(response);
        }

        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        // Actionable messages for the auth and quota failures users actually hit.
        let error_msg = match status.as_u16() {
            401 => "Google People API authentication failed. Re-authenticate to refresh the access token.",
            403 => "Google People API access forbidden. Check that the contacts scope was granted.",
            429 => "Google People API rate limit exceeded. Wait a few minutes and try again.",
            _ => "",
        };

        if error_msg.is_empty() {
            anyhow::bail!("Google People API error ({}): {}", status, body);
        } else {
            anyhow::bail!("{} (HTTP {})", error_msg, status);
        }
    }
}

#[async_trait]
impl ContactGraphSource for PeopleApiSource {
    async fn self_profile(&self) -> Result<RawPerson> {
        let response = self
            .get(format!("{}/people/me", people_api_base()))
            .query(&[("personFields", PERSON_FIELDS)])
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        Ok(response.json().await?)
    }

    async fn contacts(&self, page_size: u32) -> Result<Vec<RawPerson>> {
        let response = self
            .get(format!("{}/people/me/connections", people_api_base()))
            .query(&[
                ("personFields", PERSON_FIELDS),
                ("pageSize", &page_size.to_string()),
            ])
            .send()
            .await?;

        let response = Self::check_status(response).await?;
        let body: ConnectionsResponse = response.json().await?;
        tracing::debug!(
            fetched = body.connections.len(),
            total = ?body.total_people,
            "fetched contact page"
        );
        Ok(body.connections)
    }
}
