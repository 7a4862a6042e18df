// ABOUTME: HTTP client issuing the zero-argument profile listing query

use crate::config::AppConfig;
use crate::models::ProfileRecord;
use anyhow::{anyhow, Context, Result};
use reqwest::Client;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ProfileStoreClient {
    client: Client,
    base_url: String,
}

impl ProfileStoreClient {
    /// Create a client from application configuration
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("pluck/", env!("CARGO_PKG_VERSION")))
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.profile_api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch all published profile records, newest-first as returned by the
    /// store. The query takes no arguments.
    pub async fn list_profiles(&self) -> Result<Vec<ProfileRecord>> {
        let url = format!("{}/profiles", self.base_url);
        debug!(%url, "querying profile store");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("Failed to reach profile store")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(anyhow!("Profile store error {status}: {body}"));
        }

        let profiles: Vec<ProfileRecord> = response
            .json()
            .await
            .context("Failed to parse profile store response")?;

        debug!(count = profiles.len(), "profile store query resolved");
        Ok(profiles)
    }
}
