//! ResRobot HTTP client.
//!
//! Provides async methods for querying the ResRobot `trip` endpoint.
//! Each query is a single attempt; there is no retry or backoff.

use futures::FutureExt;
use futures::future::BoxFuture;
use tracing::{debug, warn};

use super::error::ResRobotError;
use super::source::TripSource;
use super::types::TripSearchResponse;

/// Default base URL for the ResRobot API.
pub(crate) const DEFAULT_BASE_URL: &str = "https://api.resrobot.se/v2.1";

/// Default request timeout in seconds.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the ResRobot client.
#[derive(Debug, Clone)]
pub struct ResRobotConfig {
    /// Access key, sent as the `accessId` query parameter
    pub access_id: String,
    /// Base URL for the API (defaults to production ResRobot)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ResRobotConfig {
    /// Create a new config with the given access key.
    pub fn new(access_id: impl Into<String>) -> Self {
        Self {
            access_id: access_id.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// ResRobot API client.
#[derive(Debug, Clone)]
pub struct ResRobotClient {
    http: reqwest::Client,
    base_url: String,
    access_id: String,
}

impl ResRobotClient {
    /// Create a new ResRobot client with the given configuration.
    pub fn new(config: ResRobotConfig) -> Result<Self, ResRobotError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_id: config.access_id,
        })
    }

    /// Search for trips between two stops.
    ///
    /// Requests the full pass list so that every leg carries its
    /// intermediate stops.
    ///
    /// # Arguments
    ///
    /// * `origin` - ResRobot id of the origin stop
    /// * `destination` - ResRobot id of the destination stop
    pub async fn search_trips(
        &self,
        origin: u64,
        destination: u64,
    ) -> Result<TripSearchResponse, ResRobotError> {
        let url = format!("{}/trip", self.base_url);
        debug!(origin, destination, "requesting trip search");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("format", "json".to_string()),
                ("originId", origin.to_string()),
                ("destId", destination.to_string()),
                ("passlist", "true".to_string()),
                ("showPassingPoints", "true".to_string()),
                ("accessId", self.access_id.clone()),
            ])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(ResRobotError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ResRobotError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = status.as_u16(), "trip search failed");
            return Err(ResRobotError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| ResRobotError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

impl TripSource for ResRobotClient {
    fn trips(
        &self,
        origin: u64,
        destination: u64,
    ) -> BoxFuture<'_, Result<TripSearchResponse, ResRobotError>> {
        self.search_trips(origin, destination).boxed()
    }
}
