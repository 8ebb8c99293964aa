//! Discogs API client
//!
//! Paginated collection-folder listing with auth headers and
//! client-side request pacing. The client never retries; errors
//! surface to the caller.

use serde::Deserialize;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::sync::Mutex;
use vcm_common::Config;

/// Minimum spacing between collection page requests
const PAGE_INTERVAL_MS: u64 = 750;
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Discogs client errors
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Rate limited by Discogs")]
    RateLimited,

    #[error("API error {0}: {1}")]
    Api(u16, String),

    #[error("Parse error: {0}")]
    Parse(String),
}

/// One page of a collection folder listing
#[derive(Debug, Clone, Deserialize)]
pub struct CollectionPage {
    pub pagination: Pagination,
    pub releases: Vec<RawRelease>,
}

/// Pagination metadata attached to every page
#[derive(Debug, Clone, Deserialize)]
pub struct Pagination {
    pub page: u64,
    #[serde(default)]
    pub urls: PageUrls,
}

/// Navigation URLs; `next` is absent on the last page
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageUrls {
    pub next: Option<String>,
}

/// Raw release record as returned by the collection endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct RawRelease {
    pub id: i64,
    pub basic_information: BasicInformation,
}

/// Loosely populated metadata block; absent lists decode as empty
#[derive(Debug, Clone, Deserialize)]
pub struct BasicInformation {
    pub title: String,
    #[serde(default)]
    pub artists: Vec<RawArtist>,
    #[serde(default)]
    pub genres: Vec<String>,
    #[serde(default)]
    pub styles: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawArtist {
    pub name: String,
}

/// Min-interval pacer for page fetches
struct RateLimiter {
    last_request: Mutex<Option<Instant>>,
    min_interval: Duration,
}

impl RateLimiter {
    fn new(min_interval_ms: u64) -> Self {
        Self {
            last_request: Mutex::new(None),
            min_interval: Duration::from_millis(min_interval_ms),
        }
    }

    /// Wait if necessary to keep requests spaced out
    async fn wait(&self) {
        let mut last = self.last_request.lock().await;

        if let Some(last_time) = *last {
            let elapsed = last_time.elapsed();
            if elapsed < self.min_interval {
                let wait_time = self.min_interval - elapsed;
                tracing::debug!("Rate limiting: waiting {:?}", wait_time);
                tokio::time::sleep(wait_time).await;
            }
        }

        *last = Some(Instant::now());
    }
}

/// Discogs collection API client
pub struct DiscogsClient {
    http_client: reqwest::Client,
    rate_limiter: RateLimiter,
    base_url: String,
    user: String,
    folder_id: String,
}

impl DiscogsClient {
    /// Build a client carrying the deterministic user agent and the
    /// authorization header on every request
    pub fn new(config: &Config) -> Result<Self, ClientError> {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        let authorization = reqwest::header::HeaderValue::from_str(&config.authorization())
            .map_err(|e| ClientError::Network(e.to_string()))?;
        headers.insert(reqwest::header::AUTHORIZATION, authorization);

        let http_client = reqwest::Client::builder()
            .user_agent(config.user_agent())
            .default_headers(headers)
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self {
            http_client,
            rate_limiter: RateLimiter::new(PAGE_INTERVAL_MS),
            base_url: config.api_base_url.clone(),
            user: config.user.clone(),
            folder_id: config.folder_id.clone(),
        })
    }

    /// First page of the collection folder listing
    ///
    /// Subsequent page URLs come verbatim from each response's
    /// pagination metadata, not from this function.
    pub fn first_page_url(&self) -> String {
        format!(
            "{}/users/{}/collection/folders/{}/releases",
            self.base_url, self.user, self.folder_id
        )
    }

    /// Fetch one collection page; no internal retry
    pub async fn fetch_page(&self, url: &str) -> Result<CollectionPage, ClientError> {
        self.rate_limiter.wait().await;

        tracing::debug!(url = %url, "Fetching collection page");

        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(ClientError::RateLimited);
        }

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ClientError::Api(status.as_u16(), error_text));
        }

        let page: CollectionPage = response
            .json()
            .await
            .map_err(|e| ClientError::Parse(e.to_string()))?;

        Ok(page)
    }
}
