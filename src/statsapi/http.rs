//! HTTP client for the live-feed endpoint.

use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::error::Result;

/// Base URL for the MLB stats API.
pub const STATSAPI_BASE_URL: &str = "https://ws.statsapi.mlb.com";

/// Browser-like agent; the feed occasionally rejects default client agents.
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                          (KHTML, like Gecko) Chrome/119.0.0.0 Safari/537.36";

/// Pause after every request. Crude self-throttle, not a retry mechanism.
const THROTTLE: Duration = Duration::from_millis(500);

/// Bound on an unresponsive server; the feed normally answers in well under a
/// second.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for fetching live-feed documents.
pub struct FeedClient {
    http: Client,
    base_url: String,
}

impl FeedClient {
    /// Build a client. `insecure` disables TLS certificate verification for
    /// environments that intercept statsapi traffic; leave it off otherwise.
    pub fn new(insecure: bool) -> Result<Self> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .danger_accept_invalid_certs(insecure)
            .build()?;
        Ok(Self {
            http,
            base_url: STATSAPI_BASE_URL.to_owned(),
        })
    }

    /// Fetch the live-feed document for one game.
    ///
    /// Status codes are not inspected: whatever body comes back gets parsed
    /// as JSON, and a non-JSON body surfaces as a
    /// [`Format`](crate::BoxscoreError::Format) error. Network failures
    /// surface as [`Transport`](crate::BoxscoreError::Transport).
    pub async fn fetch_live_feed(&self, game_id: u64) -> Result<Value> {
        let url = format!(
            "{}/api/v1.1/game/{}/feed/live?language=en",
            self.base_url, game_id
        );
        let body = self.http.get(&url).send().await?.text().await?;
        tokio::time::sleep(THROTTLE).await;
        let doc: Value = serde_json::from_str(&body)?;
        Ok(doc)
    }
}
