use reqwest::header::AUTHORIZATION;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::info;

use crate::config::PracticumClientConfig;
use crate::error::FetchError;

/// Client for the Practicum homework statuses API.
pub struct PracticumClient {
    client: reqwest::Client,
    token: String,
    endpoint: String,
}

impl PracticumClient {
    /// Creates a new `PracticumClient` on top of a shared HTTP client.
    ///
    /// Timeouts are whatever `client` was built with.
    pub fn new(client: reqwest::Client, config: PracticumClientConfig) -> Self {
        Self {
            client,
            token: config.token,
            endpoint: config.endpoint,
        }
    }

    /// Fetches homework statuses changed since `from_date` (Unix seconds).
    ///
    /// Returns the decoded JSON body untouched; shape checks belong to the caller.
    pub async fn fetch(&self, from_date: i64) -> Result<Value, FetchError> {
        let resp = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(FetchError::transport)?;

        let status = resp.status();
        if status != StatusCode::OK {
            return Err(FetchError::Status(status.as_u16()));
        }
        info!(from_date, "received response from homework API");

        resp.json::<Value>().await.map_err(FetchError::Decode)
    }
}
