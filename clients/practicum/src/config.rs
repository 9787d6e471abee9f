//! Configuration types for the Practicum homework API client.

use serde::{Deserialize, Serialize};

/// Homework statuses endpoint of the Practicum user API.
pub const DEFAULT_ENDPOINT: &str = "https://practicum.yandex.ru/api/user_api/homework_statuses/";

/// Configuration for PracticumClient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PracticumClientConfig {
    /// OAuth token issued by Practicum
    pub token: String,
    /// Full URL of the homework statuses endpoint
    pub endpoint: String,
}
