use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// Client for sending messages via Telegram Bot API.
pub struct TelegramBot {
    client: Client,
    base_url: String,
    api_key: String,
    chat_id: String,
}

#[derive(Serialize)]
struct SendMessageRequest<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct ApiResponse {
    ok: bool,
    description: Option<String>,
}

impl TelegramBot {
    /// Creates a new `TelegramBot` with the given API key and chat ID.
    pub fn new(api_key: String, chat_id: String) -> Self {
        Self::with_client(Client::new(), api_key, chat_id)
    }

    /// Same as [`TelegramBot::new`] but reuses an existing HTTP client.
    pub fn with_client(client: Client, api_key: String, chat_id: String) -> Self {
        Self {
            client,
            base_url: TELEGRAM_API_BASE.to_string(),
            api_key,
            chat_id,
        }
    }

    /// Points the bot at another Bot API host (self-hosted server, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sends a text message to the configured chat.
    pub async fn push_message(&self, text: &str) -> Result<()> {
        // The URL embeds the bot token; errors must not carry it into logs.
        let url = format!("{}/bot{}/sendMessage", self.base_url, self.api_key);
        let body = SendMessageRequest {
            chat_id: &self.chat_id,
            text,
        };
        let resp: ApiResponse = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?
            .error_for_status()
            .map_err(reqwest::Error::without_url)?
            .json()
            .await
            .map_err(reqwest::Error::without_url)?;
        if !resp.ok {
            return Err(anyhow!(
                "telegram rejected message: {}",
                resp.description.unwrap_or_default()
            ));
        }
        debug!(chat_id = %self.chat_id, "message sent");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn bot(server: &MockServer) -> TelegramBot {
        TelegramBot::new("123:abc".to_string(), "777".to_string()).with_base_url(server.uri())
    }

    #[tokio::test]
    async fn posts_text_to_chat() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/bot123:abc/sendMessage"))
            .and(body_json(json!({"chat_id": "777", "text": "hello"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true, "result": {}})))
            .expect(1)
            .mount(&server)
            .await;

        bot(&server).push_message("hello").await.unwrap();
    }

    #[tokio::test]
    async fn http_error_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_json(
                json!({"ok": false, "error_code": 401, "description": "Unauthorized"}),
            ))
            .mount(&server)
            .await;

        let err = bot(&server).push_message("hello").await.unwrap_err();
        assert!(err.to_string().contains("401"));
        assert!(!format!("{err:?}").contains("123:abc"));
    }

    #[tokio::test]
    async fn transport_error_hides_token() {
        let server = MockServer::start().await;
        let bot = bot(&server);
        drop(server);

        let err = bot.push_message("hello").await.unwrap_err();
        assert!(!format!("{err:#}").contains("123:abc"));
        assert!(!format!("{err:?}").contains("123:abc"));
    }

    #[tokio::test]
    async fn not_ok_body_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"ok": false, "description": "chat not found"})),
            )
            .mount(&server)
            .await;

        let err = bot(&server).push_message("hello").await.unwrap_err();
        assert!(err.to_string().contains("chat not found"));
    }
}
