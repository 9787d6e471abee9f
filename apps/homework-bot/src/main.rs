//! Homework bot: polls the Practicum homework API and pushes status changes via Telegram.
//!
//! Usage: homework-bot
//!
//! Reads PRACTICUM_TOKEN, TELEGRAM_TOKEN and TELEGRAM_CHAT_ID from the environment
//! (or a `.env` file). Runs until Ctrl-C.

mod config;
mod logging;

use anyhow::Result;
use clients_practicum::{PracticumClient, PracticumClientConfig};
use clients_telegrambot::TelegramBot;
use homework::Tracker;
use tracing::{error, info, warn};

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    logging::init(&config::log_file())?;

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            error!(fatal = true, error = %err, "cannot start without configuration");
            std::process::exit(1);
        }
    };

    let client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()?;
    let practicum = PracticumClient::new(
        client.clone(),
        PracticumClientConfig {
            token: config.practicum_token.clone(),
            endpoint: config.endpoint.to_string(),
        },
    );
    let telegram = TelegramBot::with_client(
        client,
        config.telegram_token.clone(),
        config.telegram_chat_id.clone(),
    );

    let mut tracker = Tracker::new(
        practicum,
        telegram,
        config.tracker(),
        utils::now_unix_secs(),
    );
    info!(endpoint = %config.endpoint, "homework bot started");

    tracker.run(shutdown_signal()).await;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "cannot listen for Ctrl-C, running until killed");
        std::future::pending::<()>().await;
    }
}
