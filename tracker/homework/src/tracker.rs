//! Poll loop: fetch, validate, format, notify, sleep.

use std::future::Future;

use anyhow::Result;
use clients_practicum::{FetchError, PracticumClient};
use clients_telegrambot::TelegramBot;
use serde_json::Value;
use tracing::{debug, error, info};

use crate::config::TrackerConfig;
use crate::error::CycleError;
use crate::format::format_status;
use crate::types::{Cursor, CycleOutcome};
use crate::validate::validate;

/// Something that can return homework statuses changed since a Unix timestamp.
pub trait HomeworkSource {
    fn fetch(&self, from_date: i64) -> impl Future<Output = Result<Value, FetchError>>;
}

/// Something that can deliver a text message to the user.
pub trait Notifier {
    fn push_message(&self, text: &str) -> impl Future<Output = Result<()>>;
}

impl HomeworkSource for PracticumClient {
    async fn fetch(&self, from_date: i64) -> Result<Value, FetchError> {
        PracticumClient::fetch(self, from_date).await
    }
}

impl Notifier for TelegramBot {
    async fn push_message(&self, text: &str) -> Result<()> {
        TelegramBot::push_message(self, text).await
    }
}

/// Homework status tracker
///
/// Owns both clients and the cursor. Only the first homework of each response
/// is reported; several changes inside one period collapse into the newest.
pub struct Tracker<S, N> {
    source: S,
    notifier: N,
    config: TrackerConfig,
    cursor: Cursor,
}

impl<S: HomeworkSource, N: Notifier> Tracker<S, N> {
    /// Creates a tracker that will ask for changes since `from_date`.
    pub fn new(source: S, notifier: N, config: TrackerConfig, from_date: i64) -> Self {
        Self {
            source,
            notifier,
            config,
            cursor: Cursor::new(from_date),
        }
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    /// Runs cycles forever, sleeping `retry_period` after each one.
    ///
    /// Returns once `shutdown` resolves; it is only polled while sleeping, so
    /// an in-flight cycle always completes.
    pub async fn run<F: Future<Output = ()>>(&mut self, shutdown: F) {
        tokio::pin!(shutdown);
        loop {
            let outcome = self.run_cycle().await;
            debug!(?outcome, "cycle finished");
            info!(
                secs = self.config.retry_period.as_secs(),
                "waiting before next request"
            );
            tokio::select! {
                _ = tokio::time::sleep(self.config.retry_period) => {}
                _ = &mut shutdown => {
                    info!("shutdown requested, stopping tracker");
                    return;
                }
            }
        }
    }

    /// One fetch → validate → format → notify pass. Errors are logged, never returned.
    pub async fn run_cycle(&mut self) -> CycleOutcome {
        info!(from_date = self.cursor.from_date, "requesting homework statuses");
        match self.poll().await {
            Ok(outcome) => outcome,
            Err(err) => {
                error!(error = %err, "poll cycle failed");
                CycleOutcome::Failed
            }
        }
    }

    async fn poll(&mut self) -> Result<CycleOutcome, CycleError> {
        let response = self.source.fetch(self.cursor.from_date).await?;
        let envelope = validate(&response, self.config.require_current_date)?;

        let Some(newest) = envelope.homeworks.first() else {
            info!("no homework under review, nothing to report");
            return Ok(CycleOutcome::NothingToReport);
        };
        let message = format_status(newest)?;

        if self.cursor.last_message.as_deref() == Some(message.as_str()) {
            info!("homework status unchanged");
            return Ok(CycleOutcome::Unchanged);
        }
        if !self.notify(&message).await {
            return Ok(CycleOutcome::NotifyFailed);
        }
        self.cursor.advance(message, envelope.current_date);
        Ok(CycleOutcome::Notified)
    }

    /// Best effort: a delivery failure is logged and reported as `false`.
    async fn notify(&self, message: &str) -> bool {
        match self.notifier.push_message(message).await {
            Ok(()) => {
                debug!("notification delivered");
                true
            }
            Err(err) => {
                error!(error = %err, "failed to send notification");
                false
            }
        }
    }
}
