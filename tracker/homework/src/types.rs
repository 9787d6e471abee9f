//! Shared types for the homework tracker.

use std::fmt;
use std::str::FromStr;

use crate::error::FormatError;

/// Review status of a homework as reported by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeworkStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl HomeworkStatus {
    /// Human-readable verdict sent to the user.
    pub fn verdict(self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            HomeworkStatus::Reviewing => "Работа взята на проверку ревьюером.",
            HomeworkStatus::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HomeworkStatus::Approved => "approved",
            HomeworkStatus::Reviewing => "reviewing",
            HomeworkStatus::Rejected => "rejected",
        }
    }
}

impl FromStr for HomeworkStatus {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "approved" => Ok(HomeworkStatus::Approved),
            "reviewing" => Ok(HomeworkStatus::Reviewing),
            "rejected" => Ok(HomeworkStatus::Rejected),
            other => Err(FormatError::UnknownStatus(other.to_string())),
        }
    }
}

impl fmt::Display for HomeworkStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the tracker remembers between cycles. Lives in memory only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor {
    /// Text of the last message that was actually delivered
    pub last_message: Option<String>,
    /// `from_date` sent with the next request (Unix seconds)
    pub from_date: i64,
}

impl Cursor {
    pub fn new(from_date: i64) -> Self {
        Self {
            last_message: None,
            from_date,
        }
    }

    /// Moves past a delivered message. Only called after a successful push.
    pub(crate) fn advance(&mut self, message: String, current_date: Option<i64>) {
        self.last_message = Some(message);
        if let Some(date) = current_date {
            self.from_date = date;
        }
    }
}

/// How a single poll cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// The API reported no homeworks since `from_date`
    NothingToReport,
    /// Newest status matches the last delivered message
    Unchanged,
    /// A new message was delivered and the cursor advanced
    Notified,
    /// A new message was built but delivery failed; cursor untouched
    NotifyFailed,
    /// Fetch, validation or formatting failed
    Failed,
}
