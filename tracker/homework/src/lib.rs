//! Homework status tracker.
//!
//! Polls the Practicum homework API, turns the newest status into a chat
//! message and pushes it once per change.

pub mod config;
mod error;
mod format;
mod tracker;
mod types;
mod validate;

pub use config::TrackerConfig;
pub use error::{CycleError, FormatError, ValidationError};
pub use format::format_status;
pub use tracker::{HomeworkSource, Notifier, Tracker};
pub use types::{Cursor, CycleOutcome, HomeworkStatus};
pub use validate::{validate, Envelope};
