use clients_practicum::FetchError;
use thiserror::Error;

/// The API response does not have the documented shape.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("API response is not a JSON object: {0}")]
    NotAMapping(String),
    #[error("API response has no `{0}` key")]
    MissingKey(&'static str),
    #[error("API response key `{key}` has the wrong type, expected {expected}")]
    WrongType {
        key: &'static str,
        expected: &'static str,
    },
}

/// A homework record could not be turned into a message.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("homework record has no `{0}` key")]
    MissingField(&'static str),
    #[error("homework record key `{0}` is not a string")]
    InvalidField(&'static str),
    #[error("unexpected homework status `{0}`")]
    UnknownStatus(String),
}

/// Anything that ends a poll cycle early.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Format(#[from] FormatError),
}
