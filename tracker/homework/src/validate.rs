use serde_json::Value;

use crate::error::ValidationError;

/// Homework API response after its shape has been checked.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    /// Homework records, newest first; may be empty
    pub homeworks: Vec<Value>,
    /// Server time of the response, when present as an integer
    pub current_date: Option<i64>,
}

/// Checks that `response` is an object with a `homeworks` list.
///
/// With `require_current_date` the object must also carry an integer
/// `current_date`; otherwise a missing or malformed one is just dropped.
pub fn validate(response: &Value, require_current_date: bool) -> Result<Envelope, ValidationError> {
    let map = response
        .as_object()
        .ok_or_else(|| ValidationError::NotAMapping(response.to_string()))?;

    let homeworks = map
        .get("homeworks")
        .ok_or(ValidationError::MissingKey("homeworks"))?
        .as_array()
        .ok_or(ValidationError::WrongType {
            key: "homeworks",
            expected: "list",
        })?;

    let current_date = match map.get("current_date") {
        Some(value) => match value.as_i64() {
            Some(date) => Some(date),
            None if require_current_date => {
                return Err(ValidationError::WrongType {
                    key: "current_date",
                    expected: "integer",
                })
            }
            None => None,
        },
        None if require_current_date => return Err(ValidationError::MissingKey("current_date")),
        None => None,
    };

    Ok(Envelope {
        homeworks: homeworks.clone(),
        current_date,
    })
}
