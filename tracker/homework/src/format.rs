use serde_json::Value;
use tracing::info;

use crate::error::FormatError;
use crate::types::HomeworkStatus;

/// Builds the notification text for one homework record.
pub fn format_status(homework: &Value) -> Result<String, FormatError> {
    let name = string_field(homework, "homework_name")?;
    let status: HomeworkStatus = string_field(homework, "status")?.parse()?;
    info!(homework = name, %status, "parsed homework status");
    Ok(format!(
        "Изменился статус проверки работы \"{}\". {}",
        name,
        status.verdict()
    ))
}

fn string_field<'a>(homework: &'a Value, key: &'static str) -> Result<&'a str, FormatError> {
    homework
        .get(key)
        .ok_or(FormatError::MissingField(key))?
        .as_str()
        .ok_or(FormatError::InvalidField(key))
}
