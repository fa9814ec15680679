//! Status endpoint payload checks and message rendering.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::ReviewStatus;
use crate::{Error, Result};

/// The slice of the status endpoint body the watcher relies on.
///
/// Homework records stay raw JSON so one malformed record fails per record,
/// not the whole response.
#[derive(Debug, Deserialize)]
pub struct StatusResponse {
    pub homeworks: Vec<Value>,
    #[serde(default)]
    pub current_date: Option<i64>,
}

/// Check the response shape and pull out the fields the loop uses.
pub fn check_response(body: Value) -> Result<StatusResponse> {
    serde_json::from_value(body)
        .map_err(|e| Error::Shape(format!("unexpected status response shape: {e}")))
}

/// Render the chat message for one homework record.
///
/// Pure; the caller decides whether and where to send the result.
pub fn render_status_change(homework: &Value) -> Result<String> {
    let Some(record) = homework.as_object() else {
        return Err(Error::Shape("homework record is not a JSON object".to_string()));
    };

    let name = record
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::Shape("homework record has no `homework_name`".to_string()))?;
    let raw_status = record
        .get("status")
        .and_then(Value::as_str)
        .ok_or_else(|| Error::Shape("homework record has no `status`".to_string()))?;

    let status = ReviewStatus::parse(raw_status)
        .ok_or_else(|| Error::UnknownStatus(raw_status.to_string()))?;

    Ok(format!(
        "Изменился статус проверки работы \"{name}\". {}",
        status.verdict()
    ))
}
