use async_trait::async_trait;
use serde_json::Value;

use crate::{domain::ChatId, Result};

/// Port over the homework status API.
///
/// The adapter returns the raw JSON body; shape checks live in core so the
/// loop reports malformed responses the same way regardless of backend.
#[async_trait]
pub trait StatusApi: Send + Sync {
    /// Fetch status changes since `from_date` (Unix timestamp).
    async fn homework_statuses(&self, from_date: i64) -> Result<Value>;
}

/// Fire-and-forget notification port.
///
/// Telegram is the first implementation; the shape leaves room for other
/// messengers behind the same interface.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<()>;
}
