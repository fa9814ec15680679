//! Telegram adapter (teloxide).
//!
//! This crate implements the `hwb-core` Notifier port over the Telegram
//! Bot API. Send-only: the watcher never handles incoming updates.

use async_trait::async_trait;

use teloxide::prelude::*;

use hwb_core::{domain::ChatId, errors::Error, ports::Notifier, Result};

#[derive(Clone)]
pub struct TelegramNotifier {
    bot: Bot,
}

impl TelegramNotifier {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    fn tg_chat(chat_id: ChatId) -> teloxide::types::ChatId {
        teloxide::types::ChatId(chat_id.0)
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn send_text(&self, chat_id: ChatId, text: &str) -> Result<()> {
        self.bot
            .send_message(Self::tg_chat(chat_id), text.to_string())
            .await
            .map_err(|e| Error::Delivery(format!("telegram send failed: {e}")))?;
        Ok(())
    }
}
