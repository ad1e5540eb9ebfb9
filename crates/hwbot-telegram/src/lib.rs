// SPDX-FileCopyrightText: 2026 Hwbot Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Telegram notifier for hwbot.
//!
//! Implements [`Notifier`] over the Telegram Bot API via teloxide. One bot,
//! one fixed destination chat, plain-text sends only.

use async_trait::async_trait;
use hwbot_core::{HwbotError, Notifier};
use teloxide::prelude::*;
use teloxide::types::{ChatId, Recipient};
use tracing::info;

/// Telegram [`Notifier`] sending to a single fixed chat.
pub struct TelegramNotifier {
    bot: Bot,
    recipient: Recipient,
}

impl TelegramNotifier {
    /// Creates a new Telegram notifier.
    ///
    /// `chat_id` is either a numeric chat id (possibly negative for groups)
    /// or an `@channelusername`. Empty or malformed values are rejected
    /// with [`HwbotError::Config`].
    pub fn new(bot_token: &str, chat_id: &str) -> Result<Self, HwbotError> {
        if bot_token.is_empty() {
            return Err(HwbotError::Config(
                "telegram.bot_token cannot be empty".into(),
            ));
        }

        let recipient = parse_recipient(chat_id)?;

        Ok(Self {
            bot: Bot::new(bot_token),
            recipient,
        })
    }
}

#[async_trait]
impl Notifier for TelegramNotifier {
    async fn notify(&self, text: &str) -> Result<(), HwbotError> {
        self.bot
            .send_message(self.recipient.clone(), text)
            .await
            .map_err(|e| HwbotError::Delivery {
                message: format!("failed to send Telegram message: {e}"),
                source: Some(Box::new(e)),
            })?;

        info!(chars = text.chars().count(), "notification delivered");
        Ok(())
    }
}

/// Parses a configured chat destination into a teloxide [`Recipient`].
fn parse_recipient(chat_id: &str) -> Result<Recipient, HwbotError> {
    if chat_id.is_empty() {
        return Err(HwbotError::Config("telegram.chat_id cannot be empty".into()));
    }

    if chat_id.starts_with('@') {
        return Ok(Recipient::ChannelUsername(chat_id.to_string()));
    }

    chat_id
        .parse::<i64>()
        .map(|id| Recipient::Id(ChatId(id)))
        .map_err(|_| {
            HwbotError::Config(format!(
                "telegram.chat_id `{chat_id}` is neither a numeric id nor an @username"
            ))
        })
}
