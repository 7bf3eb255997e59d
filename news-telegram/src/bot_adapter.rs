//! Wraps teloxide::Bot and implements [`news_core::Bot`]. Production code sends via Telegram; tests substitute another Bot impl.

use async_trait::async_trait;
use news_core::{Bot as CoreBot, Chat, DbotError, Document, Result};
use teloxide::{prelude::*, types::ChatId, types::InputFile};

/// Thin wrapper around teloxide::Bot that implements news-core's Bot trait.
pub struct TelegramBotAdapter {
    bot: teloxide::Bot,
}

impl TelegramBotAdapter {
    /// Creates an adapter from an existing teloxide Bot.
    pub fn new(bot: teloxide::Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl CoreBot for TelegramBotAdapter {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        self.bot
            .send_message(ChatId(chat.id), text.to_string())
            .await
            .map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }

    async fn send_document(&self, chat: &Chat, document: Document) -> Result<()> {
        let Document {
            file_name,
            caption,
            bytes,
        } = document;
        let input = InputFile::memory(bytes).file_name(file_name);
        let request = self.bot.send_document(ChatId(chat.id), input);
        let request = match caption {
            Some(caption) => request.caption(caption),
            None => request,
        };
        request.await.map_err(|e| DbotError::Bot(e.to_string()))?;
        Ok(())
    }
}
