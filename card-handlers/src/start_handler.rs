//! `/start` command: fixed readiness reply.

use async_trait::async_trait;
use news_core::{Bot, Handler, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{info, instrument};

pub const MSG_READY: &str = "Bot pronto! Envie o link da matéria.";

/// Replies to `/start` (also `/start <payload>` and `/start@<own username>`); passes everything
/// else on, including `/start` addressed to another bot in a group.
#[derive(Clone)]
pub struct StartHandler {
    bot: Arc<dyn Bot>,
    bot_username: Option<String>,
}

impl StartHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self {
            bot,
            bot_username: None,
        }
    }

    /// Username accepted after `@`. Without it, any addressed form is refused.
    pub fn with_bot_username(mut self, username: impl Into<String>) -> Self {
        self.bot_username = Some(username.into());
        self
    }

    fn is_start_command(&self, text: &str) -> bool {
        let command = text.split_whitespace().next().unwrap_or("");
        match command.split_once('@') {
            None => command == "/start",
            Some((name, target)) => {
                name == "/start"
                    && self
                        .bot_username
                        .as_deref()
                        .is_some_and(|own| own.eq_ignore_ascii_case(target))
            }
        }
    }
}

#[async_trait]
impl Handler for StartHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        match message.trimmed_text() {
            Some(text) if self.is_start_command(text) => {
                info!(chat_id = message.chat.id, "Start command received");
                self.bot.reply_to(message, MSG_READY).await?;
                Ok(HandlerResponse::Stop)
            }
            _ => Ok(HandlerResponse::Continue),
        }
    }
}
