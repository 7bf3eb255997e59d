//! REPL runner: converts teloxide messages to core::Message and passes them to the HandlerChain.

use anyhow::Result;
use handler_chain::HandlerChain;
use news_core::{Message, ToCoreMessage};
use teloxide::prelude::*;
use tracing::{error, info, instrument, warn};

use super::adapters::TelegramMessageWrapper;
use super::config::TelegramConfig;

/// Builds a teloxide Bot from config, pointing it at a custom API URL when one is set.
pub fn build_teloxide_bot(config: &TelegramConfig) -> Result<teloxide::Bot> {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    let bot = match config.api_url()? {
        Some(url) => {
            info!(api_url = %url, "Using custom Telegram API URL");
            bot.set_api_url(url)
        }
        None => bot,
    };
    Ok(bot)
}

/// Asks Telegram who we are. Logs the username; `None` when getMe fails or the bot has none.
pub async fn fetch_bot_username(bot: &teloxide::Bot) -> Option<String> {
    match bot.get_me().await {
        Ok(me) => {
            let username = me.user.username.clone();
            if let Some(ref username) = username {
                info!(username = %username, "Connected to Telegram");
            }
            username
        }
        Err(e) => {
            warn!(error = %e, "getMe failed; addressed commands will be ignored");
            None
        }
    }
}

/// Runs the chain for one inbound message to completion and logs a failure.
/// teloxide's REPL serializes updates per chat, so awaiting here keeps replies within a chat in
/// arrival order while distinct chats still run concurrently.
pub async fn dispatch_message(chain: &HandlerChain, core_msg: &Message) {
    match core_msg.text.as_deref() {
        Some(text) => {
            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                message_content = %text,
                "Received message"
            );
        }
        None => {
            info!(
                user_id = core_msg.user.id,
                chat_id = core_msg.chat.id,
                "Received non-text message"
            );
        }
    }

    if let Err(e) = chain.handle(core_msg).await {
        error!(
            error = %e,
            chat_id = core_msg.chat.id,
            user_id = core_msg.user.id,
            "Handler chain failed"
        );
    }
}

/// Starts the REPL with the given teloxide Bot and HandlerChain.
#[instrument(skip(bot, handler_chain))]
pub async fn run_repl(bot: teloxide::Bot, handler_chain: HandlerChain) -> Result<()> {
    let chain = handler_chain;
    teloxide::repl(bot, move |_bot: Bot, msg: teloxide::types::Message| {
        let chain = chain.clone();

        async move {
            let core_msg = TelegramMessageWrapper(&msg).to_core();
            dispatch_message(&chain, &core_msg).await;
            Ok(())
        }
    })
    .await;

    Ok(())
}
