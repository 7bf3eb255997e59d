//! # news-telegram
//!
//! Telegram transport layer: adapters, [`news_core::Bot`] implementation, minimal config, REPL runner.
//! Handles only Telegram connectivity and handler-chain execution; no scraping or rendering logic.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::TelegramBotAdapter;
pub use config::TelegramConfig;
pub use runner::{build_teloxide_bot, dispatch_message, fetch_bot_username, run_repl};
