//! CLI parser and config loading.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::BotConfig;

#[derive(Parser)]
#[command(name = "news-card-bot")]
#[command(about = "Telegram bot that renders news cards from article links", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Render one card for an article URL and write it to a local file, without Telegram.
    Render {
        url: String,
        #[arg(short, long, default_value = "noticia.jpg")]
        output: PathBuf,
    },
}

/// Load BotConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<BotConfig> {
    BotConfig::load(token)
}
