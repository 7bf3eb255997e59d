//! Application config loaded from environment variables.

use anyhow::Result;
use news_telegram::TelegramConfig;
use std::env;
use std::path::PathBuf;

use card_handlers::DEFAULT_SITE_DOMAIN;

/// Where the card template comes from and where logs and debug copies go. Needs no token, so
/// the `render` command can use it alone.
#[derive(Debug, Clone)]
pub struct CardConfig {
    /// LOG_FILE
    pub log_file: String,
    /// SITE_DOMAIN: substring an article link must contain
    pub site_domain: String,
    /// BACKGROUND_PATH
    pub background_path: PathBuf,
    /// FONT_PATH
    pub font_path: PathBuf,
    /// DEBUG_OUTPUT_PATH; empty disables the debug copy
    pub debug_output_path: Option<PathBuf>,
}

impl CardConfig {
    pub fn from_env() -> Self {
        let log_file =
            env::var("LOG_FILE").unwrap_or_else(|_| "logs/news-card-bot.log".to_string());
        let site_domain =
            env::var("SITE_DOMAIN").unwrap_or_else(|_| DEFAULT_SITE_DOMAIN.to_string());
        let background_path = env::var("BACKGROUND_PATH")
            .unwrap_or_else(|_| "Fundo.jpeg".to_string())
            .into();
        let font_path = env::var("FONT_PATH")
            .unwrap_or_else(|_| "SFUIDisplay-Bold.ttf".to_string())
            .into();
        let debug_output_path = match env::var("DEBUG_OUTPUT_PATH") {
            Ok(path) if path.trim().is_empty() => None,
            Ok(path) => Some(PathBuf::from(path)),
            Err(_) => Some(PathBuf::from("teste_saida.jpg")),
        };

        Self {
            log_file,
            site_domain,
            background_path,
            font_path,
            debug_output_path,
        }
    }
}

/// Full bot config: Telegram connectivity plus card settings.
#[derive(Debug, Clone)]
pub struct BotConfig {
    /// BOT_TOKEN
    pub bot_token: String,
    /// TELEGRAM_API_URL or TELOXIDE_API_URL
    pub telegram_api_url: Option<String>,
    pub card: CardConfig,
}

impl BotConfig {
    /// Load from environment variables. `token` overrides BOT_TOKEN if provided.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(token) => token,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        if bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN not set");
        }
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();

        Ok(Self {
            bot_token,
            telegram_api_url,
            card: CardConfig::from_env(),
        })
    }

    /// Transport-level view of this config.
    pub fn telegram(&self) -> TelegramConfig {
        TelegramConfig {
            bot_token: self.bot_token.clone(),
            telegram_api_url: self.telegram_api_url.clone(),
        }
    }

    /// Validate config (telegram_api_url must be a valid URL if set).
    pub fn validate(&self) -> Result<()> {
        self.telegram().api_url()?;
        Ok(())
    }
}
