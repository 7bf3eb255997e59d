//! Minimal transport config: token and optional API URL. The application config builds it.

use anyhow::Result;

/// Minimal Telegram bot config (connectivity only).
#[derive(Debug, Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
}

impl TelegramConfig {
    /// Parses `telegram_api_url`; `None` when unset, error when set but invalid.
    pub fn api_url(&self) -> Result<Option<reqwest::Url>> {
        match self.telegram_api_url {
            Some(ref url_str) => {
                let url = reqwest::Url::parse(url_str).map_err(|e| {
                    anyhow::anyhow!(
                        "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {} ({})",
                        url_str,
                        e
                    )
                })?;
                Ok(Some(url))
            }
            None => Ok(None),
        }
    }
}
