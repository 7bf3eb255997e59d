use anyhow::{Context, Result};
use article_extractor::{ArticleExtractor, ArticleSource};
use news_core::init_tracing;
use news_telegram::{build_teloxide_bot, fetch_bot_username, run_repl, TelegramBotAdapter};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument};

use crate::components::{build_composer, build_handler_chain};
use crate::config::{BotConfig, CardConfig};

/// Main entry: validate config, init logging, build components, run the REPL until shutdown.
#[instrument(skip(config))]
pub async fn run_bot(config: BotConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.card.log_file)?;

    info!(
        site_domain = %config.card.site_domain,
        background_path = %config.card.background_path.display(),
        font_path = %config.card.font_path.display(),
        "Initializing bot"
    );

    let teloxide_bot = build_teloxide_bot(&config.telegram())?;
    let bot_username = fetch_bot_username(&teloxide_bot).await;
    let bot = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let composer = Arc::new(build_composer(&config.card));
    let handler_chain = build_handler_chain(
        &config.card,
        bot,
        Arc::new(ArticleExtractor::new()),
        composer,
        bot_username,
    );

    info!("Bot running, waiting for article links");
    run_repl(teloxide_bot, handler_chain).await
}

/// Extracts and composes one card for `url`, writing the JPEG to `output`.
#[instrument(skip(config))]
pub async fn render_once(config: CardConfig, url: &str, output: &Path) -> Result<()> {
    init_tracing(&config.log_file)?;

    let article = ArticleExtractor::new().extract(url).await;
    let card = build_composer(&config)
        .compose(&article.title, article.thumbnail_url.as_deref())
        .await?;

    tokio::fs::write(output, &card.bytes)
        .await
        .with_context(|| format!("failed to write card to {}", output.display()))?;

    info!(
        output = %output.display(),
        title = %article.title,
        width = card.width,
        height = card.height,
        "Card written"
    );
    Ok(())
}
