//! Builds the composer and handler chain from config.

use std::sync::Arc;

use article_extractor::ArticleSource;
use card_composer::{CardComposer, CardLayout, FileAssetLoader};
use card_handlers::{ArticleLinkHandler, StartHandler};
use handler_chain::HandlerChain;
use news_core::Bot;

use crate::config::CardConfig;

/// Composer reading the template files named in config on every card.
pub fn build_composer(config: &CardConfig) -> CardComposer {
    let layout = CardLayout::default();
    let assets = FileAssetLoader::new(
        &config.background_path,
        &config.font_path,
        layout.font_size,
    );
    let composer = CardComposer::new(layout, Arc::new(assets));
    match config.debug_output_path {
        Some(ref path) => composer.with_debug_output(path),
        None => composer,
    }
}

/// Chain order: `/start` first, then the article link handler which answers everything else.
/// `bot_username` lets `/start@<username>` through in groups.
pub fn build_handler_chain(
    config: &CardConfig,
    bot: Arc<dyn Bot>,
    articles: Arc<dyn ArticleSource>,
    composer: Arc<CardComposer>,
    bot_username: Option<String>,
) -> HandlerChain {
    let link_handler = ArticleLinkHandler::new(bot.clone(), articles, composer)
        .with_site_domain(config.site_domain.clone());
    let start_handler = match bot_username {
        Some(username) => StartHandler::new(bot).with_bot_username(username),
        None => StartHandler::new(bot),
    };

    HandlerChain::new()
        .add_handler(Arc::new(start_handler))
        .add_handler(Arc::new(link_handler))
}
