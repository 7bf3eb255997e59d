//! Article link → news card document.

use article_extractor::ArticleSource;
use async_trait::async_trait;
use card_composer::CardComposer;
use news_core::{Bot, Document, Handler, HandlerError, HandlerResponse, Message, Result};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::link::{is_article_link, DEFAULT_SITE_DOMAIN};

pub const MSG_PROCESSING: &str = "🔄 Processando o link...";
pub const MSG_INVALID_LINK: &str = "❗ Envie um link válido do site O Diário Online.";
pub const MSG_COMPOSE_FAILED: &str = "⚠️ Não foi possível gerar a imagem.";
pub const CARD_FILE_NAME: &str = "noticia.jpg";
pub const CARD_CAPTION: &str = "✅ Imagem pronta!";

/// Handles every text message that reaches it: article links become a card sent back as a
/// document, anything else gets a short guidance reply. Terminal handler of the chain.
#[derive(Clone)]
pub struct ArticleLinkHandler {
    bot: Arc<dyn Bot>,
    articles: Arc<dyn ArticleSource>,
    composer: Arc<CardComposer>,
    site_domain: String,
}

impl ArticleLinkHandler {
    pub fn new(
        bot: Arc<dyn Bot>,
        articles: Arc<dyn ArticleSource>,
        composer: Arc<CardComposer>,
    ) -> Self {
        Self {
            bot,
            articles,
            composer,
            site_domain: DEFAULT_SITE_DOMAIN.to_string(),
        }
    }

    /// Accept links for another domain.
    pub fn with_site_domain(mut self, site_domain: impl Into<String>) -> Self {
        self.site_domain = site_domain.into();
        self
    }

    /// Extract, compose, send. Only a compose failure (missing template assets) or a failed
    /// send ends in an error.
    async fn process_link(&self, message: &Message, url: &str) -> Result<HandlerResponse> {
        self.bot.reply_to(message, MSG_PROCESSING).await?;

        let article = self.articles.extract(url).await;
        info!(
            chat_id = message.chat.id,
            title = %article.title,
            thumbnail_url = ?article.thumbnail_url,
            "Article ready for composition"
        );

        let card = match self
            .composer
            .compose(&article.title, article.thumbnail_url.as_deref())
            .await
        {
            Ok(card) => card,
            Err(e) => {
                if let Err(send_err) = self.bot.reply_to(message, MSG_COMPOSE_FAILED).await {
                    warn!(
                        error = %send_err,
                        chat_id = message.chat.id,
                        "Failed to report compose failure"
                    );
                }
                return Err(HandlerError::Compose(e.to_string()).into());
            }
        };

        let document = Document::new(CARD_FILE_NAME, card.bytes).with_caption(CARD_CAPTION);
        self.bot.send_document(&message.chat, document).await?;

        info!(chat_id = message.chat.id, url = %url, "Card sent");
        Ok(HandlerResponse::Stop)
    }
}

#[async_trait]
impl Handler for ArticleLinkHandler {
    #[instrument(skip(self, message))]
    async fn handle(&self, message: &Message) -> Result<HandlerResponse> {
        let Some(text) = message.trimmed_text() else {
            debug!(chat_id = message.chat.id, "Message without text, ignoring");
            return Ok(HandlerResponse::Stop);
        };

        if !is_article_link(text, &self.site_domain) {
            self.bot.reply_to(message, MSG_INVALID_LINK).await?;
            return Ok(HandlerResponse::Stop);
        }

        self.process_link(message, text).await
    }
}
