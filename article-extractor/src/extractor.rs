//! Article fetch and title/thumbnail lookup.

use async_trait::async_trait;
use tracing::{error, info, instrument, warn};

use crate::document::{DocumentQuery, HtmlDocument};
use crate::error::ExtractionError;

pub const TITLE_SELECTOR: &str = "div.news-ctn";
pub const TITLE_ATTRIBUTE: &str = "data-page-title";
pub const THUMBNAIL_SELECTOR: &str = "div.news-details-image";
pub const THUMBNAIL_ATTRIBUTE: &str = "data-thumb-url";

/// Title used when the page loaded but carries no title attribute.
pub const TITLE_NOT_FOUND: &str = "Título não encontrado.";
/// Title used when the page could not be fetched at all.
pub const EXTRACTION_FAILED_TITLE: &str = "Erro ao acessar a página.";

/// What one article page yields for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticleInfo {
    pub title: String,
    pub thumbnail_url: Option<String>,
}

impl ArticleInfo {
    /// Fallback for a failed fetch: sentinel title, no thumbnail.
    pub fn extraction_failed() -> Self {
        Self {
            title: EXTRACTION_FAILED_TITLE.to_string(),
            thumbnail_url: None,
        }
    }
}

/// Reads title and thumbnail from a document. Missing pieces degrade to sentinels, never errors.
pub fn parse_article(document: &dyn DocumentQuery) -> ArticleInfo {
    let title = document
        .find_attribute(TITLE_SELECTOR, TITLE_ATTRIBUTE)
        .map(|t| t.trim().to_string())
        .unwrap_or_else(|| TITLE_NOT_FOUND.to_string());
    let thumbnail_url = document.find_attribute(THUMBNAIL_SELECTOR, THUMBNAIL_ATTRIBUTE);
    ArticleInfo {
        title,
        thumbnail_url,
    }
}

/// Source of article data for a link. The handler depends on this seam so tests can substitute it.
#[async_trait]
pub trait ArticleSource: Send + Sync {
    /// Always returns a usable [`ArticleInfo`]; failures are absorbed by the implementation.
    async fn extract(&self, url: &str) -> ArticleInfo;
}

/// Fetches article pages over HTTP. One GET per call, no retry and no timeout.
#[derive(Clone, Default)]
pub struct ArticleExtractor {
    client: reqwest::Client,
}

impl ArticleExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetches `url` and parses it. Errors on transport failure, non-success status or unreadable body.
    #[instrument(skip(self))]
    pub async fn try_extract(&self, url: &str) -> Result<ArticleInfo, ExtractionError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(ExtractionError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ExtractionError::Status(status));
        }

        let body = response.text().await.map_err(ExtractionError::Body)?;
        Ok(parse_markup(&body))
    }
}

fn parse_markup(body: &str) -> ArticleInfo {
    let document = HtmlDocument::parse(body);
    let info = parse_article(&document);
    if info.title == TITLE_NOT_FOUND {
        warn!("Article page has no title attribute");
    }
    info
}

#[async_trait]
impl ArticleSource for ArticleExtractor {
    async fn extract(&self, url: &str) -> ArticleInfo {
        match self.try_extract(url).await {
            Ok(info) => {
                info!(
                    title = %info.title,
                    thumbnail_url = ?info.thumbnail_url,
                    "Article extracted"
                );
                info
            }
            Err(e) => {
                error!(error = %e, url = %url, "Failed to extract article");
                ArticleInfo::extraction_failed()
            }
        }
    }
}
