//! # article-extractor
//!
//! Fetches an article page and pulls the title and thumbnail URL from known attribute locations.
//! Failures never escape [`ArticleExtractor::extract`]: they are logged and mapped to
//! [`ArticleInfo::extraction_failed`], so callers always get something to render.

mod document;
mod error;
mod extractor;

pub use document::{DocumentQuery, HtmlDocument};
pub use error::ExtractionError;
pub use extractor::{
    parse_article, ArticleExtractor, ArticleInfo, ArticleSource, EXTRACTION_FAILED_TITLE,
    THUMBNAIL_ATTRIBUTE, THUMBNAIL_SELECTOR, TITLE_ATTRIBUTE, TITLE_NOT_FOUND, TITLE_SELECTOR,
};
