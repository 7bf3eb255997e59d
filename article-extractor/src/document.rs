//! Typed attribute lookup over a parsed page.

use scraper::{Html, Selector};

/// Read-only query capability over a document model.
pub trait DocumentQuery {
    /// Value of `attribute` on the first element matching the CSS `selector`.
    /// `None` when nothing matches, the attribute is missing, or the selector is invalid.
    fn find_attribute(&self, selector: &str, attribute: &str) -> Option<String>;
}

/// [`DocumentQuery`] backed by scraper's HTML5 parser.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }
}

impl DocumentQuery for HtmlDocument {
    fn find_attribute(&self, selector: &str, attribute: &str) -> Option<String> {
        let selector = Selector::parse(selector).ok()?;
        self.html
            .select(&selector)
            .next()
            .and_then(|element| element.value().attr(attribute))
            .map(str::to_string)
    }
}
