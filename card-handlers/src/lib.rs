//! # card-handlers
//!
//! Handlers plugged into the handler chain: [`StartHandler`] answers `/start`,
//! [`ArticleLinkHandler`] turns an article link into a news card document.

mod article_link_handler;
mod link;
mod start_handler;

pub use article_link_handler::{
    ArticleLinkHandler, CARD_CAPTION, CARD_FILE_NAME, MSG_COMPOSE_FAILED, MSG_INVALID_LINK,
    MSG_PROCESSING,
};
pub use link::{is_article_link, DEFAULT_SITE_DOMAIN};
pub use start_handler::{StartHandler, MSG_READY};
