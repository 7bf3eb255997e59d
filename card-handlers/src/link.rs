//! Cheap filter deciding whether chat text is an article link.

/// Domain the bot renders cards for.
pub const DEFAULT_SITE_DOMAIN: &str = "odiarioonline.com.br";

/// True when `text` starts with `http` and mentions `site_domain` anywhere.
///
/// Deliberately loose: a link to another host carrying the domain in its query string also matches.
pub fn is_article_link(text: &str, site_domain: &str) -> bool {
    text.starts_with("http") && text.contains(site_domain)
}
