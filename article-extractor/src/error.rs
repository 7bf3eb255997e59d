use thiserror::Error;

/// Why a single article fetch could not produce markup.
#[derive(Error, Debug)]
pub enum ExtractionError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),

    #[error("unreadable response body: {0}")]
    Body(#[source] reqwest::Error),
}
