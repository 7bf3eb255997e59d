use std::path::PathBuf;

use thiserror::Error;

/// Failures that prevent a card from being produced at all.
#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("failed to load background {path}: {source}")]
    Background {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to read font {path}: {source}")]
    FontRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid font data in {0}")]
    InvalidFont(PathBuf),

    #[error("failed to encode card: {0}")]
    Encode(#[from] image::ImageError),

    #[error("render task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

/// Why the thumbnail overlay was skipped. Never fatal to a composition.
#[derive(Error, Debug)]
pub enum ThumbnailError {
    #[error("request failed: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(reqwest::StatusCode),

    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),
}
