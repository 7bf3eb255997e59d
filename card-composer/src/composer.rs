//! Async composition: asset loading, best-effort thumbnail fetch, rendering, debug copy.

use std::path::PathBuf;
use std::sync::Arc;

use image::DynamicImage;
use tracing::{info, instrument, warn};

use crate::assets::AssetLoader;
use crate::error::{ComposeError, ThumbnailError};
use crate::layout::CardLayout;
use crate::render::render_card;

/// Encoded JPEG and its pixel size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedImage {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Produces news cards. Holds no per-request state; one instance serves every chat.
#[derive(Clone)]
pub struct CardComposer {
    layout: CardLayout,
    assets: Arc<dyn AssetLoader>,
    client: reqwest::Client,
    debug_output_path: Option<PathBuf>,
}

impl CardComposer {
    pub fn new(layout: CardLayout, assets: Arc<dyn AssetLoader>) -> Self {
        Self {
            layout,
            assets,
            client: reqwest::Client::new(),
            debug_output_path: None,
        }
    }

    /// Also writes every encoded card to `path`, overwriting the previous one.
    pub fn with_debug_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.debug_output_path = Some(path.into());
        self
    }

    /// Composes a card for `title`, overlaying the thumbnail when it can be fetched.
    ///
    /// Fails only when the assets cannot be loaded or the result cannot be encoded; a missing
    /// or broken thumbnail just leaves the overlay area untouched.
    #[instrument(skip(self))]
    pub async fn compose(
        &self,
        title: &str,
        thumbnail_url: Option<&str>,
    ) -> Result<ComposedImage, ComposeError> {
        let loader = self.assets.clone();
        let assets = tokio::task::spawn_blocking(move || loader.load()).await??;

        let thumbnail = match thumbnail_url {
            Some(url) => self.fetch_thumbnail_or_skip(url).await,
            None => None,
        };

        let layout = self.layout.clone();
        let title = title.to_string();
        let image = tokio::task::spawn_blocking(move || {
            render_card(&assets, &layout, &title, thumbnail.as_ref())
        })
        .await??;

        info!(
            width = image.width,
            height = image.height,
            size_bytes = image.bytes.len(),
            "Card composed"
        );

        self.write_debug_copy(&image).await;
        Ok(image)
    }

    /// Single GET bounded by the layout's thumbnail timeout, then decode.
    pub async fn fetch_thumbnail(&self, url: &str) -> Result<DynamicImage, ThumbnailError> {
        let response = self
            .client
            .get(url)
            .timeout(self.layout.thumbnail_timeout)
            .send()
            .await
            .map_err(ThumbnailError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ThumbnailError::Status(status));
        }

        let body = response.bytes().await.map_err(ThumbnailError::Transport)?;
        image::load_from_memory(&body).map_err(ThumbnailError::Decode)
    }

    /// [`Self::fetch_thumbnail`] with failures logged and mapped to "no overlay".
    pub async fn fetch_thumbnail_or_skip(&self, url: &str) -> Option<DynamicImage> {
        match self.fetch_thumbnail(url).await {
            Ok(image) => {
                info!(thumbnail_url = %url, "Thumbnail fetched");
                Some(image)
            }
            Err(e) => {
                warn!(error = %e, thumbnail_url = %url, "Skipping thumbnail overlay");
                None
            }
        }
    }

    async fn write_debug_copy(&self, image: &ComposedImage) {
        let Some(ref path) = self.debug_output_path else {
            return;
        };
        if let Err(e) = tokio::fs::write(path, &image.bytes).await {
            warn!(error = %e, path = %path.display(), "Failed to write debug copy");
        }
    }
}
