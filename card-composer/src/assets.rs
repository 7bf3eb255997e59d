//! Background template and font, loaded per composition.

use std::path::PathBuf;
use std::sync::Arc;

use image::DynamicImage;

use crate::error::ComposeError;
use crate::font::{TitleFont, TrueTypeFont};

/// Resources one composition draws with.
#[derive(Clone)]
pub struct CardAssets {
    pub background: DynamicImage,
    pub font: Arc<dyn TitleFont>,
}

/// Supplies [`CardAssets`] for each composition.
pub trait AssetLoader: Send + Sync {
    fn load(&self) -> Result<CardAssets, ComposeError>;
}

/// Reads the background image and font file from disk on every call. Nothing is cached, so
/// replacing a file takes effect on the next card.
#[derive(Debug, Clone)]
pub struct FileAssetLoader {
    background_path: PathBuf,
    font_path: PathBuf,
    font_size: f32,
}

impl FileAssetLoader {
    pub fn new(background_path: impl Into<PathBuf>, font_path: impl Into<PathBuf>, font_size: f32) -> Self {
        Self {
            background_path: background_path.into(),
            font_path: font_path.into(),
            font_size,
        }
    }
}

impl AssetLoader for FileAssetLoader {
    fn load(&self) -> Result<CardAssets, ComposeError> {
        let background =
            image::open(&self.background_path).map_err(|source| ComposeError::Background {
                path: self.background_path.clone(),
                source,
            })?;

        let font_bytes = std::fs::read(&self.font_path).map_err(|source| ComposeError::FontRead {
            path: self.font_path.clone(),
            source,
        })?;
        let font = TrueTypeFont::from_bytes(font_bytes, self.font_size)
            .ok_or_else(|| ComposeError::InvalidFont(self.font_path.clone()))?;

        Ok(CardAssets {
            background,
            font: Arc::new(font),
        })
    }
}
