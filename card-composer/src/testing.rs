//! In-memory assets for rendering without template files: a flat background and block glyphs.
//! Compiled for this crate's tests and for dependents enabling the `test-util` feature.

use std::io::Cursor;
use std::sync::Arc;

use image::{DynamicImage, ImageError, ImageFormat, Rgb, RgbImage};

use crate::assets::{AssetLoader, CardAssets};
use crate::error::ComposeError;
use crate::font::TitleFont;

/// Color of the flat test background.
pub const BACKGROUND: Rgb<u8> = Rgb([20, 30, 60]);

/// Every char advances `advance` px; non-space chars are drawn as solid boxes `height` px tall.
pub struct BlockFont {
    pub advance: f32,
    pub height: u32,
}

impl TitleFont for BlockFont {
    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.advance
    }

    fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>) {
        let glyph_width = (self.advance as u32).saturating_sub(4);
        for (i, ch) in text.chars().enumerate() {
            if ch.is_whitespace() {
                continue;
            }
            let left = x + (i as f32 * self.advance) as i32;
            for dy in 0..self.height {
                for dx in 0..glyph_width {
                    let px = (left + dx as i32) as u32;
                    let py = y as u32 + dy;
                    if px < canvas.width() && py < canvas.height() {
                        canvas.put_pixel(px, py, color);
                    }
                }
            }
        }
    }
}

/// Hands out the same assets for every composition.
pub struct StaticAssets(pub CardAssets);

impl AssetLoader for StaticAssets {
    fn load(&self) -> Result<CardAssets, ComposeError> {
        Ok(self.0.clone())
    }
}

/// Loader standing in for a missing template file.
pub struct MissingAssets;

impl AssetLoader for MissingAssets {
    fn load(&self) -> Result<CardAssets, ComposeError> {
        Err(ComposeError::InvalidFont("SFUIDisplay-Bold.ttf".into()))
    }
}

/// Quarter-size flat background and 80 px block glyphs: 22 glyphs fit on one title line.
pub fn static_assets() -> Arc<dyn AssetLoader> {
    Arc::new(StaticAssets(CardAssets {
        background: DynamicImage::ImageRgb8(RgbImage::from_pixel(540, 960, BACKGROUND)),
        font: Arc::new(BlockFont {
            advance: 80.0,
            height: 110,
        }),
    }))
}

/// Solid-color image encoded in `format`.
pub fn encoded_image(
    color: Rgb<u8>,
    width: u32,
    height: u32,
    format: ImageFormat,
) -> Result<Vec<u8>, ImageError> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, color))
        .write_to(&mut Cursor::new(&mut bytes), format)?;
    Ok(bytes)
}

/// True when every channel is within `tolerance` (JPEG is lossy).
pub fn close_to(actual: Rgb<u8>, expected: Rgb<u8>, tolerance: i16) -> bool {
    actual
        .0
        .iter()
        .zip(expected.0.iter())
        .all(|(a, e)| (*a as i16 - *e as i16).abs() <= tolerance)
}
