//! CPU side of card composition: draw on the working canvas, downsample, encode.

use std::io::Cursor;

use image::imageops::{self, FilterType};
use image::{DynamicImage, ImageFormat};
use tracing::debug;

use crate::assets::CardAssets;
use crate::composer::ComposedImage;
use crate::error::ComposeError;
use crate::layout::CardLayout;
use crate::wrap::wrap_lines;

/// Renders one card. Text is drawn before the thumbnail, so a title long enough to reach the
/// thumbnail area is covered by it.
pub fn render_card(
    assets: &CardAssets,
    layout: &CardLayout,
    title: &str,
    thumbnail: Option<&DynamicImage>,
) -> Result<ComposedImage, ComposeError> {
    let mut canvas = imageops::resize(
        &assets.background.to_rgb8(),
        layout.working_width,
        layout.working_height,
        FilterType::CatmullRom,
    );

    let font = assets.font.as_ref();
    let lines = wrap_lines(title, |s| font.text_width(s), layout.max_text_width);
    debug!(line_count = lines.len(), "Title wrapped");

    let (x, mut y) = layout.text_origin;
    for line in &lines {
        font.draw(&mut canvas, x, y, line, layout.text_color);
        y += layout.line_pitch;
    }

    if let Some(thumbnail) = thumbnail {
        let resized = imageops::resize(
            &thumbnail.to_rgb8(),
            layout.thumbnail_width,
            layout.thumbnail_height,
            FilterType::CatmullRom,
        );
        let (tx, ty) = layout.thumbnail_origin;
        imageops::replace(&mut canvas, &resized, tx, ty);
    }

    let downsampled = imageops::resize(
        &canvas,
        layout.final_width,
        layout.final_height,
        FilterType::Lanczos3,
    );

    let mut bytes = Vec::new();
    DynamicImage::ImageRgb8(downsampled).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Jpeg)?;

    Ok(ComposedImage {
        bytes,
        width: layout.final_width,
        height: layout.final_height,
    })
}
