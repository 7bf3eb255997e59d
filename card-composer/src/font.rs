//! Title font: width measurement for wrapping and glyph rasterization onto the canvas.

use image::{Rgb, RgbImage};
use rusttype::{point, Font, Scale};

/// A font at a fixed pixel size.
pub trait TitleFont: Send + Sync {
    /// Horizontal advance of `text` in pixels, kerning included.
    fn text_width(&self, text: &str) -> f32;

    /// Draws `text` with its top (ascender line) at `y` and its left edge at `x`.
    fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>);
}

/// TrueType/OpenType font rendered with rusttype.
pub struct TrueTypeFont {
    font: Font<'static>,
    scale: Scale,
}

impl TrueTypeFont {
    /// Parses font bytes; `None` when the data is not a usable font.
    pub fn from_bytes(bytes: Vec<u8>, px: f32) -> Option<Self> {
        let font = Font::try_from_vec(bytes)?;
        Some(Self {
            font,
            scale: Scale::uniform(px),
        })
    }
}

impl TitleFont for TrueTypeFont {
    fn text_width(&self, text: &str) -> f32 {
        let mut width = 0.0;
        let mut previous = None;
        for ch in text.chars() {
            let glyph = self.font.glyph(ch).scaled(self.scale);
            let id = glyph.id();
            if let Some(prev) = previous {
                width += self.font.pair_kerning(self.scale, prev, id);
            }
            width += glyph.h_metrics().advance_width;
            previous = Some(id);
        }
        width
    }

    fn draw(&self, canvas: &mut RgbImage, x: i32, y: i32, text: &str, color: Rgb<u8>) {
        let v_metrics = self.font.v_metrics(self.scale);
        let baseline = point(x as f32, y as f32 + v_metrics.ascent);

        for glyph in self.font.layout(text, self.scale, baseline) {
            let Some(bb) = glyph.pixel_bounding_box() else {
                continue;
            };
            glyph.draw(|gx, gy, coverage| {
                let px = gx as i32 + bb.min.x;
                let py = gy as i32 + bb.min.y;
                if px < 0 || py < 0 {
                    return;
                }
                let (px, py) = (px as u32, py as u32);
                if px >= canvas.width() || py >= canvas.height() {
                    return;
                }
                blend(canvas.get_pixel_mut(px, py), color, coverage);
            });
        }
    }
}

/// Alpha-blends `color` over `dst` with the given glyph coverage (0.0..=1.0).
fn blend(dst: &mut Rgb<u8>, color: Rgb<u8>, coverage: f32) {
    let a = coverage.clamp(0.0, 1.0);
    if a == 0.0 {
        return;
    }
    let inv = 1.0 - a;
    for c in 0..3 {
        dst.0[c] = (color.0[c] as f32 * a + dst.0[c] as f32 * inv).round() as u8;
    }
}
