//! Fixed geometry of the news card template.

use std::time::Duration;

use image::Rgb;

/// Pixel geometry of the card. Drawing happens on the working canvas (twice the final size in
/// each dimension) so the final downsample anti-aliases the text.
///
/// The coordinates are tuned to one background template; they are not validated against it.
#[derive(Debug, Clone)]
pub struct CardLayout {
    pub working_width: u32,
    pub working_height: u32,
    pub final_width: u32,
    pub final_height: u32,
    pub font_size: f32,
    pub max_text_width: f32,
    pub text_origin: (i32, i32),
    pub line_pitch: i32,
    pub text_color: Rgb<u8>,
    pub thumbnail_width: u32,
    pub thumbnail_height: u32,
    pub thumbnail_origin: (i64, i64),
    pub thumbnail_timeout: Duration,
}

impl Default for CardLayout {
    fn default() -> Self {
        Self {
            working_width: 2160,
            working_height: 3840,
            final_width: 1080,
            final_height: 1920,
            font_size: 128.0,
            max_text_width: 1760.0,
            text_origin: (180, 500),
            line_pitch: 150,
            text_color: Rgb([255, 255, 255]),
            thumbnail_width: 1800,
            thumbnail_height: 1200,
            thumbnail_origin: (180, 1200),
            thumbnail_timeout: Duration::from_secs(10),
        }
    }
}

impl CardLayout {
    /// Same layout with a different thumbnail timeout.
    pub fn with_thumbnail_timeout(mut self, timeout: Duration) -> Self {
        self.thumbnail_timeout = timeout;
        self
    }
}
