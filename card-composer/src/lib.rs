//! # card-composer
//!
//! Builds the shareable news card: background template upscaled to a working canvas, wrapped
//! title drawn in white, optional thumbnail pasted below it, then downsampled and JPEG-encoded.
//!
//! Layout values live in [`CardLayout`]; fonts and the background come from an [`AssetLoader`]
//! so tests can render with in-memory assets.

mod assets;
mod composer;
mod error;
mod font;
mod layout;
mod render;
#[cfg(any(test, feature = "test-util"))]
pub mod testing;
mod wrap;

pub use assets::{AssetLoader, CardAssets, FileAssetLoader};
pub use composer::{CardComposer, ComposedImage};
pub use error::{ComposeError, ThumbnailError};
pub use font::{TitleFont, TrueTypeFont};
pub use layout::CardLayout;
pub use render::render_card;
pub use wrap::wrap_lines;
