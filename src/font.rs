// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! # Bitmap font
//!
//! - `glyph`: glyph definition (atlas rect, offsets, advance)
//! - `atlas`: glyph table bound to one shared texture
//! - `config`: font description, from JSON or AngelCode .fnt text
//! - `bitmap_font`: the font asset, builds the atlas on load
//!
//! Only a single texture page is supported, every glyph has
//! `texture_id == 0`. Kerning pairs are not read.

pub mod atlas;
pub mod bitmap_font;
pub mod config;
pub mod glyph;

pub use atlas::GlyphAtlas;
pub use bitmap_font::{BitmapFont, LoadOutcome, SpriteFrame};
pub use config::{FntConfig, FontDefEntry, GlyphRect};
pub use glyph::{char_key, GlyphDefinition, GlyphKey};
