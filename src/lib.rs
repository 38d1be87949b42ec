// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Bitmap font assets for RustPixel.
//!
//! A bitmap font is a texture holding every glyph plus a description of
//! where each glyph sits and how far the pen moves after it. This crate
//! turns that description (AngelCode .fnt text or its JSON form) into a
//! glyph atlas the text renderer queries per character.
//!
//! Loading and owning the texture, laying out text and building quads are
//! left to the engine: the atlas only keeps a shared reference to the
//! texture and answers "which rect / offsets / advance for this char".
//!
//! ```
//! use pixel_font::font::{BitmapFont, SpriteFrame};
//! use pixel_font::asset::Asset;
//! use std::rc::Rc;
//!
//! let texture = Rc::new("pixel.png".to_string());
//! let mut font = BitmapFont::with_location("pixel.fnt")
//!     .with_sprite_frame(SpriteFrame::new(texture));
//! font.set_data(b"char id=65 x=0 y=0 width=10 height=12 xoffset=1 yoffset=2 xadvance=11\n");
//! font.parse().unwrap();
//! let a = font.get_definition_for_char('A').unwrap();
//! assert_eq!(a.x_advance, 11.0);
//! assert!(font.get_definition_for_char('B').is_none());
//! ```

/// font resource manager, fonts are registered explicitly by the engine
pub mod asset;

/// error type
pub mod error;

/// glyph definition, glyph atlas, font config and the bitmap font asset
pub mod font;

/// log
pub mod log;

/// path helpers
pub mod util;

pub use error::{FontError, Result};
