// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! One glyph of a bitmap font: where it sits in the atlas texture
//! and how the layout engine should place it.

/// Glyph key. A config entry's id, or a character's code point.
pub type GlyphKey = u32;

/// Derives the lookup key for a character
#[inline]
pub fn char_key(ch: char) -> GlyphKey {
    ch as GlyphKey
}

/// Glyph definition
///
/// Default is the zero/invalid glyph: every number 0 and `valid == false`.
/// Glyphs built from a font config are always `valid`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GlyphDefinition {
    /// Rect origin in the atlas texture (pixels)
    pub u: f32,
    pub v: f32,
    /// Rect size in the atlas texture (pixels)
    pub w: f32,
    pub h: f32,
    /// Offset from the pen position to the rect's top-left
    pub offset_x: f32,
    pub offset_y: f32,
    /// Texture page, only page 0 is supported
    pub texture_id: u32,
    pub valid: bool,
    /// Pen advance after drawing
    pub x_advance: f32,
}
