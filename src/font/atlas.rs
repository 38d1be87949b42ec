// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Glyph atlas: a glyph table over one shared texture.
//!
//! The atlas only keeps an `Rc` to the texture, the texture itself is
//! loaded, owned and released by the render adapter. Lookups are exact:
//! a missing key is `None`, there is no fallback glyph.
//!
//! # Usage
//! ```
//! use pixel_font::font::{GlyphAtlas, GlyphDefinition};
//! use std::rc::Rc;
//!
//! let mut atlas = GlyphAtlas::new(Some(Rc::new("font.png")));
//! atlas.add_definition(65, GlyphDefinition { w: 8.0, h: 16.0, valid: true, ..Default::default() });
//! assert!(atlas.get_definition_for_char('A').is_some());
//! assert!(atlas.get_definition_for_char('B').is_none());
//! ```

use super::glyph::{char_key, GlyphDefinition, GlyphKey};
use log::trace;
use std::{cell::Cell, collections::HashMap, fmt, rc::Rc};

pub struct GlyphAtlas<T> {
    definitions: HashMap<GlyphKey, GlyphDefinition>,
    texture: Option<Rc<T>>,
    // lookups that found nothing, a hint for key space mismatches
    misses: Cell<usize>,
}

impl<T> GlyphAtlas<T> {
    /// Create an empty atlas bound to `texture`.
    /// `None` is accepted: the atlas can still be queried, it just
    /// can't be rendered.
    pub fn new(texture: Option<Rc<T>>) -> Self {
        Self::with_definitions(texture, HashMap::new())
    }

    /// Create an atlas from definitions cloned out of another atlas,
    /// e.g. for a variant font sharing the glyph layout.
    pub fn with_definitions(
        texture: Option<Rc<T>>,
        definitions: HashMap<GlyphKey, GlyphDefinition>,
    ) -> Self {
        Self {
            definitions,
            texture,
            misses: Cell::new(0),
        }
    }

    /// Insert or overwrite, last write wins
    pub fn add_definition(&mut self, key: GlyphKey, definition: GlyphDefinition) {
        self.definitions.insert(key, definition);
    }

    /// Deep copy of the glyph table
    pub fn clone_definitions(&self) -> HashMap<GlyphKey, GlyphDefinition> {
        self.definitions
            .iter()
            .map(|(k, d)| (*k, *d))
            .collect()
    }

    pub fn get_texture(&self) -> Option<&Rc<T>> {
        self.texture.as_ref()
    }

    pub fn get_definition(&self, key: GlyphKey) -> Option<&GlyphDefinition> {
        let def = self.definitions.get(&key);
        if def.is_none() {
            self.misses.set(self.misses.get() + 1);
            trace!("glyph atlas miss, key={}", key);
        }
        def
    }

    /// Lookup by the character's code point
    pub fn get_definition_for_char(&self, ch: char) -> Option<&GlyphDefinition> {
        self.get_definition(char_key(ch))
    }

    /// Drop every glyph, the texture binding stays
    pub fn clear(&mut self) {
        self.definitions.clear();
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &GlyphKey> {
        self.definitions.keys()
    }

    /// Number of lookups that returned `None` so far. A font whose
    /// config ids don't use code points shows up here as a miss on
    /// every character.
    pub fn lookup_misses(&self) -> usize {
        self.misses.get()
    }
}

impl<T> fmt::Debug for GlyphAtlas<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GlyphAtlas")
            .field("glyphs", &self.definitions.len())
            .field("has_texture", &self.texture.is_some())
            .field("misses", &self.misses.get())
            .finish()
    }
}
