// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! BitmapFont asset.
//!
//! Holds the font description (raw .fnt text and/or a parsed `FntConfig`)
//! and the sprite frame carrying the atlas texture. `on_loaded` turns the
//! config into a `GlyphAtlas` that the text renderer queries per character.
//!
//! The atlas is created once, on the first load that has a sprite frame,
//! and is never rebound afterwards. Each load re-adds every glyph of the
//! current config on top of what is already there, glyphs that are only
//! in an earlier config stay in the atlas.

use super::{
    atlas::GlyphAtlas,
    config::FntConfig,
    glyph::{GlyphDefinition, GlyphKey},
};
use crate::{
    asset::{Asset, AssetBase, AssetState},
    error::Result,
};
use log::{debug, warn};
use std::rc::Rc;

/// Sprite frame of the font texture. The texture is shared with the
/// sprite/material system.
pub struct SpriteFrame<T> {
    pub texture: Option<Rc<T>>,
}

impl<T> SpriteFrame<T> {
    pub fn new(texture: Rc<T>) -> Self {
        Self {
            texture: Some(texture),
        }
    }

    /// A frame whose texture is not available (yet)
    pub fn empty() -> Self {
        Self { texture: None }
    }
}

impl<T> Clone for SpriteFrame<T> {
    fn clone(&self) -> Self {
        Self {
            texture: self.texture.clone(),
        }
    }
}

/// What `on_loaded` did
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LoadOutcome {
    /// Glyphs written into the atlas
    Populated(usize),
    /// No fnt config, nothing populated
    MissingConfig,
    /// Config present but no atlas to write into (no sprite frame yet)
    MissingAtlas,
}

pub struct BitmapFont<T> {
    base: AssetBase,
    /// Raw font description (.fnt text)
    pub fnt_data_str: String,
    pub sprite_frame: Option<SpriteFrame<T>>,
    /// Declared font size, -1 when unspecified
    pub font_size: i32,
    pub fnt_config: Option<FntConfig>,
    font_def_dictionary: Option<GlyphAtlas<T>>,
}

impl<T> Default for BitmapFont<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> BitmapFont<T> {
    pub fn new() -> Self {
        Self::with_location("")
    }

    pub fn with_location(loc: &str) -> Self {
        Self {
            base: AssetBase::new(loc),
            fnt_data_str: String::new(),
            sprite_frame: None,
            font_size: -1,
            fnt_config: None,
            font_def_dictionary: None,
        }
    }

    pub fn with_sprite_frame(mut self, sprite_frame: SpriteFrame<T>) -> Self {
        self.sprite_frame = Some(sprite_frame);
        self
    }

    pub fn with_fnt_config(mut self, cfg: FntConfig) -> Self {
        self.fnt_config = Some(cfg);
        self
    }

    /// Change the sprite frame. An atlas that already exists keeps
    /// the texture it was created with.
    pub fn set_sprite_frame(&mut self, sprite_frame: Option<SpriteFrame<T>>) {
        self.sprite_frame = sprite_frame;
    }

    pub fn set_fnt_config(&mut self, cfg: Option<FntConfig>) {
        self.fnt_config = cfg;
    }

    pub fn location(&self) -> &str {
        &self.base.location
    }

    pub fn state(&self) -> AssetState {
        self.base.state
    }

    /// The glyph atlas, `None` until a load ran with a sprite frame
    pub fn font_def_dictionary(&self) -> Option<&GlyphAtlas<T>> {
        self.font_def_dictionary.as_ref()
    }

    pub fn font_def_dictionary_mut(&mut self) -> Option<&mut GlyphAtlas<T>> {
        self.font_def_dictionary.as_mut()
    }

    pub fn get_definition_for_char(&self, ch: char) -> Option<&GlyphDefinition> {
        self.font_def_dictionary.as_ref()?.get_definition_for_char(ch)
    }

    pub fn get_definition(&self, key: GlyphKey) -> Option<&GlyphDefinition> {
        self.font_def_dictionary.as_ref()?.get_definition(key)
    }

    /// Parse `fnt_data_str` into `fnt_config`. The parsed size is
    /// adopted only when no font size was declared.
    pub fn parse_fnt_data(&mut self) -> Result<()> {
        let cfg = FntConfig::from_fnt(&self.fnt_data_str)?;
        if self.font_size < 0 && cfg.font_size > 0.0 {
            self.font_size = cfg.font_size as i32;
        }
        self.fnt_config = Some(cfg);
        Ok(())
    }

    /// Build or refresh the glyph atlas from the current config.
    pub fn on_loaded(&mut self) -> LoadOutcome {
        if self.font_def_dictionary.is_none() {
            if let Some(sf) = &self.sprite_frame {
                self.font_def_dictionary = Some(GlyphAtlas::new(sf.texture.clone()));
            }
        }
        self.base.state = AssetState::Loaded;

        let cfg = match &self.fnt_config {
            Some(cfg) => cfg,
            None => {
                warn!("The fnt config does not exist! font={}", self.base.location);
                return LoadOutcome::MissingConfig;
            }
        };
        let atlas = match self.font_def_dictionary.as_mut() {
            Some(atlas) => atlas,
            None => {
                warn!(
                    "font {} has no sprite frame, {} glyphs not loaded",
                    self.base.location,
                    cfg.font_def_dictionary.len()
                );
                return LoadOutcome::MissingAtlas;
            }
        };

        for (key, def) in &cfg.font_def_dictionary {
            let letter = GlyphDefinition {
                u: def.rect.x,
                v: def.rect.y,
                w: def.rect.width,
                h: def.rect.height,
                offset_x: def.x_offset,
                offset_y: def.y_offset,
                // only one texture page is supported
                texture_id: 0,
                valid: true,
                x_advance: def.x_advance,
            };
            atlas.add_definition(*key, letter);
        }
        debug!(
            "font {} loaded {} glyphs, atlas size {}",
            self.base.location,
            cfg.font_def_dictionary.len(),
            atlas.len()
        );
        LoadOutcome::Populated(cfg.font_def_dictionary.len())
    }
}

impl<T> Asset for BitmapFont<T> {
    fn get_base(&mut self) -> &mut AssetBase {
        &mut self.base
    }

    fn set_data(&mut self, data: &[u8]) {
        self.base.raw_data.clear();
        self.base.raw_data.extend(data);
        self.fnt_data_str = String::from_utf8_lossy(data).into_owned();
    }

    fn parse(&mut self) -> Result<()> {
        if !self.fnt_data_str.trim().is_empty() {
            self.parse_fnt_data()?;
        }
        self.on_loaded();
        Ok(())
    }
}
