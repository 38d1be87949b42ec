// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Asset module provides the font resource manager.
//!
//! Fonts are registered explicitly: the engine owns a `FontAssetManager`
//! and hands it raw .fnt data (read from disk, or delivered by JavaScript
//! after an async fetch in web mode). Nothing is registered globally.
//! Textures are loaded by the render adapter and passed in as a
//! `SpriteFrame`, the manager never touches image files.

use crate::{
    error::Result,
    font::{BitmapFont, SpriteFrame},
    util::get_abs_path,
};
use log::{error, info};
use std::collections::HashMap;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AssetState {
    Unloaded,
    Loaded,
}

#[derive(Debug)]
pub struct AssetBase {
    // web url or file pathname...
    pub location: String,
    // raw data in resource file
    pub raw_data: Vec<u8>,
    pub state: AssetState,
}

impl AssetBase {
    pub fn new(loc: &str) -> Self {
        Self {
            location: loc.to_string(),
            raw_data: vec![],
            state: AssetState::Unloaded,
        }
    }
}

pub trait Asset {
    fn get_base(&mut self) -> &mut AssetBase;

    fn set_data(&mut self, data: &[u8]) {
        let bs = self.get_base();
        bs.raw_data.clear();
        bs.raw_data.extend(data);
    }

    fn set_state(&mut self, st: AssetState) {
        self.get_base().state = st;
    }

    fn get_state(&mut self) -> AssetState {
        self.get_base().state
    }

    /// Decode raw data and bring the asset to `Loaded`
    fn parse(&mut self) -> Result<()>;
}

pub struct FontAssetManager<T> {
    pub fonts: Vec<BitmapFont<T>>,
    pub fonts_index: HashMap<String, usize>,
}

impl<T> Default for FontAssetManager<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FontAssetManager<T> {
    pub fn new() -> Self {
        Self {
            fonts: vec![],
            fonts_index: HashMap::new(),
        }
    }

    /// Register and parse a font from raw .fnt data.
    /// A location is loaded only once, later calls return the font
    /// already registered and ignore `data` and `sprite_frame`.
    pub fn load(
        &mut self,
        loc: &str,
        data: &[u8],
        sprite_frame: Option<SpriteFrame<T>>,
    ) -> Result<&mut BitmapFont<T>> {
        if let Some(&idx) = self.fonts_index.get(loc) {
            return Ok(&mut self.fonts[idx]);
        }
        let mut font = BitmapFont::with_location(loc);
        font.sprite_frame = sprite_frame;
        font.set_data(data);
        if let Err(e) = font.parse() {
            error!("font asset {} parse failed: {}", loc, e);
            return Err(e);
        }
        self.fonts.push(font);
        let idx = self.fonts.len() - 1;
        self.fonts_index.insert(loc.to_string(), idx);
        Ok(&mut self.fonts[idx])
    }

    /// Read a .fnt file (relative paths resolve against the asset root)
    /// and register it under `loc`.
    pub fn load_file(
        &mut self,
        loc: &str,
        sprite_frame: Option<SpriteFrame<T>>,
    ) -> Result<&mut BitmapFont<T>> {
        if let Some(&idx) = self.fonts_index.get(loc) {
            return Ok(&mut self.fonts[idx]);
        }
        let fpstr = get_abs_path(loc);
        let fdata = std::fs::read(&fpstr)?;
        info!("font asset load:{:?}", fpstr);
        self.load(loc, &fdata, sprite_frame)
    }

    pub fn get(&self, loc: &str) -> Option<&BitmapFont<T>> {
        self.fonts_index.get(loc).map(|idx| &self.fonts[*idx])
    }

    pub fn get_mut(&mut self, loc: &str) -> Option<&mut BitmapFont<T>> {
        match self.fonts_index.get(loc) {
            Some(idx) => Some(&mut self.fonts[*idx]),
            None => None,
        }
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}
