// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Font configuration: the parsed form of a bitmap font description.
//!
//! A `FntConfig` is normally persisted as JSON next to the font asset,
//! using the camelCase field names of the engine's asset files:
//!
//! ```json
//! {
//!   "commonHeight": 32, "fontSize": 32, "atlasName": "arial.png",
//!   "fontDefDictionary": {
//!     "65": { "rect": {"x": 0, "y": 0, "width": 10, "height": 12},
//!             "xOffset": 1, "yOffset": 2, "xAdvance": 11 }
//!   }
//! }
//! ```
//!
//! It can also be built straight from AngelCode BMFont text (.fnt):
//!
//! ```text
//! info face="Arial" size=32 bold=0 italic=0
//! common lineHeight=32 base=26 scaleW=256 scaleH=256 pages=1
//! page id=0 file="arial.png"
//! char id=65 x=0 y=0 width=10 height=12 xoffset=1 yoffset=2 xadvance=11 page=0 chnl=15
//! ```
//!
//! Only page 0 is kept and kerning lines are skipped.

use super::glyph::GlyphKey;
use crate::error::{FontError, Result};
use lazy_static::lazy_static;
use log::{debug, info};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

lazy_static! {
    static ref FNT_TAG: Regex = Regex::new(r"^\s*([A-Za-z]+)\b").unwrap();
    static ref FNT_PAIR: Regex = Regex::new(r#"(\w+)=("[^"]*"|\S+)"#).unwrap();
}

/// Glyph rectangle in the atlas texture, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct GlyphRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl GlyphRect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

/// One glyph entry of the config
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FontDefEntry {
    pub rect: GlyphRect,
    pub x_offset: f32,
    pub y_offset: f32,
    pub x_advance: f32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FntConfig {
    /// Line height
    pub common_height: f32,
    pub font_size: f32,
    /// Texture file of page 0
    pub atlas_name: String,
    /// Glyph entries keyed by their id (code point)
    pub font_def_dictionary: BTreeMap<GlyphKey, FontDefEntry>,
}

impl FntConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse AngelCode BMFont text.
    ///
    /// Missing numeric attributes read as 0. A `char` line without `id`
    /// or with a non-numeric value is an error.
    pub fn from_fnt(text: &str) -> Result<Self> {
        let mut cfg = FntConfig::default();
        for (idx, line) in text.lines().enumerate() {
            let lineno = idx + 1;
            let tag = match FNT_TAG.captures(line) {
                Some(cap) => cap[1].to_string(),
                None => continue,
            };
            let attrs = parse_attrs(line);
            match tag.as_str() {
                "info" => {
                    cfg.font_size = attr_f32(&attrs, "size", lineno)?.abs();
                }
                "common" => {
                    cfg.common_height = attr_f32(&attrs, "lineHeight", lineno)?;
                }
                "page" => {
                    let id = attr_f32(&attrs, "id", lineno)?;
                    if id == 0.0 {
                        if let Some(file) = attrs.get("file") {
                            cfg.atlas_name = file.clone();
                        }
                    } else {
                        debug!("fnt line {}: page {} ignored, single texture only", lineno, id);
                    }
                }
                "char" => {
                    let id = match attrs.get("id") {
                        Some(v) => v.parse::<GlyphKey>().map_err(|_| FontError::Parse {
                            line: lineno,
                            msg: format!("bad char id '{}'", v),
                        })?,
                        None => {
                            return Err(FontError::Parse {
                                line: lineno,
                                msg: "char without id".to_string(),
                            })
                        }
                    };
                    let entry = FontDefEntry {
                        rect: GlyphRect::new(
                            attr_f32(&attrs, "x", lineno)?,
                            attr_f32(&attrs, "y", lineno)?,
                            attr_f32(&attrs, "width", lineno)?,
                            attr_f32(&attrs, "height", lineno)?,
                        ),
                        x_offset: attr_f32(&attrs, "xoffset", lineno)?,
                        y_offset: attr_f32(&attrs, "yoffset", lineno)?,
                        x_advance: attr_f32(&attrs, "xadvance", lineno)?,
                    };
                    cfg.font_def_dictionary.insert(id, entry);
                }
                // chars, kernings, kerning and anything unknown
                _ => {}
            }
        }
        info!(
            "fnt parsed: size={} lineHeight={} atlas={} glyphs={}",
            cfg.font_size,
            cfg.common_height,
            cfg.atlas_name,
            cfg.font_def_dictionary.len()
        );
        Ok(cfg)
    }
}

fn parse_attrs(line: &str) -> HashMap<String, String> {
    FNT_PAIR
        .captures_iter(line)
        .map(|cap| {
            let v = cap[2].trim_matches('"').to_string();
            (cap[1].to_string(), v)
        })
        .collect()
}

fn attr_f32(attrs: &HashMap<String, String>, key: &str, line: usize) -> Result<f32> {
    match attrs.get(key) {
        Some(v) => v.parse::<f32>().map_err(|_| FontError::Parse {
            line,
            msg: format!("{}='{}' is not a number", key, v),
        }),
        None => Ok(0.0),
    }
}
