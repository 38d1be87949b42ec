// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Error type shared by the font config parsers, the asset manager and
//! log setup. Load-time degradations (missing config, missing glyph) are
//! not errors, they show up as warnings or `None`.

/// Font asset error
#[derive(Debug, thiserror::Error)]
pub enum FontError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("fnt config json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("fnt parse error at line {line}: {msg}")]
    Parse { line: usize, msg: String },

    #[error("log init failed: {0}")]
    Log(String),
}

pub type Result<T> = std::result::Result<T, FontError>;
