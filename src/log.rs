// RustPixel
// copyright zipxing@hotmail.com 2022~2024

//! Log module provides the log bootstrap, reference
//! https://docs.rs/log4rs
//!
//! The rest of the crate only talks to the `log` facade, so a host engine
//! that already installed its own logger does not need to call this.

use crate::error::Result;
use log::LevelFilter;

#[cfg(all(not(target_arch = "wasm32"), feature = "log4rs"))]
use crate::{error::FontError, util::get_abs_path};
#[cfg(all(not(target_arch = "wasm32"), feature = "log4rs"))]
use log4rs::{
    append::file::FileAppender,
    config::{Appender, Config, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

/// init logs system
pub fn init_log(level: LevelFilter, file_path: &str) -> Result<()> {
    init_backend(level, file_path)
}

#[cfg(target_arch = "wasm32")]
fn init_backend(level: LevelFilter, _file_path: &str) -> Result<()> {
    wasm_logger::init(wasm_logger::Config::new(
        level.to_level().unwrap_or(log::Level::Error),
    ));
    Ok(())
}

#[cfg(all(not(target_arch = "wasm32"), feature = "log4rs"))]
fn init_backend(level: LevelFilter, file_path: &str) -> Result<()> {
    let fpstr = get_abs_path(file_path);
    let logfile = FileAppender::builder()
        .encoder(Box::new(PatternEncoder::new(
            "{d(%Y-%m-%d %H:%M:%S)} {l} {t} {m}{n}",
        )))
        .build(&fpstr)
        .map_err(|e| FontError::Log(format!("open {}: {}", fpstr, e)))?;
    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(level)))
                .build("logfile", Box::new(logfile)),
        )
        .build(Root::builder().appender("logfile").build(level))
        .map_err(|e| FontError::Log(e.to_string()))?;
    log4rs::init_config(config).map_err(|e| FontError::Log(e.to_string()))?;
    Ok(())
}

// built without log4rs: the host installs its own logger
#[cfg(all(not(target_arch = "wasm32"), not(feature = "log4rs")))]
fn init_backend(_level: LevelFilter, _file_path: &str) -> Result<()> {
    Err(crate::error::FontError::Log(
        "log4rs feature disabled".to_string(),
    ))
}
