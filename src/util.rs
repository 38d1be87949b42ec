// RustPixel
// copyright zipxing@hotmail.com 2022～2025

//! Path helpers for locating font assets and log files.

use std::{
    env,
    fs::read_dir,
    io::{self, ErrorKind},
    path::{Path, PathBuf, MAIN_SEPARATOR},
};

/// Walks up from the current dir and returns the first ancestor
/// containing `flag_file`.
pub fn get_project_root(flag_file: &str) -> io::Result<PathBuf> {
    let path = env::current_dir()?;
    for p in path.as_path().ancestors() {
        let mut entries = read_dir(p)?;
        let has_flag = entries.any(|e| match e {
            Ok(e) => e.file_name() == *flag_file,
            Err(_) => false,
        });
        if has_flag {
            return Ok(PathBuf::from(p));
        }
    }
    Err(io::Error::new(
        ErrorKind::NotFound,
        "Ran out of places to find flag_file",
    ))
}

/// Root for relative asset paths: the directory holding Cargo.lock,
/// so a deployed binary finds assets/ next to its lock file.
/// Falls back to "." when none is found.
pub fn get_asset_root_path() -> String {
    match get_project_root("Cargo.lock") {
        Ok(p) => p.to_string_lossy().into_owned(),
        Err(_) => ".".to_string(),
    }
}

pub fn get_abs_path(fpath: &str) -> String {
    if Path::new(fpath).is_relative() {
        format!("{}{}{}", get_asset_root_path(), MAIN_SEPARATOR, fpath)
    } else {
        fpath.to_string()
    }
}
