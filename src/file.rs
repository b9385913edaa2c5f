// src/file.rs

use std::{
    fs,
    path::Path,
};

use crate::error::{Error, Result};

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(Error::io(
            dir,
            std::io::Error::other("path exists but is not a directory"),
        ));
    }
    if !dir.exists() { fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?; }
    Ok(())
}

/// Create parent dirs as needed, then create/truncate `path` with `contents`.
pub fn write_text(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    fs::write(path, contents).map_err(|e| Error::io(path, e))
}

/// Read a whole text file; a missing file is reported as `MissingInput`.
pub fn read_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(Error::MissingInput(path.to_path_buf()));
    }
    let text = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    // Windows editors like to leave a BOM on exported lists
    Ok(match text.strip_prefix('\u{feff}') {
        Some(rest) => s!(rest),
        None => text,
    })
}
