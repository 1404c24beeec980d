// src/file.rs

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use tracing::error;

use crate::error::Result;

pub fn ensure_directory(dir: &Path) -> Result<()> {
    if dir.exists() && !dir.is_dir() {
        return Err(std::io::Error::new(
            ErrorKind::AlreadyExists,
            format!("Path exists but is not a directory: {}", dir.display()),
        )
        .into());
    }
    if !dir.exists() { fs::create_dir_all(dir)?; }
    Ok(())
}

/// Delete `dir` with everything in it, then create it empty.
pub fn recreate_dir(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        fs::remove_dir_all(dir)?;
    }
    ensure_directory(dir)
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            ensure_directory(parent)?;
        }
    }
    Ok(())
}

pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, bytes)?;
    Ok(())
}

pub fn write_text(path: &Path, text: &str) -> Result<PathBuf> {
    write_bytes(path, text.as_bytes())?;
    Ok(path.to_path_buf())
}

/// Write the CSV, tolerating a target held open by another program
/// (spreadsheet apps lock it on Windows, which surfaces as a sharing
/// violation rather than `PermissionDenied`). Any I/O failure is reported
/// and turned into `None` so the rest of the run can go on.
pub fn write_csv_tolerant(path: &Path, text: &str) -> Result<Option<PathBuf>> {
    match write_text(path, text) {
        Ok(p) => Ok(Some(p)),
        Err(crate::Error::Io(e)) => {
            error!(
                "Could not write {}: {e}. Please close it before running again.",
                path.display()
            );
            Ok(None)
        }
        Err(e) => Err(e),
    }
}
