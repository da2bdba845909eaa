//! Writes emitted files next to each other under one path prefix.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use termkeys_core::GeneratedFile;
use tracing::debug;

use crate::application::generate::GenerateError;

/// `src/keycode` + `rs` → `src/keycode.rs`.
///
/// The extension is appended rather than substituted, so a prefix containing
/// a dot keeps it.
pub fn output_path(prefix: &Path, extension: &str) -> PathBuf {
    let mut path: OsString = prefix.as_os_str().to_owned();
    path.push(".");
    path.push(extension);
    PathBuf::from(path)
}

/// Writes every file, creating the prefix's parent directory if needed.
///
/// # Errors
///
/// Returns [`GenerateError::Write`] naming the path that failed.
pub fn write_generated(prefix: &Path, files: &[GeneratedFile]) -> Result<Vec<PathBuf>, GenerateError> {
    if let Some(dir) = prefix.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|source| GenerateError::Write {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let path = output_path(prefix, file.extension);
        std::fs::write(&path, &file.contents).map_err(|source| GenerateError::Write {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), bytes = file.contents.len(), "wrote generated file");
        written.push(path);
    }
    Ok(written)
}
