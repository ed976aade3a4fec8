//! Absence tolerant filesystem helpers.

use std::fs::{self, File};
use std::path::Path;

use tracing::debug;

use crate::error::IoError;
use crate::fs::syscall;
use crate::util::result::ResultExtension;

pub fn exists(path: Option<&Path>) -> bool {
    path.is_some_and(Path::exists)
}

pub fn is_file(path: Option<&Path>) -> bool {
    path.is_some_and(Path::is_file)
}

pub fn is_dir(path: Option<&Path>) -> bool {
    path.is_some_and(Path::is_dir)
}

/// Returns true if `path` is a regular file holding no bytes.
pub fn is_empty_file(path: Option<&Path>) -> bool {
    path.and_then(|path| fs::metadata(path).ok())
        .is_some_and(|metadata| metadata.is_file() && metadata.len() == 0)
}

/// Returns true if `path` is a directory without entries. An absent path counts as empty.
///
/// # Errors
/// Returns an [`IoError`] if `path` can't be listed, which includes it not being a directory.
pub fn is_empty_dir(path: Option<&Path>) -> Result<bool, IoError> {
    match path {
        Some(path) => Ok(fs::read_dir(path)?.next().is_none()),
        None => Ok(true),
    }
}

/// Returns true if the directory at `path` holds at least one file, looking through its
/// subdirectories too when `recursive` is set. Entries that can't be read are skipped.
pub fn contains_files(path: Option<&Path>, recursive: bool) -> bool {
    let Some(entries) = path.and_then(|path| fs::read_dir(path).ok()) else {
        return false;
    };

    let mut dirs = Vec::new();
    for entry in entries.flatten() {
        let entry_path = entry.path();
        if entry_path.is_file() {
            return true;
        }
        if recursive && entry_path.is_dir() {
            dirs.push(entry_path);
        }
    }

    dirs.iter().any(|dir| contains_files(Some(dir), true))
}

/// Returns true if the process may write to `path`. For a path that doesn't exist yet, the
/// question is asked of its parent directory instead.
pub fn can_write(path: Option<&Path>) -> bool {
    let Some(path) = path else {
        return false;
    };

    let target = if path.exists() {
        path
    } else {
        match path.parent() {
            Some(parent) if parent.as_os_str().is_empty() => Path::new("."),
            Some(parent) => parent,
            None => return false,
        }
    };

    syscall::access(target, libc::W_OK).is_ok()
}

/// Creates an empty file at `path` unless something already exists there. Returns true if
/// `path` exists afterwards.
pub fn touch(path: Option<&Path>) -> bool {
    match path {
        None => false,
        Some(path) if path.exists() => true,
        Some(path) if !can_write(Some(path)) => false,
        Some(path) => {
            debug!(path = %path.display(), "touching file");
            File::create_new(path)
                .traced("touch", path.display())
                .is_ok()
        },
    }
}

/// Writes `content` to `path`, replacing whatever is there.
///
/// # Errors
/// Returns the [`IoError`] of the underlying write.
pub fn write_string(path: &Path, content: &str) -> Result<(), IoError> {
    debug!(path = %path.display(), bytes = content.len(), "writing string");
    Ok(fs::write(path, content)?)
}
