use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::fs_op::error::{FsOpError, Result};

/// Remove a directory and everything below it.
///
/// If the path does not exist this returns `Ok(())` so callers do not need
/// to check for existence first.
pub fn delete_directory<P: AsRef<Path>>(path: P) -> Result<()> {
    let p = path.as_ref();
    match fs::remove_dir_all(p) {
        Ok(()) => {
            tracing::debug!("deleted directory {}", p.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(FsOpError::Io(e)),
    }
}

/// Return `true` when the directory at `path` has no entries.
///
/// Failing to open the directory is an error; a not-found while reading
/// its first entry (the directory vanished) counts as empty.
pub fn is_empty<P: AsRef<Path>>(path: P) -> Result<bool> {
    let p = path.as_ref();
    let mut entries = fs::read_dir(p).map_err(|e| FsOpError::at(p, e))?;
    match entries.next() {
        None => Ok(true),
        Some(Ok(_)) => Ok(false),
        Some(Err(e)) if e.kind() == io::ErrorKind::NotFound => Ok(true),
        Some(Err(e)) => Err(FsOpError::Io(e)),
    }
}

/// Remove empty directories strictly below `root` in a single pass.
///
/// Directories are collected once in lexical pre-order and then inspected
/// in reverse, so a directory is always looked at after everything beneath
/// it. Each one found empty at that moment is removed; none is revisited.
/// `root` itself is never removed. Returns how many directories were removed.
pub fn remove_empty_directories<P: AsRef<Path>>(root: P) -> Result<usize> {
    let root = root.as_ref();

    let mut dirs: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(root).min_depth(1).sort_by_file_name() {
        let entry = entry?;
        if entry.file_type().is_dir() {
            dirs.push(entry.into_path());
        }
    }

    let mut removed = 0;
    for dir in dirs.iter().rev() {
        if is_empty(dir)? {
            fs::remove_dir(dir)?;
            tracing::debug!("removed empty directory {}", dir.display());
            removed += 1;
        }
    }
    Ok(removed)
}
