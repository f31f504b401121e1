//! Copy a batch of files to new locations with part of their names swapped.

use std::path::{Path, PathBuf};

use crate::config::FsOptions;
use crate::fs_op::copy::copy_with;
use crate::fs_op::error::{FsOpError, Result};
use crate::fs_op::path::trim_leading_marker;
use crate::fs_op::stat::exists;

/// Copy each of `files` to a destination derived from its path.
///
/// Every occurrence of `old_name` in a file's path is replaced by
/// `new_name`, then every occurrence of `old_path` (with its leading `./`
/// or `/` stripped) is replaced by `new_path`. The batch stops at the first
/// failure; files copied before it stay in place.
///
/// Returns the destinations written, in the order of `files`.
pub fn copy_and_rename<P: AsRef<Path>>(
    files: &[P],
    old_path: &str,
    new_path: &str,
    old_name: &str,
    new_name: &str,
) -> Result<Vec<PathBuf>> {
    copy_and_rename_with(files, old_path, new_path, old_name, new_name, &FsOptions::default())
}

/// `copy_and_rename` with explicit copy options.
pub fn copy_and_rename_with<P: AsRef<Path>>(
    files: &[P],
    old_path: &str,
    new_path: &str,
    old_name: &str,
    new_name: &str,
    options: &FsOptions,
) -> Result<Vec<PathBuf>> {
    let found = files
        .iter()
        .any(|f| f.as_ref().to_string_lossy().contains(old_name));
    if !found {
        return Err(FsOpError::NameNotFound {
            name: old_name.to_string(),
        });
    }

    let old_dir = trim_leading_marker(old_path);
    let mut written = Vec::with_capacity(files.len());

    for file in files {
        let src = file.as_ref();
        let dest = destination_for(src, old_dir, new_path, old_name, new_name)?;

        if exists(&dest) {
            return Err(FsOpError::DestinationExists(dest));
        }

        copy_with(src, &dest, options)?;
        written.push(dest);
    }

    Ok(written)
}

fn destination_for(
    src: &Path,
    old_dir: &str,
    new_path: &str,
    old_name: &str,
    new_name: &str,
) -> Result<PathBuf> {
    let renamed = src.to_string_lossy().replace(old_name, new_name);
    if !renamed.contains(old_dir) {
        return Err(FsOpError::PathNotFound {
            path: old_dir.to_string(),
            file: renamed,
        });
    }
    Ok(PathBuf::from(renamed.replace(old_dir, new_path)))
}
