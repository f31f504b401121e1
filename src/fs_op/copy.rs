use std::fs;
use std::io;
use std::path::Path;

use fs_extra::file::{copy as fs_extra_copy, CopyOptions};
use walkdir::WalkDir;

use crate::config::FsOptions;
use crate::fs_op::error::{FsOpError, Result};
use crate::fs_op::metadata::preserve_all_metadata;

/// Copy `src` to `dst` with default options.
///
/// A file lands exactly at `dst`; a directory is copied deeply so that its
/// contents appear under `dst`. Missing parent directories are created.
/// Existing files are never overwritten. Unless `follow_links` is set, a
/// symlink is recreated at the destination pointing at the same target.
pub fn copy<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q) -> Result<()> {
    copy_with(src, dst, &FsOptions::default())
}

/// `copy` with explicit options.
pub fn copy_with<P: AsRef<Path>, Q: AsRef<Path>>(src: P, dst: Q, options: &FsOptions) -> Result<()> {
    let s = src.as_ref();
    let d = dst.as_ref();

    let stat = if options.follow_links {
        fs::metadata(s)
    } else {
        fs::symlink_metadata(s)
    };
    let md = stat.map_err(|e| FsOpError::at(s, e))?;
    ensure_parent_exists(d)?;

    if md.file_type().is_symlink() {
        copy_symlink(s, d)?;
        tracing::debug!("copied link {} -> {}", s.display(), d.display());
        return Ok(());
    }

    if md.is_dir() {
        copy_tree(s, d, options)?;
    } else if md.is_file() {
        copy_file(s, d, options)?;
    } else {
        return Err(FsOpError::Io(io::Error::new(
            io::ErrorKind::Unsupported,
            format!("cannot copy special file {}", s.display()),
        )));
    }

    if options.preserve_metadata {
        preserve_all_metadata(s, d)?;
    }
    tracing::debug!("copied {} -> {}", s.display(), d.display());
    Ok(())
}

/// Ensure the parent directory of `p` exists.
fn ensure_parent_exists(p: &Path) -> Result<()> {
    if let Some(parent) = p.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn copy_file(src: &Path, dst: &Path, options: &FsOptions) -> Result<u64> {
    let mut opts = CopyOptions::new();
    opts.overwrite = false;
    opts.buffer_size = options.effective_buffer_size();
    fs_extra_copy(src, dst, &opts).map_err(|source| FsOpError::Copy {
        src: src.to_path_buf(),
        dst: dst.to_path_buf(),
        source,
    })
}

/// Recreate the link at `src` as `dst`, pointing at the same target.
#[cfg(unix)]
fn copy_symlink(src: &Path, dst: &Path) -> Result<()> {
    let target = fs::read_link(src)?;
    std::os::unix::fs::symlink(target, dst)?;
    Ok(())
}

/// Without portable symlink creation, copy what the link points at.
#[cfg(not(unix))]
fn copy_symlink(src: &Path, dst: &Path) -> Result<()> {
    let resolved = fs::canonicalize(src).map_err(|e| FsOpError::at(src, e))?;
    copy_with(resolved, dst, &FsOptions { follow_links: true, ..FsOptions::default() })
}

fn copy_tree(src: &Path, dst: &Path, options: &FsOptions) -> Result<()> {
    fs::create_dir_all(dst)?;
    for entry in WalkDir::new(src).min_depth(1).follow_links(options.follow_links) {
        let entry = entry?;
        let from = entry.path();
        let rel = from
            .strip_prefix(src)
            .map_err(|e| FsOpError::Io(io::Error::other(e)))?;
        let to = dst.join(rel);
        let ft = entry.file_type();

        if ft.is_symlink() {
            copy_symlink(from, &to)?;
        } else if ft.is_dir() {
            fs::create_dir_all(&to)?;
        } else if ft.is_file() {
            if let Some(parent) = to.parent() {
                fs::create_dir_all(parent)?;
            }
            copy_file(from, &to, options)?;
        } else {
            // sockets, fifos and device nodes
            tracing::trace!("skipping {}", from.display());
        }
    }
    Ok(())
}
