//! Carry permission bits and timestamps from a copy source to its target.
//!
//! Single-file copies propagate failures. Directory trees are applied
//! best-effort: a missing target or an entry that refuses the update is
//! skipped so one odd file does not fail a whole copy.

use std::fs;
use std::io;
use std::path::Path;

use filetime::{set_file_times, FileTime};
use walkdir::WalkDir;

/// Copy permission bits from `src` to `dst`.
pub(crate) fn copy_permissions(src: &Path, dst: &Path) -> io::Result<()> {
    let perms = fs::metadata(src)?.permissions();
    fs::set_permissions(dst, perms)
}

/// Copy access and modification times from `src` to `dst`.
pub(crate) fn copy_times(src: &Path, dst: &Path) -> io::Result<()> {
    let meta = fs::metadata(src)?;
    let mtime = FileTime::from_last_modification_time(&meta);
    let atime = FileTime::from_last_access_time(&meta);
    set_file_times(dst, atime, mtime)
}

/// Preserve metadata from `src` to `dst`; see the module docs for which
/// failures are reported.
pub(crate) fn preserve_all_metadata(src: &Path, dst: &Path) -> io::Result<()> {
    if src.is_file() {
        copy_permissions(src, dst)?;
        copy_times(src, dst)?;
        return Ok(());
    }

    // Children first so setting a directory's times is not undone by
    // later writes inside it.
    for entry in WalkDir::new(src).contents_first(true).into_iter().filter_map(|e| e.ok()) {
        let Ok(rel) = entry.path().strip_prefix(src) else {
            continue;
        };
        let target = dst.join(rel);
        // links were recreated as links; their targets are not ours to touch
        match fs::symlink_metadata(&target) {
            Ok(md) if !md.file_type().is_symlink() => {}
            _ => continue,
        }
        let _ = copy_permissions(entry.path(), &target);
        let _ = copy_times(entry.path(), &target);
    }
    Ok(())
}
