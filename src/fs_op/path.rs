//! Pure path and string manipulation. Nothing in here touches the disk
//! except `from_working_dir`, which reads the process working directory.

use std::path::{Path, PathBuf};

use crate::fs_op::error::{FsOpError, Result};

/// Join `segments` onto `base` using `PathBuf::push` semantics.
///
/// Segments are not validated: an absolute segment replaces everything
/// before it, exactly as `push` does.
pub fn combine<P, I, S>(base: P, segments: I) -> PathBuf
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<Path>,
{
    let mut out = base.as_ref().to_path_buf();
    for seg in segments {
        out.push(seg);
    }
    out
}

/// Join `segments` onto the current working directory.
pub fn from_working_dir<I, S>(segments: I) -> Result<PathBuf>
where
    I: IntoIterator<Item = S>,
    S: AsRef<Path>,
{
    let wd = std::env::current_dir().map_err(FsOpError::Environment)?;
    Ok(from_dir(wd, segments))
}

/// Join `segments` onto an explicitly supplied working directory.
pub fn from_dir<P, I, S>(dir: P, segments: I) -> PathBuf
where
    P: AsRef<Path>,
    I: IntoIterator<Item = S>,
    S: AsRef<Path>,
{
    combine(dir, segments)
}

/// Parent directory of `path`, or an empty path when there is none.
pub fn directory_of<P: AsRef<Path>>(path: P) -> PathBuf {
    path.as_ref()
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_default()
}

/// File name without its final extension (`"a/report.tar.gz"` -> `"report.tar"`).
///
/// A dotfile is all extension, so `".bashrc"` has an empty stem.
pub fn stem_of<P: AsRef<Path>>(path: P) -> String {
    let p = path.as_ref();
    let name = p
        .file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    let ext = extension_of(p);
    match name.strip_suffix(ext.as_str()) {
        Some(stem) => stem.to_string(),
        None => name,
    }
}

/// Everything from the last `.` of the final path element, dot included
/// (`".txt"`, and `".bashrc"` for a dotfile), or `""`.
pub fn extension_of<P: AsRef<Path>>(path: P) -> String {
    let s = path.as_ref().to_string_lossy();
    for (i, c) in s.char_indices().rev() {
        if std::path::is_separator(c) {
            break;
        }
        if c == '.' {
            return s[i..].to_string();
        }
    }
    String::new()
}

/// Build a `./`-prefixed relative path from `directories` in order.
///
/// Returns `None` for an empty list.
pub fn relative_path<I, S>(directories: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut iter = directories.into_iter();
    let first = iter.next()?;
    let mut out = format!("./{}", first.as_ref().trim_matches('/'));
    for dir in iter {
        let dir = dir.as_ref().trim_matches('/');
        if dir.is_empty() {
            continue;
        }
        if !out.ends_with('/') {
            out.push('/');
        }
        out.push_str(dir);
    }
    Some(out)
}

/// Strip a single leading `./`, `.\`, `/` or `\` from `input`.
pub fn trim_leading_marker(input: &str) -> &str {
    if let Some(rest) = input.strip_prefix("./").or_else(|| input.strip_prefix(".\\")) {
        rest
    } else if let Some(rest) = input.strip_prefix('/').or_else(|| input.strip_prefix('\\')) {
        rest
    } else {
        input
    }
}
