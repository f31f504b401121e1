//! Sorted recursive listings.
//!
//! The walk visits entries in lexical pre-order (directory before its
//! contents). Results are re-sorted by (parent, file name) so that files of
//! one directory stay together regardless of sibling subdirectories.

use std::cmp::Ordering;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::FsOptions;
use crate::fs_op::error::{FsOpError, Result};

/// Entries collected by a walk, plus the error that stopped it, if any.
#[derive(Debug)]
pub struct Listing {
    pub entries: Vec<PathBuf>,
    pub error: Option<walkdir::Error>,
}

impl Listing {
    /// Strict view: the entries if the walk finished, otherwise the error.
    pub fn into_result(self) -> Result<Vec<PathBuf>> {
        match self.error {
            Some(e) => Err(FsOpError::Walk(e)),
            None => Ok(self.entries),
        }
    }

    /// Lenient view: the entries if the walk finished, otherwise nothing.
    pub fn or_empty(self) -> Vec<PathBuf> {
        match self.error {
            Some(e) => {
                tracing::debug!("listing discarded after walk error: {}", e);
                Vec::new()
            }
            None => self.entries,
        }
    }

    /// True when the walk stopped early.
    pub fn is_partial(&self) -> bool {
        self.error.is_some()
    }
}

#[derive(Clone, Copy)]
enum Kind {
    Files,
    Directories,
}

fn walk(root: &Path, kind: Kind, options: &FsOptions) -> Listing {
    let mut entries = Vec::new();
    let mut error = None;

    for entry in WalkDir::new(root)
        .follow_links(options.follow_links)
        .sort_by_file_name()
    {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                error = Some(e);
                break;
            }
        };
        tracing::trace!("walk visit {}", entry.path().display());
        let is_dir = entry.file_type().is_dir();
        let keep = match kind {
            Kind::Files => !is_dir,
            Kind::Directories => is_dir,
        };
        if keep {
            entries.push(entry.into_path());
        }
    }

    sort_file_names(&mut entries);
    Listing { entries, error }
}

/// Every non-directory entry under `root` (the root itself when it is a file).
pub fn walk_files<P: AsRef<Path>>(root: P, options: &FsOptions) -> Listing {
    walk(root.as_ref(), Kind::Files, options)
}

/// Every directory under `root`, including `root`.
pub fn walk_directories<P: AsRef<Path>>(root: P, options: &FsOptions) -> Listing {
    walk(root.as_ref(), Kind::Directories, options)
}

/// Sorted files under `root`; any walk error yields an empty list.
pub fn list_files<P: AsRef<Path>>(root: P) -> Vec<PathBuf> {
    walk_files(root, &FsOptions::default()).or_empty()
}

/// Sorted directories under `root`; any walk error yields an empty list.
pub fn list_directories<P: AsRef<Path>>(root: P) -> Vec<PathBuf> {
    walk_directories(root, &FsOptions::default()).or_empty()
}

/// The directory a path sorts under: a bare name lives in `.`, a root is
/// its own parent.
pub fn sort_parent(p: &Path) -> &Path {
    match p.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        Some(_) => Path::new("."),
        None if p.has_root() => p,
        None => Path::new("."),
    }
}

/// Order two paths by parent directory, then by file name, comparing the
/// raw bytes of each.
pub fn compare_by_parent_then_name(a: &Path, b: &Path) -> Ordering {
    let parent_a = sort_parent(a);
    let parent_b = sort_parent(b);
    parent_a
        .as_os_str()
        .cmp(parent_b.as_os_str())
        .then_with(|| a.file_name().cmp(&b.file_name()))
}

/// Sort `paths` in place by (parent, file name).
pub fn sort_file_names(paths: &mut [PathBuf]) {
    paths.sort_by(|a, b| compare_by_parent_then_name(a, b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn names(root: &Path, list: &[PathBuf]) -> Vec<String> {
        list.iter()
            .map(|p| p.strip_prefix(root).unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn files_of_a_directory_stay_together() {
        let td = tempdir().unwrap();
        let root = td.path();
        fs::create_dir_all(root.join("a/z")).unwrap();
        fs::write(root.join("a/b.txt"), "").unwrap();
        fs::write(root.join("a/z/c.txt"), "").unwrap();
        fs::write(root.join("a/y.txt"), "").unwrap();
        fs::write(root.join("top.txt"), "").unwrap();

        let got = list_files(root);
        assert_eq!(names(root, &got), vec!["top.txt", "a/b.txt", "a/y.txt", "a/z/c.txt"]);
    }

    #[test]
    fn directories_include_root() {
        let td = tempdir().unwrap();
        let root = td.path();
        fs::create_dir_all(root.join("b/inner")).unwrap();
        fs::create_dir_all(root.join("a")).unwrap();
        fs::write(root.join("file.txt"), "").unwrap();

        let got = list_directories(root);
        assert_eq!(got[0], root);
        assert_eq!(names(root, &got[1..]), vec!["a", "b", "b/inner"]);
    }

    #[test]
    fn file_root_lists_itself() {
        let td = tempdir().unwrap();
        let f = td.path().join("only.txt");
        fs::write(&f, "x").unwrap();
        assert_eq!(list_files(&f), vec![f.clone()]);
        assert!(list_directories(&f).is_empty());
    }

    #[test]
    fn missing_root_is_empty_but_strict_view_errors() {
        let td = tempdir().unwrap();
        let missing = td.path().join("gone");
        assert!(list_files(&missing).is_empty());

        let listing = walk_files(&missing, &FsOptions::default());
        assert!(listing.is_partial());
        assert!(matches!(listing.into_result(), Err(FsOpError::Walk(_))));
    }

    #[test]
    fn bare_names_sort_under_dot() {
        let mut v = vec![PathBuf::from("z.txt"), PathBuf::from("!x/y"), PathBuf::from("a/b")];
        sort_file_names(&mut v);
        let got: Vec<_> = v.iter().map(|p| p.to_string_lossy().into_owned()).collect();
        // "!x" < "." < "a"
        assert_eq!(got, vec!["!x/y", "z.txt", "a/b"]);
        assert_eq!(sort_parent(Path::new("z.txt")), Path::new("."));
        assert_eq!(sort_parent(Path::new("/")), Path::new("/"));
    }

    #[test]
    fn sort_breaks_ties_on_name() {
        let mut v = vec![
            PathBuf::from("b/x"),
            PathBuf::from("a/z"),
            PathBuf::from("a/b"),
            PathBuf::from("a.txt"),
        ];
        sort_file_names(&mut v);
        let got: Vec<_> = v.iter().map(|p| p.to_string_lossy().into_owned()).collect();
        assert_eq!(got, vec!["a.txt", "a/b", "a/z", "b/x"]);
    }
}
