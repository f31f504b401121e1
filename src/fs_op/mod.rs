//! Filesystem helpers: path manipulation, line scanning, whole-file I/O,
//! sorted recursive listings, empty-directory pruning, copying and bulk
//! copy-with-rename.
//!
//! Everything here is synchronous and reads or mutates the real filesystem
//! directly. Nothing is cached and nothing is locked; concurrent callers
//! racing on the same subtree see whatever the filesystem gives them.

pub mod copy;
pub mod error;
pub mod files;
pub(crate) mod metadata;
pub mod path;
pub mod remove;
pub mod rename;
pub mod scan;
pub mod stat;
pub mod walk;

pub use copy::{copy, copy_with};
pub use error::{FsOpError, Result};
pub use files::{append_lines, read_all_lines, read_file, reset_for_overwrite, write_file};
pub use path::{
    combine, directory_of, extension_of, from_dir, from_working_dir, relative_path, stem_of,
    trim_leading_marker,
};
pub use remove::{delete_directory, is_empty, remove_empty_directories};
pub use rename::{copy_and_rename, copy_and_rename_with};
pub use scan::{scan_lines, scan_string_lines};
pub use stat::{exists, probe, Presence};
pub use walk::{
    list_directories, list_files, sort_file_names, walk_directories, walk_files, Listing,
};
