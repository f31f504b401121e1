use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors produced by the filesystem helpers in `fs_op`.
#[derive(Error, Debug)]
pub enum FsOpError {
    /// The process working directory could not be determined.
    #[error("could not determine working directory: {0}")]
    Environment(#[source] io::Error),

    /// Wrapper for underlying IO errors.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Reading a line stream failed; nothing partial was returned.
    #[error("failed to read lines: {0}")]
    Read(#[source] io::Error),

    /// A path that had to exist does not.
    #[error("path does not exist: {}", .0.display())]
    NotFound(PathBuf),

    /// Directory traversal failed.
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),

    /// The copy primitive failed between `src` and `dst`.
    #[error("copy failed from `{}` to `{}`: {source}", .src.display(), .dst.display())]
    Copy {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: fs_extra::error::Error,
    },

    /// No file in a rename batch contains the name fragment.
    #[error("name `{name}` could not be found in any file path")]
    NameNotFound { name: String },

    /// The renamed path does not contain the old directory fragment.
    #[error("path `{path}` could not be found in file name `{file}`")]
    PathNotFound { path: String, file: String },

    /// The destination of a copy already exists.
    #[error("file exists in destination path: {}", .0.display())]
    DestinationExists(PathBuf),
}

impl FsOpError {
    /// Classify an IO error raised while operating on `path`: a missing path
    /// becomes `NotFound`, anything else stays `Io`.
    pub fn at(path: &Path, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            FsOpError::NotFound(path.to_path_buf())
        } else {
            FsOpError::Io(err)
        }
    }
}

/// Result alias used across `fs_op`.
pub type Result<T> = std::result::Result<T, FsOpError>;
