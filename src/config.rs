//! Tunables for copying and walking, loadable from a TOML table.
//!
//! ```toml
//! copy_buffer_size = 131072
//! preserve_metadata = true
//! follow_links = false
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default buffer for file copies: 64 KiB balances throughput and memory.
pub const DEFAULT_COPY_BUFFER_SIZE: usize = 64 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FsOptions {
    /// Buffer size used by the file copy primitive.
    pub copy_buffer_size: usize,
    /// Carry permission bits and timestamps over to copied entries.
    pub preserve_metadata: bool,
    /// Follow symbolic links while walking and copying.
    pub follow_links: bool,
}

impl Default for FsOptions {
    fn default() -> Self {
        Self {
            copy_buffer_size: DEFAULT_COPY_BUFFER_SIZE,
            preserve_metadata: true,
            follow_links: false,
        }
    }
}

/// Errors loading options from disk.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config `{}`: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config `{}`: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl FsOptions {
    /// Parse options from TOML text. Missing keys take their defaults.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Read and parse a TOML options file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let p = path.as_ref();
        let text = std::fs::read_to_string(p).map_err(|source| ConfigError::Read {
            path: p.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text).map_err(|source| ConfigError::Parse {
            path: p.to_path_buf(),
            source,
        })
    }

    /// The buffer size actually handed to the copy primitive; zero is
    /// replaced by the default.
    pub(crate) fn effective_buffer_size(&self) -> usize {
        if self.copy_buffer_size == 0 {
            DEFAULT_COPY_BUFFER_SIZE
        } else {
            self.copy_buffer_size
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn empty_toml_gives_defaults() {
        assert_eq!(FsOptions::from_toml("").unwrap(), FsOptions::default());
    }

    #[test]
    fn partial_toml_overrides_only_given_keys() {
        let opts = FsOptions::from_toml("follow_links = true\n").unwrap();
        assert!(opts.follow_links);
        assert!(opts.preserve_metadata);
        assert_eq!(opts.copy_buffer_size, DEFAULT_COPY_BUFFER_SIZE);
    }

    #[test]
    fn bad_type_is_rejected() {
        assert!(FsOptions::from_toml("preserve_metadata = \"yes\"").is_err());
    }

    #[test]
    fn zero_buffer_falls_back_to_default() {
        let opts = FsOptions { copy_buffer_size: 0, ..FsOptions::default() };
        assert_eq!(opts.effective_buffer_size(), DEFAULT_COPY_BUFFER_SIZE);
    }

    #[test]
    fn load_reports_missing_file() {
        let td = tempdir().unwrap();
        let err = FsOptions::load(td.path().join("filekit.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn load_reads_file() {
        let td = tempdir().unwrap();
        let p = td.path().join("filekit.toml");
        std::fs::write(&p, "copy_buffer_size = 4096\npreserve_metadata = false\n").unwrap();
        let opts = FsOptions::load(&p).unwrap();
        assert_eq!(opts.copy_buffer_size, 4096);
        assert!(!opts.preserve_metadata);
    }
}
