//! Whole-file reads and writes plus helpers for handles the caller owns.
//!
//! Functions taking a path open and release it themselves. Functions taking
//! a handle never close it; sequencing and closing stay with the caller.

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, Seek, SeekFrom, Write};
use std::path::Path;

use crate::fs_op::error::{FsOpError, Result};
use crate::fs_op::scan::scan_lines;

/// Read the full contents of `path`.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<Vec<u8>> {
    let p = path.as_ref();
    fs::read(p).map_err(|e| FsOpError::at(p, e))
}

/// Create or truncate `path` and write `data` to it.
///
/// On Unix `mode` is the permission set given to a newly created file
/// (subject to the umask); an existing file keeps its mode. Elsewhere the
/// mode is ignored.
pub fn write_file<P: AsRef<Path>>(path: P, data: &[u8], mode: u32) -> Result<()> {
    let p = path.as_ref();
    let mut opts = OpenOptions::new();
    opts.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        opts.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    let mut file = opts.open(p).map_err(|e| FsOpError::at(p, e))?;
    file.write_all(data)?;
    Ok(())
}

/// Write each entry's bytes to `handle` in order.
///
/// Stops at the first failed write; whatever was written before stays.
pub fn append_lines<W, I, S>(handle: &mut W, lines: I) -> Result<()>
where
    W: Write + ?Sized,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        handle.write_all(line.as_ref().as_bytes())?;
    }
    Ok(())
}

/// Truncate `handle` to zero length and move its cursor back to the start.
///
/// If the seek fails after a successful truncate the cursor position is
/// unspecified.
pub fn reset_for_overwrite(handle: &mut File) -> Result<()> {
    handle.set_len(0)?;
    handle.seek(SeekFrom::Start(0))?;
    Ok(())
}

/// Non-empty lines of an open file, read from its current position.
pub fn read_all_lines(handle: &File) -> Result<Vec<String>> {
    scan_lines(BufReader::new(handle))
}
