use std::io::{BufRead, Cursor};

use crate::fs_op::error::{FsOpError, Result};

/// Read `reader` to the end and return its non-empty lines in order.
///
/// Lines end at `\n`; a trailing `\r` is dropped with it. Zero-length lines
/// are skipped. Bytes that are not valid UTF-8 are replaced with U+FFFD
/// rather than failing the scan. On a read error nothing collected so far
/// is returned.
pub fn scan_lines<R: BufRead>(mut reader: R) -> Result<Vec<String>> {
    let mut entries = Vec::new();
    let mut buf = Vec::new();
    loop {
        buf.clear();
        let n = reader.read_until(b'\n', &mut buf).map_err(FsOpError::Read)?;
        if n == 0 {
            break;
        }
        let mut line = buf.as_slice();
        if let Some(rest) = line.strip_suffix(b"\n") {
            line = rest;
        }
        if let Some(rest) = line.strip_suffix(b"\r") {
            line = rest;
        }
        if line.is_empty() {
            continue;
        }
        entries.push(String::from_utf8_lossy(line).into_owned());
    }
    Ok(entries)
}

/// `scan_lines` over an in-memory string.
pub fn scan_string_lines(input: &str) -> Result<Vec<String>> {
    scan_lines(Cursor::new(input.as_bytes()))
}
