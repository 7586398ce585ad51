//! Single-file probe: readability, size and line count.
//!
//! A line is a run of bytes terminated by `\n`; a trailing unterminated
//! fragment counts as one more line. Content must decode as UTF-8.

use crate::error::ProbeError;
use crate::models::FileRecord;
use std::fs;
use std::path::Path;

/// Count lines in `bytes`. `\r\n` counts once, a lone `\r` never ends a line.
pub fn count_lines(bytes: &[u8]) -> u64 {
    let terminated = bytes.iter().filter(|&&b| b == b'\n').count() as u64;
    match bytes.last() {
        Some(b'\n') | None => terminated,
        Some(_) => terminated + 1,
    }
}

fn read_text(path: &Path) -> Result<(u64, u64), ProbeError> {
    let bytes = fs::read(path)?;
    if std::str::from_utf8(&bytes).is_err() {
        return Err(ProbeError::NotText);
    }
    Ok((bytes.len() as u64, count_lines(&bytes)))
}

/// Probe one file. Never fails: errors land in the record.
pub fn probe_file(path: &Path) -> FileRecord {
    let display = path.to_string_lossy().to_string();
    match read_text(path) {
        Ok((size_bytes, line_count)) => FileRecord {
            path: display,
            exists: true,
            readable: true,
            size_bytes,
            line_count,
            error: None,
        },
        Err(e) => FileRecord {
            path: display,
            exists: e != ProbeError::Missing && path.exists(),
            readable: false,
            size_bytes: 0,
            line_count: 0,
            error: Some(e.to_string()),
        },
    }
}
