//! Error types.
//!
//! Two tiers:
//! - `FatalError`: aborts the run before a report is written.
//! - `ProbeError`: per-file failure, recorded in the file's record.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
/// Conditions that abort the whole run.
pub enum FatalError {
    #[error("Directory {} does not exist", .0.display())]
    DirectoryNotFound(PathBuf),

    #[error("Path is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("Invalid glob pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("Failed to read config {}: {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid config {}: {message}", path.display())]
    ConfigParse { path: PathBuf, message: String },

    #[error("Unknown console format '{0}' (expected human|json)")]
    UnknownFormat(String),

    #[error("Failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to write report {}: {source}", path.display())]
    ReportWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Why a single file could not be read. The `Display` text is stable per
/// cause and ends up in the record's `error` field.
pub enum ProbeError {
    #[error("File does not exist")]
    Missing,

    #[error("Permission denied")]
    PermissionDenied,

    #[error("Is a directory")]
    IsDirectory,

    #[error("Binary file or encoding issue")]
    NotText,

    #[error("I/O error: {0}")]
    Io(String),
}

impl From<io::Error> for ProbeError {
    fn from(e: io::Error) -> Self {
        match e.kind() {
            io::ErrorKind::NotFound => ProbeError::Missing,
            io::ErrorKind::PermissionDenied => ProbeError::PermissionDenied,
            io::ErrorKind::IsADirectory => ProbeError::IsDirectory,
            io::ErrorKind::InvalidData => ProbeError::NotText,
            _ => ProbeError::Io(e.to_string()),
        }
    }
}
