//! Directory scanner: enumerate regular files under a root.
//!
//! Files are filtered by an optional extension allow-list and by exclude
//! glob patterns matched against the root-relative path. Results are sorted
//! lexically so reports are reproducible. Directories that cannot be read
//! are returned alongside the files instead of aborting the walk.

use crate::error::{FatalError, ProbeError};
use glob::Pattern;
use std::collections::BTreeSet;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

#[derive(Debug, Clone, Default)]
/// Filters applied while walking.
pub struct ScanOptions {
    /// Dot-prefixed suffixes; empty means all files.
    pub extensions: Vec<String>,
    /// Glob patterns against root-relative paths (`/` separated).
    pub exclude: Vec<String>,
    /// Exact paths never reported (e.g. the report file itself).
    pub skip: Vec<PathBuf>,
}

/// Normalize an extension to a lowercase, dot-prefixed suffix.
pub fn normalize_extension(ext: &str) -> Option<String> {
    let t = ext.trim();
    if t.is_empty() || t == "." {
        return None;
    }
    let lower = t.to_ascii_lowercase();
    if lower.starts_with('.') {
        Some(lower)
    } else {
        Some(format!(".{}", lower))
    }
}

fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    if extensions.is_empty() {
        return true;
    }
    let name = match path.file_name() {
        Some(n) => n.to_string_lossy().to_ascii_lowercase(),
        None => return false,
    };
    extensions.iter().any(|ext| name.ends_with(ext.as_str()))
}

fn relative_slash(path: &Path, root: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy().to_string())
        .collect::<Vec<_>>()
        .join("/")
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// A directory the walk could not descend into.
pub struct UnreadableDir {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Default)]
/// Walk result: matching files plus directories that were skipped.
pub struct Discovered {
    pub files: Vec<PathBuf>,
    pub unreadable: Vec<UnreadableDir>,
}

fn is_candidate(entry: &DirEntry) -> bool {
    let ft = entry.file_type();
    // Symlinks to files count; symlinked directories are never entered.
    ft.is_file() || (ft.is_symlink() && entry.path().is_file())
}

/// Walk `root` and return matching file paths in lexical order.
///
/// Symlinked directories are not followed, so each file is listed once.
/// Fails when `root` is missing or not a directory, or when an exclude
/// pattern does not parse.
pub fn scan_directory(root: &Path, opts: &ScanOptions) -> Result<Discovered, FatalError> {
    if !root.exists() {
        return Err(FatalError::DirectoryNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(FatalError::NotADirectory(root.to_path_buf()));
    }

    let extensions: Vec<String> = opts
        .extensions
        .iter()
        .filter_map(|e| normalize_extension(e))
        .collect();
    let excludes = opts
        .exclude
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|source| FatalError::InvalidPattern {
                pattern: p.clone(),
                source,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;
    let skip: Vec<PathBuf> = opts
        .skip
        .iter()
        .filter_map(|p| p.canonicalize().ok())
        .collect();

    debug!(root = %root.display(), "walking");
    let walker = WalkDir::new(root).follow_links(false).sort_by_file_name();

    let mut found: BTreeSet<PathBuf> = BTreeSet::new();
    let mut unreadable: Vec<UnreadableDir> = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                let path = e
                    .path()
                    .map(|p| p.to_string_lossy().to_string())
                    .unwrap_or_else(|| root.to_string_lossy().to_string());
                let error = match e.io_error() {
                    Some(err) => ProbeError::from(io::Error::from(err.kind())).to_string(),
                    None => e.to_string(),
                };
                warn!(path = %path, error = %error, "skipping unreadable directory");
                unreadable.push(UnreadableDir { path, error });
                continue;
            }
        };
        if !is_candidate(&entry) || !matches_extension(entry.path(), &extensions) {
            continue;
        }
        let path = entry.into_path();
        let rel = relative_slash(&path, root);
        if excludes.iter().any(|p| p.matches(&rel)) {
            debug!(path = %rel, "excluded");
            continue;
        }
        if !skip.is_empty() {
            if let Ok(canon) = path.canonicalize() {
                if skip.contains(&canon) {
                    debug!(path = %rel, "skipped");
                    continue;
                }
            }
        }
        found.insert(path);
    }
    Ok(Discovered {
        files: found.into_iter().collect(),
        unreadable,
    })
}
