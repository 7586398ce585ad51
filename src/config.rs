//! Configuration discovery and effective settings resolution.
//!
//! filecheck reads `filecheck.toml|yaml|yml` from the working directory (or
//! the file passed via `--config`) and merges it with CLI flags to produce
//! an `Effective` config.
//! Defaults:
//! - `directory`: `.`
//! - `extensions`: none (all files)
//! - `exclude`: none
//! - `output`: `test_report.json`
//! - `format`: `human`
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::error::FatalError;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT: &str = "test_report.json";
pub const CONFIG_NAMES: [&str; 3] = ["filecheck.toml", "filecheck.yaml", "filecheck.yml"];

#[derive(Debug, Default, Deserialize, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
/// Root configuration loaded from `filecheck.toml|yaml`.
pub struct FileCheckConfig {
    pub extensions: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
    pub output: Option<String>,
    pub format: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Console rendering mode.
pub enum ConsoleFormat {
    Human,
    Json,
}

impl ConsoleFormat {
    pub fn parse(s: &str) -> Result<Self, FatalError> {
        match s.trim().to_ascii_lowercase().as_str() {
            "human" => Ok(ConsoleFormat::Human),
            "json" => Ok(ConsoleFormat::Json),
            _ => Err(FatalError::UnknownFormat(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Fully-resolved configuration used by the runner after applying precedence.
pub struct Effective {
    pub root: PathBuf,
    pub extensions: Vec<String>,
    pub exclude: Vec<String>,
    pub output: PathBuf,
    pub format: ConsoleFormat,
    pub config_path: Option<PathBuf>,
}

#[derive(Debug, Default, Clone)]
/// CLI-provided values; `None`/empty means "not given".
pub struct CliOverrides {
    pub directory: Option<String>,
    pub extensions: Option<Vec<String>>,
    pub exclude: Option<Vec<String>>,
    pub output: Option<String>,
    pub format: Option<String>,
    pub config: Option<String>,
}

/// Find the first config file name present in `dir`.
pub fn discover_config(dir: &Path) -> Option<PathBuf> {
    CONFIG_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|p| p.is_file())
}

/// Parse a config file; format is chosen by extension.
pub fn load_config(path: &Path) -> Result<FileCheckConfig, FatalError> {
    let s = fs::read_to_string(path).map_err(|source| FatalError::ConfigRead {
        path: path.to_path_buf(),
        source,
    })?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    let parsed = if is_yaml {
        serde_yaml::from_str::<FileCheckConfig>(&s).map_err(|e| e.to_string())
    } else {
        toml::from_str::<FileCheckConfig>(&s).map_err(|e| e.to_string())
    };
    parsed.map_err(|message| FatalError::ConfigParse {
        path: path.to_path_buf(),
        message,
    })
}

/// Resolve `Effective` by merging CLI flags, the config file found in
/// `cwd` (or named explicitly), and defaults.
pub fn resolve_effective(cli: &CliOverrides, cwd: &Path) -> Result<Effective, FatalError> {
    let config_path = match cli.config.as_deref() {
        Some(p) => Some(PathBuf::from(p)),
        None => discover_config(cwd),
    };
    let cfg = match config_path.as_deref() {
        Some(p) => load_config(p)?,
        None => FileCheckConfig::default(),
    };

    let root = PathBuf::from(cli.directory.as_deref().unwrap_or("."));

    // An empty `--extensions` list still counts as "all files".
    let extensions = cli
        .extensions
        .clone()
        .or(cfg.extensions)
        .unwrap_or_default();

    let exclude = cli.exclude.clone().or(cfg.exclude).unwrap_or_default();

    let output = cli
        .output
        .clone()
        .or(cfg.output)
        .unwrap_or_else(|| DEFAULT_OUTPUT.to_string());

    let format = match cli.format.as_deref().or(cfg.format.as_deref()) {
        Some(s) => ConsoleFormat::parse(s)?,
        None => ConsoleFormat::Human,
    };

    Ok(Effective {
        root,
        extensions,
        exclude,
        output: PathBuf::from(output),
        format,
        config_path,
    })
}
