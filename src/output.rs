//! Output rendering for run summaries.
//!
//! Supports `human` (default) and `json` console output, plus the JSON
//! report file. The report is a direct serialization of `RunSummary`.

use crate::config::ConsoleFormat;
use crate::error::FatalError;
use crate::models::{FileRecord, RunSummary};
use crate::scan::UnreadableDir;
use owo_colors::OwoColorize;
use serde_json::Value as JsonVal;
use std::fs;
use std::path::Path;
use tracing::info;

const RULE: &str = "============================================================";

fn display_path(record: &FileRecord, root: &Path) -> String {
    let p = Path::new(&record.path);
    pathdiff::diff_paths(p, root)
        .filter(|d| !d.as_os_str().is_empty())
        .map(|d| d.to_string_lossy().to_string())
        .unwrap_or_else(|| record.path.clone())
}

/// Compose the report JSON object (pure); the `json` console mode prints it.
pub fn compose_report_json(summary: &RunSummary) -> Result<JsonVal, FatalError> {
    Ok(serde_json::to_value(summary)?)
}

/// Write the report to `path`, replacing any existing file.
pub fn write_report(summary: &RunSummary, path: &Path) -> Result<(), FatalError> {
    let mut body = serde_json::to_string_pretty(summary)?;
    body.push('\n');
    fs::write(path, body).map_err(|source| FatalError::ReportWrite {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "report written");
    Ok(())
}

/// Render the human report block (pure). Directories the walk could not
/// enter are listed so a clean exit does not hide missing coverage.
pub fn render_human(summary: &RunSummary, unreadable: &[UnreadableDir], color: bool) -> String {
    let root = Path::new(&summary.root_directory);
    let mut out = String::new();
    out.push('\n');
    out.push_str(RULE);
    out.push('\n');
    if color {
        out.push_str(&format!("{}\n", "TEST REPORT".bold()));
    } else {
        out.push_str("TEST REPORT\n");
    }
    out.push_str(RULE);
    out.push('\n');
    out.push_str(&format!("Root directory: {}\n", summary.root_directory));
    out.push_str(&format!("Total files tested: {}\n", summary.total_files));
    if color {
        out.push_str(&format!("Passed: {} {}\n", summary.passed, "✓".green()));
        out.push_str(&format!("Failed: {} {}\n", summary.failed, "✗".red()));
    } else {
        out.push_str(&format!("Passed: {} ✓\n", summary.passed));
        out.push_str(&format!("Failed: {} ✗\n", summary.failed));
    }
    out.push_str(RULE);
    out.push('\n');

    if summary.failed > 0 {
        if color {
            out.push_str(&format!("\n{}\n", "FAILED FILES:".red().bold()));
        } else {
            out.push_str("\nFAILED FILES:\n");
        }
        for r in summary.failures() {
            out.push_str(&format!("  - {}\n", display_path(r, root)));
            if let Some(err) = &r.error {
                out.push_str(&format!("    Error: {}\n", err));
            }
        }
    }

    if !unreadable.is_empty() {
        if color {
            out.push_str(&format!("\n{}\n", "SKIPPED DIRECTORIES:".yellow().bold()));
        } else {
            out.push_str("\nSKIPPED DIRECTORIES:\n");
        }
        for d in unreadable {
            let shown = pathdiff::diff_paths(&d.path, root)
                .filter(|p| !p.as_os_str().is_empty())
                .map(|p| p.to_string_lossy().to_string())
                .unwrap_or_else(|| d.path.clone());
            out.push_str(&format!("  - {}\n    Error: {}\n", shown, d.error));
        }
    }

    if !summary.records.is_empty() {
        out.push_str("\nDETAILED RESULTS:\n");
    }
    for r in &summary.records {
        let icon = match (r.passed(), color) {
            (true, true) => "✓".green().to_string(),
            (true, false) => "✓".to_string(),
            (false, true) => "✗".red().to_string(),
            (false, false) => "✗".to_string(),
        };
        out.push_str(&format!("{} {}\n", icon, display_path(r, root)));
        out.push_str(&format!("    Size: {} bytes\n", r.size_bytes));
        out.push_str(&format!("    Lines: {}\n", r.line_count));
        if let Some(err) = &r.error {
            out.push_str(&format!("    {}\n", err));
        }
    }
    out
}

/// Print the summary in the requested console format.
pub fn print_summary(
    summary: &RunSummary,
    unreadable: &[UnreadableDir],
    format: ConsoleFormat,
) -> Result<(), FatalError> {
    match format {
        ConsoleFormat::Json => {
            let out = compose_report_json(summary)?;
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        ConsoleFormat::Human => {
            print!(
                "{}",
                render_human(summary, unreadable, crate::utils::use_colors())
            );
        }
    }
    Ok(())
}

/// Progress line printed before discovery (human mode only).
pub fn print_discovering(root: &Path) {
    println!("Discovering files in {}...", root.display());
}

/// Progress line printed after discovery (human mode only).
pub fn print_found(count: usize) {
    if count == 0 {
        println!("No files found to test.");
    } else {
        println!("Found {} file(s) to test.\n", count);
    }
}

/// Progress line printed before each probe (human mode only).
pub fn print_testing(path: &Path) {
    println!("Testing: {}", path.display());
}

pub fn print_saved(path: &Path) {
    println!("\nReport saved to {}", path.display());
}
