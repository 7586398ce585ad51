//! Aggregation: probe each discovered path and build the run summary.

use crate::models::{FileRecord, RunSummary};
use crate::probe::probe_file;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Probe `paths` in order and collect a `RunSummary`.
///
/// Duplicated paths are probed once per occurrence. `on_file` is invoked
/// before each probe so callers can report progress.
pub fn run_probes<F>(root: &Path, paths: &[PathBuf], mut on_file: F) -> RunSummary
where
    F: FnMut(&Path),
{
    let mut summary = RunSummary::new(root.to_string_lossy().to_string());
    for path in paths {
        on_file(path);
        let record = probe_file(path);
        log_record(&record);
        summary.push(record);
    }
    debug!(
        total = summary.total_files,
        passed = summary.passed,
        failed = summary.failed,
        "aggregation finished"
    );
    summary
}

fn log_record(record: &FileRecord) {
    match &record.error {
        Some(err) => warn!(path = %record.path, error = %err, "file failed"),
        None => debug!(
            path = %record.path,
            size = record.size_bytes,
            lines = record.line_count,
            "file passed"
        ),
    }
}
