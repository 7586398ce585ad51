//! Report data models: per-file records and the run summary.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Probe result for a single file.
pub struct FileRecord {
    pub path: String,
    pub exists: bool,
    pub readable: bool,
    pub size_bytes: u64,
    pub line_count: u64,
    pub error: Option<String>,
}

impl FileRecord {
    /// A file passes iff it was readable.
    pub fn passed(&self) -> bool {
        self.readable
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Aggregate result of one scan.
///
/// Counters are only advanced through `push`, keeping
/// `passed + failed == total_files == records.len()`.
pub struct RunSummary {
    pub root_directory: String,
    pub total_files: usize,
    pub passed: usize,
    pub failed: usize,
    pub records: Vec<FileRecord>,
}

impl RunSummary {
    pub fn new(root_directory: impl Into<String>) -> Self {
        Self {
            root_directory: root_directory.into(),
            total_files: 0,
            passed: 0,
            failed: 0,
            records: Vec::new(),
        }
    }

    pub fn push(&mut self, record: FileRecord) {
        if record.passed() {
            self.passed += 1;
        } else {
            self.failed += 1;
        }
        self.total_files += 1;
        self.records.push(record);
    }

    /// Records that did not pass, in report order.
    pub fn failures(&self) -> impl Iterator<Item = &FileRecord> {
        self.records.iter().filter(|r| !r.passed())
    }

    pub fn exit_code(&self) -> i32 {
        if self.failed == 0 {
            0
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(path: &str, readable: bool) -> FileRecord {
        FileRecord {
            path: path.into(),
            exists: true,
            readable,
            size_bytes: 0,
            line_count: 0,
            error: if readable {
                None
            } else {
                Some("Permission denied".into())
            },
        }
    }

    #[test]
    fn test_push_keeps_counts_consistent() {
        let mut s = RunSummary::new("root");
        s.push(rec("a", true));
        s.push(rec("b", false));
        s.push(rec("a", true));
        assert_eq!(s.total_files, 3);
        assert_eq!(s.passed + s.failed, s.total_files);
        assert_eq!(s.records.len(), s.total_files);
        assert_eq!(s.failures().count(), 1);
        assert_eq!(s.exit_code(), 1);
    }

    #[test]
    fn test_empty_summary_exits_zero() {
        let s = RunSummary::new("root");
        assert_eq!(s.exit_code(), 0);
    }
}
