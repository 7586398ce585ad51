use filecheck::models::RunSummary;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::tempdir;

fn run_bin(cwd: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_filecheck"))
        .current_dir(cwd)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .unwrap()
}

fn read_report(path: &Path) -> RunSummary {
    serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_extension_filter_scenario() {
    let tmp = tempdir().unwrap();
    let data = tmp.path().join("data");
    std::fs::create_dir(&data).unwrap();
    std::fs::write(data.join("a.txt"), "ab\ncd\nefg").unwrap();
    std::fs::write(data.join("b.py"), "").unwrap();

    let out = run_bin(tmp.path(), &["data", "--extensions", ".py"]);
    assert_eq!(out.status.code(), Some(0));
    let report = read_report(&tmp.path().join("test_report.json"));
    assert_eq!(report.total_files, 1);
    assert_eq!(report.passed, 1);
    assert_eq!(report.failed, 0);
    let rec = &report.records[0];
    assert!(rec.path.ends_with("b.py"));
    assert!(rec.readable);
    assert_eq!(rec.size_bytes, 0);
    assert_eq!(rec.line_count, 0);
    assert!(rec.error.is_none());
}

#[test]
fn test_all_files_counted_and_stdout_summary() {
    let tmp = tempdir().unwrap();
    let data = tmp.path().join("data");
    std::fs::create_dir(&data).unwrap();
    std::fs::write(data.join("a.txt"), "ab\ncd\nefg").unwrap();
    std::fs::write(data.join("b.py"), "").unwrap();

    let out = run_bin(tmp.path(), &["data", "--output", "r.json"]);
    assert_eq!(out.status.code(), Some(0));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Found 2 file(s) to test."));
    assert!(stdout.contains("Total files tested: 2"));
    assert!(stdout.contains("Report saved to r.json"));
    let report = read_report(&tmp.path().join("r.json"));
    assert_eq!(report.passed + report.failed, report.total_files);
    assert_eq!(report.records.len(), report.total_files);
    assert_eq!(report.records[0].size_bytes, 10);
    assert_eq!(report.records[0].line_count, 3);
}

#[test]
fn test_no_matching_files_exits_zero() {
    let tmp = tempdir().unwrap();
    std::fs::write(tmp.path().join("a.txt"), "x").unwrap();
    let out = run_bin(tmp.path(), &[".", "--extensions", ".rs"]);
    assert_eq!(out.status.code(), Some(0));
    let report = read_report(&tmp.path().join("test_report.json"));
    assert_eq!(report.total_files, 0);
    assert_eq!(report.passed, 0);
    assert_eq!(report.failed, 0);
}

#[test]
fn test_missing_root_is_fatal_without_report() {
    let tmp = tempdir().unwrap();
    let out = run_bin(tmp.path(), &["does-not-exist"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("does not exist"));
    assert!(!tmp.path().join("test_report.json").exists());
}

#[test]
fn test_failed_file_exits_one_and_is_reported() {
    let tmp = tempdir().unwrap();
    let data = tmp.path().join("data");
    std::fs::create_dir(&data).unwrap();
    std::fs::write(data.join("ok.txt"), "fine\n").unwrap();
    std::fs::write(data.join("blob.bin"), [0xc3u8, 0x28]).unwrap();

    let out = run_bin(tmp.path(), &["data"]);
    assert_eq!(out.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("FAILED FILES:"));
    assert!(stdout.contains("Error: Binary file or encoding issue"));
    let report = read_report(&tmp.path().join("test_report.json"));
    assert_eq!(report.failed, 1);
    assert_eq!(report.passed, 1);
}

#[test]
fn test_repeat_runs_are_identical() {
    let tmp = tempdir().unwrap();
    std::fs::write(tmp.path().join("a.txt"), "x\ny\n").unwrap();
    std::fs::write(tmp.path().join("b.md"), "# t").unwrap();

    let first = run_bin(tmp.path(), &[]);
    assert_eq!(first.status.code(), Some(0));
    let r1 = read_report(&tmp.path().join("test_report.json"));
    let second = run_bin(tmp.path(), &[]);
    assert_eq!(second.status.code(), Some(0));
    let r2 = read_report(&tmp.path().join("test_report.json"));
    assert_eq!(r1.total_files, 2);
    assert_eq!(r1.records, r2.records);
}

#[test]
fn test_json_console_and_config_file() {
    let tmp = tempdir().unwrap();
    std::fs::create_dir_all(tmp.path().join("src/gen")).unwrap();
    std::fs::write(tmp.path().join("src/lib.rs"), "fn f() {}\n").unwrap();
    std::fs::write(tmp.path().join("src/gen/out.rs"), "x\n").unwrap();
    std::fs::write(
        tmp.path().join("filecheck.toml"),
        "extensions = [\".rs\"]\nexclude = [\"gen/**\"]\noutput = \"cfg.json\"\n",
    )
    .unwrap();

    let out = run_bin(tmp.path(), &["src", "--format", "json"]);
    assert_eq!(out.status.code(), Some(0));
    let printed: RunSummary = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(printed.total_files, 1);
    assert!(printed.records[0].path.ends_with("lib.rs"));
    assert_eq!(read_report(&tmp.path().join("cfg.json")), printed);
}

#[cfg(unix)]
#[test]
fn test_symlink_loops_are_not_walked() {
    let tmp = tempdir().unwrap();
    let data = tmp.path().join("data");
    std::fs::create_dir(&data).unwrap();
    std::fs::write(data.join("a.txt"), "a\n").unwrap();
    std::os::unix::fs::symlink(".", data.join("l1")).unwrap();
    std::os::unix::fs::symlink(".", data.join("l2")).unwrap();

    let out = run_bin(tmp.path(), &["data"]);
    assert_eq!(out.status.code(), Some(0));
    let report = read_report(&tmp.path().join("test_report.json"));
    assert_eq!(report.total_files, 1);
    assert!(report.records[0].path.ends_with("a.txt"));
}

#[cfg(unix)]
#[test]
fn test_unreadable_file_does_not_abort() {
    use std::os::unix::fs::PermissionsExt;
    let tmp = tempdir().unwrap();
    let data = tmp.path().join("data");
    std::fs::create_dir(&data).unwrap();
    std::fs::write(data.join("a.txt"), "a\n").unwrap();
    let locked = data.join("locked.txt");
    std::fs::write(&locked, "b\n").unwrap();
    std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();
    // root ignores mode bits
    if std::fs::read(&locked).is_ok() {
        return;
    }

    let out = run_bin(tmp.path(), &["data"]);
    assert_eq!(out.status.code(), Some(1));
    let report = read_report(&tmp.path().join("test_report.json"));
    assert_eq!(report.total_files, 2);
    let rec = report
        .records
        .iter()
        .find(|r| r.path.ends_with("locked.txt"))
        .unwrap();
    assert!(!rec.readable);
    assert_eq!(rec.error.as_deref(), Some("Permission denied"));
}
