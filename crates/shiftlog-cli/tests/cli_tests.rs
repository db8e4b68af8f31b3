//! End-to-end CLI tests against generated DOCX fixtures.

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

fn paragraph(text: &str) -> String {
    format!("<w:p><w:r><w:t>{text}</w:t></w:r></w:p>")
}

fn write_docx(dir: &Path, name: &str, body: &str) -> PathBuf {
    let xml = format!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body>{body}</w:body></w:document>"#
    );
    let mut writer = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    writer
        .start_file("word/document.xml", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(xml.as_bytes()).unwrap();
    let bytes = writer.finish().unwrap().into_inner();

    let path = dir.join(name);
    std::fs::write(&path, bytes).unwrap();
    path
}

fn sample_report(dir: &Path, name: &str) -> PathBuf {
    let body = paragraph("Shift Report")
        + &paragraph("7th January 2025")
        + &paragraph("Today's Tasks")
        + &paragraph("1HNX10ST 2292 and 0031.1")
        + &paragraph("Manpower 12")
        + &paragraph("Signed (Supervisor) Ana Costa");
    write_docx(dir, name, &body)
}

#[test]
fn help_lists_subcommands() {
    Command::cargo_bin("shiftlog")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("extract"))
        .stdout(predicate::str::contains("merge"));
}

#[test]
fn extract_prints_json_rows() {
    let dir = tempfile::tempdir().unwrap();
    let report = sample_report(dir.path(), "report.docx");

    Command::cargo_bin("shiftlog")
        .unwrap()
        .args(["extract", "--quiet", "--format", "json", "--year", "2030"])
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::contains("1HNX10ST2292"))
        .stdout(predicate::str::contains("\"work_date\": \"2025-01-07\""))
        .stdout(predicate::str::contains("Ana Costa"));
}

#[test]
fn extract_writes_csv_file() {
    let dir = tempfile::tempdir().unwrap();
    let report = sample_report(dir.path(), "report.docx");
    let out = dir.path().join("rows.csv");

    Command::cargo_bin("shiftlog")
        .unwrap()
        .args(["extract", "--quiet", "--year", "2030", "-o"])
        .arg(&out)
        .arg(&report)
        .assert()
        .success();

    let text = std::fs::read_to_string(&out).unwrap();
    assert!(text.starts_with("code_full,"));
    assert!(text.contains("1HNX10ST2292,1HNX10ST,2292,2025-01-07"));
    assert!(text.contains("1HNX10ST0031.1"));
    assert!(text.contains("report.docx"));
}

#[test]
fn merge_is_idempotent_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let report = sample_report(dir.path(), "report.docx");
    let ledger = dir.path().join("master.csv");

    Command::cargo_bin("shiftlog")
        .unwrap()
        .args(["merge", "--quiet", "--year", "2030", "-o"])
        .arg(&ledger)
        .arg(&report)
        .assert()
        .success();

    let first = std::fs::read_to_string(&ledger).unwrap();
    let rows_first = first.lines().count();

    // Re-merging the same report into the ledger adds nothing.
    Command::cargo_bin("shiftlog")
        .unwrap()
        .args(["merge", "--quiet", "--year", "2030", "-m"])
        .arg(&ledger)
        .arg("-o")
        .arg(&ledger)
        .arg(&report)
        .assert()
        .success();

    let second = std::fs::read_to_string(&ledger).unwrap();
    assert_eq!(rows_first, second.lines().count());
}

#[test]
fn bad_document_is_isolated_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let good = sample_report(dir.path(), "good.docx");
    let broken = dir.path().join("broken.docx");
    std::fs::write(&broken, b"definitely not a zip").unwrap();

    Command::cargo_bin("shiftlog")
        .unwrap()
        .args(["extract", "--quiet", "--format", "json", "--year", "2030"])
        .arg(&broken)
        .arg(&good)
        .assert()
        .success()
        .stderr(predicate::str::contains("broken.docx"))
        .stderr(predicate::str::contains("malformed document container"))
        .stdout(predicate::str::contains("1HNX10ST2292"));
}

#[test]
fn zero_row_document_warns_and_merge_leaves_ledger_untouched() {
    let dir = tempfile::tempdir().unwrap();
    let empty = write_docx(dir.path(), "quiet.docx", &paragraph("7 January, all quiet"));
    let ledger = dir.path().join("master.csv");

    Command::cargo_bin("shiftlog")
        .unwrap()
        .args(["merge", "--quiet", "--year", "2025", "-o"])
        .arg(&ledger)
        .arg(&empty)
        .assert()
        .success()
        .stderr(predicate::str::contains("no equipment-code rows found"))
        .stderr(predicate::str::contains("ledger untouched"));

    assert!(!ledger.exists());
}
