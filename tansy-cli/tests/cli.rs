use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

const BINARY: &str = "tansy";
type TestResult = Result<(), Box<dyn std::error::Error>>;

#[test]
fn file_doesnt_exist() -> TestResult {
    let mut cmd = Command::cargo_bin(BINARY)?;

    cmd.arg("file_which_does_not_exist.fasta").arg("sample");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("unable to read"));

    Ok(())
}

#[test]
fn fasta_first_match_with_note() -> TestResult {
    let mut cmd = Command::cargo_bin(BINARY)?;

    // two records match "sample"; the first is reported, plus a note
    cmd.arg("tests/data/test.fa").arg("sample");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Line number: 1"))
        .stdout(predicate::str::contains(
            "Sequence name: sample_01 first test read",
        ))
        .stdout(predicate::str::contains("Sequence length: 68"))
        .stdout(predicate::str::contains("1 more matching record(s)"));

    Ok(())
}

#[test]
fn fasta_preview_is_truncated() -> TestResult {
    let output = Command::cargo_bin(BINARY)?
        .arg("tests/data/test.fa")
        .arg("sample_01")
        .output()?;
    let stdout = String::from_utf8(output.stdout)?;

    let preview = stdout
        .lines()
        .find_map(|l| l.strip_prefix("Sequence data: "))
        .expect("missing preview line");
    assert_eq!(preview.len(), 50);
    assert!(preview.starts_with("ACGTACGT"));

    Ok(())
}

#[test]
fn fastq_match_reports_quality() -> TestResult {
    let mut cmd = Command::cargo_bin(BINARY)?;

    cmd.arg("tests/data/test.fq").arg("read_02");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Line number: 5"))
        .stdout(predicate::str::contains("Sequence data: GGGGCCCC"))
        .stdout(predicate::str::contains("Quality scores: JJJJJJJJ"));

    Ok(())
}

#[test]
fn no_match_reports_and_succeeds() -> TestResult {
    let mut cmd = Command::cargo_bin(BINARY)?;

    cmd.arg("tests/data/test.fa").arg("missing_name");
    cmd.assert().success().stdout(predicate::str::contains(
        "No sequences found containing 'missing_name'",
    ));

    Ok(())
}

#[test]
fn matching_is_case_sensitive_by_default() -> TestResult {
    let mut cmd = Command::cargo_bin(BINARY)?;
    cmd.arg("tests/data/test.fa").arg("SAMPLE");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No sequences found"));

    let mut cmd = Command::cargo_bin(BINARY)?;
    cmd.arg("tests/data/test.fa").arg("SAMPLE").arg("-i");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Sequence name: sample_01"));

    Ok(())
}

#[test]
fn wrong_argument_count_fails() -> TestResult {
    let mut cmd = Command::cargo_bin(BINARY)?;
    cmd.arg("tests/data/test.fa");
    cmd.assert().failure();

    Ok(())
}
