use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;

#[test]
fn test_malformed_rows_are_skipped() {
    let input = common::charges_csv(&[
        ["USD", "1", "0", "4111111111111111", "1", "2099"],
        ["USD", "not_a_number", "0", "4111111111111111", "1", "2099"],
        ["USD", "1", "-5", "4111111111111111", "1", "2099"],
        ["USD", "2", "0", "4111111111111111", "13x", "2099"],
        ["USD", "3", "0", "4111111111111111", "1", "2099"],
    ]);

    let mut cmd = Command::new(cargo_bin!("paymentservice"));
    cmd.env_remove("RUST_LOG").env_remove("LOG_FORMAT");
    cmd.arg(input.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Error reading charge request"))
        .stdout(predicate::str::contains("1,USD,1,ok,"))
        .stdout(predicate::str::contains("5,USD,3,ok,"))
        .stdout(predicate::str::contains("2,USD").not())
        .stdout(predicate::str::contains("3,USD").not())
        .stdout(predicate::str::contains("4,USD").not());
}

#[test]
fn test_out_of_range_months_are_skipped() {
    let input = common::charges_csv(&[
        ["USD", "1", "0", "4432-8015-6152-0454", "1", "2099"],
        ["USD", "2", "0", "4432-8015-6152-0454", "0", "2099"],
        ["USD", "3", "0", "4432-8015-6152-0454", "24", "2025"],
        ["USD", "4", "0", "4432-8015-6152-0454", "13", "2099"],
        ["USD", "5", "0", "4432-8015-6152-0454", "12", "2099"],
    ]);

    let mut cmd = Command::new(cargo_bin!("paymentservice"));
    cmd.env_remove("RUST_LOG").env_remove("LOG_FORMAT");
    cmd.arg(input.path())
        .assert()
        .success()
        .stderr(predicate::str::contains("Error reading charge request"))
        .stderr(predicate::str::contains("expiration month must be within 1-12"))
        .stdout(predicate::str::contains("1,USD,1,ok,"))
        .stdout(predicate::str::contains("5,USD,5,ok,"))
        .stdout(predicate::str::contains("2,USD").not())
        .stdout(predicate::str::contains("3,USD").not())
        .stdout(predicate::str::contains("4,USD").not());
}

#[test]
fn test_missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.csv");

    let mut cmd = Command::new(cargo_bin!("paymentservice"));
    cmd.env_remove("RUST_LOG").env_remove("LOG_FORMAT");
    cmd.arg(&missing).assert().failure();
}

#[test]
fn test_invalid_log_level_fails() {
    let input = common::charges_csv(&[]);

    let mut cmd = Command::new(cargo_bin!("paymentservice"));
    cmd.env_remove("RUST_LOG").env_remove("LOG_FORMAT");
    cmd.arg(input.path())
        .arg("--log-level")
        .arg("paymentservice=loud")
        .assert()
        .failure();
}
