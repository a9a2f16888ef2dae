//! Integration tests for the `validate` command.

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_valid_file() {
    let env = TestEnv::new();
    let path = env.write_file(
        "booking.yaml",
        "dark_mode: true\noutput_format: cards\nservices:\n  - value: Haircut\n    label: Haircut\n",
    );

    env.command()
        .arg("validate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_duplicate_services_fail_validation() {
    let env = TestEnv::new();
    let path = env.write_file(
        "dup.yaml",
        "services:\n  - value: Shave\n    label: A\n  - value: Shave\n    label: B\n",
    );

    env.command()
        .arg("validate")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn test_unknown_key_is_parse_error() {
    let env = TestEnv::new();
    let path = env.write_file("bad.yaml", "colour: blue\n");

    env.command()
        .arg("validate")
        .arg(&path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Parse error"));
}

#[test]
fn test_missing_file() {
    let env = TestEnv::new();

    env.command()
        .arg("validate")
        .arg(env.path().join("nope.yaml"))
        .assert()
        .code(4)
        .stderr(predicate::str::contains("File not found"));
}
