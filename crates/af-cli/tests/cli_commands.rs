//! Integration tests for the af CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn af() -> Command {
    Command::cargo_bin("af").unwrap()
}

// ---------------------------------------------------------------------------
// prank
// ---------------------------------------------------------------------------

#[test]
fn prank_employee() {
    af().args(["prank", "Alice", "employee"])
        .assert()
        .success()
        .stdout("Congratulations Alice! You have been promoted to Chief Joke Officer!\n");
}

#[test]
fn prank_developer() {
    af().args(["prank", "Bob", "developer"])
        .assert()
        .success()
        .stdout(
            "[CRITICAL ALERT] A fatal error has been detected in your IDE! Error code: APR-001.\n",
        );
}

#[test]
fn prank_manager() {
    af().args(["prank", "Charlie", "manager"])
        .assert()
        .success()
        .stdout("URGENT: Surprise meeting with the CEO in 5 minutes. Prepare a presentation!\n");
}

#[test]
fn prank_unknown_role_uses_default() {
    af().args(["prank", "Dave", "janitor"])
        .assert()
        .success()
        .stdout("April Fools, Dave!\n");
}

#[test]
fn prank_strict_rejects_unknown_role() {
    af().args(["prank", "Dave", "janitor", "--strict"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("error: unknown role: janitor"));
}

#[test]
fn prank_strict_accepts_other() {
    af().args(["prank", "Dave", "other", "--strict"])
        .assert()
        .success()
        .stdout("April Fools, Dave!\n");
}

#[test]
fn prank_json_output() {
    let output = af()
        .args(["prank", "Alice", "employee", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 1, "expected one line: {stdout:?}");

    let value: serde_json::Value = serde_json::from_str(stdout.trim_end()).unwrap();
    let obj = value.as_object().unwrap();
    assert_eq!(obj.len(), 3);
    assert_eq!(value["name"], "Alice");
    assert_eq!(value["role"], "employee");
    assert_eq!(
        value["message"],
        "Congratulations Alice! You have been promoted to Chief Joke Officer!"
    );
}

#[test]
fn prank_json_constant_message() {
    let output = af()
        .args(["prank", "Charlie", "manager", "-f", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["name"], "Charlie");
    assert_eq!(value["role"], "manager");
    assert_eq!(
        value["message"],
        "URGENT: Surprise meeting with the CEO in 5 minutes. Prepare a presentation!"
    );
}

// ---------------------------------------------------------------------------
// logging
// ---------------------------------------------------------------------------

#[test]
fn verbose_logs_to_stderr_only() {
    af().args(["-v", "prank", "Dave", "janitor"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("April Fools, Dave!\n")
        .stderr(predicate::str::contains("unrecognized role"));
}

#[test]
fn quiet_by_default() {
    af().args(["prank", "Dave", "janitor"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("April Fools, Dave!\n")
        .stderr(predicate::str::is_empty());
}

#[test]
fn prank_requires_role() {
    af().args(["prank", "Alice"]).assert().failure();
}

// ---------------------------------------------------------------------------
// roles
// ---------------------------------------------------------------------------

#[test]
fn roles_lists_all() {
    af().arg("roles").assert().success().stdout(
        predicate::str::contains("employee")
            .and(predicate::str::contains("developer"))
            .and(predicate::str::contains("manager"))
            .and(predicate::str::contains("other")),
    );
}
