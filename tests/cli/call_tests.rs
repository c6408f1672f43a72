use crate::common::TestContext;
use predicates::prelude::*;

#[test]
fn test_call_unconfigured_operation_prints_none() {
    let ctx = TestContext::default();
    ctx.cmd()
        .args(["call", "--operation", "get-identity", "--args", "[999]"])
        .assert()
        .success()
        .stdout(predicate::str::contains("get-identity(999)"))
        .stdout(predicate::str::contains("none"));
}

#[test]
fn test_call_with_mock_returns_value_as_json() {
    let ctx = TestContext::default();
    ctx.cmd()
        .args([
            "call",
            "--operation",
            "create-identity",
            "--args",
            r#"["Test metadata"]"#,
            "--mock",
            r#"create-identity={"value": 0}"#,
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::diff("{\"value\":0}\n"));
}

#[test]
fn test_call_formats_error_response() {
    let ctx = TestContext::default();
    ctx.cmd()
        .args([
            "call",
            "-o",
            "deactivate-identity",
            "-a",
            "[1]",
            "-m",
            r#"deactivate-identity={"error": 3}"#,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("(err u3)"));
}

#[test]
fn test_call_warns_on_unknown_operation() {
    let ctx = TestContext::default();
    ctx.cmd()
        .args(["call", "--operation", "transfer-identity"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not an identity contract operation"));
}

#[test]
fn test_call_rejects_malformed_mock() {
    let ctx = TestContext::default();
    ctx.cmd()
        .args(["call", "--operation", "get-identity", "--mock", "get-identity"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid mock"));
}

#[test]
fn test_call_rejects_non_array_args() {
    let ctx = TestContext::default();
    ctx.cmd()
        .args(["call", "--operation", "get-identity", "--args", r#"{"id": 1}"#])
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON array"));
}

#[test]
fn test_no_color_output_is_plain() {
    let ctx = TestContext::default();
    ctx.cmd()
        .args(["call", "--operation", "get-identity", "--args", "[1]"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\u{1b}[").not());
}
