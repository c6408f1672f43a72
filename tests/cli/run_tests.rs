use crate::common::{fixture_path, TestContext};
use predicates::prelude::*;

#[test]
fn test_run_requires_scenario_arg() {
    let ctx = TestContext::default();
    ctx.cmd()
        .arg("run")
        .assert()
        .failure()
        .stderr(predicate::str::contains("scenario").or(predicate::str::contains("required")));
}

#[test]
fn test_run_fixture_scenario_passes() {
    let ctx = TestContext::default();
    ctx.cmd()
        .args(["run", "--scenario"])
        .arg(fixture_path("identity_creation.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("7 passed, 0 failed"));
}

#[test]
fn test_run_json_output_is_valid() {
    let ctx = TestContext::default();
    let output = ctx
        .cmd()
        .args(["run", "--format", "json", "--scenario"])
        .arg(fixture_path("identity_creation.toml"))
        .output()
        .expect("Failed to run scenario");

    assert!(output.status.success());
    let report: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(report["cases"].as_array().map(Vec::len), Some(7));
}

#[test]
fn test_run_failing_case_exits_non_zero() {
    let ctx = TestContext::default();
    let scenario = ctx
        .create_file(
            "failing.toml",
            r#"
[[cases]]
name = "expects a value that was never configured"
[[cases.calls]]
operation = "create-identity"
args = '["Test metadata"]'
expect = '{"value": 0}'
"#,
        )
        .unwrap();

    ctx.cmd()
        .args(["run", "--scenario"])
        .arg(&scenario)
        .assert()
        .failure()
        .stdout(predicate::str::contains("0 passed, 1 failed"))
        .stderr(predicate::str::contains("scenario cases failed"));
}

#[test]
fn test_run_with_missing_scenario_file() {
    let ctx = TestContext::default();
    ctx.cmd()
        .args(["run", "--scenario", "/nonexistent/scenario.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read scenario file"));
}

#[test]
fn test_run_uses_config_defaults() {
    let ctx = TestContext::default();
    ctx.create_file(
        ".identity-mock.toml",
        r#"
[defaults]
"create-identity" = '{"error": 1}'
"#,
    )
    .unwrap();
    let scenario = ctx
        .create_file(
            "defaults.toml",
            r#"
[[cases]]
name = "default return from config"
[[cases.calls]]
operation = "create-identity"
args = '["x"]'
expect = '{"error": 1}'
"#,
        )
        .unwrap();

    ctx.cmd()
        .args(["run", "--scenario"])
        .arg(&scenario)
        .assert()
        .success();
}

#[test]
fn test_run_skips_invalid_config_default() {
    let ctx = TestContext::default();
    ctx.create_file(
        ".identity-mock.toml",
        r#"
[defaults]
"get-identity" = '{not json'
"create-identity" = '{"value": 0}'
"#,
    )
    .unwrap();
    let scenario = ctx
        .create_file(
            "defaults.toml",
            r#"
[[cases]]
name = "valid default still applies"
[[cases.calls]]
operation = "create-identity"
args = '["x"]'
expect = '{"value": 0}'
[[cases.calls]]
operation = "get-identity"
args = '[1]'
expect = 'null'
"#,
        )
        .unwrap();

    ctx.cmd()
        .args(["run", "--scenario"])
        .arg(&scenario)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 passed, 0 failed"));
}
