use crate::common::cmd;
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("call"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn test_version_flag() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("identity-mock"));
}

#[test]
fn test_completions_for_bash() {
    cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("identity-mock"));
}

#[test]
fn test_verbose_and_quiet_conflict() {
    cmd()
        .args(["-v", "-q", "call", "--operation", "get-identity"])
        .assert()
        .failure();
}
