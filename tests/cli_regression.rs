// Regression test: the binary runs every built-in group and reports each one.
// Requires: assert_cmd, predicates crates in [dev-dependencies]

use assert_cmd::Command;
use predicates::{prelude::PredicateBooleanExt, str::contains};

#[test]
fn cli_runs_builtin_groups() {
    let mut cmd = Command::cargo_bin("arraykit").unwrap();
    cmd.assert().success().stdout(
        contains("-------------------  mergeArrays  -----------------------")
            .and(contains("-------------------  sortPeople  -----------------------"))
            .and(contains("All 3 tests passed"))
            .and(contains("Test summary: total 12, passed 12, failed 0, missing 0")),
    );
}

#[test]
fn cli_ignores_extra_arguments() {
    let mut cmd = Command::cargo_bin("arraykit").unwrap();
    cmd.arg("--verbose");
    cmd.assert()
        .success()
        .stdout(contains("passed 12"))
        .stderr(contains("Error").not());
}
