//! External suite discovery and execution.

use std::fs;

use arraykit::harness::suite::{discover_suite_files, load_groups, load_suite_dir};
use arraykit::harness::{run_all, EqualityMode, GroupOutcome, RunSummary};
use arraykit::utilities::build_default_registry;
use tempfile::tempdir;

const YAML_SUITE: &str = r#"
- functionName: oddIndex
  testCases:
    - arguments: [[2, 4, 7]]
      expectedResult: 2
- functionName: someAdult
  equality: shallow
  testCases:
    - arguments: [[{age: 30}]]
      expectedResult: 1
"#;

const JSON_SUITE: &str = r#"[
  {"functionName": "last2Parameters", "testCases": [
    {"arguments": [1, 2, 3], "expectedResult": [2, 3]},
    {"arguments": [1, 2, 3], "expectedResult": [1, 2]}
  ]},
  {"functionName": "reverse", "testCases": []}
]"#;

#[test]
fn discovers_suites_recursively_in_path_order() {
    let dir = tempdir().unwrap();
    fs::create_dir(dir.path().join("nested")).unwrap();
    fs::write(dir.path().join("b.yaml"), YAML_SUITE).unwrap();
    fs::write(dir.path().join("nested").join("a.json"), JSON_SUITE).unwrap();
    fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

    let files = discover_suite_files(dir.path());
    assert_eq!(files.len(), 2);
    assert!(files[0].ends_with("b.yaml"));
    assert!(files[1].ends_with("nested/a.json"));
}

#[test]
fn loaded_suites_run_against_default_registry() {
    let dir = tempdir().unwrap();
    fs::write(dir.path().join("a.yml"), YAML_SUITE).unwrap();
    fs::write(dir.path().join("b.json"), JSON_SUITE).unwrap();

    let groups = load_suite_dir(dir.path()).unwrap();
    assert_eq!(groups.len(), 4);
    assert_eq!(groups[1].equality, EqualityMode::Shallow);

    let reports = run_all(&build_default_registry(), &groups);
    assert_eq!(
        RunSummary::from_reports(&reports),
        RunSummary {
            passed: 2,
            failed: 1,
            missing: 1
        }
    );
    assert_eq!(reports[2].passed, 1);
    assert!(matches!(reports[3].outcome, GroupOutcome::Missing(_)));
}

#[test]
fn unreadable_suite_is_an_io_error() {
    let dir = tempdir().unwrap();
    let err = load_groups(&dir.path().join("absent.yaml")).unwrap_err();
    assert_eq!(err.code_str(), "arraykit::suite_io");
}

#[test]
fn malformed_suite_is_a_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.yaml");
    fs::write(&path, "- functionName: [unclosed").unwrap();
    let err = load_groups(&path).unwrap_err();
    assert_eq!(err.code_str(), "arraykit::suite_parse");
}
