//! Property-style checks for the registered utilities.
//!
//! Literal fixtures live in `harness::fixtures`; these tests cover the
//! invariants that hold for any input.

mod common;

use arraykit::harness::fixtures::builtin_groups;
use arraykit::utilities::build_default_registry;
use arraykit::Value;
use common::{args, call, utility};
use serde_json::json;

#[cfg(test)]
mod determinism_tests {
    use super::*;

    #[test]
    fn every_fixture_yields_identical_results_twice() {
        let registry = build_default_registry();
        for group in builtin_groups() {
            let func = registry.resolve(&group.function_name).unwrap();
            for case in &group.test_cases {
                let first = func(&case.arguments).unwrap();
                let second = func(&case.arguments).unwrap();
                assert_eq!(first, second, "{} is not deterministic", group.function_name);
            }
        }
    }
}

#[cfg(test)]
mod sequence_tests {
    use super::*;

    #[test]
    fn merge_arrays_keeps_nested_values() {
        assert_eq!(
            call("mergeArrays", json!([[[1], {"a": 1}], [null]])),
            Value::from(json!([[1], {"a": 1}, null]))
        );
    }

    #[test]
    fn index_of_is_non_negative_for_every_present_element() {
        let haystack = json!(["delfin", "foo", "bar", 7, {"k": 1}]);
        let index_of = utility("indexOf");
        for (expected, needle) in args(haystack.clone()).into_iter().enumerate() {
            let position = index_of(&[needle, Value::from(haystack.clone())]).unwrap();
            assert_eq!(position, Value::from(expected as i64));
        }
        assert_eq!(call("indexOf", json!(["missing", haystack])), Value::from(-1));
    }

    #[test]
    fn index_of_reports_first_of_duplicates() {
        assert_eq!(call("indexOf", json!([2, [1, 2, 2]])), Value::from(1));
    }
}

#[cfg(test)]
mod record_tests {
    use super::*;

    #[test]
    fn sort_people_yields_non_decreasing_ages() {
        let people = json!([
            {"name": "a", "age": 40}, {"name": "b", "age": 3}, {"name": "c", "age": 40},
            {"name": "d", "age": 18}, {"name": "e", "age": 0.5}, {"name": "f", "age": 18}
        ]);
        let input = vec![Value::from(people.clone())];
        let Value::List(sorted) = utility("sortPeople")(&input).unwrap() else {
            panic!("sortPeople must return a list");
        };
        let ages: Vec<f64> = sorted
            .iter()
            .map(|p| p.field("age").and_then(Value::as_number).unwrap())
            .collect();
        assert!(ages.windows(2).all(|w| w[0] <= w[1]), "{ages:?}");
        let names: Vec<&str> = sorted
            .iter()
            .map(|p| p.field("name").and_then(Value::as_str).unwrap())
            .collect();
        assert_eq!(names, vec!["e", "b", "d", "f", "a", "c"]);
        assert_eq!(input, vec![Value::from(people)]);
    }

    #[test]
    fn filter_premium_is_case_insensitive() {
        assert_eq!(
            call("filterPremium", json!([["mercedes", "aUdi", "BMW"]])),
            Value::from(json!(["mercedes", "aUdi", "BMW"]))
        );
        assert_eq!(call("filterPremium", json!([["123", "foo", "bar"]])), Value::List(vec![]));
        assert_eq!(call("filterPremium", json!([[]])), Value::List(vec![]));
    }

    #[test]
    fn find_non_empty_task_returns_the_record_itself() {
        assert_eq!(
            call("findNonEmptyTask", json!([[{"content": "", "id": 1}, {"content": "x", "id": 2}]])),
            Value::from(json!({"content": "x", "id": 2}))
        );
    }
}

#[cfg(test)]
mod predicate_tests {
    use super::*;

    #[test]
    fn some_adult_is_false_for_empty_input() {
        assert_eq!(call("someAdult", json!([[]])), Value::Bool(false));
    }

    #[test]
    fn only_string_fails_on_any_non_string() {
        assert_eq!(call("onlyString", json!(["a", "b", 1])), Value::Bool(false));
        assert_eq!(call("onlyString", json!([1, "a", "b"])), Value::Bool(false));
        assert_eq!(call("onlyString", json!(["a", "b"])), Value::Bool(true));
    }

    #[test]
    fn type_errors_surface_as_diagnostics() {
        let err = utility("hasStrawberry")(&args(json!(["strawberry"]))).unwrap_err();
        let code = miette::Diagnostic::code(&err).map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("arraykit::type_mismatch"));
    }
}
