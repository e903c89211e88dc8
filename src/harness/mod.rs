//! Arraykit Test Harness
//!
//! Runs literal input/output fixtures through the registered utilities.
//!
//! # Execution model
//!
//! Each [`TestGroup`] runs independently:
//! 1. **Lookup**: resolve the group's utility in the [`UtilityRegistry`]
//! 2. **Invoke**: call it with each case's arguments, in order
//! 3. **Compare**: check the result with the group's [`EqualityMode`]
//! 4. **Report**: return a [`GroupReport`] with the local pass count
//!
//! The first mismatch (or utility error) aborts the rest of its group. Other
//! groups are unaffected.
//!
//! # Example Usage
//!
//! ```rust
//! use arraykit::harness::{fixtures::builtin_groups, run_all, RunSummary};
//! use arraykit::utilities::build_default_registry;
//!
//! let registry = build_default_registry();
//! let reports = run_all(&registry, &builtin_groups());
//! let summary = RunSummary::from_reports(&reports);
//! assert_eq!(summary.failed, 0);
//! ```

use serde::Deserialize;
use tracing::debug;

use crate::errors::ArraykitError;
use crate::utilities::{UtilityFn, UtilityRegistry};
use crate::value::Value;

pub mod equality;
pub mod fixtures;
pub mod suite;

pub use equality::EqualityMode;

// =============================================================================
// CORE TYPES
// =============================================================================

/// One literal invocation and the result it must produce.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    #[serde(default)]
    pub arguments: Vec<Value>,
    #[serde(default)]
    pub expected_result: Value,
}

impl TestCase {
    pub fn new(arguments: Vec<Value>, expected_result: Value) -> Self {
        Self {
            arguments,
            expected_result,
        }
    }
}

/// A named utility with its fixtures and comparison strategy.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestGroup {
    pub function_name: String,
    pub test_cases: Vec<TestCase>,
    #[serde(default)]
    pub equality: EqualityMode,
}

impl TestGroup {
    pub fn new(function_name: impl Into<String>, equality: EqualityMode) -> Self {
        Self {
            function_name: function_name.into(),
            test_cases: Vec::new(),
            equality,
        }
    }

    /// Appends a case; arguments and result are JSON literals.
    pub fn case(mut self, arguments: serde_json::Value, expected: serde_json::Value) -> Self {
        let arguments = match Value::from(arguments) {
            Value::List(items) => items,
            single => vec![single],
        };
        self.test_cases
            .push(TestCase::new(arguments, Value::from(expected)));
        self
    }
}

/// How a group run ended.
#[derive(Debug)]
pub enum GroupOutcome {
    /// Every case matched.
    Passed,
    /// A case failed; later cases were not run.
    Failed(ArraykitError),
    /// The utility is not registered; no case was run.
    Missing(ArraykitError),
}

/// Result of running one group. Replaces shared pass/total counters.
#[derive(Debug)]
pub struct GroupReport {
    pub function_name: String,
    pub passed: usize,
    pub total: usize,
    pub outcome: GroupOutcome,
}

impl GroupReport {
    pub fn is_passed(&self) -> bool {
        matches!(self.outcome, GroupOutcome::Passed)
    }

    pub fn error(&self) -> Option<&ArraykitError> {
        match &self.outcome {
            GroupOutcome::Passed => None,
            GroupOutcome::Failed(err) | GroupOutcome::Missing(err) => Some(err),
        }
    }
}

/// Counts of group outcomes across a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
    pub missing: usize,
}

impl RunSummary {
    pub fn from_reports(reports: &[GroupReport]) -> Self {
        reports
            .iter()
            .fold(RunSummary::default(), |mut summary, report| {
                match report.outcome {
                    GroupOutcome::Passed => summary.passed += 1,
                    GroupOutcome::Failed(_) => summary.failed += 1,
                    GroupOutcome::Missing(_) => summary.missing += 1,
                }
                summary
            })
    }

    pub fn total(&self) -> usize {
        self.passed + self.failed + self.missing
    }
}

// =============================================================================
// EXECUTION
// =============================================================================

/// Runs one case. A mismatch becomes [`ArraykitError::AssertionMismatch`],
/// whose `got:` text is the template-string form of the result.
pub fn run_case(
    function_name: &str,
    func: UtilityFn,
    case: &TestCase,
    mode: EqualityMode,
) -> Result<(), ArraykitError> {
    let actual = func(&case.arguments)?;
    if mode.compare(&actual, &case.expected_result) {
        return Ok(());
    }
    Err(ArraykitError::AssertionMismatch {
        utility: function_name.to_string(),
        arguments: Value::List(case.arguments.clone()).to_string(),
        expected: case.expected_result.to_string(),
        actual: equality::coerce_to_string(&actual),
        expected_value: case.expected_result.clone(),
        actual_value: actual,
        mode,
    })
}

/// Runs every case of a group in order, stopping at the first failure.
pub fn run_group(registry: &UtilityRegistry, group: &TestGroup) -> GroupReport {
    let total = group.test_cases.len();
    let report = |passed, outcome| GroupReport {
        function_name: group.function_name.clone(),
        passed,
        total,
        outcome,
    };

    let func = match registry.resolve(&group.function_name) {
        Ok(func) => func,
        Err(err) => {
            debug!(utility = %group.function_name, "utility not registered, skipping group");
            return report(0, GroupOutcome::Missing(err));
        }
    };

    debug!(utility = %group.function_name, cases = total, mode = %group.equality, "running group");
    let mut passed = 0;
    for case in &group.test_cases {
        if let Err(err) = run_case(&group.function_name, func, case, group.equality) {
            debug!(utility = %group.function_name, passed, total, "group aborted");
            return report(passed, GroupOutcome::Failed(err));
        }
        passed += 1;
        debug!(utility = %group.function_name, case = passed, "case passed");
    }
    report(passed, GroupOutcome::Passed)
}

/// Runs groups sequentially; a failing group never stops the next one.
pub fn run_all(registry: &UtilityRegistry, groups: &[TestGroup]) -> Vec<GroupReport> {
    groups
        .iter()
        .map(|group| run_group(registry, group))
        .collect()
}
