//! Arraykit error handling.
//!
//! One error enum covers the utilities, the harness and suite loading. Every
//! variant carries a `miette` diagnostic code so callers can render it with
//! `miette::Report` or match on [`ArraykitError::code_str`].

use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

use crate::harness::EqualityMode;
use crate::value::Value;

#[derive(Debug, Error, Diagnostic)]
pub enum ArraykitError {
    /// A utility received a value of the wrong kind.
    #[error("{utility}: expected {expected}, found {found}")]
    #[diagnostic(
        code(arraykit::type_mismatch),
        help("utilities do not coerce their inputs")
    )]
    TypeMismatch {
        utility: String,
        expected: String,
        found: String,
    },

    /// No utility is registered under the requested identifier.
    #[error("{name} does not exist or is not a function")]
    #[diagnostic(
        code(arraykit::unknown_utility),
        help("register the function in the utility registry before running its group")
    )]
    UnknownUtility { name: String },

    /// A case's actual result differed from its expected result.
    ///
    /// `expected` is JSON text and `actual` is template-string text, the
    /// same way the failure line has always read. The compared values are
    /// kept for the diff.
    #[error("{utility} with arguments {arguments} {marker}  expected: {expected}  got: {actual}", marker = FAIL_MARK)]
    #[diagnostic(code(arraykit::assertion))]
    AssertionMismatch {
        utility: String,
        arguments: String,
        expected: String,
        actual: String,
        expected_value: Value,
        actual_value: Value,
        mode: EqualityMode,
    },

    #[error("failed to read suite {}", path.display())]
    #[diagnostic(code(arraykit::suite_io))]
    SuiteIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse suite {}: {message}", path.display())]
    #[diagnostic(
        code(arraykit::suite_parse),
        help("a suite is a list of groups with functionName, testCases and an optional equality")
    )]
    SuiteParse { path: PathBuf, message: String },
}

/// Marker appended to failure messages.
pub const FAIL_MARK: &str = "\u{274c}";

/// Marker printed after a fully passing group.
pub const CHECK_MARK: &str = "\u{2705}";

impl ArraykitError {
    pub fn type_mismatch(
        utility: impl Into<String>,
        expected: impl Into<String>,
        found: &Value,
    ) -> Self {
        ArraykitError::TypeMismatch {
            utility: utility.into(),
            expected: expected.into(),
            found: found.type_name().to_string(),
        }
    }

    /// Stable string form of the diagnostic code.
    pub fn code_str(&self) -> &'static str {
        match self {
            ArraykitError::TypeMismatch { .. } => "arraykit::type_mismatch",
            ArraykitError::UnknownUtility { .. } => "arraykit::unknown_utility",
            ArraykitError::AssertionMismatch { .. } => "arraykit::assertion",
            ArraykitError::SuiteIo { .. } => "arraykit::suite_io",
            ArraykitError::SuiteParse { .. } => "arraykit::suite_parse",
        }
    }
}
