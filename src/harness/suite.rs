//! External fixture suites.
//!
//! A suite file is a YAML or JSON list of groups:
//!
//! ```yaml
//! - functionName: indexOf
//!   equality: deep          # optional, `shallow` or `deep`
//!   testCases:
//!     - arguments: ["bar", ["foo", "bar"]]
//!       expectedResult: 1
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use super::TestGroup;
use crate::errors::ArraykitError;

const SUITE_EXTENSIONS: [&str; 3] = ["yaml", "yml", "json"];

fn is_suite_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| SUITE_EXTENSIONS.contains(&ext))
}

/// Discovers all suite files recursively under `root`, sorted by path.
pub fn discover_suite_files<P: AsRef<Path>>(root: P) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_suite_file(e.path()))
        .map(|e| e.path().to_path_buf())
        .collect();
    files.sort();
    files
}

/// Parses suite text. JSON is a subset of YAML, so one parser covers both.
pub fn parse_groups(source: &str, path: &Path) -> Result<Vec<TestGroup>, ArraykitError> {
    serde_yaml::from_str(source).map_err(|e| ArraykitError::SuiteParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Loads the groups of one suite file.
pub fn load_groups(path: &Path) -> Result<Vec<TestGroup>, ArraykitError> {
    let source = fs::read_to_string(path).map_err(|source| ArraykitError::SuiteIo {
        path: path.to_path_buf(),
        source,
    })?;
    let groups = parse_groups(&source, path)?;
    debug!(path = %path.display(), groups = groups.len(), "loaded suite");
    Ok(groups)
}

/// Loads every suite under `root`, in path order.
pub fn load_suite_dir<P: AsRef<Path>>(root: P) -> Result<Vec<TestGroup>, ArraykitError> {
    let mut groups = Vec::new();
    for path in discover_suite_files(root) {
        groups.extend(load_groups(&path)?);
    }
    Ok(groups)
}
