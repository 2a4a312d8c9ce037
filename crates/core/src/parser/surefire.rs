//! Surefire test-suite results (`TEST-*.xml`)
//!
//! Each file describes one suite run; the root element carries `tests`,
//! `failures`, `errors` and `skipped` counts which are summed across files.

use super::{parse_document, read_report, ReportError};
use crate::config::ProjectLayout;
use crate::finding::TestTotals;
use std::path::{Path, PathBuf};

/// File-name pattern of a suite result inside the results directory
pub const RESULT_PATTERN: &str = "TEST-*.xml";

/// Summed totals plus the files that had to be skipped
#[derive(Debug)]
pub struct TestRun {
    pub totals: TestTotals,
    pub files_parsed: usize,
    pub skipped: Vec<ReportError>,
}

/// Parse every suite result under the configured results directory.
///
/// Malformed files are skipped and reported in [`TestRun::skipped`]. Fails
/// only when the directory is missing or no file could be parsed.
pub fn parse(layout: &ProjectLayout) -> Result<TestRun, ReportError> {
    let dir = &layout.surefire_dir;
    if !dir.is_dir() {
        return Err(ReportError::NotFound(dir.clone()));
    }

    let mut run = TestRun {
        totals: TestTotals::default(),
        files_parsed: 0,
        skipped: Vec::new(),
    };

    for path in result_files(dir)? {
        match parse_suite(&path) {
            Ok(totals) => {
                run.totals += totals;
                run.files_parsed += 1;
            }
            Err(e) => run.skipped.push(e),
        }
    }

    if run.files_parsed == 0 {
        return Err(ReportError::NoData("Surefire".to_string()));
    }
    Ok(run)
}

/// Suite result files in the directory, sorted by path
fn result_files(dir: &Path) -> Result<Vec<PathBuf>, ReportError> {
    let pattern = format!(
        "{}/{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        RESULT_PATTERN
    );
    let mut files: Vec<PathBuf> = glob::glob(&pattern)?
        .filter_map(|entry| entry.ok())
        .filter(|p| p.is_file())
        .collect();
    files.sort();
    Ok(files)
}

/// Read the four counters from one suite file's root element
pub fn parse_suite(path: &Path) -> Result<TestTotals, ReportError> {
    let text = read_report(path)?;
    let doc = parse_document(path, &text)?;
    let root = doc.root_element();

    Ok(TestTotals {
        tests: parse_count(root.attribute("tests")),
        failures: parse_count(root.attribute("failures")),
        errors: parse_count(root.attribute("errors")),
        skipped: parse_count(root.attribute("skipped")),
    })
}

/// Parse a counter that may be written as a float (`"3.0"`), truncating.
///
/// Missing, non-numeric and negative values count as zero.
pub fn parse_count(value: Option<&str>) -> u64 {
    value
        .and_then(|v| v.trim().parse::<f64>().ok())
        .filter(|v| v.is_finite() && *v > 0.0)
        .map_or(0, |v| v.trunc() as u64)
}
