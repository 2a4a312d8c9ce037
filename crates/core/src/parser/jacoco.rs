//! JaCoCo line coverage

use super::surefire::parse_count;
use super::{children_named, parse_document, read_report, ReportError};
use crate::config::ProjectLayout;
use std::path::Path;

/// Counter type that carries line-level granularity
const LINE_COUNTER: &str = "LINE";

/// Line coverage percentage (0–100) from the configured JaCoCo report
pub fn parse(layout: &ProjectLayout) -> Result<f64, ReportError> {
    parse_file(&layout.jacoco_report)
}

/// Line coverage from a single report file.
///
/// Only direct `counter` children of the root are considered, so the result
/// is the report-wide total rather than a sum over packages.
pub fn parse_file(path: &Path) -> Result<f64, ReportError> {
    let text = read_report(path)?;
    let doc = parse_document(path, &text)?;

    let mut covered: u64 = 0;
    let mut missed: u64 = 0;
    for counter in children_named(doc.root_element(), "counter") {
        if counter.attribute("type") != Some(LINE_COUNTER) {
            continue;
        }
        covered = covered.saturating_add(parse_count(counter.attribute("covered")));
        missed = missed.saturating_add(parse_count(counter.attribute("missed")));
    }

    if covered == 0 && missed == 0 {
        return Err(ReportError::NoData("JaCoCo".to_string()));
    }
    let covered = covered as f64;
    Ok(covered / (covered + missed as f64) * 100.0)
}

