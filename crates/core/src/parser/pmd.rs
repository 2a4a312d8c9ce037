//! PMD style-rule reports
//!
//! PMD writes its report in a namespace, so elements are matched by the
//! suffix of their local name rather than by exact tag.

use super::{descendants_ending_with, parse_document, read_report, AnalysisParser, ReportError};
use crate::config::ProjectLayout;
use crate::finding::{AnalysisReport, Finding};
use crate::location::{clean_message, non_empty, relative_location, with_position};
use std::path::Path;

const TOOL: &str = "PMD";
const RANKS: &[&str] = &["P1", "P2", "P3", "P4", "P5"];

pub struct PmdParser;

impl PmdParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse one report file, relativizing file names against `root`.
    ///
    /// Violations without text are dropped before counting.
    pub fn parse_file(&self, path: &Path, root: &Path) -> Result<AnalysisReport, ReportError> {
        let text = read_report(path)?;
        let doc = parse_document(path, &text)?;

        let mut findings = Vec::new();
        for file in descendants_ending_with(doc.root_element(), "file") {
            let file_name = file.attribute("name");
            for violation in descendants_ending_with(file, "violation") {
                let message = clean_message(violation.text());
                if message.is_empty() {
                    continue;
                }
                let line = non_empty(violation.attribute("beginline"))
                    .or_else(|| non_empty(violation.attribute("line")));
                let rule = non_empty(violation.attribute("rule"))
                    .or_else(|| non_empty(violation.attribute("ruleset")));

                findings.push(Finding {
                    severity: bucket_for(violation.attribute("priority")).to_string(),
                    location: with_position(relative_location(file_name, root), line, None),
                    message,
                    rule: rule.map(str::to_string),
                });
            }
        }

        if findings.is_empty() {
            return Err(ReportError::NoData(TOOL.to_string()));
        }
        Ok(AnalysisReport::from_findings(TOOL, RANKS, findings))
    }
}

impl Default for PmdParser {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisParser for PmdParser {
    fn name(&self) -> &str {
        TOOL
    }

    fn parse(&self, layout: &ProjectLayout) -> Result<AnalysisReport, ReportError> {
        self.parse_file(&layout.pmd_report, &layout.root)
    }
}

/// Priority 1–5 maps to `P1`–`P5`; anything else lands in `P5`
pub fn bucket_for(priority: Option<&str>) -> &'static str {
    match priority.map(str::trim) {
        Some("1") => "P1",
        Some("2") => "P2",
        Some("3") => "P3",
        Some("4") => "P4",
        _ => "P5",
    }
}
