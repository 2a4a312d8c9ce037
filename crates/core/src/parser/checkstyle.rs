//! Checkstyle line-style reports

use super::{children_named, parse_document, read_report, AnalysisParser, ReportError};
use crate::config::ProjectLayout;
use crate::finding::{AnalysisReport, Finding};
use crate::location::{clean_message, non_empty, relative_location, with_position};
use std::path::Path;

const TOOL: &str = "Checkstyle";
const RANKS: &[&str] = &["Error", "Warning", "Info"];

pub struct CheckstyleParser;

impl CheckstyleParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse one report file, relativizing file names against `root`.
    ///
    /// Errors with an empty message are dropped before counting.
    pub fn parse_file(&self, path: &Path, root: &Path) -> Result<AnalysisReport, ReportError> {
        let text = read_report(path)?;
        let doc = parse_document(path, &text)?;

        let mut findings = Vec::new();
        for file in children_named(doc.root_element(), "file") {
            let file_name = file.attribute("name");
            for error in children_named(file, "error") {
                let message = clean_message(error.attribute("message"));
                if message.is_empty() {
                    continue;
                }
                let location = with_position(
                    relative_location(file_name, root),
                    error.attribute("line"),
                    error.attribute("column"),
                );

                findings.push(Finding {
                    severity: severity_for(error.attribute("severity")).to_string(),
                    location,
                    message,
                    rule: non_empty(error.attribute("source")).and_then(rule_name),
                });
            }
        }

        if findings.is_empty() {
            return Err(ReportError::NoData(TOOL.to_string()));
        }
        Ok(AnalysisReport::from_findings(TOOL, RANKS, findings))
    }
}

impl Default for CheckstyleParser {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisParser for CheckstyleParser {
    fn name(&self) -> &str {
        TOOL
    }

    fn parse(&self, layout: &ProjectLayout) -> Result<AnalysisReport, ReportError> {
        self.parse_file(&layout.checkstyle_report, &layout.root)
    }
}

/// Case-insensitive severity; unknown or missing values count as warnings
pub fn severity_for(severity: Option<&str>) -> &'static str {
    match severity.map(str::to_ascii_lowercase).as_deref() {
        Some("error") => "Error",
        Some("info") => "Info",
        _ => "Warning",
    }
}

/// Last segment of a fully-qualified check name
/// (`com.puppycrawl.tools.checkstyle.checks.whitespace.WhitespaceAroundCheck`
/// becomes `WhitespaceAroundCheck`).
fn rule_name(source: &str) -> Option<String> {
    source
        .rsplit('.')
        .next()
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
