//! SpotBugs bug-pattern reports
//!
//! Two layouts are found in the wild:
//! - the native XML output, with `BugInstance` elements directly under the
//!   root and source positions in nested `SourceLine` annotations;
//! - the per-file layout, with `file` elements each holding `BugInstance`
//!   children that carry a `lineNumber` attribute.
//!
//! The flat layout wins whenever the root has at least one `BugInstance`.

use super::{child_text, children_named, parse_document, read_report, AnalysisParser, ReportError};
use crate::config::ProjectLayout;
use crate::finding::{AnalysisReport, Finding};
use crate::location::{clean_message, non_empty, relative_location, with_position};
use roxmltree::Node;
use std::path::Path;

const TOOL: &str = "SpotBugs";
const RANKS: &[&str] = &["High", "Normal", "Low"];

/// Message used when a bug carries neither text nor a type code
const FALLBACK_MESSAGE: &str = "Issue detected";

pub struct SpotBugsParser;

impl SpotBugsParser {
    pub fn new() -> Self {
        Self
    }

    /// Parse one report file, relativizing source paths against `root`
    pub fn parse_file(&self, path: &Path, root: &Path) -> Result<AnalysisReport, ReportError> {
        let text = read_report(path)?;
        let doc = parse_document(path, &text)?;
        let report_root = doc.root_element();

        let bugs: Vec<Node> = children_named(report_root, "BugInstance").collect();
        let findings: Vec<Finding> = if bugs.is_empty() {
            children_named(report_root, "file")
                .flat_map(move |file| {
                    children_named(file, "BugInstance")
                        .map(move |bug| nested_finding(file, bug, root))
                })
                .collect()
        } else {
            bugs.into_iter().map(|bug| flat_finding(bug, root)).collect()
        };

        if findings.is_empty() {
            return Err(ReportError::NoData(TOOL.to_string()));
        }
        Ok(AnalysisReport::from_findings(TOOL, RANKS, findings))
    }
}

impl Default for SpotBugsParser {
    fn default() -> Self {
        Self::new()
    }
}

impl AnalysisParser for SpotBugsParser {
    fn name(&self) -> &str {
        TOOL
    }

    /// The first existing candidate report wins.
    fn parse(&self, layout: &ProjectLayout) -> Result<AnalysisReport, ReportError> {
        match layout.spotbugs_reports.iter().find(|p| p.is_file()) {
            Some(path) => self.parse_file(path, &layout.root),
            None => Err(ReportError::NotFound(
                layout
                    .spotbugs_reports
                    .first()
                    .cloned()
                    .unwrap_or_else(|| layout.root.clone()),
            )),
        }
    }
}

/// Map the numeric `priority` attribute to a bucket
pub fn severity_for(priority: Option<&str>) -> &'static str {
    match priority {
        Some("1") => "High",
        Some("2") => "Normal",
        _ => "Low",
    }
}

fn bug_type<'a>(bug: Node<'a, '_>) -> Option<&'a str> {
    non_empty(bug.attribute("type"))
}

fn bug_message(bug: Node) -> String {
    [
        child_text(bug, "ShortMessage"),
        child_text(bug, "LongMessage"),
        bug.attribute("message"),
    ]
    .into_iter()
    .map(clean_message)
    .find(|m| !m.is_empty())
    .or_else(|| bug_type(bug).map(str::to_string))
    .unwrap_or_else(|| FALLBACK_MESSAGE.to_string())
}

fn make_finding(bug: Node, location: String) -> Finding {
    Finding {
        severity: severity_for(bug.attribute("priority")).to_string(),
        location,
        message: bug_message(bug),
        rule: bug_type(bug).map(str::to_string),
    }
}

/// Primary `SourceLine` annotation, or the first one when none is primary
fn source_line<'a, 'input>(bug: Node<'a, 'input>) -> Option<Node<'a, 'input>> {
    let mut lines = bug
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "SourceLine");
    let first = lines.next()?;
    if first.attribute("primary") == Some("true") {
        return Some(first);
    }
    Some(
        lines
            .find(|n| n.attribute("primary") == Some("true"))
            .unwrap_or(first),
    )
}

fn flat_finding(bug: Node, root: &Path) -> Finding {
    let (source_path, line) = match source_line(bug) {
        Some(sl) => (
            non_empty(sl.attribute("sourcepath")),
            non_empty(sl.attribute("start")).or_else(|| non_empty(sl.attribute("end"))),
        ),
        None => (None, None),
    };

    let base = match source_path {
        Some(path) => relative_location(Some(path), root),
        None => {
            let class_name = match children_named(bug, "Class").next() {
                Some(class) => non_empty(class.attribute("classname")),
                None => bug_type(bug),
            };
            class_name.unwrap_or("Unknown").to_string()
        }
    };

    make_finding(bug, with_position(base, line, None))
}

fn nested_finding(file: Node, bug: Node, root: &Path) -> Finding {
    let class_name =
        non_empty(file.attribute("classname")).or_else(|| non_empty(file.attribute("name")));
    let source_path = non_empty(file.attribute("sourcepath"))
        .or_else(|| non_empty(file.attribute("name")))
        .map(str::to_string)
        .or_else(|| class_name.map(|c| format!("{}.java", c.replace('.', "/"))));

    let base = match source_path {
        Some(path) => relative_location(Some(&path), root),
        None => "Unknown".to_string(),
    };

    make_finding(bug, with_position(base, bug.attribute("lineNumber"), None))
}
