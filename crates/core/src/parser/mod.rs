//! Report parsers turning CI tool output into domain records

pub mod checkstyle;
pub mod jacoco;
pub mod pmd;
pub mod spotbugs;
pub mod surefire;

use crate::config::ProjectLayout;
use crate::finding::AnalysisReport;
use roxmltree::{Document, Node, ParsingOptions};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error types for report parsing.
///
/// Every variant is recoverable: the report builder turns them into an
/// absent section rather than aborting.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("Report not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed XML in {}: {source}", path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },

    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("{0} report contains no usable data")]
    NoData(String),
}

/// Trait for static-analysis report parsers
///
/// Each tool has its own on-disk location and schema but produces the same
/// severity-bucketed [`AnalysisReport`].
pub trait AnalysisParser {
    /// Display name of the tool (e.g. "SpotBugs")
    fn name(&self) -> &str;

    /// Locate and parse the tool's report.
    ///
    /// A report that yields no findings is an error ([`ReportError::NoData`]),
    /// never an empty report.
    fn parse(&self, layout: &ProjectLayout) -> Result<AnalysisReport, ReportError>;
}

/// Runs every registered static-analysis parser
pub struct AnalysisDispatcher {
    parsers: Vec<Box<dyn AnalysisParser>>,
}

impl AnalysisDispatcher {
    /// Create a dispatcher with the built-in parsers, in display order
    pub fn new() -> Self {
        Self {
            parsers: vec![
                Box::new(spotbugs::SpotBugsParser::new()),
                Box::new(pmd::PmdParser::new()),
                Box::new(checkstyle::CheckstyleParser::new()),
            ],
        }
    }

    /// Parse every tool's report, keeping each result next to the tool name
    pub fn parse_all(
        &self,
        layout: &ProjectLayout,
    ) -> Vec<(String, Result<AnalysisReport, ReportError>)> {
        self.parsers
            .iter()
            .map(|p| (p.name().to_string(), p.parse(layout)))
            .collect()
    }
}

impl Default for AnalysisDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

// ── XML helpers ──────────────────────────────────────────────────────────────

/// Read a report file, distinguishing "missing" from other I/O failures.
pub(crate) fn read_report(path: &Path) -> Result<String, ReportError> {
    if !path.is_file() {
        return Err(ReportError::NotFound(path.to_path_buf()));
    }
    std::fs::read_to_string(path).map_err(|source| ReportError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse report text. DTDs are allowed since some tools emit a DOCTYPE.
pub(crate) fn parse_document<'a>(path: &Path, text: &'a str) -> Result<Document<'a>, ReportError> {
    let mut options = ParsingOptions::default();
    options.allow_dtd = true;
    Document::parse_with_options(text, options).map_err(|source| ReportError::Malformed {
        path: path.to_path_buf(),
        source,
    })
}

/// Direct element children with the given local name
pub(crate) fn children_named<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    name: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.children()
        .filter(move |n| n.is_element() && n.tag_name().name() == name)
}

/// Text of the first direct child with the given local name
pub(crate) fn child_text<'a>(node: Node<'a, '_>, name: &str) -> Option<&'a str> {
    node.children()
        .find(|n| n.is_element() && n.tag_name().name() == name)
        .and_then(|n| n.text())
}

/// Descendant elements (the node itself included) whose local name ends with `suffix`
pub(crate) fn descendants_ending_with<'a, 'input: 'a>(
    node: Node<'a, 'input>,
    suffix: &'a str,
) -> impl Iterator<Item = Node<'a, 'input>> + 'a {
    node.descendants()
        .filter(move |n| n.is_element() && n.tag_name().name().ends_with(suffix))
}
