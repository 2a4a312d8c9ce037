//! Report builder — runs every parser and assembles the Markdown document

use crate::config::{ProjectLayout, ReportSettings};
use crate::finding::{AnalysisReport, TestTotals};
use crate::format::{format_analysis, format_coverage, format_tests};
use crate::parser::{jacoco, surefire, AnalysisDispatcher, ReportError};
use anyhow::{Context, Result};
use std::path::Path;

/// A parser outcome that did not make it into the report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Tool the message relates to (e.g. "Surefire")
    pub source: String,
    pub message: String,
    /// `true` when the input was simply not there
    pub missing: bool,
}

impl Diagnostic {
    /// A warning about an input that exists but could not be used
    pub fn new(source: &str, message: impl Into<String>) -> Self {
        Self {
            source: source.to_string(),
            message: message.into(),
            missing: false,
        }
    }

    fn from_error(source: &str, err: &ReportError) -> Self {
        Self {
            source: source.to_string(),
            message: err.to_string(),
            missing: matches!(err, ReportError::NotFound(_)),
        }
    }
}

/// Parsed result of one static-analysis tool
#[derive(Debug, Clone)]
pub struct ToolSection {
    pub tool: String,
    pub report: Option<AnalysisReport>,
}

/// Everything gathered from one project, ready to render
#[derive(Debug, Clone)]
pub struct QualityReport {
    pub tests: Option<TestTotals>,
    pub coverage: Option<f64>,
    pub analyses: Vec<ToolSection>,
    pub diagnostics: Vec<Diagnostic>,
}

impl QualityReport {
    /// Run all parsers against `layout`.
    ///
    /// Never fails: every parser error becomes an absent section plus a
    /// [`Diagnostic`].
    pub fn collect(layout: &ProjectLayout) -> Self {
        let mut diagnostics = Vec::new();

        let tests = match surefire::parse(layout) {
            Ok(run) => {
                diagnostics.extend(
                    run.skipped
                        .iter()
                        .map(|e| Diagnostic::from_error("Surefire", e)),
                );
                Some(run.totals)
            }
            Err(e) => {
                diagnostics.push(Diagnostic::from_error("Surefire", &e));
                None
            }
        };

        let coverage = match jacoco::parse(layout) {
            Ok(pct) => Some(pct),
            Err(e) => {
                diagnostics.push(Diagnostic::from_error("JaCoCo", &e));
                None
            }
        };

        let analyses = AnalysisDispatcher::new()
            .parse_all(layout)
            .into_iter()
            .map(|(tool, result)| {
                let report = match result {
                    Ok(report) => Some(report),
                    Err(e) => {
                        diagnostics.push(Diagnostic::from_error(&tool, &e));
                        None
                    }
                };
                ToolSection { tool, report }
            })
            .collect();

        Self {
            tests,
            coverage,
            analyses,
            diagnostics,
        }
    }

    /// Render the document. Lines are joined with `\n`, without a trailing
    /// newline; [`write_report`] adds it.
    pub fn render_markdown(&self, settings: &ReportSettings, artifact_url: Option<&str>) -> String {
        let mut lines = vec![
            format!("## {}", settings.title),
            String::new(),
            "### Test & Coverage".to_string(),
            format_tests(self.tests.as_ref()),
            format_coverage(self.coverage),
            String::new(),
            "### Static Analysis".to_string(),
        ];

        for section in &self.analyses {
            lines.extend(format_analysis(
                &section.tool,
                section.report.as_ref(),
                artifact_url,
                settings.max_findings,
            ));
        }

        lines.push(String::new());
        lines.push(settings.footer.clone());
        lines.join("\n")
    }
}

/// Collect and render in one step
pub fn build_report(
    layout: &ProjectLayout,
    settings: &ReportSettings,
    artifact_url: Option<&str>,
) -> String {
    QualityReport::collect(layout).render_markdown(settings, artifact_url)
}

/// Write `content` followed by a single newline, replacing any existing file
pub fn write_report(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create directory {}", parent.display()))?;
        }
    }
    std::fs::write(path, format!("{}\n", content))
        .with_context(|| format!("write report {}", path.display()))
}

/// Treat an empty or whitespace-only link as no link
pub fn normalize_artifact_url(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
