//! JSON output formatting

use anyhow::Result;
use qreport_core::{Finding, QualityReport, SeverityBucket, TestTotals};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput {
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact_url: Option<String>,
    pub tests: Option<JsonTests>,
    pub coverage: Option<f64>,
    pub tools: Vec<JsonTool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonTests {
    #[serde(flatten)]
    pub totals: TestTotals,
    pub passed: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonTool {
    pub tool: String,
    /// `false` when the report was missing, malformed or empty
    pub present: bool,
    pub total: usize,
    pub totals: Vec<SeverityBucket>,
    pub findings: Vec<Finding>,
}

impl JsonOutput {
    pub fn from_report(report: &QualityReport, artifact_url: Option<&str>) -> Self {
        Self {
            version: qreport_core::VERSION.to_string(),
            artifact_url: artifact_url.map(str::to_string),
            tests: report.tests.map(|totals| JsonTests {
                passed: totals.passed(),
                totals,
            }),
            // Two decimals, matching the Markdown line
            coverage: report.coverage.map(|pct| (pct * 100.0).round() / 100.0),
            tools: report
                .analyses
                .iter()
                .map(|section| match &section.report {
                    Some(r) => JsonTool {
                        tool: section.tool.clone(),
                        present: true,
                        total: r.total(),
                        totals: r.totals.clone(),
                        findings: r.findings.clone(),
                    },
                    None => JsonTool {
                        tool: section.tool.clone(),
                        present: false,
                        total: 0,
                        totals: Vec::new(),
                        findings: Vec::new(),
                    },
                })
                .collect(),
        }
    }
}

/// Pretty-printed JSON view of the report
pub fn render(report: &QualityReport, artifact_url: Option<&str>) -> Result<String> {
    Ok(serde_json::to_string_pretty(&JsonOutput::from_report(
        report,
        artifact_url,
    ))?)
}
