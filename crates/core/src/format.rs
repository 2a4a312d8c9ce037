//! Markdown fragments for each report section
//!
//! Every function here is pure: parsed result in, lines of Markdown out.

use crate::finding::{AnalysisReport, TestTotals};

pub const PASS: &str = "✅";
pub const FAIL: &str = "❌";
pub const WARN: &str = "⚠️";

fn status_glyph(passed: bool) -> &'static str {
    if passed {
        PASS
    } else {
        FAIL
    }
}

/// Status line for the summed test results
pub fn format_tests(totals: Option<&TestTotals>) -> String {
    match totals {
        None => format!("- {} No test results were found.", WARN),
        Some(t) => format!(
            "- {} **Tests:** {} total, {} failed, {} skipped",
            status_glyph(t.passed()),
            t.tests,
            t.failed(),
            t.skipped
        ),
    }
}

/// Informational line for line coverage; carries no pass/fail glyph
pub fn format_coverage(coverage: Option<f64>) -> String {
    match coverage {
        None => format!("- {} Coverage report not generated.", WARN),
        Some(pct) => format!("- 📊 **Line coverage:** {:.2}%", pct),
    }
}

/// Status line plus an optional "Top findings" block for one analysis tool.
///
/// At most `max_findings` findings are listed; the status line always
/// reports the full total.
pub fn format_analysis(
    tool: &str,
    report: Option<&AnalysisReport>,
    artifact_url: Option<&str>,
    max_findings: usize,
) -> Vec<String> {
    let report = match report {
        Some(r) => r,
        None => return vec![format!("- {} {} report not generated.", WARN, tool)],
    };

    let total = report.total();
    let mut breakdown = report
        .totals
        .iter()
        .filter(|b| b.count > 0)
        .map(|b| format!("{}: {}", b.label, b.count))
        .collect::<Vec<_>>()
        .join(", ");
    // Unreachable while totals are counted from findings; kept for parity.
    if breakdown.is_empty() {
        breakdown = "no issues".to_string();
    }
    let link = match artifact_url {
        Some(url) if !url.is_empty() => format!(" [[Full report]]({})", url),
        _ => String::new(),
    };

    let mut lines = vec![format!(
        "- {} **{}:** {} findings ({}){}",
        status_glyph(total == 0),
        tool,
        total,
        breakdown,
        link
    )];

    let highlights = &report.findings[..report.findings.len().min(max_findings)];
    if !highlights.is_empty() {
        lines.push("  <details>".to_string());
        lines.push("  <summary>Top findings</summary>".to_string());
        lines.extend(highlights.iter().map(|f| format!("  - {}", f.to_markdown())));
        if total > highlights.len() {
            lines.push(format!("  - …and {} more", total - highlights.len()));
        }
        lines.push("  </details>".to_string());
    }

    lines
}
