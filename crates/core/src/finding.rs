//! Finding types that bridge report parsers to output formatters

use serde::{Deserialize, Serialize};

/// A single issue reported by a static-analysis tool
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Tool-specific severity label (e.g. "High", "P3", "Warning")
    pub severity: String,

    /// Project-relative path, optionally suffixed with `:line` or `:line:column`
    pub location: String,

    /// Whitespace-collapsed, human-readable message
    pub message: String,

    /// Rule or bug-pattern identifier, when the tool reports one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
}

impl Finding {
    /// Render as a single Markdown list entry body.
    pub fn to_markdown(&self) -> String {
        let rule_suffix = match &self.rule {
            Some(rule) if !rule.is_empty() => format!(" _(rule: `{}`)_", rule),
            _ => String::new(),
        };
        format!(
            "{}: `{}` – {}{}",
            self.severity, self.location, self.message, rule_suffix
        )
    }
}

/// Count of findings that fell into one severity bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityBucket {
    pub label: String,
    pub count: usize,
}

/// Aggregate result of one static-analysis tool.
///
/// `totals` always lists every bucket of the tool's rank table in rank order,
/// including empty ones. `findings` are sorted by ascending rank; findings of
/// equal rank keep the order in which they appeared in the report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    /// Display name of the tool that produced the report
    pub tool: String,
    pub totals: Vec<SeverityBucket>,
    pub findings: Vec<Finding>,
}

impl AnalysisReport {
    /// Build a report from findings in encounter order.
    ///
    /// `ranks` is the tool's bucket table, highest severity first. Findings
    /// whose severity is not in the table are counted nowhere and sort last.
    pub fn from_findings(tool: &str, ranks: &[&str], mut findings: Vec<Finding>) -> Self {
        let rank_of = |severity: &str| {
            ranks
                .iter()
                .position(|label| *label == severity)
                .unwrap_or(ranks.len())
        };

        let totals = ranks
            .iter()
            .map(|label| SeverityBucket {
                label: (*label).to_string(),
                count: findings.iter().filter(|f| f.severity == *label).count(),
            })
            .collect();

        // sort_by_key is stable
        findings.sort_by_key(|f| rank_of(&f.severity));

        Self {
            tool: tool.to_string(),
            totals,
            findings,
        }
    }

    /// Total number of findings across all buckets
    pub fn total(&self) -> usize {
        self.totals.iter().map(|b| b.count).sum()
    }

    /// Count for a single bucket (0 for unknown labels)
    pub fn count(&self, label: &str) -> usize {
        self.totals
            .iter()
            .find(|b| b.label == label)
            .map_or(0, |b| b.count)
    }
}

/// Test-suite totals summed across every parsed result file
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestTotals {
    pub tests: u64,
    pub failures: u64,
    pub errors: u64,
    pub skipped: u64,
}

impl TestTotals {
    /// Failures and errors together
    pub fn failed(&self) -> u64 {
        self.failures.saturating_add(self.errors)
    }

    pub fn passed(&self) -> bool {
        self.failed() == 0
    }
}

impl std::ops::AddAssign for TestTotals {
    fn add_assign(&mut self, other: Self) {
        self.tests = self.tests.saturating_add(other.tests);
        self.failures = self.failures.saturating_add(other.failures);
        self.errors = self.errors.saturating_add(other.errors);
        self.skipped = self.skipped.saturating_add(other.skipped);
    }
}
