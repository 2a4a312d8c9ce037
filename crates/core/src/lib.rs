//! qreport Core - CI quality report aggregation
//!
//! This crate turns the XML reports a Java build leaves behind into a single
//! Markdown status summary:
//! - Surefire test results and JaCoCo line coverage
//! - SpotBugs, PMD and Checkstyle findings, bucketed by severity
//! - Deterministic Markdown rendering of the whole set

pub mod config;
pub mod finding;
pub mod format;
pub mod location;
pub mod parser;
pub mod report;

pub use config::{ProjectLayout, QualityConfig, ReportSettings};
pub use finding::{AnalysisReport, Finding, SeverityBucket, TestTotals};
pub use parser::{AnalysisDispatcher, AnalysisParser, ReportError};
pub use report::{build_report, write_report, Diagnostic, QualityReport, ToolSection};

/// qreport version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
