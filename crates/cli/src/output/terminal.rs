//! Terminal output formatting

use colored::Colorize;
use qreport_core::Diagnostic;

/// One stderr line explaining why a section is missing or incomplete
pub fn format_diagnostic(diagnostic: &Diagnostic) -> String {
    let label = if diagnostic.missing {
        "skip:".dimmed()
    } else {
        "warn:".yellow()
    };

    format!("  {} [{}] {}", label, diagnostic.source, diagnostic.message)
}
