//! Generate command — collects every report and writes the summary

use anyhow::Result;
use colored::Colorize;
use qreport_core::report::normalize_artifact_url;
use qreport_core::{write_report, Diagnostic, ProjectLayout, QualityConfig, QualityReport};
use std::path::{Path, PathBuf};

use crate::output;
use crate::{Cli, OutputFormat};

/// Inputs of a single generate run, independent of clap
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub root: PathBuf,
    /// Overrides the configured output path (relative to the working directory)
    pub output: Option<PathBuf>,
    pub format: OutputFormat,
    /// Overrides the link read from the configured environment variable
    pub artifact_url: Option<String>,
}

/// What a generate run produced
#[derive(Debug)]
pub struct Generated {
    pub path: PathBuf,
    pub report: QualityReport,
}

/// Collect, render and write the report.
///
/// Missing or malformed inputs, including an unreadable `.qreport.toml`, only
/// show up in [`Generated::report`]'s diagnostics; the only error is failing
/// to write the output.
pub fn generate(opts: &GenerateOptions) -> Result<Generated> {
    let root = std::fs::canonicalize(&opts.root).unwrap_or_else(|_| opts.root.clone());
    let (config, config_error) = match QualityConfig::find_and_load(&root) {
        Ok(config) => (config, None),
        Err(e) => (QualityConfig::default(), Some(e)),
    };
    let layout = ProjectLayout::resolve(&root, &config.paths);

    let artifact_url = normalize_artifact_url(
        opts.artifact_url
            .clone()
            .or_else(|| std::env::var(&config.report.artifact_url_env).ok()),
    );

    let mut report = QualityReport::collect(&layout);
    if let Some(e) = config_error {
        report
            .diagnostics
            .push(Diagnostic::new("Config", format!("{:#}, using defaults", e)));
    }
    let (content, default_path) = match opts.format {
        OutputFormat::Markdown => (
            report.render_markdown(&config.report, artifact_url.as_deref()),
            layout.output.clone(),
        ),
        OutputFormat::Json => (
            output::json::render(&report, artifact_url.as_deref())?,
            layout.output.with_extension("json"),
        ),
    };

    let path = opts.output.clone().unwrap_or(default_path);
    write_report(&path, &content)?;

    Ok(Generated { path, report })
}

pub fn run(cli: &Cli) -> Result<()> {
    let opts = GenerateOptions {
        root: cli.root.clone().unwrap_or_else(|| PathBuf::from(".")),
        output: cli.output.clone(),
        format: cli.format.unwrap_or(OutputFormat::Markdown),
        artifact_url: cli.artifact_url.clone(),
    };

    let generated = generate(&opts)?;

    if cli.verbose {
        for diagnostic in &generated.report.diagnostics {
            eprintln!("{}", output::terminal::format_diagnostic(diagnostic));
        }
    }
    if !cli.quiet {
        print_summary(&generated.report, &generated.path);
    }

    Ok(())
}

fn print_summary(report: &QualityReport, path: &Path) {
    let present = report.analyses.iter().filter(|s| s.report.is_some()).count()
        + usize::from(report.tests.is_some())
        + usize::from(report.coverage.is_some());
    let expected = report.analyses.len() + 2;

    eprintln!(
        "  {} {} ({}/{} sections with data)",
        "Wrote".green(),
        path.display(),
        present,
        expected
    );
}
