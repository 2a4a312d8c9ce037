//! Configuration file parsing for .qreport.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Name of the optional configuration file
pub const CONFIG_FILE: &str = ".qreport.toml";

/// Main configuration structure for .qreport.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QualityConfig {
    #[serde(default)]
    pub paths: PathsConfig,

    #[serde(default)]
    pub report: ReportSettings,
}

/// Report locations, relative to the project root
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory of `TEST-*.xml` test-suite results
    #[serde(default = "default_surefire_dir")]
    pub surefire_dir: PathBuf,

    #[serde(default = "default_jacoco_report")]
    pub jacoco_report: PathBuf,

    /// Candidate SpotBugs reports; the first existing one is used
    #[serde(default = "default_spotbugs_reports")]
    pub spotbugs_reports: Vec<PathBuf>,

    #[serde(default = "default_pmd_report")]
    pub pmd_report: PathBuf,

    #[serde(default = "default_checkstyle_report")]
    pub checkstyle_report: PathBuf,

    /// Where the rendered report is written
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

/// Rendering options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportSettings {
    /// Heading of the document
    #[serde(default = "default_title")]
    pub title: String,

    /// Trailer line attributing the report
    #[serde(default = "default_footer")]
    pub footer: String,

    /// Findings shown per tool in the "Top findings" block
    #[serde(default = "default_max_findings")]
    pub max_findings: usize,

    /// Environment variable holding the "Full report" link
    #[serde(default = "default_artifact_url_env")]
    pub artifact_url_env: String,
}

// Default functions
fn default_surefire_dir() -> PathBuf {
    PathBuf::from("target/surefire-reports")
}

fn default_jacoco_report() -> PathBuf {
    PathBuf::from("target/site/jacoco/jacoco.xml")
}

fn default_spotbugs_reports() -> Vec<PathBuf> {
    vec![
        PathBuf::from("target/spotbugsXml.xml"),
        PathBuf::from("target/spotbugs.xml"),
    ]
}

fn default_pmd_report() -> PathBuf {
    PathBuf::from("target/pmd.xml")
}

fn default_checkstyle_report() -> PathBuf {
    PathBuf::from("target/checkstyle-result.xml")
}

fn default_output() -> PathBuf {
    PathBuf::from("quality-report.md")
}

fn default_title() -> String {
    "Continuous Quality Report".to_string()
}

fn default_footer() -> String {
    "_Generated automatically by the MCP CI workflow._".to_string()
}

fn default_max_findings() -> usize {
    5
}

fn default_artifact_url_env() -> String {
    "STATIC_ANALYSIS_ARTIFACT_URL".to_string()
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            surefire_dir: default_surefire_dir(),
            jacoco_report: default_jacoco_report(),
            spotbugs_reports: default_spotbugs_reports(),
            pmd_report: default_pmd_report(),
            checkstyle_report: default_checkstyle_report(),
            output: default_output(),
        }
    }
}

impl Default for ReportSettings {
    fn default() -> Self {
        Self {
            title: default_title(),
            footer: default_footer(),
            max_findings: default_max_findings(),
            artifact_url_env: default_artifact_url_env(),
        }
    }
}

impl QualityConfig {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let config: QualityConfig = toml::from_str(&contents)
            .with_context(|| format!("parse config {}", path.display()))?;
        Ok(config)
    }

    /// Find and load .qreport.toml from the given directory or its ancestors
    pub fn find_and_load(start_dir: &Path) -> Result<Self> {
        let mut current = start_dir;

        loop {
            let config_path = current.join(CONFIG_FILE);
            if config_path.exists() {
                return Self::from_file(&config_path);
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        Ok(Self::default())
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let contents = toml::to_string_pretty(self)?;
        std::fs::write(path, contents)
            .with_context(|| format!("write config {}", path.display()))?;
        Ok(())
    }
}

/// Absolute report locations for one project, resolved once at startup.
///
/// Every parser receives this explicitly; nothing reads paths from globals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectLayout {
    pub root: PathBuf,
    pub surefire_dir: PathBuf,
    pub jacoco_report: PathBuf,
    pub spotbugs_reports: Vec<PathBuf>,
    pub pmd_report: PathBuf,
    pub checkstyle_report: PathBuf,
    pub output: PathBuf,
}

impl ProjectLayout {
    /// Resolve the configured paths against `root`.
    ///
    /// The root is canonicalized when possible so that absolute paths found in
    /// reports can be expressed relative to it.
    pub fn resolve(root: &Path, paths: &PathsConfig) -> Self {
        let root = std::fs::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());

        Self {
            surefire_dir: root.join(&paths.surefire_dir),
            jacoco_report: root.join(&paths.jacoco_report),
            spotbugs_reports: paths.spotbugs_reports.iter().map(|p| root.join(p)).collect(),
            pmd_report: root.join(&paths.pmd_report),
            checkstyle_report: root.join(&paths.checkstyle_report),
            output: root.join(&paths.output),
            root,
        }
    }

    /// Layout with every default location under `root`
    pub fn with_defaults(root: &Path) -> Self {
        Self::resolve(root, &PathsConfig::default())
    }
}
