//! Tests for configuration parsing

use qreport_core::config::{PathsConfig, CONFIG_FILE};
use qreport_core::{ProjectLayout, QualityConfig};
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = QualityConfig::default();
    assert_eq!(config.paths.pmd_report, PathBuf::from("target/pmd.xml"));
    assert_eq!(config.paths.spotbugs_reports.len(), 2);
    assert_eq!(config.report.max_findings, 5);
    assert_eq!(config.report.artifact_url_env, "STATIC_ANALYSIS_ARTIFACT_URL");
}

#[test]
fn test_empty_toml_matches_default() {
    let parsed: QualityConfig = toml::from_str("").unwrap();
    let default = QualityConfig::default();
    assert_eq!(parsed.paths.output, default.paths.output);
    assert_eq!(parsed.report.title, default.report.title);
}

#[test]
fn test_partial_override() {
    let toml_str = r#"
[paths]
pmd_report = "build/reports/pmd/main.xml"

[report]
max_findings = 3
"#;

    let config: QualityConfig = toml::from_str(toml_str).unwrap();
    assert_eq!(
        config.paths.pmd_report,
        PathBuf::from("build/reports/pmd/main.xml")
    );
    assert_eq!(
        config.paths.checkstyle_report,
        PathBuf::from("target/checkstyle-result.xml")
    );
    assert_eq!(config.report.max_findings, 3);
    assert_eq!(config.report.title, "Continuous Quality Report");
}

#[test]
fn test_find_and_load_walks_ancestors() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(
        tmp.path().join(CONFIG_FILE),
        "[report]\ntitle = \"From ancestor\"\n",
    )
    .unwrap();
    let nested = tmp.path().join("module/sub");
    std::fs::create_dir_all(&nested).unwrap();

    let config = QualityConfig::find_and_load(&nested).unwrap();
    assert_eq!(config.report.title, "From ancestor");
}

#[test]
fn test_save_round_trips() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(CONFIG_FILE);
    QualityConfig::default().save(&path).unwrap();

    let loaded = QualityConfig::from_file(&path).unwrap();
    assert_eq!(loaded.paths.surefire_dir, PathBuf::from("target/surefire-reports"));
}

#[test]
fn test_invalid_config_is_an_error() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(CONFIG_FILE);
    std::fs::write(&path, "[report]\nmax_findings = \"five\"\n").unwrap();

    assert!(QualityConfig::from_file(&path).is_err());
}

#[test]
fn test_layout_resolves_under_root() {
    let tmp = TempDir::new().unwrap();
    let layout = ProjectLayout::resolve(tmp.path(), &PathsConfig::default());

    assert!(layout.root.is_absolute());
    assert_eq!(layout.output, layout.root.join("quality-report.md"));
    assert_eq!(
        layout.jacoco_report,
        layout.root.join("target/site/jacoco/jacoco.xml")
    );
}
