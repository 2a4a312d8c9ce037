//! Tests for SpotBugs report parsing

use qreport_core::parser::spotbugs::{severity_for, SpotBugsParser};
use qreport_core::parser::ReportError;
use qreport_core::{AnalysisParser, ProjectLayout};
use std::path::Path;
use tempfile::TempDir;

fn write_target(root: &Path, name: &str, content: &str) {
    let dir = root.join("target");
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(name), content).unwrap();
}

const FLAT_REPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<BugCollection version="4.8.3">
  <BugInstance type="DM_DEFAULT_ENCODING" priority="2" rank="19" category="I18N">
    <ShortMessage>Reliance on default encoding</ShortMessage>
    <LongMessage>Found reliance on default encoding in Foo.read()</LongMessage>
    <Class classname="com.acme.Foo">
      <SourceLine classname="com.acme.Foo" start="1" end="80" sourcepath="com/acme/Foo.java"/>
    </Class>
    <Method classname="com.acme.Foo" name="read">
      <SourceLine classname="com.acme.Foo" start="40" end="45" sourcepath="com/acme/Foo.java"/>
    </Method>
    <SourceLine classname="com.acme.Foo" primary="true" start="42" end="42" sourcepath="com/acme/Foo.java"/>
  </BugInstance>
  <BugInstance type="NP_NULL_ON_SOME_PATH" priority="1" category="CORRECTNESS">
    <ShortMessage>Possible null pointer dereference</ShortMessage>
    <Class classname="com.acme.Bar"/>
    <SourceLine classname="com.acme.Bar" start="7" sourcepath="com/acme/Bar.java"/>
  </BugInstance>
</BugCollection>"#;

#[test]
fn test_priority_mapping() {
    assert_eq!(severity_for(Some("1")), "High");
    assert_eq!(severity_for(Some("2")), "Normal");
    assert_eq!(severity_for(Some("3")), "Low");
    assert_eq!(severity_for(None), "Low");
}

#[test]
fn test_flat_report_totals_and_order() {
    let tmp = TempDir::new().unwrap();
    write_target(tmp.path(), "spotbugsXml.xml", FLAT_REPORT);

    let report = SpotBugsParser::new()
        .parse(&ProjectLayout::with_defaults(tmp.path()))
        .unwrap();

    assert_eq!(report.tool, "SpotBugs");
    assert_eq!(report.count("High"), 1);
    assert_eq!(report.count("Normal"), 1);
    assert_eq!(report.count("Low"), 0);
    assert_eq!(report.total(), 2);

    let labels: Vec<&str> = report.totals.iter().map(|b| b.label.as_str()).collect();
    assert_eq!(labels, vec!["High", "Normal", "Low"]);

    assert_eq!(report.findings[0].severity, "High");
    assert_eq!(report.findings[0].location, "com/acme/Bar.java:7");
    assert_eq!(
        report.findings[0].message,
        "Possible null pointer dereference"
    );
    assert_eq!(
        report.findings[0].rule.as_deref(),
        Some("NP_NULL_ON_SOME_PATH")
    );

    assert_eq!(report.findings[1].severity, "Normal");
    assert_eq!(report.findings[1].location, "com/acme/Foo.java:42");
}

#[test]
fn test_class_fallback_when_no_source_line() {
    let tmp = TempDir::new().unwrap();
    write_target(
        tmp.path(),
        "spotbugsXml.xml",
        r#"<BugCollection>
  <BugInstance type="SE_BAD_FIELD" priority="3">
    <LongMessage>Non-transient non-serializable instance field</LongMessage>
    <Class classname="com.acme.Session"/>
  </BugInstance>
  <BugInstance type="UUF_UNUSED_FIELD" priority="3"/>
</BugCollection>"#,
    );

    let report = SpotBugsParser::new()
        .parse(&ProjectLayout::with_defaults(tmp.path()))
        .unwrap();

    assert_eq!(report.findings[0].location, "com.acme.Session");
    assert_eq!(
        report.findings[0].message,
        "Non-transient non-serializable instance field"
    );
    // Neither text nor Class: both fall back to the type code
    assert_eq!(report.findings[1].location, "UUF_UNUSED_FIELD");
    assert_eq!(report.findings[1].message, "UUF_UNUSED_FIELD");
}

#[test]
fn test_message_fallbacks() {
    let tmp = TempDir::new().unwrap();
    write_target(
        tmp.path(),
        "spotbugsXml.xml",
        r#"<BugCollection>
  <BugInstance priority="2" message="  Attribute   message "/>
  <BugInstance priority="2"><ShortMessage>   </ShortMessage></BugInstance>
</BugCollection>"#,
    );

    let report = SpotBugsParser::new()
        .parse(&ProjectLayout::with_defaults(tmp.path()))
        .unwrap();

    assert_eq!(report.findings[0].message, "Attribute message");
    assert_eq!(report.findings[1].message, "Issue detected");
    assert_eq!(report.findings[1].location, "Unknown");
    assert!(report.findings[1].rule.is_none());
}

#[test]
fn test_first_source_line_without_primary() {
    let tmp = TempDir::new().unwrap();
    write_target(
        tmp.path(),
        "spotbugsXml.xml",
        r#"<BugCollection>
  <BugInstance type="X" priority="1">
    <Method><SourceLine end="12" sourcepath="a/First.java"/></Method>
    <SourceLine start="30" sourcepath="a/Second.java"/>
  </BugInstance>
</BugCollection>"#,
    );

    let report = SpotBugsParser::new()
        .parse(&ProjectLayout::with_defaults(tmp.path()))
        .unwrap();
    assert_eq!(report.findings[0].location, "a/First.java:12");
}

#[test]
fn test_nested_file_layout() {
    let tmp = TempDir::new().unwrap();
    write_target(
        tmp.path(),
        "spotbugs.xml",
        r#"<BugCollection>
  <file classname="com.acme.Foo">
    <BugInstance type="EI_EXPOSE_REP" priority="3" lineNumber="18" message="May expose internal representation"/>
    <BugInstance type="NP_ALWAYS_NULL" priority="1" message="Null pointer dereference"/>
  </file>
  <file classname="com.acme.Bar" sourcepath="src/main/java/com/acme/Bar.java">
    <BugInstance type="DLS_DEAD_LOCAL_STORE" priority="2" lineNumber="5" message="Dead store"/>
  </file>
</BugCollection>"#,
    );

    let report = SpotBugsParser::new()
        .parse(&ProjectLayout::with_defaults(tmp.path()))
        .unwrap();

    assert_eq!(report.total(), 3);
    let locations: Vec<&str> = report.findings.iter().map(|f| f.location.as_str()).collect();
    assert_eq!(
        locations,
        vec![
            "com/acme/Foo.java",
            "src/main/java/com/acme/Bar.java:5",
            "com/acme/Foo.java:18",
        ]
    );
}

#[test]
fn test_first_candidate_wins() {
    let tmp = TempDir::new().unwrap();
    write_target(tmp.path(), "spotbugsXml.xml", FLAT_REPORT);
    write_target(
        tmp.path(),
        "spotbugs.xml",
        r#"<BugCollection><BugInstance type="OTHER" priority="3"/></BugCollection>"#,
    );

    let report = SpotBugsParser::new()
        .parse(&ProjectLayout::with_defaults(tmp.path()))
        .unwrap();
    assert_eq!(report.total(), 2);
}

#[test]
fn test_absolute_source_path_is_relativized() {
    let tmp = TempDir::new().unwrap();
    let layout = ProjectLayout::with_defaults(tmp.path());
    let abs = layout.root.join("src/main/java/App.java");
    write_target(
        tmp.path(),
        "spotbugsXml.xml",
        &format!(
            r#"<BugCollection><BugInstance type="X" priority="1"><SourceLine start="3" sourcepath="{}"/></BugInstance></BugCollection>"#,
            abs.display()
        ),
    );

    let report = SpotBugsParser::new().parse(&layout).unwrap();
    assert_eq!(report.findings[0].location, "src/main/java/App.java:3");
}

#[test]
fn test_empty_collection_is_absent() {
    let tmp = TempDir::new().unwrap();
    write_target(
        tmp.path(),
        "spotbugsXml.xml",
        r#"<BugCollection version="4.8.3"><Project/></BugCollection>"#,
    );

    let err = SpotBugsParser::new()
        .parse(&ProjectLayout::with_defaults(tmp.path()))
        .unwrap_err();
    assert!(matches!(err, ReportError::NoData(_)));
}

#[test]
fn test_missing_report_is_absent() {
    let tmp = TempDir::new().unwrap();
    let err = SpotBugsParser::new()
        .parse(&ProjectLayout::with_defaults(tmp.path()))
        .unwrap_err();
    assert!(matches!(err, ReportError::NotFound(_)));
}
