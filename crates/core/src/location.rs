//! Path and message normalisation shared by the report parsers

use std::path::{Component, Path, PathBuf};

/// Placeholder used when a report carries no file path
pub const UNKNOWN_LOCATION: &str = "Unknown location";

/// Collapse every run of whitespace into a single space and trim the ends.
pub fn clean_message(value: Option<&str>) -> String {
    match value {
        Some(text) => text.split_whitespace().collect::<Vec<_>>().join(" "),
        None => String::new(),
    }
}

/// Express a path from a report relative to the project root.
///
/// Relative paths are taken as relative to `root`. When the result cannot be
/// placed under `root` the raw path is returned with `/` separators.
pub fn relative_location(raw_path: Option<&str>, root: &Path) -> String {
    let raw = match raw_path {
        Some(p) if !p.is_empty() => p,
        _ => return UNKNOWN_LOCATION.to_string(),
    };

    let joined = root.join(raw);
    let resolved = std::fs::canonicalize(&joined).unwrap_or_else(|_| normalize_lexically(&joined));

    match resolved.strip_prefix(root) {
        Ok(rel) if !rel.as_os_str().is_empty() => to_forward_slashes(rel),
        _ => raw.replace('\\', "/"),
    }
}

/// Resolve `.` and `..` components without touching the filesystem.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push(component);
                }
            }
            other => out.push(other),
        }
    }
    out
}

fn to_forward_slashes(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Append `:line` and, only when a line is present, `:column`.
pub fn with_position(base: String, line: Option<&str>, column: Option<&str>) -> String {
    match (non_empty(line), non_empty(column)) {
        (Some(line), Some(column)) => format!("{}:{}:{}", base, line, column),
        (Some(line), None) => format!("{}:{}", base, line),
        _ => base,
    }
}

/// Treat empty attribute values as missing.
pub fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
