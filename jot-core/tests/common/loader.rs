//! Fixture loading from YAML files

use serde::Deserialize;

use std::path::Path;

/// A single test case from a fixture file
#[derive(Debug, Clone, Deserialize)]
pub struct TestCase {
    pub id: String,
    pub desc: String,
    pub json: String,
    /// Expected tokens for a successful parse
    #[serde(default)]
    pub tokens: Vec<ExpectedToken>,
    /// Expected failure code for a failing parse
    #[serde(default)]
    pub error: Option<String>,
    /// Expected failure offset (only checked when present)
    #[serde(default)]
    pub offset: Option<usize>,
    /// Arena capacity override (defaults to a roomy test arena)
    #[serde(default)]
    pub capacity: Option<usize>,
}

/// One expected token: kind, byte span, child count, parent index
#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedToken {
    pub kind: String,
    pub start: u32,
    pub end: u32,
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub parent: Option<u32>,
}

impl ExpectedToken {
    /// Canonical form, spans included
    pub fn format(&self) -> String {
        format!(
            "{} {}..{} size={} parent={}",
            self.kind,
            self.start,
            self.end,
            self.size,
            self.parent.map(|p| p as i64).unwrap_or(-1),
        )
    }

    /// Span-free form for whitespace variations
    pub fn format_shape(&self) -> String {
        format!(
            "{} size={} parent={}",
            self.kind,
            self.size,
            self.parent.map(|p| p as i64).unwrap_or(-1),
        )
    }
}

/// Load all test cases from a YAML fixture file
pub fn load_fixtures(path: &Path) -> Vec<TestCase> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read fixture file {:?}: {}", path, e));
    serde_yaml::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture file {:?}: {}", path, e))
}

/// Load fixtures from the standard fixtures directory
pub fn load_fixtures_by_name(name: &str) -> Vec<TestCase> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(format!("{}.yaml", name));
    load_fixtures(&path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_documents() {
        let cases = load_fixtures_by_name("documents");
        assert!(!cases.is_empty());
        assert!(cases.iter().any(|c| c.id == "empty_object"));
    }

    #[test]
    fn test_load_errors() {
        let cases = load_fixtures_by_name("errors");
        assert!(cases.iter().all(|c| c.error.is_some()));
    }
}
