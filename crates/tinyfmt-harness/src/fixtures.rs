//! Fixture loading and management.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tinyfmt_core::{FormatArg, FormatError, FormatSink};

use crate::error::HarnessError;

/// A typed argument value as stored in fixture JSON.
///
/// Serialized as `{"type": "int", "value": -3}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ArgValue {
    Int(i64),
    Uint(u64),
    Float(f64),
    Str(String),
    Char(char),
    Bool(bool),
    /// Pointer address.
    Ptr(usize),
}

impl ArgValue {
    /// Best-effort typing of a command-line argument: integer, then float,
    /// then boolean, falling back to a string.
    #[must_use]
    pub fn parse_cli(raw: &str) -> Self {
        if let Ok(v) = raw.parse::<i64>() {
            return Self::Int(v);
        }
        if let Ok(v) = raw.parse::<u64>() {
            return Self::Uint(v);
        }
        if let Ok(v) = raw.parse::<f64>() {
            return Self::Float(v);
        }
        match raw {
            "true" => Self::Bool(true),
            "false" => Self::Bool(false),
            _ => Self::Str(raw.to_string()),
        }
    }

    fn inner(&self) -> ArgRef<'_> {
        match self {
            Self::Int(v) => ArgRef::Borrowed(v),
            Self::Uint(v) => ArgRef::Borrowed(v),
            Self::Float(v) => ArgRef::Borrowed(v),
            Self::Str(v) => ArgRef::Borrowed(v),
            Self::Char(v) => ArgRef::Borrowed(v),
            Self::Bool(v) => ArgRef::Borrowed(v),
            Self::Ptr(addr) => ArgRef::Pointer(std::ptr::without_provenance(*addr)),
        }
    }
}

enum ArgRef<'a> {
    Borrowed(&'a dyn FormatArg),
    Pointer(*const ()),
}

impl ArgRef<'_> {
    fn as_dyn(&self) -> &dyn FormatArg {
        match self {
            Self::Borrowed(arg) => *arg,
            Self::Pointer(ptr) => ptr,
        }
    }
}

impl FormatArg for ArgValue {
    fn render(
        &self,
        sink: &mut dyn FormatSink,
        truncate_at: Option<usize>,
        conversion: u8,
    ) -> Result<(), FormatError> {
        self.inner().as_dyn().render(sink, truncate_at, conversion)
    }

    fn to_int(&self) -> Option<i64> {
        self.inner().as_dyn().to_int()
    }

    fn type_name(&self) -> &'static str {
        self.inner().as_dyn().type_name()
    }
}

/// What a case is expected to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation<'a> {
    /// Formatting succeeds with exactly this text.
    Output(&'a str),
    /// Formatting fails with this [`FormatError::kind`].
    Error(&'a str),
}

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Behavior area the case exercises (e.g. `flags`, `errors`).
    pub section: String,
    /// Format string under test.
    pub format: String,
    /// Arguments, in order.
    #[serde(default)]
    pub args: Vec<ArgValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_output: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expected_error: Option<String>,
}

impl FixtureCase {
    /// The case's expectation; exactly one of output or error must be set.
    pub fn expectation(&self) -> Result<Expectation<'_>, HarnessError> {
        match (&self.expected_output, &self.expected_error) {
            (Some(out), None) => Ok(Expectation::Output(out)),
            (None, Some(kind)) => Ok(Expectation::Error(kind)),
            (Some(_), Some(_)) => Err(self.invalid("both expected_output and expected_error set")),
            (None, None) => Err(self.invalid("neither expected_output nor expected_error set")),
        }
    }

    /// Arguments as the slice the format engine takes.
    #[must_use]
    pub fn format_args(&self) -> Vec<&dyn FormatArg> {
        self.args.iter().map(|a| a as &dyn FormatArg).collect()
    }

    fn invalid(&self, reason: &str) -> HarnessError {
        HarnessError::InvalidCase {
            case: self.name.clone(),
            reason: reason.to_string(),
        }
    }
}

/// A collection of fixture cases for one behavior family.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Family name.
    pub family: String,
    /// UTC timestamp of capture.
    pub captured_at: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load fixture set from JSON string, rejecting malformed cases.
    pub fn from_json(json: &str) -> Result<Self, HarnessError> {
        let set: Self = serde_json::from_str(json)?;
        for case in &set.cases {
            case.expectation()?;
        }
        Ok(set)
    }

    /// Serialize fixture set to JSON string.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }
}

/// Load one fixture file, or every `*.json` file in a directory (sorted).
pub fn load_fixtures(path: &Path) -> Result<Vec<FixtureSet>, HarnessError> {
    if !path.is_dir() {
        return Ok(vec![FixtureSet::from_file(path)?]);
    }

    let mut paths: Vec<_> = std::fs::read_dir(path)?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|p| p.extension().and_then(|s| s.to_str()) == Some("json"))
        .collect();
    paths.sort();
    if paths.is_empty() {
        return Err(HarnessError::NoFixtures {
            path: path.to_path_buf(),
        });
    }
    paths.iter().map(|p| FixtureSet::from_file(p)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arg_values_use_tagged_json() {
        let args: Vec<ArgValue> = serde_json::from_str(
            r#"[{"type":"int","value":-3},{"type":"str","value":"hi"},{"type":"char","value":"z"},{"type":"ptr","value":4096}]"#,
        )
        .unwrap();
        assert_eq!(
            args,
            vec![
                ArgValue::Int(-3),
                ArgValue::Str("hi".into()),
                ArgValue::Char('z'),
                ArgValue::Ptr(4096),
            ]
        );
    }

    #[test]
    fn arg_values_format_like_their_payload() {
        let args = [
            ArgValue::Int(-3),
            ArgValue::Uint(255),
            ArgValue::Float(0.5),
            ArgValue::Bool(true),
            ArgValue::Ptr(0x1000),
        ];
        let refs: Vec<&dyn FormatArg> = args.iter().map(|a| a as &dyn FormatArg).collect();
        let out = tinyfmt_core::format("%d %x %.1f %s %p", &refs).unwrap();
        assert_eq!(out, "-3 ff 0.5 true 0x1000");
    }

    #[test]
    fn cli_arguments_are_typed() {
        assert_eq!(ArgValue::parse_cli("42"), ArgValue::Int(42));
        assert_eq!(ArgValue::parse_cli("-1"), ArgValue::Int(-1));
        assert_eq!(
            ArgValue::parse_cli("18446744073709551615"),
            ArgValue::Uint(u64::MAX)
        );
        assert_eq!(ArgValue::parse_cli("2.5"), ArgValue::Float(2.5));
        assert_eq!(ArgValue::parse_cli("false"), ArgValue::Bool(false));
        assert_eq!(ArgValue::parse_cli("word"), ArgValue::Str("word".into()));
    }

    #[test]
    fn star_width_reads_int_fixture_args() {
        assert_eq!(ArgValue::Int(4).to_int(), Some(4));
        assert_eq!(ArgValue::Str("4".into()).to_int(), None);
    }

    #[test]
    fn case_needs_exactly_one_expectation() {
        let err = FixtureSet::from_json(
            r#"{"version":"v1","family":"x","captured_at":"2026-01-01T00:00:00Z",
                "cases":[{"name":"bad","section":"s","format":"%d","args":[]}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, HarnessError::InvalidCase { .. }), "{err}");

        let set = FixtureSet::from_json(
            r#"{"version":"v1","family":"x","captured_at":"2026-01-01T00:00:00Z",
                "cases":[{"name":"ok","section":"s","format":"%%","expected_output":"%"}]}"#,
        )
        .unwrap();
        assert_eq!(set.cases[0].expectation().unwrap(), Expectation::Output("%"));
        assert!(set.cases[0].args.is_empty());
    }
}
