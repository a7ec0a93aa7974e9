//! Test execution engine.

use std::io::Write;
use std::time::Instant;

use crate::diff;
use crate::error::HarnessError;
use crate::fixtures::{Expectation, FixtureCase, FixtureSet};
use crate::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};
use crate::verify::VerificationResult;

/// Runs fixture sets through the format engine and collects results.
pub struct TestRunner {
    /// Name of the test campaign.
    pub campaign: String,
}

/// One executed case before comparison.
struct Execution {
    actual: String,
    error_kind: Option<&'static str>,
    latency_ns: u64,
}

impl TestRunner {
    #[must_use]
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
        }
    }

    /// Run all cases in a set and return results.
    pub fn run(&self, fixture_set: &FixtureSet) -> Result<Vec<VerificationResult>, HarnessError> {
        fixture_set
            .cases
            .iter()
            .map(|case| verify_case(case, &execute(case)))
            .collect()
    }

    /// Like [`run`](Self::run), also emitting one log line per case.
    pub fn run_logged<W: Write>(
        &self,
        fixture_set: &FixtureSet,
        log: &mut LogEmitter<W>,
    ) -> Result<Vec<VerificationResult>, HarnessError> {
        log.emit_entry(
            LogEntry::new("", LogLevel::Info, "fixture_set_start")
                .with_campaign(&self.campaign)
                .with_details(serde_json::json!({
                    "family": fixture_set.family,
                    "version": fixture_set.version,
                    "cases": fixture_set.cases.len(),
                })),
        )?;

        let mut results = Vec::with_capacity(fixture_set.cases.len());
        for case in &fixture_set.cases {
            let execution = execute(case);
            let result = verify_case(case, &execution)?;
            log.emit_entry(case_entry(&self.campaign, case, &execution, &result))?;
            results.push(result);
        }
        Ok(results)
    }
}

fn execute(case: &FixtureCase) -> Execution {
    let args = case.format_args();
    let start = Instant::now();
    let outcome = tinyfmt_core::format(&case.format, &args);
    let latency_ns = u64::try_from(start.elapsed().as_nanos()).unwrap_or(u64::MAX);
    match outcome {
        Ok(actual) => Execution {
            actual,
            error_kind: None,
            latency_ns,
        },
        Err(err) => Execution {
            actual: error_marker(err.kind()),
            error_kind: Some(err.kind()),
            latency_ns,
        },
    }
}

fn verify_case(
    case: &FixtureCase,
    execution: &Execution,
) -> Result<VerificationResult, HarnessError> {
    let expected = match case.expectation()? {
        Expectation::Output(text) => text.to_string(),
        Expectation::Error(kind) => error_marker(kind),
    };
    let passed = execution.actual == expected;
    let diff = (!passed).then(|| diff::render_diff(&expected, &execution.actual));
    Ok(VerificationResult {
        case_name: case.name.clone(),
        section: case.section.clone(),
        format: case.format.clone(),
        passed,
        expected,
        actual: execution.actual.clone(),
        diff,
    })
}

fn case_entry(
    campaign: &str,
    case: &FixtureCase,
    execution: &Execution,
    result: &VerificationResult,
) -> LogEntry {
    let (level, outcome) = match (result.passed, execution.error_kind) {
        (true, _) => (LogLevel::Info, Outcome::Pass),
        (false, None) => (LogLevel::Warn, Outcome::Fail),
        (false, Some(_)) => (LogLevel::Error, Outcome::Error),
    };
    let mut entry = LogEntry::new("", level, "case_result")
        .with_campaign(campaign)
        .with_case(&case.name, &case.format)
        .with_outcome(outcome)
        .with_latency_ns(execution.latency_ns);
    if let Some(kind) = execution.error_kind {
        entry = entry.with_error_kind(kind);
    }
    if let Some(diff) = &result.diff {
        entry = entry.with_details(serde_json::json!({ "diff": diff }));
    }
    entry
}

fn error_marker(kind: &str) -> String {
    format!("error:{kind}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(cases: &str) -> FixtureSet {
        FixtureSet::from_json(&format!(
            r#"{{"version":"v1","family":"printf","captured_at":"2026-02-09T00:00:00Z","cases":[{cases}]}}"#
        ))
        .expect("valid fixture json")
    }

    #[test]
    fn output_cases_compare_text() {
        let set = fixture(
            r#"{"name":"width","section":"width","format":"%5d","args":[{"type":"int","value":42}],"expected_output":"   42"},
               {"name":"wrong","section":"width","format":"%5d","args":[{"type":"int","value":42}],"expected_output":"42"}"#,
        );
        let results = TestRunner::new("smoke").run(&set).unwrap();
        assert!(results[0].passed);
        assert!(results[0].diff.is_none());
        assert!(!results[1].passed);
        assert!(results[1].diff.as_deref().unwrap().contains("@@ line 1"));
    }

    #[test]
    fn error_cases_compare_kind() {
        let set = fixture(
            r#"{"name":"too_many","section":"errors","format":"%d %d","args":[{"type":"int","value":1}],"expected_error":"too_many_conversion_specifiers"}"#,
        );
        let results = TestRunner::new("smoke").run(&set).unwrap();
        assert!(results[0].passed, "{:?}", results[0]);
        assert_eq!(results[0].actual, "error:too_many_conversion_specifiers");
    }

    #[test]
    fn unexpected_error_fails_with_marker() {
        let set = fixture(
            r#"{"name":"bad","section":"errors","format":"%a","args":[{"type":"float","value":1.0}],"expected_output":"0x1p+0"}"#,
        );
        let results = TestRunner::new("smoke").run(&set).unwrap();
        assert!(!results[0].passed);
        assert_eq!(results[0].actual, "error:unsupported_conversion");
    }

    #[test]
    fn logged_run_emits_header_and_one_line_per_case() {
        let set = fixture(
            r#"{"name":"ok","section":"literal","format":"100%%","expected_output":"100%"},
               {"name":"err","section":"errors","format":"%q","args":[{"type":"int","value":1}],"expected_output":"q"}"#,
        );
        let mut log = LogEmitter::to_buffer("smoke", "run-1");
        let results = TestRunner::new("smoke").run_logged(&set, &mut log).unwrap();
        assert_eq!(results.len(), 2);

        let text = String::from_utf8(log.into_inner()).unwrap();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 3);
        let last: serde_json::Value = serde_json::from_str(lines[2]).unwrap();
        assert_eq!(last["outcome"], "error");
        assert_eq!(last["error_kind"], "unknown_conversion");
        assert_eq!(last["case"], "err");
        assert_eq!(last["trace_id"], "smoke::run-1::003");
    }
}
