//! Structured JSONL logging for harness runs.
//!
//! Provides:
//! - [`LogEntry`]: canonical JSONL record with required + optional fields.
//! - [`LogEmitter`]: writes JSONL lines to any writer with sequential trace ids.
//! - [`validate_log_line`]: validates a single JSONL line against the schema.
//! - [`validate_log_file`]: validates an entire JSONL file.
//! - [`log_reported_errors`]: logs every error the format engine reports.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Log entry
// ---------------------------------------------------------------------------

/// Severity level for log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Case outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Pass,
    Fail,
    Error,
}

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const OUTCOMES: [&str; 3] = ["pass", "fail", "error"];

/// Canonical structured log entry.
///
/// Required fields: `timestamp`, `trace_id`, `level`, `event`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    // Required
    pub timestamp: String,
    pub trace_id: String,
    pub level: LogLevel,
    pub event: String,

    // Optional
    #[serde(skip_serializing_if = "Option::is_none")]
    pub campaign: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    /// [`tinyfmt_core::FormatError::kind`] when formatting failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_ns: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl LogEntry {
    /// Create a new log entry with required fields only.
    #[must_use]
    pub fn new(trace_id: impl Into<String>, level: LogLevel, event: impl Into<String>) -> Self {
        Self {
            timestamp: now_utc(),
            trace_id: trace_id.into(),
            level,
            event: event.into(),
            campaign: None,
            case: None,
            format: None,
            outcome: None,
            error_kind: None,
            latency_ns: None,
            details: None,
        }
    }

    #[must_use]
    pub fn with_campaign(mut self, campaign: impl Into<String>) -> Self {
        self.campaign = Some(campaign.into());
        self
    }

    /// Set the case name and the format string it ran.
    #[must_use]
    pub fn with_case(mut self, case: impl Into<String>, format: impl Into<String>) -> Self {
        self.case = Some(case.into());
        self.format = Some(format.into());
        self
    }

    #[must_use]
    pub fn with_outcome(mut self, outcome: Outcome) -> Self {
        self.outcome = Some(outcome);
        self
    }

    #[must_use]
    pub fn with_error_kind(mut self, kind: impl Into<String>) -> Self {
        self.error_kind = Some(kind.into());
        self
    }

    #[must_use]
    pub fn with_latency_ns(mut self, ns: u64) -> Self {
        self.latency_ns = Some(ns);
        self
    }

    /// Set free-form details.
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    /// Serialize to a single JSONL line (no trailing newline).
    pub fn to_jsonl(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

// ---------------------------------------------------------------------------
// Log emitter
// ---------------------------------------------------------------------------

/// Writes structured JSONL log entries.
///
/// Trace ids have the form `<campaign>::<run_id>::<seq>`.
pub struct LogEmitter<W: Write> {
    writer: W,
    seq: u64,
    campaign: String,
    run_id: String,
}

impl LogEmitter<BufWriter<File>> {
    /// Create an emitter that writes to a file.
    pub fn to_file(path: &Path, campaign: &str, run_id: &str) -> std::io::Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file), campaign, run_id))
    }
}

impl LogEmitter<Vec<u8>> {
    /// Create an emitter that writes to an in-memory buffer.
    #[must_use]
    pub fn to_buffer(campaign: &str, run_id: &str) -> Self {
        Self::new(Vec::new(), campaign, run_id)
    }
}

impl<W: Write> LogEmitter<W> {
    pub fn new(writer: W, campaign: &str, run_id: &str) -> Self {
        Self {
            writer,
            seq: 0,
            campaign: campaign.to_string(),
            run_id: run_id.to_string(),
        }
    }

    fn next_trace_id(&mut self) -> String {
        self.seq += 1;
        format!("{}::{}::{:03}", self.campaign, self.run_id, self.seq)
    }

    /// Emit a bare event with an auto-generated trace id.
    pub fn emit(&mut self, level: LogLevel, event: &str) -> std::io::Result<LogEntry> {
        let entry = LogEntry::new("", level, event);
        self.emit_entry(entry)
    }

    /// Emit a populated entry, filling in trace id and campaign when unset.
    pub fn emit_entry(&mut self, mut entry: LogEntry) -> std::io::Result<LogEntry> {
        if entry.trace_id.is_empty() {
            entry.trace_id = self.next_trace_id();
        }
        if entry.campaign.is_none() {
            entry.campaign = Some(self.campaign.clone());
        }
        let line = entry.to_jsonl().map_err(std::io::Error::other)?;
        writeln!(self.writer, "{line}")?;
        Ok(entry)
    }

    /// Number of trace ids handed out so far.
    #[must_use]
    pub fn emitted(&self) -> u64 {
        self.seq
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }

    /// Consume the emitter, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Install a format-engine error hook that writes one `format_error` entry
/// per reported error to `emitter`.
///
/// Replaces any hook already installed. The returned handle shares the
/// emitter with the hook; lock it to flush or count entries.
pub fn log_reported_errors<W>(emitter: LogEmitter<W>) -> Arc<Mutex<LogEmitter<W>>>
where
    W: Write + Send + 'static,
{
    let shared = Arc::new(Mutex::new(emitter));
    let log = Arc::clone(&shared);
    tinyfmt_core::set_error_hook(move |err| {
        let entry = LogEntry::new("", LogLevel::Error, "format_error")
            .with_outcome(Outcome::Error)
            .with_error_kind(err.kind())
            .with_details(serde_json::json!({ "message": err.to_string() }));
        // The caller still gets the format error; a lost log line is not fatal.
        let _ = log.lock().emit_entry(entry);
    });
    shared
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validation error for a log line.
#[derive(Debug, Error)]
#[error("line {line_number}: field '{field}': {message}")]
pub struct LogValidationError {
    pub line_number: usize,
    pub field: String,
    pub message: String,
}

impl LogValidationError {
    fn new(line_number: usize, field: &str, message: impl Into<String>) -> Self {
        Self {
            line_number,
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Validate a single JSONL line against the schema.
pub fn validate_log_line(
    line: &str,
    line_number: usize,
) -> Result<LogEntry, Vec<LogValidationError>> {
    let value: serde_json::Value = serde_json::from_str(line).map_err(|e| {
        vec![LogValidationError::new(
            line_number,
            "<json>",
            format!("invalid JSON: {e}"),
        )]
    })?;
    let Some(obj) = value.as_object() else {
        return Err(vec![LogValidationError::new(
            line_number,
            "<root>",
            "expected JSON object",
        )]);
    };

    let mut errors = Vec::new();
    for field in ["timestamp", "trace_id", "level", "event"] {
        if !obj.contains_key(field) {
            errors.push(LogValidationError::new(
                line_number,
                field,
                "required field missing",
            ));
        }
    }

    if let Some(level) = obj.get("level").and_then(|v| v.as_str())
        && !LEVELS.contains(&level)
    {
        errors.push(LogValidationError::new(
            line_number,
            "level",
            format!("invalid level: '{level}'"),
        ));
    }

    if let Some(outcome) = obj.get("outcome").and_then(|v| v.as_str())
        && !OUTCOMES.contains(&outcome)
    {
        errors.push(LogValidationError::new(
            line_number,
            "outcome",
            format!("invalid outcome: '{outcome}'"),
        ));
    }

    // A failed case must say how it failed.
    if obj.get("outcome").and_then(|v| v.as_str()) == Some("error")
        && !obj.get("error_kind").is_some_and(serde_json::Value::is_string)
    {
        errors.push(LogValidationError::new(
            line_number,
            "error_kind",
            "error outcomes must include error_kind",
        ));
    }

    if let Some(trace_id) = obj.get("trace_id").and_then(|v| v.as_str())
        && trace_id.split("::").count() != 3
    {
        errors.push(LogValidationError::new(
            line_number,
            "trace_id",
            format!("trace_id should follow <campaign>::<run_id>::<seq> format, got: '{trace_id}'"),
        ));
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    serde_json::from_value::<LogEntry>(value).map_err(|e| {
        vec![LogValidationError::new(
            line_number,
            "<deserialization>",
            format!("failed to deserialize: {e}"),
        )]
    })
}

/// Validate an entire JSONL file.
///
/// Returns the non-empty line count and any validation errors found.
pub fn validate_log_file(path: &Path) -> Result<(usize, Vec<LogValidationError>), std::io::Error> {
    let content = std::fs::read_to_string(path)?;
    let mut all_errors = Vec::new();
    let mut line_count = 0;

    for (i, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        line_count += 1;
        if let Err(errs) = validate_log_line(line, i + 1) {
            all_errors.extend(errs);
        }
    }

    Ok((line_count, all_errors))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Current UTC time as `YYYY-MM-DDTHH:MM:SS.mmmZ`.
#[must_use]
pub fn now_utc() -> String {
    let duration = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default();
    format_utc(duration.as_secs(), duration.subsec_millis())
}

fn format_utc(secs: u64, millis: u32) -> String {
    let (year, month, day) = civil_from_days(secs / 86_400);
    format!(
        "{year:04}-{month:02}-{day:02}T{:02}:{:02}:{:02}.{millis:03}Z",
        (secs % 86_400) / 3600,
        (secs % 3600) / 60,
        secs % 60,
    )
}

/// Days since 1970-01-01 to a proleptic Gregorian (year, month, day).
fn civil_from_days(days: u64) -> (u64, u64, u64) {
    let z = days + 719_468;
    let era = z / 146_097;
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + u64::from(month <= 2);
    (year, month, day)
}
