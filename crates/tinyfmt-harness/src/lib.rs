//! Conformance harness for tinyfmt.
//!
//! This crate provides:
//! - Fixtures: format strings, typed arguments and expected output as JSON
//! - Runner: execute fixtures through the format engine
//! - Verify/report: pass/fail summaries in markdown and JSON
//! - Structured JSONL logging for every executed case

#![forbid(unsafe_code)]

pub mod diff;
pub mod error;
pub mod fixtures;
pub mod report;
pub mod runner;
pub mod structured_log;
pub mod verify;

pub use error::HarnessError;
pub use fixtures::{ArgValue, Expectation, FixtureCase, FixtureSet};
pub use report::ConformanceReport;
pub use runner::TestRunner;
pub use verify::{VerificationResult, VerificationSummary};
