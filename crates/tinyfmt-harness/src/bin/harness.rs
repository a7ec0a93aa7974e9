//! CLI entrypoint for the tinyfmt conformance harness.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tinyfmt_core::FormatArg;
use tinyfmt_harness::fixtures::load_fixtures;
use tinyfmt_harness::structured_log::{
    LogEmitter, log_reported_errors, now_utc, validate_log_file,
};
use tinyfmt_harness::{ArgValue, ConformanceReport, TestRunner, VerificationSummary};

/// Conformance tooling for tinyfmt.
#[derive(Debug, Parser)]
#[command(name = "tinyfmt-harness")]
#[command(about = "Fixture-driven conformance harness for tinyfmt")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Verify the format engine against fixture files.
    Verify {
        /// Fixture JSON file, or a directory of them.
        #[arg(long)]
        fixture: PathBuf,
        /// Campaign name used in reports and trace ids.
        #[arg(long, default_value = "fixture-verify")]
        campaign: String,
        /// Output report path (markdown).
        #[arg(long)]
        report_md: Option<PathBuf>,
        /// Output report path (JSON).
        #[arg(long)]
        report_json: Option<PathBuf>,
        /// Structured JSONL log path.
        #[arg(long)]
        log: Option<PathBuf>,
    },
    /// Format a string against command-line arguments and print it.
    Format {
        /// printf-style format string.
        format: String,
        /// Structured JSONL log path for a formatting failure.
        #[arg(long)]
        log: Option<PathBuf>,
        /// Arguments; integers, floats and true/false are typed, the rest are strings.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
    /// Diff two text files.
    Diff {
        #[arg(long)]
        expected: PathBuf,
        #[arg(long)]
        actual: PathBuf,
    },
    /// Validate a structured JSONL log file.
    ValidateLog {
        #[arg(long)]
        path: PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Verify {
            fixture,
            campaign,
            report_md,
            report_json,
            log,
        } => {
            eprintln!("Verifying against fixtures in {}", fixture.display());
            let fixture_sets = load_fixtures(&fixture)?;
            let runner = TestRunner::new(&campaign);

            let mut results = Vec::new();
            match &log {
                Some(path) => {
                    let run_id = format!("run-{}", std::process::id());
                    let mut emitter = LogEmitter::to_file(path, &campaign, &run_id)?;
                    for set in &fixture_sets {
                        results.extend(runner.run_logged(set, &mut emitter)?);
                    }
                    emitter.flush()?;
                    eprintln!("Wrote {} log lines to {}", emitter.emitted(), path.display());
                }
                None => {
                    for set in &fixture_sets {
                        results.extend(runner.run(set)?);
                    }
                }
            }

            let report_doc = ConformanceReport {
                title: String::from("tinyfmt Conformance Report"),
                campaign,
                timestamp: now_utc(),
                summary: VerificationSummary::from_results(results),
            };

            eprintln!(
                "Verification complete: total={}, passed={}, failed={}",
                report_doc.summary.total, report_doc.summary.passed, report_doc.summary.failed
            );
            for failure in report_doc.summary.failures() {
                eprintln!("FAIL {} ({})", failure.case_name, failure.format);
                if let Some(diff) = &failure.diff {
                    eprint!("{diff}");
                }
            }

            if let Some(path) = report_md {
                eprintln!("Writing markdown report to {}", path.display());
                std::fs::write(&path, report_doc.to_markdown())?;
            }
            if let Some(path) = report_json {
                eprintln!("Writing JSON report to {}", path.display());
                std::fs::write(&path, report_doc.to_json())?;
            }

            if !report_doc.summary.all_passed() {
                return Err("Conformance verification failed".into());
            }
        }
        Command::Format { format, args, log } => {
            let log = match &log {
                Some(path) => {
                    let run_id = format!("run-{}", std::process::id());
                    let emitter = LogEmitter::to_file(path, "format", &run_id)?;
                    Some(log_reported_errors(emitter))
                }
                None => None,
            };
            let values: Vec<ArgValue> = args.iter().map(|raw| ArgValue::parse_cli(raw)).collect();
            let refs: Vec<&dyn FormatArg> = values.iter().map(|v| v as &dyn FormatArg).collect();
            let result = tinyfmt_core::write_to(std::io::stdout().lock(), &format, &refs);
            if let Some(log) = log {
                log.lock().flush()?;
            }
            result?;
        }
        Command::Diff { expected, actual } => {
            let expected = std::fs::read_to_string(&expected)?;
            let actual = std::fs::read_to_string(&actual)?;
            print!("{}", tinyfmt_harness::diff::render_diff(&expected, &actual));
            if expected != actual {
                return Err("Outputs differ".into());
            }
        }
        Command::ValidateLog { path } => {
            let (lines, errors) = validate_log_file(&path)?;
            for err in &errors {
                eprintln!("{err}");
            }
            eprintln!("Validated {lines} lines, {} errors", errors.len());
            if !errors.is_empty() {
                return Err(format!("Invalid log file {}", path.display()).into());
            }
        }
    }

    Ok(())
}
