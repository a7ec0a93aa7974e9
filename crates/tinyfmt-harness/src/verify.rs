//! Output comparison and verification.

use serde::{Deserialize, Serialize};

/// Result of verifying a single fixture case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Name of the test case.
    pub case_name: String,
    /// Behavior area of the case.
    pub section: String,
    /// Format string that was run.
    pub format: String,
    /// Whether the case passed.
    pub passed: bool,
    /// Expected output, or `error:<kind>`.
    pub expected: String,
    /// Actual output, or `error:<kind>`.
    pub actual: String,
    /// Diff if the case failed.
    pub diff: Option<String>,
}

/// Aggregate verification summary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerificationSummary {
    /// Total cases run.
    pub total: usize,
    /// Cases passed.
    pub passed: usize,
    /// Cases failed.
    pub failed: usize,
    /// Individual results.
    pub results: Vec<VerificationResult>,
}

impl VerificationSummary {
    /// Build a summary from a list of results.
    #[must_use]
    pub fn from_results(results: Vec<VerificationResult>) -> Self {
        let total = results.len();
        let passed = results.iter().filter(|r| r.passed).count();
        Self {
            total,
            passed,
            failed: total - passed,
            results,
        }
    }

    /// Returns true if all cases passed.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// Failed results, in run order.
    pub fn failures(&self) -> impl Iterator<Item = &VerificationResult> {
        self.results.iter().filter(|r| !r.passed)
    }
}
