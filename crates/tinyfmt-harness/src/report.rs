//! Report generation for conformance results.

use serde::{Deserialize, Serialize};

use crate::verify::VerificationSummary;

/// A conformance report for one verification run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConformanceReport {
    /// Report title.
    pub title: String,
    /// Campaign the results belong to.
    pub campaign: String,
    /// Timestamp (UTC).
    pub timestamp: String,
    /// Verification summary.
    pub summary: VerificationSummary,
}

impl ConformanceReport {
    /// Render the report as markdown.
    #[must_use]
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!("# {}\n\n", self.title));
        out.push_str(&format!("- Campaign: {}\n", self.campaign));
        out.push_str(&format!("- Timestamp: {}\n", self.timestamp));
        out.push_str(&format!("- Total: {}\n", self.summary.total));
        out.push_str(&format!("- Passed: {}\n", self.summary.passed));
        out.push_str(&format!("- Failed: {}\n\n", self.summary.failed));

        out.push_str("| Case | Section | Format | Status |\n");
        out.push_str("|------|---------|--------|--------|\n");
        for r in &self.summary.results {
            let status = if r.passed { "PASS" } else { "FAIL" };
            out.push_str(&format!(
                "| {} | {} | `{}` | {} |\n",
                r.case_name,
                r.section,
                r.format.replace('|', "\\|"),
                status
            ));
        }

        let failures: Vec<_> = self.summary.failures().collect();
        if !failures.is_empty() {
            out.push_str("\n## Failures\n");
            for r in failures {
                out.push_str(&format!("\n### {}\n\n```diff\n", r.case_name));
                out.push_str(r.diff.as_deref().unwrap_or(""));
                out.push_str("```\n");
            }
        }
        out
    }

    /// Render the report as JSON.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|e| format!("{{\"error\": \"{e}\"}}"))
    }
}
