//! JSON output formatter.
//!
//! Produces a pretty-printed JSON document containing registry metadata, a
//! severity summary, all overlap findings, and the exempted regexes.

use crate::finding::HygieneReport;

#[derive(serde::Serialize)]
struct JsonOutput<'a> {
    registry: &'a str,
    checked_at: &'a str,
    patterns_loaded: usize,
    verdict: &'a crate::finding::Verdict,
    passed: bool,
    summary: Summary,
    findings: &'a [crate::finding::OverlapFinding],
    exempted: &'a [String],
}

#[derive(serde::Serialize)]
struct Summary {
    errors: usize,
    warnings: usize,
    exempted: usize,
}

/// Formats a [`HygieneReport`] as pretty-printed JSON.
///
/// # Panics
///
/// Panics if the report cannot be serialized (should not happen with valid data).
pub fn format(report: &HygieneReport) -> String {
    let (errors, warnings) = report.count_by_severity();
    let output = JsonOutput {
        registry: &report.registry,
        checked_at: &report.checked_at,
        patterns_loaded: report.patterns_loaded,
        verdict: &report.verdict,
        passed: report.passed,
        summary: Summary {
            errors,
            warnings,
            exempted: report.exempted.len(),
        },
        findings: &report.findings,
        exempted: &report.exempted,
    };

    serde_json::to_string_pretty(&output).expect("JSON serialization failed")
}
