//! Human-readable colored text formatter.
//!
//! Produces a terminal-friendly report with ANSI color codes, showing
//! per-check statuses, individual overlaps with their source rule file,
//! exempted regexes, and a one-line verdict.

use crate::finding::{HygieneReport, Severity};
use colored::Colorize;

/// Formats a [`HygieneReport`] as human-readable, ANSI-colored text.
///
/// Sections rendered (in order):
/// 1. **Header** — registry name, timestamp, loaded-pattern count.
/// 2. **Checks** — per-check pass/fail/skip status.
/// 3. **Overlaps** — findings with severity, category, and remediation hint.
/// 4. **Exempted** — allowlisted regexes that were skipped.
/// 5. **Verdict** — overall result and severity counts.
pub fn format(report: &HygieneReport) -> String {
    let mut out = String::new();

    // Header
    out.push_str(&format!(
        "\n{}\n",
        format!("  Pattern Hygiene: {}  ", report.registry)
            .bold()
            .on_blue()
            .white()
    ));
    out.push_str(&format!("  Timestamp: {}\n", report.checked_at));
    out.push_str(&format!(
        "  Checking {} patterns for standard linter overlap...\n\n",
        report.patterns_loaded
    ));

    // Check results summary
    out.push_str(&format!("{}\n", "Checks".bold().underline()));
    for result in &report.check_results {
        let icon = if result.skipped {
            "SKIP".dimmed().to_string()
        } else if result.findings.iter().any(|f| f.severity == Severity::Error) {
            "FAIL".red().bold().to_string()
        } else if !result.findings.is_empty() {
            "WARN".yellow().bold().to_string()
        } else {
            "PASS".green().bold().to_string()
        };

        let detail = if result.skipped {
            result
                .skip_reason
                .as_deref()
                .unwrap_or("skipped")
                .dimmed()
                .to_string()
        } else {
            format!(
                "{} overlaps, {} patterns checked",
                result.findings.len(),
                result.patterns_checked
            )
        };

        out.push_str(&format!(
            "  [{icon}] {name:<12} {detail}\n",
            name = result.check_name,
        ));

        if let Some(ref err) = result.error {
            out.push_str(&format!("         {}\n", err.dimmed()));
        }
    }
    out.push('\n');

    // Findings
    if !report.findings.is_empty() {
        out.push_str(&format!("{}\n", "Overlaps".bold().underline()));
        for finding in &report.findings {
            let severity_str = match finding.severity {
                Severity::Error => "ERROR".red().bold().to_string(),
                Severity::Warning => " WARN".yellow().bold().to_string(),
            };

            out.push_str(&format!(
                "  [{severity_str}] {category:<28} {message}\n",
                category = finding.category.to_string().dimmed(),
                message = finding.message,
            ));
            if let Some(ref source) = finding.source {
                out.push_str(&format!("         {}\n", source.display().to_string().dimmed()));
            }
            if let Some(ref remediation) = finding.remediation {
                out.push_str(&format!("         > {}\n", remediation.dimmed()));
            }
        }
        out.push('\n');
    }

    // Exempted patterns
    if !report.exempted.is_empty() {
        out.push_str(&format!(
            "{} ({} allowlisted)\n",
            "Exempted".bold().underline(),
            report.exempted.len()
        ));
        for regex in &report.exempted {
            out.push_str(&format!("  [SKIP] {}\n", regex.dimmed()));
        }
        out.push('\n');
    }

    // Verdict
    if report.passed {
        out.push_str(&format!(
            "{} MECE check passed: patterns are orthogonal to standard linters.\n",
            "PASSED".green().bold()
        ));
    } else {
        let (errors, warnings) = report.count_by_severity();
        out.push_str(&format!(
            "{} Found {} overlaps  |  {} errors, {} warnings, {} exempted\n",
            "FAILED".red().bold(),
            report.findings.len(),
            errors,
            warnings,
            report.exempted.len(),
        ));
    }

    out
}
