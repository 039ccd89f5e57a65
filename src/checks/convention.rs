//! Deferred-work-marker overlap check.
//!
//! TODO and FIXME comments are reported by virtually every mainstream
//! linter out of the box, so a custom pattern whose regex targets one of
//! those markers duplicates a diagnostic the project already gets for
//! free. This check looks for the marker tokens as substrings of the
//! flag-stripped regex text.

use crate::checks::OverlapCheck;
use crate::config::Config;
use crate::finding::{CheckResult, OverlapCategory, OverlapFinding, Severity};
use crate::registry::Pattern;
use std::time::Instant;

/// Built-in check for overlap with standard text-convention diagnostics.
pub struct ConventionCheck;

impl OverlapCheck for ConventionCheck {
    fn name(&self) -> &'static str {
        "convention"
    }

    fn description(&self) -> &'static str {
        "Overlap with TODO/FIXME checks built into standard linters"
    }

    fn is_available(&self) -> bool {
        true
    }

    fn run(&self, patterns: &[Pattern], config: &Config) -> CheckResult {
        let start = Instant::now();
        let mut findings = Vec::new();

        for pattern in patterns {
            let normalized = pattern.normalized_regex();

            let Some(marker) = config
                .markers
                .tokens
                .iter()
                .find(|token| normalized.contains(token.as_str()))
            else {
                continue;
            };

            findings.push(OverlapFinding {
                regex: pattern.regex.clone(),
                category: OverlapCategory::Convention,
                severity: Severity::Warning,
                message: format!(
                    "'{}' overlaps with standard {} checks",
                    pattern.regex, marker
                ),
                check: self.name().to_string(),
                source: pattern.source.clone(),
                remediation: Some(config.remediation_hint()),
            });
        }

        CheckResult {
            check_name: self.name().to_string(),
            findings,
            patterns_checked: patterns.len(),
            skipped: false,
            skip_reason: None,
            error: None,
            duration_ms: start.elapsed().as_millis() as u64,
        }
    }
}
