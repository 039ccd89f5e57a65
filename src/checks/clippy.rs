//! Probe-based overlap check via [clippy](https://github.com/rust-lang/rust-clippy).
//!
//! This is an **external** check — it requires cargo's clippy component on
//! `PATH`. When the tool is not found the check is marked as *skipped* by
//! the audit runner, and the patterns it would have covered count as clean:
//! absence of the tool is inconclusive, and no stronger claim can be made
//! without it.
//!
//! # How it works
//!
//! 1. Considers only patterns whose `languages` list contains `"Rust"`.
//! 2. Synthesizes a minimal probe source file for each pattern
//!    (see [`probe`](crate::probe)).
//! 3. Scaffolds a dependency-free package in a process-unique scratch
//!    directory, rewrites the probe into it per pattern, and runs
//!    `cargo clippy -- -D warnings` there.
//! 4. A non-zero exit status means the probe also trips a standard clippy
//!    diagnostic, so the custom pattern is redundant.
//!
//! Only the exit status is interpreted; diagnostic text is discarded. The
//! scratch directory is removed on every exit path, so no probe artifact
//! survives a run.

use crate::checks::{which_exists, OverlapCheck};
use crate::config::Config;
use crate::finding::{CheckResult, OverlapCategory, OverlapFinding, Severity};
use crate::probe;
use crate::registry::Pattern;
use std::path::Path;
use std::time::Instant;

const RUST_LANGUAGE_TAG: &str = "Rust";

// Minimal package manifest for the probe; the probe file doubles as the
// binary's crate root so no src/ layout is needed.
const PROBE_MANIFEST: &str = r#"[package]
name = "probe"
version = "0.0.0"
edition = "2021"

[[bin]]
name = "probe"
path = "probe.rs"
"#;

/// External check wrapper around `cargo clippy`.
pub struct ClippyCheck {
    cargo: String,
}

impl ClippyCheck {
    pub fn new() -> Self {
        ClippyCheck {
            cargo: "cargo".to_string(),
        }
    }

    /// Uses a different cargo executable name. Tests inject a nonexistent
    /// name here to exercise the tool-missing path deterministically.
    pub fn with_cargo(cargo: impl Into<String>) -> Self {
        ClippyCheck {
            cargo: cargo.into(),
        }
    }

    fn targets(&self, pattern: &Pattern) -> bool {
        pattern.languages.iter().any(|l| l == RUST_LANGUAGE_TAG)
    }

    /// Lints the current probe in `scratch` and reports whether clippy
    /// flagged it. `None` means the tool could not be run at all —
    /// inconclusive, which the caller reports as clean.
    fn probe_is_flagged(&self, scratch: &Path, error_msg: &mut Option<String>) -> Option<bool> {
        let output = std::process::Command::new(&self.cargo)
            .arg("clippy")
            .arg("--quiet")
            .arg("--")
            .arg("-D")
            .arg("warnings")
            .current_dir(scratch)
            .output();

        match output {
            Ok(o) => Some(!o.status.success()),
            Err(e) => {
                // Tool vanished between the availability probe and now.
                *error_msg = Some(format!("Failed to run {} clippy: {}", self.cargo, e));
                None
            }
        }
    }
}

impl Default for ClippyCheck {
    fn default() -> Self {
        ClippyCheck::new()
    }
}

impl OverlapCheck for ClippyCheck {
    fn name(&self) -> &'static str {
        "clippy"
    }

    fn description(&self) -> &'static str {
        "Overlap with default clippy diagnostics, via synthesized probes (external tool)"
    }

    fn is_available(&self) -> bool {
        // cargo resolves the subcommand through the cargo-clippy binary, so
        // both must be present.
        which_exists(&self.cargo) && which_exists("cargo-clippy")
    }

    fn run(&self, patterns: &[Pattern], config: &Config) -> CheckResult {
        let start = Instant::now();
        let rust_patterns: Vec<&Pattern> = patterns.iter().filter(|p| self.targets(p)).collect();

        if rust_patterns.is_empty() {
            return CheckResult {
                check_name: self.name().to_string(),
                findings: vec![],
                patterns_checked: 0,
                skipped: false,
                skip_reason: None,
                error: None,
                duration_ms: start.elapsed().as_millis() as u64,
            };
        }

        // Process-unique scratch directory; removed when `scratch` drops,
        // on success, error, and panic alike. The probe file inside it is
        // rewritten for each pattern — the whole run is sequential.
        let scratch = match tempfile::Builder::new()
            .prefix("pattern-hygiene-probe")
            .tempdir()
        {
            Ok(dir) => dir,
            Err(e) => {
                return CheckResult {
                    check_name: self.name().to_string(),
                    findings: vec![],
                    patterns_checked: rust_patterns.len(),
                    skipped: false,
                    skip_reason: None,
                    error: Some(format!("Failed to create scratch directory: {e}")),
                    duration_ms: start.elapsed().as_millis() as u64,
                };
            }
        };

        let mut findings = Vec::new();
        let mut error_msg: Option<String> = None;

        if let Err(e) = std::fs::write(scratch.path().join("Cargo.toml"), PROBE_MANIFEST) {
            error_msg = Some(format!("Failed to scaffold probe package: {e}"));
        } else {
            let probe_path = scratch.path().join("probe.rs");

            for pattern in &rust_patterns {
                let source = probe::synthesize(&pattern.regex);
                if let Err(e) = std::fs::write(&probe_path, &source) {
                    error_msg = Some(format!("Failed to write probe: {e}"));
                    continue;
                }

                // Non-zero exit with warnings denied: the probe trips a
                // standard clippy diagnostic, so the custom pattern is
                // redundant. An unrunnable tool is inconclusive — no finding.
                if self.probe_is_flagged(scratch.path(), &mut error_msg) == Some(true) {
                    findings.push(OverlapFinding {
                        regex: pattern.regex.clone(),
                        category: OverlapCategory::Linter,
                        severity: Severity::Error,
                        message: format!(
                            "'{}' is caught by default clippy (redundant)",
                            pattern.regex
                        ),
                        check: self.name().to_string(),
                        source: pattern.source.clone(),
                        remediation: Some(config.remediation_hint()),
                    });
                }
            }
        }

        CheckResult {
            check_name: self.name().to_string(),
            findings,
            patterns_checked: rust_patterns.len(),
            skipped: false,
            skip_reason: None,
            error: error_msg,
            duration_ms: start.elapsed().as_millis() as u64,
        }
    }
}
