//! Audit orchestration.
//!
//! The [`run_audit`] function is the main entry-point for auditing a
//! pattern directory. It loads the rule registry and the allowlist, removes
//! exempted patterns, executes every enabled
//! [`OverlapCheck`](crate::checks::OverlapCheck) sequentially, and produces
//! a final [`HygieneReport`].
//!
//! Checks run one after another in a single thread: the external check
//! reuses one scratch probe file, and the whole tool assumes a single run
//! at a time against a working directory.

use crate::allowlist;
use crate::checks;
use crate::config::Config;
use crate::finding::{CheckResult, HygieneReport};
use crate::registry::{self, Pattern};
use std::path::Path;

/// Runs a complete hygiene audit over a pattern directory.
///
/// # Pipeline
///
/// 1. Loads every rule file in the directory (excluding the allowlist file).
/// 2. Loads the allowlist; a pattern whose raw or flag-stripped regex is
///    listed is exempted from all checks and recorded in the report.
/// 3. Runs every check enabled in [`Config::checks`](crate::config::ChecksConfig)
///    over the remaining patterns. Checks whose external tool is missing
///    are recorded as *skipped* — inconclusive, not clean-by-evidence.
/// 4. Assembles the final [`HygieneReport`]; the verdict fails on any finding.
///
/// # Examples
///
/// ```rust,no_run
/// use std::path::Path;
/// use pattern_hygiene::{audit, config::Config};
///
/// let config = Config::load(None).unwrap();
/// let report = audit::run_audit(Path::new("config/patterns"), &config);
///
/// std::process::exit(if report.passed { 0 } else { 1 });
/// ```
pub fn run_audit(patterns_dir: &Path, config: &Config) -> HygieneReport {
    let patterns = registry::load_rules(patterns_dir, &config.allowlist_file);
    let patterns_loaded = patterns.len();

    let allowlist = allowlist::load(&patterns_dir.join(&config.allowlist_file));

    let mut active: Vec<Pattern> = Vec::new();
    let mut exempted: Vec<String> = Vec::new();
    for pattern in patterns {
        let normalized = pattern.normalized_regex();
        if allowlist::is_exempt(&allowlist, &pattern.regex, &normalized) {
            exempted.push(pattern.regex);
        } else {
            active.push(pattern);
        }
    }

    let results: Vec<CheckResult> = checks::all_checks()
        .into_iter()
        .filter(|c| config.is_check_enabled(c.name()))
        .map(|check| {
            if check.is_available() {
                check.run(&active, config)
            } else {
                CheckResult::skipped(
                    check.name(),
                    &format!("{} not found on PATH", check.name()),
                )
            }
        })
        .collect();

    let registry_name = extract_registry_name(patterns_dir);
    HygieneReport::from_results(&registry_name, patterns_loaded, exempted, results)
}

/// Extracts the registry name from a directory path.
///
/// Returns the last path component or `"unknown"` when the path has no
/// file-name segment (e.g., `/`).
fn extract_registry_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
