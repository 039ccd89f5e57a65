use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// Why a custom pattern is considered redundant.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OverlapCategory {
    /// Duplicates a text-convention diagnostic (TODO/FIXME style markers)
    /// that nearly every standard linter already reports.
    Convention,
    /// Duplicates a diagnostic a standard linter emits when run over a
    /// probe synthesized for the pattern.
    Linter,
}

impl fmt::Display for OverlapCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OverlapCategory::Convention => write!(f, "standard-convention overlap"),
            OverlapCategory::Linter => write!(f, "standard-linter overlap"),
        }
    }
}

/// One detected overlap between a custom pattern and standard tooling.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct OverlapFinding {
    /// The offending pattern's regex, verbatim as written in the rule file.
    pub regex: String,
    pub category: OverlapCategory,
    pub severity: Severity,
    pub message: String,
    /// Check that produced the finding (e.g. `"convention"`, `"clippy"`).
    pub check: String,
    /// Rule file the pattern was loaded from, when known.
    pub source: Option<PathBuf>,
    pub remediation: Option<String>,
}

impl OverlapFinding {
    /// Stable identifier for the kind of overlap, used by SARIF output
    /// (e.g. `"convention/standard-convention"`, `"clippy/standard-linter"`).
    pub fn rule_id(&self) -> String {
        let category = match self.category {
            OverlapCategory::Convention => "standard-convention",
            OverlapCategory::Linter => "standard-linter",
        };
        format!("{}/{}", self.check, category)
    }
}

/// Outcome of running one overlap check across the loaded registry.
#[derive(Debug, serde::Serialize)]
pub struct CheckResult {
    pub check_name: String,
    pub findings: Vec<OverlapFinding>,
    pub patterns_checked: usize,
    pub skipped: bool,
    pub skip_reason: Option<String>,
    pub error: Option<String>,
    pub duration_ms: u64,
}

impl CheckResult {
    pub fn skipped(name: &str, reason: &str) -> Self {
        CheckResult {
            check_name: name.to_string(),
            findings: vec![],
            patterns_checked: 0,
            skipped: true,
            skip_reason: Some(reason.to_string()),
            error: None,
            duration_ms: 0,
        }
    }
}

#[derive(Debug, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Passed,
    Failed,
}

#[derive(Debug, serde::Serialize)]
pub struct HygieneReport {
    /// Name of the audited pattern directory.
    pub registry: String,
    pub checked_at: String,
    pub patterns_loaded: usize,
    /// Regexes skipped because they appear in the allowlist (raw or
    /// flag-stripped form).
    pub exempted: Vec<String>,
    pub check_results: Vec<CheckResult>,
    pub findings: Vec<OverlapFinding>,
    pub verdict: Verdict,
    pub passed: bool,
}

impl HygieneReport {
    pub fn from_results(
        registry: &str,
        patterns_loaded: usize,
        exempted: Vec<String>,
        results: Vec<CheckResult>,
    ) -> Self {
        let findings: Vec<OverlapFinding> = results
            .iter()
            .flat_map(|r| r.findings.iter().cloned())
            .collect();

        let passed = findings.is_empty();
        let verdict = if passed {
            Verdict::Passed
        } else {
            Verdict::Failed
        };

        HygieneReport {
            registry: registry.to_string(),
            checked_at: chrono::Utc::now().to_rfc3339(),
            patterns_loaded,
            exempted,
            check_results: results,
            findings,
            verdict,
            passed,
        }
    }

    /// Count error and warning findings in a single pass.
    ///
    /// Returns `(errors, warnings)`. Prefer this over filtering twice when
    /// both values are needed at the same time (e.g. JSON output).
    pub fn count_by_severity(&self) -> (usize, usize) {
        self.findings
            .iter()
            .fold((0, 0), |(e, w), f| match f.severity {
                Severity::Error => (e + 1, w),
                Severity::Warning => (e, w + 1),
            })
    }
}
