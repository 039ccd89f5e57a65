//! Pluggable overlap checks.
//!
//! Every check implements the [`OverlapCheck`] trait. Checks fall into two
//! categories:
//!
//! - **Built-in** (no external dependencies): [`convention`].
//! - **External** (require a tool on `PATH`): [`clippy`].
//!
//! Use [`all_checks`] to obtain all registered checks in their execution
//! order. The auditor runs them sequentially; probes share one scratch
//! directory per check run, so checks must not assume concurrent execution.

pub mod clippy;
pub mod convention;

use crate::config::Config;
use crate::finding::CheckResult;
use crate::registry::Pattern;

/// One way a custom pattern can overlap with standard tooling.
pub trait OverlapCheck {
    /// Returns the check's unique identifier (e.g., `"convention"`, `"clippy"`).
    fn name(&self) -> &'static str;

    /// Returns a short, human-readable description of the check.
    fn description(&self) -> &'static str;

    /// Returns `true` if the check's external dependencies are installed.
    ///
    /// Built-in checks always return `true`. External checks test whether
    /// their tool binary exists on `PATH` via [`which_exists`].
    fn is_available(&self) -> bool;

    /// Executes the check against every pattern in the slice.
    ///
    /// Allowlisted patterns are removed by the auditor before this is
    /// called; implementations see only patterns still subject to auditing.
    fn run(&self, patterns: &[Pattern], config: &Config) -> CheckResult;
}

/// Returns every registered [`OverlapCheck`] implementation, in execution
/// order.
pub fn all_checks() -> Vec<Box<dyn OverlapCheck>> {
    vec![
        Box::new(convention::ConventionCheck),
        Box::new(clippy::ClippyCheck::new()),
    ]
}

/// Returns `true` if an executable named `cmd` exists on `PATH`.
///
/// On Unix the file must also have an executable permission bit set.
/// Used by external checks to implement [`OverlapCheck::is_available`].
pub fn which_exists(cmd: &str) -> bool {
    std::env::var_os("PATH")
        .map(|path| {
            std::env::split_paths(&path).any(|dir| {
                let candidate = dir.join(cmd);
                if !candidate.is_file() {
                    return false;
                }
                // Also verify the file is executable; a non-executable binary on
                // PATH would appear available but fail at runtime.
                #[cfg(unix)]
                {
                    use std::os::unix::fs::PermissionsExt;
                    std::fs::metadata(&candidate)
                        .map(|m| m.permissions().mode() & 0o111 != 0)
                        .unwrap_or(false)
                }
                #[cfg(not(unix))]
                {
                    true
                }
            })
        })
        .unwrap_or(false)
}
