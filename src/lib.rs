//! # pattern-hygiene
//!
//! MECE hygiene auditing for regex lint-rule registries.
//!
//! `pattern-hygiene` loads a directory of regex-based lint rules and checks
//! that none of them duplicate diagnostics already enforced by standard
//! linters — keeping the custom rule set mutually exclusive and
//! collectively exhaustive (MECE) with mainstream tooling. Overlaps are
//! reported as actionable findings and fail the run with a non-zero exit.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use pattern_hygiene::{audit, config::Config, output};
//!
//! let config = Config::load(None).expect("failed to load config");
//! let report = audit::run_audit(Path::new("config/patterns"), &config);
//!
//! if report.passed {
//!     println!("MECE check passed!");
//! } else {
//!     let text = output::format_report(&report, &output::OutputFormat::Pretty);
//!     print!("{text}");
//! }
//! ```
//!
//! ## Architecture
//!
//! The crate is organized around a pipeline:
//!
//! 1. **[`registry`]** — parse rule files (two TOML-shaped notations) into
//!    [`registry::Pattern`] records with a deliberately naive scanner.
//! 2. **[`allowlist`]** — load operator-approved exemptions.
//! 3. **[`checks`]** — pluggable [`checks::OverlapCheck`] trait with a
//!    built-in convention check and an external clippy probe check.
//! 4. **[`probe`]** — translate a pattern's regex into a minimal Rust
//!    source snippet expected to trip the same convention.
//! 5. **[`audit`]** — orchestrate loading, exemption, and checks.
//! 6. **[`finding`]** — core data types ([`finding::OverlapFinding`],
//!    [`finding::HygieneReport`]).
//! 7. **[`output`]** — format reports as pretty text, JSON, or SARIF.
//!
//! ## Checks
//!
//! | Check | External tool | Description |
//! |-------|--------------|-------------|
//! | `convention` | — | Patterns duplicating TODO/FIXME marker diagnostics |
//! | `clippy` | [clippy] | Patterns whose probe trips a default clippy warning |
//!
//! [SARIF]: https://sarifweb.azurewebsites.net/
//! [clippy]: https://github.com/rust-lang/rust-clippy

pub mod allowlist;
pub mod audit;
pub mod checks;
pub mod config;
pub mod finding;
pub mod output;
pub mod probe;
pub mod registry;
