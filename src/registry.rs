//! Pattern registry loading.
//!
//! Rule files are TOML-shaped, but this module deliberately does **not** use
//! a TOML parser: the project's own tooling only ever writes two shapes
//! (multi-line `[[patterns]]` blocks and single-line inline tables), and the
//! loader must survive arbitrarily malformed files by skipping them rather
//! than aborting. The scanner below handles exactly those two shapes and
//! nothing more; [`load_rules`] is the stable seam behind which a real
//! parser could later be swapped in without touching the auditor.

use regex::Regex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use walkdir::WalkDir;

/// One lint rule as written in a rule file.
///
/// Only `regex` and `languages` are interpreted; every other key is carried
/// opaquely in `metadata` so the auditor round-trips fields it does not
/// understand (id, message, severity, category, ...).
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Pattern {
    /// Detection expression, verbatim (may carry a leading `(?i)` flag).
    pub regex: String,
    /// Target language tags, e.g. `"Rust"`. Empty means language-agnostic.
    pub languages: Vec<String>,
    /// All remaining `key = value` fields, uninterpreted.
    pub metadata: BTreeMap<String, String>,
    /// Rule file this pattern was parsed from. `None` for patterns parsed
    /// from raw text (tests).
    pub source: Option<PathBuf>,
}

impl Pattern {
    /// The regex with its case-insensitivity flag stripped.
    ///
    /// Allowlist membership and the convention check both operate on this
    /// normalized form in addition to the raw one.
    pub fn normalized_regex(&self) -> String {
        strip_case_flag(&self.regex)
    }
}

/// Removes every `(?i)` flag token from a regex string.
pub fn strip_case_flag(regex: &str) -> String {
    regex.replace("(?i)", "")
}

// Inline-table `key="value"` pairs. The value runs to the first quote
// whose preceding character is not a backslash, and never crosses a
// newline; a value cannot end in a bare backslash.
static RE_INLINE_KV: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(\w+)\s*=\s*"((?:\\"|[^"\n])*(?:\\"|[^"\\\n])|)""#).unwrap());

static RE_LANG_LIST: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"languages\s*=\s*\[(.*?)\]").unwrap());

/// Field accumulator for the block currently being scanned.
#[derive(Default)]
struct BlockAccumulator {
    fields: BTreeMap<String, String>,
    languages: Vec<String>,
}

impl BlockAccumulator {
    fn insert(&mut self, key: &str, value: String) {
        if key == "languages" {
            self.languages = parse_language_list(&value);
        } else {
            self.fields.insert(key.to_string(), value);
        }
    }

    /// Materializes a [`Pattern`] only when a `regex` field was accumulated.
    /// A block without one is incomplete data, not a rule, and is dropped.
    fn finish(mut self) -> Option<Pattern> {
        let regex = self.fields.remove("regex")?;
        Some(Pattern {
            regex,
            languages: self.languages,
            metadata: self.fields,
            source: None,
        })
    }
}

/// Splits a bracketed, comma-separated list into trimmed, quote-stripped
/// elements, preserving order. Accepts the inner text with or without the
/// surrounding brackets.
fn parse_language_list(raw: &str) -> Vec<String> {
    raw.trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .split(',')
        .map(|l| l.trim().trim_matches('"').to_string())
        .filter(|l| !l.is_empty())
        .collect()
}

/// Parses one rule file's content into zero or more [`Pattern`] records.
///
/// Two notations are accepted, and may be mixed within one file:
///
/// - a block opened by `[[patterns]]`, whose subsequent `key = value` lines
///   populate the pattern until the next block start or end of input;
/// - a single-line inline table opened by `{`, which is self-contained and
///   flushes immediately.
///
/// Quoted block values take the substring between the first and *last*
/// quote character. This is naive by design: rule files written by this
/// project never place the closing delimiter before an embedded quote.
pub fn parse_rule_file(content: &str) -> Vec<Pattern> {
    let mut patterns = Vec::new();
    let mut acc = BlockAccumulator::default();
    // Set by the first [[patterns]] marker and never cleared: an inline
    // table does not close the surrounding block region, so key = value
    // lines after it accumulate into a fresh pattern.  Before any marker,
    // key = value lines have no block to belong to and are discarded.
    let mut in_block = false;

    for raw_line in content.lines() {
        let line = raw_line.trim();

        if line.starts_with("[[patterns]]") || line.starts_with('{') {
            if let Some(done) = std::mem::take(&mut acc).finish() {
                patterns.push(done);
            }

            if line.starts_with('{') {
                let mut inline = BlockAccumulator::default();
                for cap in RE_INLINE_KV.captures_iter(line) {
                    inline.insert(&cap[1], cap[2].to_string());
                }
                if line.contains("languages") {
                    if let Some(cap) = RE_LANG_LIST.captures(line) {
                        inline.languages = parse_language_list(&cap[1]);
                    }
                }
                if let Some(done) = inline.finish() {
                    patterns.push(done);
                }
            } else {
                in_block = true;
            }
        } else if in_block {
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim();
                let mut value = value.trim().to_string();
                if value.starts_with('"') {
                    if let Some(end) = value.rfind('"') {
                        if end > 0 {
                            value = value[1..end].to_string();
                        }
                    }
                }
                acc.insert(key, value);
            }
        }
    }

    if let Some(done) = acc.finish() {
        patterns.push(done);
    }

    patterns
}

/// Loads every rule file in `dir` into one ordered registry.
///
/// Enumerates `*.toml` files directly under the directory in file-name
/// order, skipping the allowlist file by name. A file that cannot be read
/// is skipped with a stderr diagnostic; the load never aborts.
pub fn load_rules(dir: &Path, allowlist_file_name: &str) -> Vec<Pattern> {
    let mut patterns = Vec::new();

    for entry in WalkDir::new(dir)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        if path.extension() != Some(std::ffi::OsStr::new("toml")) {
            continue;
        }
        if path.file_name() == Some(std::ffi::OsStr::new(allowlist_file_name)) {
            continue;
        }

        match std::fs::read_to_string(path) {
            Ok(content) => {
                let mut parsed = parse_rule_file(&content);
                for p in &mut parsed {
                    p.source = Some(path.to_path_buf());
                }
                patterns.extend(parsed);
            }
            Err(e) => {
                eprintln!("Warning: failed to load {}: {e}", path.display());
            }
        }
    }

    patterns
}
