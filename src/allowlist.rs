//! Allowlist loading.
//!
//! The allowlist file exempts specific regexes from overlap reporting by
//! deliberate operator decision. Its format is intentionally permissive:
//! every quoted string literal in the file becomes an entry, regardless of
//! the TOML structure around it, so operators can annotate entries freely
//! without breaking the loader.

use regex::Regex;
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

// Same escape rule as the rule-file scanner: the literal runs to the first
// quote whose preceding character is not a backslash. Literals never span
// lines, so an unbalanced quote cannot swallow the rest of the file.
static RE_QUOTED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""((?:\\"|[^"\n])*(?:\\"|[^"\\\n])|)""#).unwrap());

/// Loads the allowlist from `path`.
///
/// An absent file yields an empty set; that is the normal state for a
/// project with no accepted overlaps, not an error. A file that exists but
/// cannot be read is also treated as empty, with a stderr diagnostic.
pub fn load(path: &Path) -> HashSet<String> {
    if !path.exists() {
        return HashSet::new();
    }

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Warning: failed to read {}: {e}", path.display());
            return HashSet::new();
        }
    };

    RE_QUOTED
        .captures_iter(&content)
        .map(|cap| cap[1].to_string())
        .collect()
}

/// Returns `true` when either the raw or the flag-stripped form of `regex`
/// is present in the allowlist.
pub fn is_exempt(allowlist: &HashSet<String>, regex: &str, normalized: &str) -> bool {
    allowlist.contains(regex) || allowlist.contains(normalized)
}
