//! Probe synthesis.
//!
//! Translating a detection regex into source code that trips the underlying
//! convention is inherently fuzzy, so the mapping is kept as data: an
//! ordered list of (trigger substring → statement) pairs, checked first
//! match wins, with an explicit fallback. The fallback embeds the trigger
//! text in a line comment — a comment is syntactically inert, so the
//! external tool's structural diagnostics cannot fire on it and the probe
//! intentionally produces no signal for regexes we have no template for.

use crate::registry::strip_case_flag;

/// One regex-to-code translation rule.
pub struct ProbeTemplate {
    /// Substring of the de-escaped regex that selects this template.
    pub trigger: &'static str,
    /// Statement expected to trip the convention the regex encodes.
    pub body: &'static str,
}

/// Translation table, in match-priority order.
///
/// `todo!` must precede any bare-word entries: its trigger text also
/// contains "todo", and the macro form needs the macro-call body, not a
/// comment.
pub static TEMPLATES: &[ProbeTemplate] = &[
    ProbeTemplate {
        trigger: "todo!",
        body: r#"todo!("later");"#,
    },
    ProbeTemplate {
        trigger: "unwrap",
        body: "let x: Option<i32> = None; x.unwrap();",
    },
    ProbeTemplate {
        trigger: "unsafe",
        body: "unsafe {}",
    },
];

/// Reduces a regex to the literal text it is looking for: the leading
/// case-insensitivity flag goes, and so does every backslash, turning
/// escapes like `unwrap\(\)` into `unwrap()`.
pub fn trigger_text(regex: &str) -> String {
    strip_case_flag(regex).replace('\\', "")
}

/// Synthesizes a minimal Rust source file expected to trip the convention
/// behind `regex`.
///
/// The chosen statement is wrapped in an entry-point function so the
/// external tool accepts the file as a complete compilation unit.
pub fn synthesize(regex: &str) -> String {
    let trigger = trigger_text(regex);

    let body = TEMPLATES
        .iter()
        .find(|t| trigger.contains(t.trigger))
        .map(|t| t.body.to_string())
        .unwrap_or_else(|| format!("// {trigger}"));

    format!("fn main() {{\n    {body}\n}}\n")
}
