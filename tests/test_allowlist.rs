use pattern_hygiene::allowlist::{is_exempt, load};
use std::collections::HashSet;
use std::path::Path;

// ── loading ──────────────────────────────────────────────────────────────────

#[test]
fn absent_file_yields_empty_set() {
    let allowlist = load(Path::new("tests/fixtures/does-not-exist.toml"));
    assert!(allowlist.is_empty());
}

#[test]
fn every_quoted_string_becomes_an_entry() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hygiene_allowlist.toml");
    std::fs::write(
        &path,
        r#"
# reviewed and accepted
allowed_overlaps = [
    "TODO",
    "unwrap\\(\\)",
]
note = "tracked in the backlog"
"#,
    )
    .unwrap();

    let allowlist = load(&path);
    // Permissive by design: the annotation string is captured too.
    assert!(allowlist.contains("TODO"));
    assert!(allowlist.contains(r"unwrap\\(\\)"));
    assert!(allowlist.contains("tracked in the backlog"));
    assert_eq!(allowlist.len(), 3);
}

#[test]
fn escaped_quote_does_not_terminate_entry() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hygiene_allowlist.toml");
    std::fs::write(&path, r#"allowed_overlaps = ["say \"hi\""]"#).unwrap();

    let allowlist = load(&path);
    assert!(allowlist.contains(r#"say \"hi\""#));
}

#[test]
fn unbalanced_quote_does_not_span_lines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hygiene_allowlist.toml");
    std::fs::write(
        &path,
        "note = \"unterminated\nallowed_overlaps = [\"TODO\"]\n",
    )
    .unwrap();

    let allowlist = load(&path);
    // The dangling quote must not swallow the next line into one entry.
    assert!(allowlist.contains("TODO"));
    assert_eq!(allowlist.len(), 1);
}

#[test]
fn entry_ending_in_escaped_backslash_does_not_close_early() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("hygiene_allowlist.toml");
    std::fs::write(&path, r#"allowed_overlaps = ["tail\\", "TODO"]"#).unwrap();

    let allowlist = load(&path);
    // The quote after `tail\\` is preceded by a backslash, so the literal
    // keeps running until the quote before TODO.
    assert!(allowlist.contains(r#"tail\\", "#));
    assert!(!allowlist.contains(r"tail\\"));
    assert_eq!(allowlist.len(), 1);
}

// ── exemption matching ───────────────────────────────────────────────────────

#[test]
fn raw_or_normalized_form_exempts() {
    let mut allowlist = HashSet::new();
    allowlist.insert("TODO".to_string());

    // Flag-stripped form matches even though the raw regex carries (?i).
    assert!(is_exempt(&allowlist, "(?i)TODO", "TODO"));
    // Raw form matches directly.
    assert!(is_exempt(&allowlist, "TODO", "TODO"));
    // Neither form present.
    assert!(!is_exempt(&allowlist, "(?i)FIXME", "FIXME"));
}
