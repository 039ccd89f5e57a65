use pattern_hygiene::registry::{load_rules, parse_rule_file, strip_case_flag};

// ── block notation ───────────────────────────────────────────────────────────

#[test]
fn block_pattern_parses_all_fields() {
    let content = r#"
[[patterns]]
regex = "(?i)TODO"
severity = "low"
message = "Deferred work marker"
"#;
    let patterns = parse_rule_file(content);
    assert_eq!(patterns.len(), 1);
    assert_eq!(patterns[0].regex, "(?i)TODO");
    assert_eq!(patterns[0].metadata.get("severity").unwrap(), "low");
    assert_eq!(
        patterns[0].metadata.get("message").unwrap(),
        "Deferred work marker"
    );
}

#[test]
fn multiple_blocks_preserve_order() {
    let content = r#"
[[patterns]]
regex = "first"

[[patterns]]
regex = "second"

[[patterns]]
regex = "third"
"#;
    let patterns = parse_rule_file(content);
    let regexes: Vec<&str> = patterns.iter().map(|p| p.regex.as_str()).collect();
    assert_eq!(regexes, vec!["first", "second", "third"]);
}

#[test]
fn block_without_regex_is_dropped() {
    let content = r#"
[[patterns]]
severity = "high"
message = "incomplete block"

[[patterns]]
regex = "complete"
"#;
    let patterns = parse_rule_file(content);
    assert_eq!(patterns.len(), 1);
    assert_eq!(patterns[0].regex, "complete");
}

#[test]
fn quoted_value_takes_first_to_last_quote() {
    // Naive by design: the value is the substring between the first and
    // last quote, so an embedded quote survives verbatim.
    let content = r#"
[[patterns]]
regex = "say "hello" now"
"#;
    let patterns = parse_rule_file(content);
    assert_eq!(patterns.len(), 1);
    assert_eq!(patterns[0].regex, r#"say "hello" now"#);
}

#[test]
fn unquoted_value_is_trimmed_verbatim() {
    let content = "
[[patterns]]
regex = bare_value
severity =   low
";
    let patterns = parse_rule_file(content);
    assert_eq!(patterns.len(), 1);
    assert_eq!(patterns[0].regex, "bare_value");
    assert_eq!(patterns[0].metadata.get("severity").unwrap(), "low");
}

#[test]
fn block_languages_list_is_parsed() {
    let content = r#"
[[patterns]]
regex = "unwrap\\(\\)"
languages = ["Rust", "Go"]
"#;
    let patterns = parse_rule_file(content);
    assert_eq!(patterns.len(), 1);
    assert_eq!(patterns[0].languages, vec!["Rust", "Go"]);
}

// ── inline notation ──────────────────────────────────────────────────────────

#[test]
fn inline_pattern_parses_fields_and_languages() {
    let content =
        r#"{ regex = "unwrap\\(\\)", languages = ["Rust"], severity = "high", message = "m" }"#;
    let patterns = parse_rule_file(content);
    assert_eq!(patterns.len(), 1);
    assert_eq!(patterns[0].regex, r"unwrap\\(\\)");
    assert_eq!(patterns[0].languages, vec!["Rust"]);
    assert_eq!(patterns[0].metadata.get("severity").unwrap(), "high");
}

#[test]
fn inline_languages_preserve_given_order() {
    let content = r#"{ regex = "x", languages = ["Go", "Rust", "Python"] }"#;
    let patterns = parse_rule_file(content);
    assert_eq!(patterns[0].languages, vec!["Go", "Rust", "Python"]);
}

#[test]
fn inline_value_with_escaped_quote_does_not_terminate() {
    let content = r#"{ regex = "say \"hi\"", severity = "low" }"#;
    let patterns = parse_rule_file(content);
    assert_eq!(patterns.len(), 1);
    assert_eq!(patterns[0].regex, r#"say \"hi\""#);
}

#[test]
fn inline_without_regex_is_dropped() {
    let content = r#"{ severity = "low", message = "no regex here" }"#;
    let patterns = parse_rule_file(content);
    assert!(patterns.is_empty());
}

#[test]
fn mixed_notations_in_one_file() {
    let content = r#"
[[patterns]]
regex = "block_style"
severity = "low"

{ regex = "inline_style", languages = ["Rust"] }
regex = "after_inline"

[[patterns]]
regex = "second_block"
"#;
    let patterns = parse_rule_file(content);
    let regexes: Vec<&str> = patterns.iter().map(|p| p.regex.as_str()).collect();
    assert_eq!(
        regexes,
        vec!["block_style", "inline_style", "after_inline", "second_block"]
    );
}

#[test]
fn lines_after_inline_table_accumulate_into_a_new_pattern() {
    // An inline table does not close the surrounding block region, so the
    // key = value lines after it start a fresh pattern flushed at EOF.
    let content = r#"
[[patterns]]
regex = "a"

{ regex = "b" }
regex = "c"
"#;
    let patterns = parse_rule_file(content);
    let regexes: Vec<&str> = patterns.iter().map(|p| p.regex.as_str()).collect();
    assert_eq!(regexes, vec!["a", "b", "c"]);
}

#[test]
fn lines_before_any_block_marker_are_discarded() {
    // With no [[patterns]] marker seen yet, stray key = value lines have
    // no block to belong to, even after an inline table.
    let content = r#"
{ regex = "b" }
regex = "c"
"#;
    let patterns = parse_rule_file(content);
    let regexes: Vec<&str> = patterns.iter().map(|p| p.regex.as_str()).collect();
    assert_eq!(regexes, vec!["b"]);
}

#[test]
fn inline_value_ending_in_escaped_backslash_never_closes() {
    // The quote after `a\\` is preceded by a backslash, so it does not
    // terminate the value; with no later quote on the line the pair is
    // unreadable and the pattern is dropped.
    let content = r#"{ regex = "a\\" }"#;
    let patterns = parse_rule_file(content);
    assert!(patterns.is_empty());
}

#[test]
fn inline_line_flushes_open_block() {
    // The inline line both closes the pending block and yields its own
    // pattern; the incomplete pending block is dropped.
    let content = r#"
[[patterns]]
severity = "no regex, dropped"

{ regex = "survivor" }
"#;
    let patterns = parse_rule_file(content);
    assert_eq!(patterns.len(), 1);
    assert_eq!(patterns[0].regex, "survivor");
}

// ── flag normalization ───────────────────────────────────────────────────────

#[test]
fn strip_case_flag_removes_all_occurrences() {
    assert_eq!(strip_case_flag("(?i)TODO"), "TODO");
    assert_eq!(strip_case_flag("a(?i)b(?i)c"), "abc");
    assert_eq!(strip_case_flag("plain"), "plain");
}

// ── directory loading ────────────────────────────────────────────────────────

#[test]
fn load_rules_skips_allowlist_and_non_toml_files() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("a.toml"),
        "[[patterns]]\nregex = \"alpha\"\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("hygiene_allowlist.toml"),
        "allowed_overlaps = [\"alpha\"]\n",
    )
    .unwrap();
    std::fs::write(dir.path().join("notes.txt"), "[[patterns]]\nregex = \"x\"\n").unwrap();

    let patterns = load_rules(dir.path(), "hygiene_allowlist.toml");
    assert_eq!(patterns.len(), 1);
    assert_eq!(patterns[0].regex, "alpha");
    assert_eq!(
        patterns[0].source.as_deref(),
        Some(dir.path().join("a.toml").as_path())
    );
}

#[test]
fn load_rules_enumerates_files_in_name_order() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("b.toml"), "[[patterns]]\nregex = \"beta\"\n").unwrap();
    std::fs::write(
        dir.path().join("a.toml"),
        "[[patterns]]\nregex = \"alpha\"\n",
    )
    .unwrap();

    let patterns = load_rules(dir.path(), "hygiene_allowlist.toml");
    let regexes: Vec<&str> = patterns.iter().map(|p| p.regex.as_str()).collect();
    assert_eq!(regexes, vec!["alpha", "beta"]);
}

#[test]
fn load_rules_empty_directory_returns_no_patterns() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_rules(dir.path(), "hygiene_allowlist.toml").is_empty());
}

#[test]
fn load_rules_never_aborts_on_garbage_content() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("junk.toml"), "\u{0}\u{1} not toml at all ===").unwrap();
    std::fs::write(dir.path().join("ok.toml"), "[[patterns]]\nregex = \"kept\"\n").unwrap();

    let patterns = load_rules(dir.path(), "hygiene_allowlist.toml");
    assert_eq!(patterns.len(), 1);
    assert_eq!(patterns[0].regex, "kept");
}
