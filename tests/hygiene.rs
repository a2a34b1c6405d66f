//! Hygiene — enforces coding standards at test time.
//!
//! A behavior layer must never take the host page down with it, so the
//! production sources are scanned for panicking and error-discarding
//! patterns. Every budget is zero and stays zero: fallible JS calls go
//! through `dom::best_effort`, which logs instead of discarding.

use std::fs;
use std::path::Path;

/// (pattern, what it means) — each must not appear in `src/` outside tests.
const FORBIDDEN: &[(&str, &str)] = &[
    (".unwrap()", "panics on None/Err"),
    (".expect(", "panics on None/Err"),
    ("panic!(", "crashes the page"),
    ("unreachable!(", "crashes the page"),
    ("todo!(", "unfinished stub"),
    ("unimplemented!(", "unfinished stub"),
    ("let _ =", "silently discards a Result"),
    (".ok()", "silently discards an error"),
    ("#[allow(dead_code)]", "hides unused code"),
];

fn production_sources(dir: &Path, out: &mut Vec<(String, String)>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            production_sources(&path, out);
            continue;
        }
        let name = path.to_string_lossy().to_string();
        // Sibling unit-test files may unwrap freely.
        if !name.ends_with(".rs") || name.ends_with("_test.rs") {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push((name, content));
        }
    }
}

#[test]
fn production_sources_carry_no_panics_or_silent_discards() {
    let mut sources = Vec::new();
    production_sources(Path::new("src"), &mut sources);
    assert!(!sources.is_empty(), "no production sources found under src/");

    let mut violations = Vec::new();
    for (path, content) in &sources {
        for (line_no, line) in content.lines().enumerate() {
            for (pattern, why) in FORBIDDEN {
                if line.contains(pattern) {
                    violations.push(format!("  {path}:{} `{pattern}` ({why})", line_no + 1));
                }
            }
        }
    }
    assert!(
        violations.is_empty(),
        "hygiene violations — fix these rather than raising the budget:\n{}",
        violations.join("\n")
    );
}
