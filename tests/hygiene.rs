//! Hygiene: source-level budgets for patterns that panic or silently drop
//! errors in the shipped wasm. Budgets only ever go down.

use std::fs;
use std::path::{Path, PathBuf};

/// `(pattern, budget, why it is budgeted)`
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics abort the page script"),
    (".expect(", 0, "panics abort the page script"),
    ("panic!(", 0, "panics abort the page script"),
    ("unreachable!(", 0, "panics abort the page script"),
    ("todo!(", 0, "stubs must not ship"),
    ("unimplemented!(", 0, "stubs must not ship"),
    ("let _ =", 0, "browser errors must be logged, not discarded"),
    (".ok()", 0, "browser errors must be logged, not discarded"),
    (".unwrap_or_default()", 0, "browser errors must be logged, not discarded"),
    ("#[allow(dead_code)]", 0, "unused code should be deleted"),
];

struct SourceFile {
    path: PathBuf,
    content: String,
}

/// Production sources under `src/`; `*_test.rs` files are exempt.
fn production_sources() -> Vec<SourceFile> {
    let mut files = Vec::new();
    walk(Path::new("src"), &mut files);
    files
}

fn walk(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for path in entries.flatten().map(|entry| entry.path()) {
        if path.is_dir() {
            walk(&path, out);
            continue;
        }
        let is_rs = path.extension().is_some_and(|ext| ext == "rs");
        let is_test = path.to_string_lossy().ends_with("_test.rs");
        if !is_rs || is_test {
            continue;
        }
        if let Ok(content) = fs::read_to_string(&path) {
            out.push(SourceFile { path, content });
        }
    }
}

fn hits(files: &[SourceFile], pattern: &str) -> Vec<(String, usize)> {
    files
        .iter()
        .map(|file| {
            let count = file.content.lines().filter(|line| line.contains(pattern)).count();
            (file.path.display().to_string(), count)
        })
        .filter(|(_, count)| *count > 0)
        .collect()
}

#[test]
fn sources_are_found() {
    let files = production_sources();
    assert!(
        files.iter().any(|file| file.path.ends_with("lib.rs")),
        "hygiene scan found no src/lib.rs; run from the crate root"
    );
}

#[test]
fn pattern_budgets_hold() {
    let files = production_sources();
    let mut failures = Vec::new();
    for &(pattern, budget, why) in BUDGETS {
        let found = hits(&files, pattern);
        let count: usize = found.iter().map(|(_, n)| n).sum();
        if count > budget {
            let detail = found
                .iter()
                .map(|(path, n)| format!("    {path}: {n}"))
                .collect::<Vec<_>>()
                .join("\n");
            failures.push(format!("`{pattern}` found {count}, budget {budget} ({why})\n{detail}"));
        }
    }
    assert!(failures.is_empty(), "hygiene budgets exceeded:\n{}", failures.join("\n"));
}

#[test]
fn every_module_with_tests_links_its_test_file() {
    for file in production_sources() {
        let Some(stem) = file.path.file_stem().map(|s| s.to_string_lossy().to_string()) else {
            continue;
        };
        let sibling = file.path.with_file_name(format!("{stem}_test.rs"));
        if sibling.exists() {
            let link = format!("#[path = \"{stem}_test.rs\"]");
            assert!(
                file.content.contains(&link),
                "{} has a sibling test file that is never compiled",
                file.path.display()
            );
        }
    }
}
