//! Hygiene — scans production sources for panicking shortcuts.
//!
//! Test files (`*_test.rs`) are exempt. Budgets are zero; fix the code
//! instead of raising them.

use std::fs;
use std::path::Path;

const BANNED: &[(&str, usize)] = &[
    (".unwrap()", 0),
    (".expect(", 0),
    ("panic!(", 0),
    ("todo!(", 0),
    ("unimplemented!(", 0),
    ("unreachable!(", 0),
    ("dbg!(", 0),
];

struct SourceFile {
    path: String,
    content: String,
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile {
                    path: path_str,
                    content,
                });
            }
        }
    }
}

fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

#[test]
fn sources_are_found() {
    let files = source_files();
    assert!(files.iter().any(|f| f.path.ends_with("geometry.rs")));
    assert!(files.iter().all(|f| !f.path.ends_with("_test.rs")));
}

#[test]
fn banned_patterns_within_budget() {
    let files = source_files();
    let mut violations = Vec::new();
    for (pattern, budget) in BANNED {
        let hits: Vec<String> = files
            .iter()
            .flat_map(|f| {
                f.content
                    .lines()
                    .enumerate()
                    .filter(|(_, line)| line.contains(pattern))
                    .map(|(i, _)| format!("{}:{}", f.path, i + 1))
                    .collect::<Vec<_>>()
            })
            .collect();
        if hits.len() > *budget {
            violations.push(format!(
                "`{pattern}`: {} found (budget {budget}): {}",
                hits.len(),
                hits.join(", ")
            ));
        }
    }
    assert!(violations.is_empty(), "{}", violations.join("\n"));
}
