//! Architecture enforcement tests.
//!
//! The crate is layered `cli -> core` and `cli -> ui -> core`. These tests
//! read the source tree and fail if a lower layer reaches up.
//!
//! # Test Categories
//!
//! 1. **Core Purity** - `core` must not depend on `cli`, `ui` or clap, and
//!    must not print
//! 2. **UI Independence** - `ui` must not depend on `cli`
//! 3. **Command Output** - commands report diagnostics through `ui::output`
//! 4. **Command Registration** - every command file is declared in `mod.rs`

use std::fs;
use std::path::{Path, PathBuf};

/// Collect every `.rs` file under `dir`, recursively.
fn rust_files(dir: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).unwrap_or_else(|_| panic!("Failed to read {}", dir.display())) {
        let path = entry.expect("Failed to read entry").path();
        if path.is_dir() {
            files.extend(rust_files(&path));
        } else if path.extension().map(|e| e == "rs").unwrap_or(false) {
            files.push(path);
        }
    }
    files.sort();
    files
}

/// Source lines with comments and the test module stripped.
///
/// Doc examples may legitimately print, and test modules may use anything.
fn code_lines(path: &Path) -> Vec<(usize, String)> {
    let content =
        fs::read_to_string(path).unwrap_or_else(|_| panic!("Failed to read {}", path.display()));
    content
        .lines()
        .enumerate()
        .take_while(|(_, line)| !line.trim_start().starts_with("#[cfg(test)]"))
        .filter(|(_, line)| !line.trim_start().starts_with("//"))
        .map(|(i, line)| (i + 1, line.to_string()))
        .collect()
}

/// Report every line under `dir` containing one of `forbidden`.
fn find_violations(dir: &str, forbidden: &[&str]) -> Vec<String> {
    let mut violations = Vec::new();
    for path in rust_files(Path::new(dir)) {
        for (line_no, line) in code_lines(&path) {
            for pattern in forbidden {
                if line.contains(pattern) {
                    violations.push(format!(
                        "{}:{}: uses `{}`",
                        path.display(),
                        line_no,
                        pattern
                    ));
                }
            }
        }
    }
    violations
}

// =============================================================================
// Layering
// =============================================================================

/// `core` is pure: no CLI, no rendering, no direct output.
#[test]
fn core_does_not_reach_up() {
    let violations = find_violations(
        "src/core",
        &["crate::cli", "crate::ui", "clap", "println!", "eprintln!", "print!("],
    );

    assert!(
        violations.is_empty(),
        "Architecture violations found:\n  {}",
        violations.join("\n  ")
    );
}

/// `ui` may use `core` types but never the CLI layer.
#[test]
fn ui_does_not_depend_on_cli() {
    let violations = find_violations("src/ui", &["crate::cli", "clap"]);

    assert!(
        violations.is_empty(),
        "Architecture violations found:\n  {}",
        violations.join("\n  ")
    );
}

// =============================================================================
// Commands
// =============================================================================

/// Commands print results to stdout but route diagnostics through
/// `ui::output` so `--quiet` and `--debug` are honoured.
#[test]
fn commands_do_not_write_stderr_directly() {
    let violations = find_violations("src/cli/commands", &["eprintln!", "eprint!("]);

    assert!(
        violations.is_empty(),
        "Commands must use ui::output for diagnostics:\n  {}",
        violations.join("\n  ")
    );
}

/// Every command file is declared in `commands/mod.rs`.
#[test]
fn every_command_is_registered() {
    let mod_rs = fs::read_to_string("src/cli/commands/mod.rs").expect("Failed to read mod.rs");

    let mut missing = Vec::new();
    for path in rust_files(Path::new("src/cli/commands")) {
        let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
        if stem == "mod" {
            continue;
        }
        if !mod_rs.contains(&format!("mod {};", stem)) {
            missing.push(stem.to_string());
        }
    }

    assert!(
        missing.is_empty(),
        "Command files not declared in commands/mod.rs: {:?}",
        missing
    );
}
