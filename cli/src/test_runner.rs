use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use editor::wrap::auto_wrap;
use screenplay::format::{blocks_to_text, text_to_blocks};
use screenplay::lint::{FormatWarning, lint_scene};

#[derive(Debug, Deserialize)]
pub struct ExpectedWarning {
    /// Substring that must appear in the warning message.
    pub contains: String,

    /// If set, the warning's span must start on this 1-based source line.
    #[serde(default)]
    pub line: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct TestConfig {
    /// Human-readable test description.
    #[serde(default)]
    pub description: Option<String>,

    /// Expected element kinds, in order, using the wire names
    /// ("sceneHeading", "action", "character", "dialogue", "transition").
    #[serde(default)]
    pub expect_kinds: Option<Vec<String>>,

    /// Expected re-rendered text: the scene body classified into blocks and
    /// rendered back. Trailing whitespace is ignored in the comparison.
    #[serde(default)]
    pub expect_text: Option<String>,

    /// Expected output of the dialogue auto-wrap pass over the body.
    #[serde(default)]
    pub expect_wrapped: Option<String>,

    /// Expected lint warnings. If present (even empty), warning count and
    /// content are checked.
    #[serde(default)]
    pub expect_warnings: Option<Vec<ExpectedWarning>>,
}

/// Parse a `.test.scene` file into its TOML config and scene-text body.
fn parse_test_file(content: &str) -> Result<(TestConfig, &str), String> {
    let content = content.trim_start_matches('\u{feff}'); // strip BOM

    if !content.starts_with("---") {
        return Err("missing opening --- frontmatter delimiter".into());
    }

    let after_open = &content[3..];
    let after_open = after_open
        .strip_prefix('\n')
        .or_else(|| after_open.strip_prefix("\r\n"))
        .unwrap_or(after_open);

    let close_pos = after_open
        .find("\n---")
        .ok_or("missing closing --- frontmatter delimiter")?;

    let toml_str = after_open[..close_pos].trim_end_matches('\r');
    let rest_start = close_pos + 4; // skip \n---
    let body = after_open[rest_start..]
        .strip_prefix("\r\n")
        .or_else(|| after_open[rest_start..].strip_prefix('\n'))
        .unwrap_or(&after_open[rest_start..]);

    let config: TestConfig =
        toml::from_str(toml_str).map_err(|e| format!("TOML parse error: {}", e))?;

    Ok((config, body))
}

pub enum TestOutcome {
    Pass,
    Fail(String),
}

pub struct TestResult {
    pub path: PathBuf,
    pub description: Option<String>,
    pub outcome: TestOutcome,
}

fn run_single_test(path: &Path) -> TestResult {
    // 1. Read file
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            return TestResult {
                path: path.to_path_buf(),
                description: None,
                outcome: TestOutcome::Fail(format!("cannot read file: {}", e)),
            };
        }
    };

    // 2. Parse frontmatter
    let (config, body) = match parse_test_file(&content) {
        Ok(pair) => pair,
        Err(e) => {
            return TestResult {
                path: path.to_path_buf(),
                description: None,
                outcome: TestOutcome::Fail(format!("frontmatter error: {}", e)),
            };
        }
    };

    let description = config.description.clone();

    // 3. Classify the scene body
    let blocks = text_to_blocks(body);

    // 4. Check element kinds
    if let Some(expected_kinds) = &config.expect_kinds {
        let actual_kinds: Vec<&str> = blocks.iter().map(|b| b.kind_name()).collect();
        let expected: Vec<&str> = expected_kinds.iter().map(|s| s.as_str()).collect();
        if actual_kinds != expected {
            return TestResult {
                path: path.to_path_buf(),
                description,
                outcome: TestOutcome::Fail(format!(
                    "kind mismatch\n  expected: [{}]\n  actual:   [{}]",
                    expected.join(", "),
                    actual_kinds.join(", ")
                )),
            };
        }
    }

    // 5. Check the re-rendered text
    if let Some(expected_text) = &config.expect_text {
        let rendered = blocks_to_text(&blocks);
        if rendered.trim_end() != expected_text.trim_end() {
            return TestResult {
                path: path.to_path_buf(),
                description,
                outcome: TestOutcome::Fail(format!(
                    "render mismatch\n  expected:\n{}\n  actual:\n{}",
                    indented(expected_text.trim_end()),
                    indented(rendered.trim_end())
                )),
            };
        }
    }

    // 6. Check the auto-wrap pass
    if let Some(expected_wrapped) = &config.expect_wrapped {
        let wrapped = auto_wrap(body);
        if wrapped.trim_end() != expected_wrapped.trim_end() {
            return TestResult {
                path: path.to_path_buf(),
                description,
                outcome: TestOutcome::Fail(format!(
                    "wrap mismatch\n  expected:\n{}\n  actual:\n{}",
                    indented(expected_wrapped.trim_end()),
                    indented(wrapped.trim_end())
                )),
            };
        }
    }

    // 7. Check lint warnings
    if let Some(expected_warnings) = &config.expect_warnings {
        let warnings = lint_scene(body, 0);
        if let Some(reason) = check_warnings(body, &warnings, expected_warnings) {
            return TestResult {
                path: path.to_path_buf(),
                description,
                outcome: TestOutcome::Fail(reason),
            };
        }
    }

    TestResult {
        path: path.to_path_buf(),
        description,
        outcome: TestOutcome::Pass,
    }
}

/// Indent a multi-line expected/actual value for failure output, marking
/// line starts so leading spaces stay visible.
fn indented(s: &str) -> String {
    s.lines()
        .map(|l| format!("    |{}", l))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Convert a byte offset in `source` to a 1-based line number.
fn byte_offset_to_line(source: &str, offset: usize) -> usize {
    source[..offset.min(source.len())]
        .bytes()
        .filter(|&b| b == b'\n')
        .count()
        + 1
}

/// Check that actual warnings match expectations. Returns `Some(reason)` on mismatch.
fn check_warnings(
    source: &str,
    warnings: &[FormatWarning],
    expected: &[ExpectedWarning],
) -> Option<String> {
    if warnings.len() != expected.len() {
        let actual_msgs: Vec<String> = warnings
            .iter()
            .map(|w| format!("  - {}", w.message))
            .collect();
        return Some(format!(
            "expected {} warning(s), got {}\n  actual warnings:\n{}",
            expected.len(),
            warnings.len(),
            if actual_msgs.is_empty() {
                "    (none)".to_string()
            } else {
                actual_msgs.join("\n")
            }
        ));
    }

    for (i, (actual, expected)) in warnings.iter().zip(expected.iter()).enumerate() {
        if !actual.message.contains(&expected.contains) {
            return Some(format!(
                "warning[{}]: expected message containing \"{}\", got: {}",
                i, expected.contains, actual.message
            ));
        }

        if let Some(expected_line) = expected.line {
            let actual_line = byte_offset_to_line(source, actual.span.start);
            if actual_line != expected_line {
                return Some(format!(
                    "warning[{}]: expected on line {}, but span is on line {}",
                    i, expected_line, actual_line
                ));
            }
        }
    }

    None
}

/// Discover `.test.scene` files grouped by category (subfolder relative to root).
/// Files directly in `root` get category "" (uncategorized).
/// Returns a BTreeMap so categories are sorted alphabetically.
fn discover_categorized(root: &Path) -> BTreeMap<String, Vec<PathBuf>> {
    let mut categories: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
    collect_tests(root, root, &mut categories);
    // Sort files within each category
    for files in categories.values_mut() {
        files.sort();
    }
    categories
}

fn collect_tests(dir: &Path, root: &Path, out: &mut BTreeMap<String, Vec<PathBuf>>) {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_tests(&path, root, out);
        } else if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.ends_with(".test.scene") {
                let category = path
                    .parent()
                    .and_then(|p| p.strip_prefix(root).ok())
                    .map(|p| p.to_string_lossy().replace('\\', "/"))
                    .unwrap_or_default();
                out.entry(category).or_default().push(path);
            }
        }
    }
}

/// List available categories for the given test path.
pub fn list_categories(path: &Path) {
    if path.is_file() {
        eprintln!("(single file, no categories)");
        return;
    }

    let categories = discover_categorized(path);
    if categories.is_empty() {
        eprintln!("no .test.scene files found in {}", path.display());
        return;
    }

    eprintln!("available categories:");
    for (cat, files) in &categories {
        let label = if cat.is_empty() { "(root)" } else { cat.as_str() };
        eprintln!("  {} ({} tests)", label, files.len());
    }
}

fn pass_label(no_color: bool) -> &'static str {
    if no_color { "PASS" } else { "\x1b[32mPASS\x1b[0m" }
}

fn fail_label(no_color: bool) -> &'static str {
    if no_color { "FAIL" } else { "\x1b[31mFAIL\x1b[0m" }
}

fn bold(s: &str, no_color: bool) -> String {
    if no_color {
        s.to_string()
    } else {
        format!("\x1b[1m{}\x1b[0m", s)
    }
}

/// Run all `.test.scene` files under `path` (or a single file).
/// If `categories` is non-empty, only run tests in those categories.
/// Returns exit code: 0 = all pass, 1 = any failure.
pub fn run_tests(path: &Path, no_color: bool, categories: &[String]) -> i32 {
    // Single file mode — ignore categories
    if path.is_file() {
        let result = run_single_test(path);
        let label = result
            .description
            .as_deref()
            .unwrap_or_else(|| path.file_stem().and_then(|s| s.to_str()).unwrap_or("?"));
        return match &result.outcome {
            TestOutcome::Pass => {
                eprintln!("  {}  {}", pass_label(no_color), label);
                eprintln!();
                eprintln!(
                    "test result: {}. 1 passed, 0 failed",
                    if no_color { "ok" } else { "\x1b[32mok\x1b[0m" }
                );
                0
            }
            TestOutcome::Fail(reason) => {
                eprintln!("  {}  {}", fail_label(no_color), label);
                eprintln!();
                eprintln!("failures:");
                eprintln!();
                eprintln!("  --- {} ---", path.display());
                for line in reason.lines() {
                    eprintln!("  {}", line);
                }
                eprintln!();
                eprintln!(
                    "test result: {}. 0 passed, 1 failed (of 1)",
                    if no_color { "FAILED" } else { "\x1b[31mFAILED\x1b[0m" }
                );
                1
            }
        };
    }

    let all_categories = discover_categorized(path);

    if all_categories.is_empty() {
        eprintln!("no .test.scene files found in {}", path.display());
        return 1;
    }

    // Filter categories if specified
    let run_categories: BTreeMap<&str, &Vec<PathBuf>> = if categories.is_empty() {
        all_categories.iter().map(|(k, v)| (k.as_str(), v)).collect()
    } else {
        let mut filtered = BTreeMap::new();
        for requested in categories {
            let req = requested.trim_matches('/');
            let mut found = false;
            for (cat, files) in &all_categories {
                if cat == req || cat.starts_with(&format!("{}/", req)) {
                    filtered.insert(cat.as_str(), files);
                    found = true;
                }
            }
            if !found {
                eprintln!(
                    "warning: category '{}' not found (available: {})",
                    req,
                    all_categories
                        .keys()
                        .map(|k| if k.is_empty() { "(root)" } else { k.as_str() })
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
        }
        filtered
    };

    if run_categories.is_empty() {
        eprintln!("no matching categories found");
        return 1;
    }

    let mut passed = 0usize;
    let mut failed = 0usize;
    let mut failures: Vec<TestResult> = Vec::new();

    for (cat, files) in &run_categories {
        // Print category header
        let header = if cat.is_empty() {
            "(root)".to_string()
        } else {
            cat.to_string()
        };
        eprintln!();
        eprintln!("{}", bold(&header, no_color));

        for file in *files {
            let result = run_single_test(file);
            let label = result
                .description
                .as_deref()
                .unwrap_or_else(|| file.file_stem().and_then(|s| s.to_str()).unwrap_or("?"));

            match &result.outcome {
                TestOutcome::Pass => {
                    passed += 1;
                    eprintln!("  {}  {}", pass_label(no_color), label);
                }
                TestOutcome::Fail(_) => {
                    failed += 1;
                    eprintln!("  {}  {}", fail_label(no_color), label);
                    failures.push(result);
                }
            }
        }
    }

    // Print failure details
    if !failures.is_empty() {
        eprintln!();
        eprintln!("failures:");
        for f in &failures {
            eprintln!();
            eprintln!("  --- {} ---", f.path.display());
            if let TestOutcome::Fail(reason) = &f.outcome {
                for line in reason.lines() {
                    eprintln!("  {}", line);
                }
            }
        }
    }

    // Summary
    eprintln!();
    if failed == 0 {
        if no_color {
            eprintln!("test result: ok. {} passed, 0 failed", passed);
        } else {
            eprintln!("test result: \x1b[32mok\x1b[0m. {} passed, 0 failed", passed);
        }
        0
    } else {
        let total = passed + failed;
        if no_color {
            eprintln!(
                "test result: FAILED. {} passed, {} failed (of {})",
                passed, failed, total
            );
        } else {
            eprintln!(
                "test result: \x1b[31mFAILED\x1b[0m. {} passed, {} failed (of {})",
                passed, failed, total
            );
        }
        1
    }
}
