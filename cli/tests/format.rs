//! # codetidy Format Integration Tests
//!
//! File: cli/tests/format.rs
//!
//! Runs `codetidy format` against single files and ZIP archives.
//!

mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_format_single_file_to_stdout() {
    let ws = Workspace::new();
    ws.write("app.js", b"if (a) {\n\n   b();\n}\n");

    ws.cmd()
        .args(["format", "app.js"])
        .assert()
        .success()
        .stdout("  if (a) {\nb();\n}\n");
}

#[test]
fn test_format_identity_language_is_trimmed_but_not_indented() {
    let ws = Workspace::new();
    ws.write("main.go", b"package main\n\n  func main() {\n\treturn\n}\n");

    ws.cmd()
        .args(["format", "main.go"])
        .assert()
        .success()
        .stdout("package main\nfunc main() {\nreturn\n}\n");
}

#[test]
fn test_format_single_file_to_output_dir() {
    let ws = Workspace::new();
    ws.write("script.py", b"for x in y:\n  print(x)\n");

    ws.cmd()
        .args(["format", "script.py", "-o", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 1 formatted file(s)"));

    assert_eq!(ws.read("out/formatted_script.py"), "    for x in y:\nprint(x)");
}

#[test]
fn test_format_zip_to_stdout_has_headers() {
    let ws = Workspace::new();
    ws.write_zip("demo.zip", DEMO_PROJECT);

    ws.cmd()
        .args(["format", "demo.zip"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("==> src/a.py <==\n    def a():\nreturn 1\n")
                .and(predicate::str::contains("==> src/b.py <=="))
                .and(predicate::str::contains("==> README.md <==\n# Old readme\n")),
        );
}

#[test]
fn test_format_zip_to_output_dir_keeps_tree() {
    let ws = Workspace::new();
    ws.write_zip("demo.zip", DEMO_PROJECT);

    ws.cmd()
        .args(["format", "demo.zip", "--output", "tidy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 3 formatted file(s)"));

    assert_eq!(ws.read("tidy/src/b.py"), "import a");
    assert_eq!(ws.read("tidy/README.md"), "# Old readme");
}

#[test]
fn test_format_missing_file_fails() {
    let ws = Workspace::new();
    ws.cmd()
        .args(["format", "nope.js"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_format_corrupt_zip_fails() {
    let ws = Workspace::new();
    ws.write("broken.zip", b"this is not a zip archive");

    ws.cmd()
        .args(["format", "broken.zip"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to process ZIP archive"));
}

#[test]
fn test_format_respects_project_indent_limit() {
    let ws = Workspace::new();
    ws.write(".codetidy.toml", b"[formatter]\nmax_indent_level = 1\n");
    let source = "a {{\nb\n}}\n";
    ws.write("deep.js", source.as_bytes());

    // Level 2 exceeds the limit, so the text is passed through untouched.
    ws.cmd()
        .args(["format", "deep.js"])
        .assert()
        .success()
        .stdout(format!("{}\n", source));
}

#[test]
fn test_format_default_indent_limit_allows_nesting() {
    let ws = Workspace::new();
    ws.write("deep.js", b"a {{\nb\n}}\n");

    ws.cmd()
        .args(["format", "deep.js"])
        .assert()
        .success()
        .stdout("    a {{\nb\n}}\n");
}
