//! # codetidy README Generator
//!
//! File: cli/src/commands/readme/utils/generator.rs
//!
//! ## Overview
//!
//! Produces a Markdown README for an ingested project. All the "analysis" is
//! shallow: a file tree, per-label counts, substring-based framework
//! detection, a guessed entry point, and directory descriptions derived
//! from directory names. The pieces are collected into a `ReadmeContext` and
//! rendered through a fixed Tera template.
//!
//! ## Sections
//!
//! 1. Project structure (tree)
//! 2. Statistics (file count, per-label breakdown)
//! 3. Frameworks (only when something was detected)
//! 4. Getting started (static)
//! 5. Main entry point (first 10 lines, or a "no entry point" note)
//! 6. Directory overview (one line per top-level directory)
//! 7. Configuration files
//! 8. Development notes, contributing, license
//!
//! Errors from the template engine propagate to the caller; there is no
//! partial output.
//!
use super::{
    framework_detector, main_file,
    stats::{self, LabelCount},
    tree_builder, tree_printer,
};
use crate::common::source::ingest::FileRecord;
use crate::common::source::language::{extension_of, Language, PLAIN_TEXT_LABEL};
use crate::core::error::Result;
use crate::core::templating;
use serde::Serialize;
use tracing::info;

/// Title used when no project name is known.
pub const DEFAULT_TITLE: &str = "Project Documentation";

/// Lines of the main file quoted in the README.
const EXCERPT_LINES: usize = 10;

const README_TEMPLATE: &str = r#"# {{ title }}

## 📁 Project Structure

```
{{ tree }}```

## 📊 Project Statistics

- **Total Files:** {{ total_files }}
- **File Types:**
{% for stat in stats %}  - {{ stat.label }}: {{ stat.count }}
{% endfor %}
{% if frameworks | length > 0 %}## 🛠️ Frameworks & Technologies

{% for framework in frameworks %}- {{ framework }}
{% endfor %}
{% endif %}## 🚀 Getting Started

### Prerequisites

- Install the runtime and package manager used by this project.

### Installation

1. Clone the repository
2. Install the dependencies
3. Start the application from its main entry point

## 📝 Main Entry Point

{% if main_file %}The main entry point appears to be `{{ main_file.path }}`:

```{{ main_file.language }}
{{ main_file.excerpt }}
```
{% else %}No clear entry point detected.
{% endif %}
## 📂 Directory Overview

{% if directories | length > 0 %}{% for dir in directories %}- **{{ dir.name }}/**: {{ dir.description }}
{% endfor %}{% else %}All files are located in the project root.
{% endif %}
## ⚙️ Configuration Files

{% if config_files | length > 0 %}{% for file in config_files %}- `{{ file.path }}`: {{ file.note }}
{% endfor %}{% else %}No configuration files detected.
{% endif %}
## 💻 Development

- **Stack:** {{ stack_summary }}
- **Structure:** {{ structure_note }}
- **Language:** {{ language_note }}

## 🤝 Contributing

1. Fork the repository
2. Create a feature branch (`git checkout -b feature/my-change`)
3. Commit your changes (`git commit -m "Describe the change"`)
4. Push the branch (`git push origin feature/my-change`)
5. Open a pull request

## 📄 License

This project is licensed under the MIT License. See the `LICENSE` file for details.
"#;

/// Everything the README template interpolates.
#[derive(Debug, Serialize)]
struct ReadmeContext<'a> {
    title: &'a str,
    tree: String,
    total_files: usize,
    stats: Vec<LabelCount>,
    frameworks: Vec<&'static str>,
    main_file: Option<MainFileExcerpt>,
    directories: Vec<DirectorySummary>,
    config_files: Vec<ConfigFileNote>,
    stack_summary: String,
    structure_note: String,
    language_note: &'static str,
}

#[derive(Debug, Serialize)]
struct MainFileExcerpt {
    path: String,
    /// Bare extension of the file name, used as the code fence tag.
    language: String,
    excerpt: String,
}

#[derive(Debug, Serialize)]
struct DirectorySummary {
    name: String,
    description: &'static str,
}

#[derive(Debug, Serialize)]
struct ConfigFileNote {
    path: String,
    note: &'static str,
}

/// # Generate README (`generate_readme`)
///
/// Renders the README for `files` under the default title.
pub fn generate_readme(files: &[FileRecord]) -> Result<String> {
    generate_readme_titled(files, DEFAULT_TITLE)
}

/// Renders the README for `files` with a custom top-level heading.
pub fn generate_readme_titled(files: &[FileRecord], title: &str) -> Result<String> {
    let tree = tree_builder::build_tree(files);
    let stats = stats::compute_stats(files);
    let frameworks = framework_detector::detect_frameworks(files);

    let main_file = main_file::find_main_file(files).map(|file| MainFileExcerpt {
        path: file.path.clone(),
        language: extension_of(&file.name).unwrap_or_default().to_string(),
        excerpt: excerpt(&file.content),
    });

    let top_level_dirs = tree.directory_names();
    let directories: Vec<DirectorySummary> = top_level_dirs
        .iter()
        .map(|name| DirectorySummary {
            name: name.to_string(),
            description: describe_directory(name),
        })
        .collect();

    let context = ReadmeContext {
        title,
        tree: tree_printer::render_tree(&tree),
        total_files: files.len(),
        stack_summary: stack_summary(&frameworks, &stats),
        structure_note: structure_note(&top_level_dirs),
        language_note: language_note(files),
        config_files: collect_config_files(files),
        stats,
        frameworks,
        main_file,
        directories,
    };

    let readme = templating::render_markdown("README.md", README_TEMPLATE, &context)?;
    info!(
        "Generated README for {} files ({} bytes)",
        files.len(),
        readme.len()
    );
    Ok(readme)
}

/// Title derived from an upload name: the archive stem, if it has one.
pub fn title_from_upload(upload_name: &str) -> Option<&str> {
    let len = upload_name.len();
    let split = len.saturating_sub(4);
    if len > 4
        && upload_name.is_char_boundary(split)
        && upload_name[split..].eq_ignore_ascii_case(".zip")
    {
        Some(&upload_name[..split])
    } else {
        None
    }
}

/// First `EXCERPT_LINES` lines of `content`, with a `...` line when cut short.
fn excerpt(content: &str) -> String {
    let lines: Vec<&str> = content.split('\n').collect();
    let mut text = lines
        .iter()
        .take(EXCERPT_LINES)
        .copied()
        .collect::<Vec<_>>()
        .join("\n");
    if lines.len() > EXCERPT_LINES {
        text.push_str("\n...");
    }
    text
}

/// One-line description guessed from a top-level directory name.
fn describe_directory(name: &str) -> &'static str {
    match name.to_lowercase().as_str() {
        "src" => "Source code",
        "lib" => "Library code",
        "test" | "tests" | "__tests__" => "Test files",
        "docs" => "Documentation",
        "public" | "static" | "assets" => "Static assets",
        "components" => "Reusable UI components",
        "config" => "Configuration files",
        "scripts" => "Utility scripts",
        "api" => "API handlers",
        "utils" => "Utility functions",
        _ => "Project files",
    }
}

/// Files that look like configuration, with a short note each. Matching is
/// case-sensitive.
fn collect_config_files(files: &[FileRecord]) -> Vec<ConfigFileNote> {
    files
        .iter()
        .filter(|file| {
            let name = &file.name;
            name.contains("config") || name.contains(".rc") || name.ends_with(".json")
        })
        .map(|file| ConfigFileNote {
            path: file.path.clone(),
            note: if file.name == "package.json" {
                "Project dependencies and scripts"
            } else {
                "Configuration settings"
            },
        })
        .collect()
}

fn stack_summary(frameworks: &[&'static str], stats: &[LabelCount]) -> String {
    if !frameworks.is_empty() {
        return frameworks.join(", ");
    }
    let languages: Vec<&str> = stats
        .iter()
        .map(|s| s.label)
        .filter(|label| *label != PLAIN_TEXT_LABEL)
        .take(3)
        .collect();
    if languages.is_empty() {
        "Plain text files".to_string()
    } else {
        languages.join(", ")
    }
}

fn structure_note(top_level_dirs: &[&str]) -> String {
    if top_level_dirs.is_empty() {
        "Flat layout; every file lives in the project root.".to_string()
    } else if top_level_dirs.contains(&"src") {
        "Source code lives under `src/`, separate from root-level configuration.".to_string()
    } else {
        format!(
            "Code is organized into {} top-level director{}.",
            top_level_dirs.len(),
            if top_level_dirs.len() == 1 { "y" } else { "ies" }
        )
    }
}

fn language_note(files: &[FileRecord]) -> &'static str {
    let languages: Vec<Language> = files.iter().map(FileRecord::language).collect();
    if languages.iter().any(|l| l.is_typescript()) {
        "TypeScript is used; run the type checker before committing."
    } else if languages
        .iter()
        .any(|l| matches!(l, Language::JavaScript | Language::Jsx))
    {
        "Plain JavaScript is used; consider TypeScript for static type checking."
    } else {
        "No JavaScript or TypeScript sources were found."
    }
}

// --- Unit Tests ---
#[cfg(test)]
mod tests {
    use super::*;

    fn record(path: &str, content: &str) -> FileRecord {
        FileRecord {
            name: path.rsplit('/').next().unwrap().to_string(),
            path: path.to_string(),
            content: content.to_string(),
            formatted: None,
        }
    }

    #[test]
    fn test_empty_project() -> Result<()> {
        let readme = generate_readme(&[])?;
        assert!(readme.starts_with("# Project Documentation\n"));
        assert!(readme.contains("- **Total Files:** 0\n- **File Types:**\n\n## 🚀 Getting Started"));
        assert!(!readme.contains("Frameworks & Technologies"));
        assert!(readme.contains("No clear entry point detected."));
        assert!(readme.contains("All files are located in the project root."));
        assert!(readme.contains("No configuration files detected."));
        Ok(())
    }

    #[test]
    fn test_python_project_sections() -> Result<()> {
        let files = [
            record("src/a.py", "import os"),
            record("src/b.py", "x = 1"),
            record("README.md", "# hi"),
        ];
        let readme = generate_readme(&files)?;

        assert!(readme.contains(
            "```\n├── src/\n│   ├── a.py (Python)\n│   └── b.py (Python)\n└── README.md (Markdown)\n```"
        ));
        assert!(readme.contains("- **Total Files:** 3\n"));
        assert!(readme.contains("  - Python: 2\n  - Markdown: 1\n"));
        assert!(readme.contains("- **src/**: Source code\n"));
        assert!(readme.contains("Source code lives under `src/`"));
        Ok(())
    }

    #[test]
    fn test_frameworks_and_config_files() -> Result<()> {
        let files = [
            record("package.json", r#"{"dependencies": {"react": "18", "express": "4"}}"#),
            record("webpack.config.js", "module.exports = {};"),
            record("tsconfig.json", "{}"),
            record("src/index.ts", "console.log('hi');"),
        ];
        let readme = generate_readme(&files)?;

        assert!(readme.contains("## 🛠️ Frameworks & Technologies\n\n- React\n- Express.js\n\n## 🚀"));
        assert!(readme.contains("- `package.json`: Project dependencies and scripts\n"));
        assert!(readme.contains("- `webpack.config.js`: Configuration settings\n"));
        assert!(readme.contains("- `tsconfig.json`: Configuration settings\n"));
        assert!(readme.contains("- **Stack:** React, Express.js\n"));
        assert!(readme.contains("TypeScript is used"));
        Ok(())
    }

    #[test]
    fn test_config_file_matching_is_case_sensitive() {
        let files = [
            record("Config.yaml", ""),
            record("DATA.JSON", ""),
            record("app/.eslintrc.json", ""),
            record("webpack.config.js", ""),
            record("x.rc.bak", ""),
        ];
        let paths: Vec<String> = collect_config_files(&files)
            .into_iter()
            .map(|note| note.path)
            .collect();
        assert_eq!(paths, vec!["app/.eslintrc.json", "webpack.config.js", "x.rc.bak"]);
    }

    #[test]
    fn test_main_file_excerpt_truncated() -> Result<()> {
        let content: Vec<String> = (1..=12).map(|i| format!("line{}", i)).collect();
        let files = [record("app/main.py", &content.join("\n"))];
        let readme = generate_readme(&files)?;

        let expected_body: Vec<String> = (1..=10).map(|i| format!("line{}", i)).collect();
        let expected = format!(
            "The main entry point appears to be `app/main.py`:\n\n```py\n{}\n...\n```\n",
            expected_body.join("\n")
        );
        assert!(readme.contains(&expected), "README was:\n{}", readme);
        assert!(!readme.contains("line11"));
        Ok(())
    }

    #[test]
    fn test_main_file_excerpt_short_has_no_ellipsis() -> Result<()> {
        let files = [record("index.js", "a\nb")];
        let readme = generate_readme(&files)?;
        assert!(readme.contains("```js\na\nb\n```\n"));
        assert!(!readme.contains("\n...\n"));
        Ok(())
    }

    #[test]
    fn test_custom_title_and_title_from_upload() -> Result<()> {
        let readme = generate_readme_titled(&[], "my-app")?;
        assert!(readme.starts_with("# my-app\n"));

        assert_eq!(title_from_upload("My-App.ZIP"), Some("My-App"));
        assert_eq!(title_from_upload("notes.txt"), None);
        assert_eq!(title_from_upload(".zip"), None);
        Ok(())
    }

    #[test]
    fn test_excerpt_boundaries() {
        let ten: Vec<String> = (0..10).map(|i| i.to_string()).collect();
        assert_eq!(excerpt(&ten.join("\n")), ten.join("\n"));
        assert_eq!(excerpt(""), "");
    }

    #[test]
    fn test_describe_directory() {
        assert_eq!(describe_directory("tests"), "Test files");
        assert_eq!(describe_directory("Public"), "Static assets");
        assert_eq!(describe_directory("whatever"), "Project files");
    }

    #[test]
    fn test_structure_note_counts() {
        assert_eq!(
            structure_note(&["lib"]),
            "Code is organized into 1 top-level directory."
        );
        assert_eq!(
            structure_note(&["lib", "docs"]),
            "Code is organized into 2 top-level directories."
        );
    }

    #[test]
    fn test_stack_summary_falls_back_to_languages() {
        let stats = vec![
            LabelCount { label: "Plain text", count: 4 },
            LabelCount { label: "Go", count: 2 },
        ];
        assert_eq!(stack_summary(&[], &stats), "Go");
        assert_eq!(stack_summary(&[], &[]), "Plain text files");
    }
}
