//! # codetidy Framework Detector
//!
//! File: cli/src/commands/readme/utils/framework_detector.rs
//!
//! ## Overview
//!
//! Guesses which well-known frameworks a project uses by looking for fixed
//! substrings in its files. There is no dependency parsing; the checks are
//! plain `contains` calls evaluated in a fixed order:
//!
//! | # | Needle            | Searched in                      | Label        |
//! |---|-------------------|----------------------------------|--------------|
//! | 1 | `"react"`         | `package.json`                   | React        |
//! | 2 | `"vue"`           | `package.json`                   | Vue.js       |
//! | 3 | `"@angular/core"` | `package.json`                   | Angular      |
//! | 4 | `django`          | all files, lowercased            | Django       |
//! | 5 | `flask`           | all files, lowercased            | Flask        |
//! | 6 | `express`         | all files, lowercased            | Express.js   |
//! | 7 | `spring-boot`     | all files, lowercased            | Spring Boot  |
//!
//! The `package.json` needles include their double quotes, so they match
//! dependency keys rather than prose. If no file is literally named
//! `package.json` those three rules never fire.
//!
//! Each rule contributes its label at most once, so the result never holds
//! duplicates and keeps rule order.
//!
use crate::common::source::ingest::FileRecord;
use tracing::debug;

/// File name the manifest-based rules look at.
const PACKAGE_JSON: &str = "package.json";

/// Where a rule looks for its needle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Scope {
    /// Content of the first file named `package.json`, case-sensitive.
    PackageJson,
    /// Lowercased concatenation of every file's content.
    AllContent,
}

#[derive(Debug)]
struct FrameworkRule {
    needle: &'static str,
    scope: Scope,
    label: &'static str,
}

const RULES: [FrameworkRule; 7] = [
    FrameworkRule {
        needle: "\"react\"",
        scope: Scope::PackageJson,
        label: "React",
    },
    FrameworkRule {
        needle: "\"vue\"",
        scope: Scope::PackageJson,
        label: "Vue.js",
    },
    FrameworkRule {
        needle: "\"@angular/core\"",
        scope: Scope::PackageJson,
        label: "Angular",
    },
    FrameworkRule {
        needle: "django",
        scope: Scope::AllContent,
        label: "Django",
    },
    FrameworkRule {
        needle: "flask",
        scope: Scope::AllContent,
        label: "Flask",
    },
    FrameworkRule {
        needle: "express",
        scope: Scope::AllContent,
        label: "Express.js",
    },
    FrameworkRule {
        needle: "spring-boot",
        scope: Scope::AllContent,
        label: "Spring Boot",
    },
];

/// # Detect Frameworks (`detect_frameworks`)
///
/// Returns the labels of every rule that matched, in rule order.
pub fn detect_frameworks(files: &[FileRecord]) -> Vec<&'static str> {
    let package_json = files
        .iter()
        .find(|f| f.name == PACKAGE_JSON)
        .map(|f| f.content.as_str());
    let all_content: String = files
        .iter()
        .map(|f| f.content.to_lowercase())
        .collect::<Vec<_>>()
        .join("\n");

    let detected: Vec<&'static str> = RULES
        .iter()
        .filter(|rule| match rule.scope {
            Scope::PackageJson => package_json.is_some_and(|c| c.contains(rule.needle)),
            Scope::AllContent => all_content.contains(rule.needle),
        })
        .map(|rule| rule.label)
        .collect();
    debug!("Detected frameworks: {:?}", detected);
    detected
}
