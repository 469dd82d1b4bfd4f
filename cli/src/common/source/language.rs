//! # codetidy Extension Classifier
//!
//! File: cli/src/common/source/language.rs
//!
//! ## Overview
//!
//! Maps a file name to a `Language`. Each variant carries two independent
//! pieces of information:
//! - a **display label** used in statistics and the generated file tree
//! - a **formatting style** selecting one of the re-indentation heuristics
//!
//! Both live on the same enum so any disagreement between them is written
//! down in one place. Some disagreements are intentional: `.go` has a label
//! but is formatted with the identity style, and `.h`/`.hpp` are formatted
//! like C/C++ while being labelled as plain text.
//!
//! ## Usage
//!
//! ```rust
//! let lang = Language::from_filename("App.TSX");
//! assert_eq!(lang.label(), "React TSX");
//! assert_eq!(lang.style(), FormatStyle::BraceDepth { indent: "  " });
//! ```
//!

/// Label reported for files without a recognized extension.
pub const PLAIN_TEXT_LABEL: &str = "Plain text";

/// Two-space indentation unit (JavaScript family).
const TWO_SPACES: &str = "  ";
/// Four-space indentation unit (Java/C family and Python).
const FOUR_SPACES: &str = "    ";

/// The re-indentation heuristic applied to a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatStyle {
    /// Indent by the line's own `{` count minus its `}` count.
    BraceDepth { indent: &'static str },
    /// Indent by the number of `:` characters on the line.
    ColonCount { indent: &'static str },
    /// Leave the text untouched.
    Identity,
}

/// Every file type the classifier knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    JavaScript,
    Jsx,
    TypeScript,
    Tsx,
    Css,
    Scss,
    Html,
    Json,
    Markdown,
    Python,
    Java,
    Cpp,
    C,
    CHeader,
    CppHeader,
    Go,
    Rust,
    Php,
    Ruby,
    PlainText,
}

impl Language {
    /// Classifies a file by the lowercased text after its last `.`.
    pub fn from_filename(filename: &str) -> Self {
        match extension_of(filename) {
            Some(ext) => Self::from_extension(&ext.to_lowercase()),
            None => Language::PlainText,
        }
    }

    /// Classifies an already lowercased extension (without the dot).
    pub fn from_extension(ext: &str) -> Self {
        match ext {
            "js" => Language::JavaScript,
            "jsx" => Language::Jsx,
            "ts" => Language::TypeScript,
            "tsx" => Language::Tsx,
            "css" => Language::Css,
            "scss" => Language::Scss,
            "html" => Language::Html,
            "json" => Language::Json,
            "md" => Language::Markdown,
            "py" => Language::Python,
            "java" => Language::Java,
            "cpp" => Language::Cpp,
            "c" => Language::C,
            "h" => Language::CHeader,
            "hpp" => Language::CppHeader,
            "go" => Language::Go,
            "rs" => Language::Rust,
            "php" => Language::Php,
            "rb" => Language::Ruby,
            _ => Language::PlainText,
        }
    }

    /// Human-readable name shown in statistics and the file tree.
    pub fn label(self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::Jsx => "React JSX",
            Language::TypeScript => "TypeScript",
            Language::Tsx => "React TSX",
            Language::Css => "CSS",
            Language::Scss => "SCSS",
            Language::Html => "HTML",
            Language::Json => "JSON",
            Language::Markdown => "Markdown",
            Language::Python => "Python",
            Language::Java => "Java",
            Language::Cpp => "C++",
            Language::C => "C",
            Language::Go => "Go",
            Language::Rust => "Rust",
            Language::Php => "PHP",
            Language::Ruby => "Ruby",
            // Headers get a formatting rule but no label of their own.
            Language::CHeader | Language::CppHeader | Language::PlainText => PLAIN_TEXT_LABEL,
        }
    }

    /// Formatting heuristic used for this file type.
    pub fn style(self) -> FormatStyle {
        match self {
            Language::JavaScript | Language::Jsx | Language::TypeScript | Language::Tsx => {
                FormatStyle::BraceDepth { indent: TWO_SPACES }
            }
            Language::Java
            | Language::C
            | Language::Cpp
            | Language::CHeader
            | Language::CppHeader => FormatStyle::BraceDepth {
                indent: FOUR_SPACES,
            },
            Language::Python => FormatStyle::ColonCount {
                indent: FOUR_SPACES,
            },
            _ => FormatStyle::Identity,
        }
    }

    /// `true` for the TypeScript variants (used by the README's language note).
    pub fn is_typescript(self) -> bool {
        matches!(self, Language::TypeScript | Language::Tsx)
    }
}

/// Text after the last `.` of `filename`, or `None` when there is no dot.
pub fn extension_of(filename: &str) -> Option<&str> {
    filename.rsplit_once('.').map(|(_, ext)| ext)
}

/// Shorthand for `Language::from_filename(name).label()`.
pub fn classify(filename: &str) -> &'static str {
    Language::from_filename(filename).label()
}
