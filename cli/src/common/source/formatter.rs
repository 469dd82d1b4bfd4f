//! # codetidy Heuristic Formatter
//!
//! File: cli/src/common/source/formatter.rs
//!
//! ## Overview
//!
//! Re-indents source text with simple line-based rules. This is a cosmetic
//! transform, not a parser: braces or colons inside strings and comments will
//! mis-indent, and program meaning is not guaranteed to be preserved.
//!
//! ## Algorithm
//!
//! Every style runs the same pass:
//! 1. Split the input on `\n`
//! 2. Trim every line and drop the ones that end up empty
//! 3. Compute an indent level per line, looking at that line only:
//!    - brace-depth: number of `{` minus number of `}`
//!    - colon-count: number of `:`
//!    - identity: always 0
//! 4. Prefix the line with the indent unit repeated `max(0, level)` times
//! 5. Join the lines with `\n`
//!
//! The identity style therefore only trims lines and drops blank ones.
//!
//! The level is not carried from one line to the next. Nested code therefore
//! comes out flat, with only lines that open more braces than they close
//! pushed to the right.
//!
//! ## Failure Semantics
//!
//! Formatting never fails from the caller's point of view. If a pass hits an
//! internal limit the original text is handed back untouched, wrapped in
//! `FormatOutcome::PassedThrough` so callers can tell the two paths apart.
//!
use super::language::{FormatStyle, Language};
use std::fmt;
use tracing::debug;

/// Tunables for a formatting pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatOptions {
    /// Largest indent level a single line may ask for.
    pub max_indent_level: usize,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            max_indent_level: 64,
        }
    }
}

/// Result of running the formatter over one text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatOutcome {
    /// The heuristic ran to completion (the identity style lands here too).
    Formatted(String),
    /// The pass was abandoned and the original text is returned unchanged.
    PassedThrough { text: String, reason: FormatError },
}

impl FormatOutcome {
    /// The text to show, whichever path was taken.
    pub fn text(&self) -> &str {
        match self {
            FormatOutcome::Formatted(text) => text,
            FormatOutcome::PassedThrough { text, .. } => text,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            FormatOutcome::Formatted(text) => text,
            FormatOutcome::PassedThrough { text, .. } => text,
        }
    }

    pub fn is_passed_through(&self) -> bool {
        matches!(self, FormatOutcome::PassedThrough { .. })
    }
}

/// Internal reasons a formatting pass gives up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A line asked for more indentation than `max_indent_level` allows.
    IndentTooDeep { line: usize, level: usize, max: usize },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormatError::IndentTooDeep { line, level, max } => write!(
                f,
                "line {} requests indent level {} (limit {})",
                line, level, max
            ),
        }
    }
}

/// Formats `text` using the style associated with `language`.
pub fn format_source(text: &str, language: Language, options: &FormatOptions) -> FormatOutcome {
    format_with_style(text, language.style(), options)
}

/// Formats `text` with an explicit style.
pub fn format_with_style(text: &str, style: FormatStyle, options: &FormatOptions) -> FormatOutcome {
    let result = match style {
        FormatStyle::Identity => reindent(text, "", options, flat_level),
        FormatStyle::BraceDepth { indent } => reindent(text, indent, options, brace_level),
        FormatStyle::ColonCount { indent } => reindent(text, indent, options, colon_level),
    };
    match result {
        Ok(formatted) => FormatOutcome::Formatted(formatted),
        Err(reason) => {
            debug!("Formatter passed text through unchanged: {}", reason);
            FormatOutcome::PassedThrough {
                text: text.to_string(),
                reason,
            }
        }
    }
}

/// Net brace balance of a single (trimmed) line.
pub fn brace_level(line: &str) -> i64 {
    let opens = line.matches('{').count() as i64;
    let closes = line.matches('}').count() as i64;
    opens - closes
}

/// Colon count of a single (trimmed) line.
pub fn colon_level(line: &str) -> i64 {
    line.matches(':').count() as i64
}

/// Level used by the identity style.
fn flat_level(_line: &str) -> i64 {
    0
}

fn reindent(
    text: &str,
    indent_unit: &str,
    options: &FormatOptions,
    level_of: fn(&str) -> i64,
) -> Result<String, FormatError> {
    let mut lines = Vec::new();
    for (index, raw_line) in text.split('\n').enumerate() {
        let line = raw_line.trim();
        if line.is_empty() {
            continue;
        }
        let level = level_of(line).max(0) as usize;
        if level > options.max_indent_level {
            return Err(FormatError::IndentTooDeep {
                line: index + 1,
                level,
                max: options.max_indent_level,
            });
        }
        lines.push(format!("{}{}", indent_unit.repeat(level), line));
    }
    Ok(lines.join("\n"))
}
