//! # codetidy Directory Tree Printer
//!
//! File: cli/src/commands/readme/utils/tree_printer.rs
//!
//! ## Overview
//!
//! Renders a `DirectoryTree` as text, in the style of the `tree` utility. It
//! is used for the "Project Structure" section of the generated README.
//!
//! - Siblings are printed in tree order (no sorting)
//! - The last sibling at each level uses the `└── ` connector, others `├── `
//! - Children are indented with `│   ` below a non-last parent and four
//!   spaces below a last one
//! - Directories print as `name/`, files as `name (Label)`
//!
//! Example output:
//!
//! ```text
//! ├── src/
//! │   ├── a.py (Python)
//! │   └── b.py (Python)
//! └── README.md (Markdown)
//! ```
//!
use super::tree_builder::{DirectoryTree, TreeNode};
use std::fmt::Write as FmtWrite;

// --- Constants for Tree Drawing ---

/// Connector for intermediate items in a listing ("T" shape).
const TEE: &str = "├── ";
/// Connector for the last item in a listing ("L" shape).
const ELBOW: &str = "└── ";
/// Vertical line used for ongoing indentation levels.
const PIPE: &str = "│   ";
/// Spacer used for indentation levels after the last item has been printed.
const SPACER: &str = "    ";

/// # Render Tree (`render_tree`)
///
/// Renders `tree` to a string with one entry per line. Every line, including
/// the last, ends with `\n`; an empty tree renders as an empty string.
pub fn render_tree(tree: &DirectoryTree) -> String {
    let mut output = String::new();
    walk_and_build_string(tree, &mut String::new(), &mut output);
    output
}

/// Recursive worker: writes the entries of `tree`, then descends into
/// directories with the prefix extended by a pipe or a spacer.
fn walk_and_build_string(tree: &DirectoryTree, current_prefix: &mut String, output: &mut String) {
    let num_entries = tree.entries().len();
    for (index, (name, node)) in tree.entries().iter().enumerate() {
        let is_last_entry = index + 1 == num_entries;
        let connector = if is_last_entry { ELBOW } else { TEE };

        // Writing into a String cannot fail.
        match node {
            TreeNode::File { label, .. } => {
                let _ = writeln!(output, "{}{}{} ({})", current_prefix, connector, name, label);
            }
            TreeNode::Directory(child) => {
                let _ = writeln!(output, "{}{}{}/", current_prefix, connector, name);

                let prefix_component = if is_last_entry { SPACER } else { PIPE };
                current_prefix.push_str(prefix_component);
                walk_and_build_string(child, current_prefix, output);
                // Backtrack before moving on to the next sibling.
                current_prefix.truncate(current_prefix.len() - prefix_component.len());
            }
        }
    }
}
