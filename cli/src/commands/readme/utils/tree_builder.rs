//! # codetidy Directory Tree Builder
//!
//! File: cli/src/commands/readme/utils/tree_builder.rs
//!
//! ## Overview
//!
//! Builds a nested, insertion-ordered `DirectoryTree` out of the flat list of
//! ingested files. Each record's `path` is split on `/`; intermediate segments
//! become directories and the final segment becomes a leaf annotated with
//! the file's display label and its size in characters.
//!
//! Siblings keep the order in which they were first seen, which for archives
//! is the archive's own listing order.
//!
use crate::common::source::ingest::FileRecord;
use crate::common::source::language;
use tracing::warn;

/// A node in the directory tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    /// A file with its display label and content length in characters.
    File { label: &'static str, size: usize },
    /// A nested directory.
    Directory(DirectoryTree),
}

/// Ordered mapping from segment name to node.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectoryTree {
    entries: Vec<(String, TreeNode)>,
}

impl DirectoryTree {
    /// Children in insertion order.
    pub fn entries(&self) -> &[(String, TreeNode)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[cfg(test)]
    pub fn get(&self, name: &str) -> Option<&TreeNode> {
        self.position(name).map(|i| &self.entries[i].1)
    }

    /// Names of the directories directly below this node, in order.
    pub fn directory_names(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, node)| matches!(node, TreeNode::Directory(_)))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|(n, _)| n == name)
    }

    /// Inserts `leaf` at the location described by `segments`.
    ///
    /// A leaf that already exists at the same location is replaced in place.
    /// A leaf standing where a directory is needed becomes that directory.
    fn insert(&mut self, segments: &[&str], leaf: TreeNode) {
        let Some((first, rest)) = segments.split_first() else {
            return;
        };

        if rest.is_empty() {
            match self.position(first) {
                Some(i) => self.entries[i].1 = leaf,
                None => self.entries.push((first.to_string(), leaf)),
            }
            return;
        }

        let index = match self.position(first) {
            Some(i) => i,
            None => {
                self.entries
                    .push((first.to_string(), TreeNode::Directory(DirectoryTree::default())));
                self.entries.len() - 1
            }
        };
        if matches!(self.entries[index].1, TreeNode::File { .. }) {
            warn!("'{}' is both a file and a directory; keeping the directory", first);
            self.entries[index].1 = TreeNode::Directory(DirectoryTree::default());
        }
        if let TreeNode::Directory(child) = &mut self.entries[index].1 {
            child.insert(rest, leaf);
        }
    }
}

/// # Build Directory Tree (`build_tree`)
///
/// Builds a fresh tree from `files`. Empty path segments (doubled or leading
/// slashes) are ignored.
pub fn build_tree(files: &[FileRecord]) -> DirectoryTree {
    let mut tree = DirectoryTree::default();
    for file in files {
        let segments: Vec<&str> = file.path.split('/').filter(|s| !s.is_empty()).collect();
        let leaf = TreeNode::File {
            label: language::classify(&file.name),
            size: file.content.chars().count(),
        };
        tree.insert(&segments, leaf);
    }
    tree
}
